//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules such as the duplicate-name guard
//! - **Orchestration**: Choosing and running an order fetch strategy
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Units of Work**: Opening, committing and (by drop) rolling back write transactions

pub mod member;
pub mod order;

#[cfg(test)]
mod test;
