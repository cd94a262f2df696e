//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same code runs against the
//! connection pool for reads and against an explicit `DatabaseTransaction` inside a
//! service-owned unit of work for writes.

pub mod member;
pub mod order;

#[cfg(test)]
mod test;
