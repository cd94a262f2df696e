//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into validated parameters, call a
//! service, and convert the returned domain models into response DTOs. They never
//! return storage entities except from the deliberately naive `v1` endpoints.

pub mod member;
pub mod order;

#[cfg(test)]
mod test;
