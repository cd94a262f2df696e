//! Wire contracts shared by every HTTP endpoint.
//!
//! These types define the JSON request and response shapes. They never carry storage
//! entities; server-side domain models are converted into them at the controller boundary.

pub mod api;
pub mod member;
pub mod order;
