//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and
//! the helpers create whole member → order → delivery graphs at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let member = factory::member::create_member(&db).await?;
//!
//!     // Create an order with its delivery for that member
//!     let (delivery, order) = factory::helpers::create_order_for_member(&db, &member).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db)
//!     .name("kim")
//!     .address("Seoul", "Gangnam-daero", "06000")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Create member entities
//! - `delivery` - Create delivery entities
//! - `order` - Create order entities
//! - `order_item` - Create order line item entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod delivery;
pub mod helpers;
pub mod member;
pub mod order;
pub mod order_item;

pub use delivery::create_delivery;
pub use helpers::create_order_for_member;
pub use member::{create_member, create_member_with_name};
pub use order::create_order;
pub use order_item::create_order_item;
