//! Shop Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the shop
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting members, deliveries, orders and line items.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Member;
//!
//! #[tokio::test]
//! async fn test_member_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Member)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
