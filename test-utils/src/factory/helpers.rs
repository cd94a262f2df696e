//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order placed by `member` together with the delivery it owns.
///
/// The delivery is created first with default address and `READY` status,
/// then an `ORDERED` order referencing both.
///
/// # Arguments
/// - `db` - Database connection
/// - `member` - Member placing the order
///
/// # Returns
/// - `Ok((delivery, order))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_for_member(
    db: &DatabaseConnection,
    member: &entity::member::Model,
) -> Result<(entity::delivery::Model, entity::orders::Model), DbErr> {
    let delivery = crate::factory::delivery::create_delivery(db).await?;
    let order = crate::factory::order::create_order(db, member.id, delivery.id).await?;

    Ok((delivery, order))
}

/// Creates a member and one order with delivery for it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((member, delivery, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::member::Model,
        entity::delivery::Model,
        entity::orders::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let (delivery, order) = create_order_for_member(db, &member).await?;

    Ok((member, delivery, order))
}
