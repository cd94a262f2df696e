//! Order factory for creating test order entities.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, member.id, delivery.id)
///     .status(OrderStatus::Canceled)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    delivery_id: i32,
    order_date: DateTime<Utc>,
    status: OrderStatus,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_date: now
    /// - status: `ORDERED`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `member_id` - Member placing the order
    /// - `delivery_id` - Delivery owned by the order
    pub fn new(db: &'a DatabaseConnection, member_id: i32, delivery_id: i32) -> Self {
        Self {
            db,
            member_id,
            delivery_id,
            order_date: Utc::now(),
            status: OrderStatus::Ordered,
        }
    }

    /// Sets the order timestamp.
    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    /// Sets the order status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::orders::Model, DbErr> {
        entity::orders::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            delivery_id: ActiveValue::Set(self.delivery_id),
            order_date: ActiveValue::Set(self.order_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `ORDERED` order dated now.
pub async fn create_order(
    db: &DatabaseConnection,
    member_id: i32,
    delivery_id: i32,
) -> Result<entity::orders::Model, DbErr> {
    OrderFactory::new(db, member_id, delivery_id).build().await
}
