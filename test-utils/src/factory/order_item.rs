//! Order item factory for creating test line items.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating order line items with customizable fields.
pub struct OrderItemFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    item_name: String,
    order_price: i32,
    count: i32,
}

impl<'a> OrderItemFactory<'a> {
    /// Creates a new OrderItemFactory with default values.
    ///
    /// Defaults:
    /// - item_name: `"Item {id}"`
    /// - order_price: `10000`
    /// - count: `1`
    pub fn new(db: &'a DatabaseConnection, order_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            order_id,
            item_name: format!("Item {}", id),
            order_price: 10000,
            count: 1,
        }
    }

    /// Sets the item name.
    pub fn item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = item_name.into();
        self
    }

    /// Sets the unit price at order time.
    pub fn order_price(mut self, order_price: i32) -> Self {
        self.order_price = order_price;
        self
    }

    /// Sets the ordered quantity.
    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    /// Builds and inserts the line item into the database.
    pub async fn build(self) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(self.order_id),
            item_name: ActiveValue::Set(self.item_name),
            order_price: ActiveValue::Set(self.order_price),
            count: ActiveValue::Set(self.count),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a line item with default values for `order_id`.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    OrderItemFactory::new(db, order_id).build().await
}
