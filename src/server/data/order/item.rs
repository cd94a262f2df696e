use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::order::OrderItem;

pub struct OrderItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the line items of every order in `order_ids` with one `IN` query.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Items grouped by order id, in insertion order; orders without
    ///   items have no entry
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_order_ids(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<OrderItem>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<OrderItem>> = HashMap::new();
        for item in items {
            grouped
                .entry(item.order_id)
                .or_default()
                .push(OrderItem::from_entity(item));
        }

        Ok(grouped)
    }
}
