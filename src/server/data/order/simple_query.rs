//! Projection queries that select response columns directly.
//!
//! Results are plain rows, not entity models, so they cannot be reused for writes.
//! Each output shape needs its own query here.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::order::{member_name_contains, MAX_ORDER_RESULTS},
    model::{
        address::Address,
        order::{OrderSearch, OrderStatus, SimpleOrder},
    },
};

#[derive(Debug, FromQueryResult)]
struct SimpleOrderRow {
    order_id: i32,
    member_name: String,
    order_date: DateTime<Utc>,
    order_status: entity::sea_orm_active_enums::OrderStatus,
    city: Option<String>,
    street: Option<String>,
    zipcode: Option<String>,
}

impl SimpleOrderRow {
    fn into_domain(self) -> SimpleOrder {
        SimpleOrder {
            order_id: self.order_id,
            member_name: self.member_name,
            order_date: self.order_date,
            order_status: OrderStatus::from_entity(self.order_status),
            address: Address {
                city: self.city,
                street: self.street,
                zipcode: self.zipcode,
            },
        }
    }
}

pub struct OrderSimpleQueryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderSimpleQueryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Selects exactly the `SimpleOrder` fields for orders matching `search`.
    ///
    /// # Returns
    /// - `Ok(Vec<SimpleOrder>)` - At most `MAX_ORDER_RESULTS` summaries ordered by order id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_simple_orders(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<SimpleOrder>, DbErr> {
        let mut query = entity::prelude::Orders::find()
            .select_only()
            .column_as(entity::orders::Column::Id, "order_id")
            .column_as(entity::member::Column::Name, "member_name")
            .column_as(entity::orders::Column::OrderDate, "order_date")
            .column_as(entity::orders::Column::Status, "order_status")
            .column_as(entity::delivery::Column::City, "city")
            .column_as(entity::delivery::Column::Street, "street")
            .column_as(entity::delivery::Column::Zipcode, "zipcode")
            .join(
                JoinType::InnerJoin,
                entity::orders::Relation::Member.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::orders::Relation::Delivery.def(),
            );

        if let Some(member_name) = &search.member_name {
            query = query.filter(member_name_contains(member_name));
        }
        if let Some(status) = search.order_status {
            query = query.filter(entity::orders::Column::Status.eq(status.into_entity()));
        }

        let rows = query
            .order_by_asc(entity::orders::Column::Id)
            .limit(MAX_ORDER_RESULTS)
            .into_model::<SimpleOrderRow>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(SimpleOrderRow::into_domain).collect())
    }
}
