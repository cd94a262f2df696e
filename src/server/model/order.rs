//! Order domain models, read strategies and search parameters.
//!
//! Every read strategy produces the same `SimpleOrder` value so the choice of fetch
//! plan stays invisible to API consumers. `OrderGraph` is the fully materialized
//! order → member / delivery graph used by the raw-graph and join-fetch plans.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    model::order::{OrderDto, OrderItemDto, OrderStatusDto, SimpleOrderDto},
    server::model::address::Address,
};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Ordered,
    Canceled,
}

impl OrderStatus {
    pub fn from_entity(status: entity::sea_orm_active_enums::OrderStatus) -> Self {
        match status {
            entity::sea_orm_active_enums::OrderStatus::Ordered => Self::Ordered,
            entity::sea_orm_active_enums::OrderStatus::Canceled => Self::Canceled,
        }
    }

    pub fn into_entity(self) -> entity::sea_orm_active_enums::OrderStatus {
        match self {
            Self::Ordered => entity::sea_orm_active_enums::OrderStatus::Ordered,
            Self::Canceled => entity::sea_orm_active_enums::OrderStatus::Canceled,
        }
    }

    pub fn from_dto(status: OrderStatusDto) -> Self {
        match status {
            OrderStatusDto::Ordered => Self::Ordered,
            OrderStatusDto::Canceled => Self::Canceled,
        }
    }

    pub fn into_dto(self) -> OrderStatusDto {
        match self {
            Self::Ordered => OrderStatusDto::Ordered,
            Self::Canceled => OrderStatusDto::Canceled,
        }
    }
}

/// How much of the order graph a read materializes before shaping the response.
///
/// Ordered from naive to optimal. Query counts are for N matching orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Load order rows, then load member and delivery per order and keep the
    /// entity graph (1 + 2N queries).
    RawGraph,
    /// Load order rows, then fetch member and delivery per order while building
    /// each summary (1 + 2N queries).
    LazyPerField,
    /// Load orders with member and delivery in one joined query (1 query).
    JoinFetch,
    /// Select only the summary columns in one joined query (1 query).
    Projection,
}

impl FetchStrategy {
    #[cfg(test)]
    pub const ALL: [FetchStrategy; 4] = [
        FetchStrategy::RawGraph,
        FetchStrategy::LazyPerField,
        FetchStrategy::JoinFetch,
        FetchStrategy::Projection,
    ];

    /// Number of statements the plan issues for `orders` matching rows.
    pub fn query_count(self, orders: usize) -> usize {
        match self {
            Self::RawGraph | Self::LazyPerField => 1 + 2 * orders,
            Self::JoinFetch | Self::Projection => 1,
        }
    }
}

/// Optional filters for order listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSearch {
    /// Substring the member name must contain.
    pub member_name: Option<String>,
    /// Exact order status.
    pub order_status: Option<OrderStatus>,
}

/// Order together with the member who placed it and its delivery.
///
/// Serialized as-is by the raw-graph endpoint. Entity models hold only forward
/// references, so the member → orders back-reference cannot recurse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderGraph {
    #[serde(flatten)]
    pub order: entity::orders::Model,
    pub member: entity::member::Model,
    pub delivery: entity::delivery::Model,
}

/// Flat order summary produced by every fetch strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleOrder {
    pub order_id: i32,
    pub member_name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatus,
    /// Delivery address.
    pub address: Address,
}

impl SimpleOrder {
    /// Copies summary fields out of separately loaded entities.
    pub fn from_entities(
        order: &entity::orders::Model,
        member: &entity::member::Model,
        delivery: &entity::delivery::Model,
    ) -> Self {
        Self {
            order_id: order.id,
            member_name: member.name.clone(),
            order_date: order.order_date,
            order_status: OrderStatus::from_entity(order.status),
            address: Address::from_delivery_entity(delivery),
        }
    }

    pub fn from_graph(graph: &OrderGraph) -> Self {
        Self::from_entities(&graph.order, &graph.member, &graph.delivery)
    }

    pub fn into_dto(self) -> SimpleOrderDto {
        SimpleOrderDto {
            order_id: self.order_id,
            member_name: self.member_name,
            order_date: self.order_date,
            order_status: self.order_status.into_dto(),
            address: self.address.into_dto(),
        }
    }
}

/// Line item of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            item_name: entity.item_name,
            order_price: entity.order_price,
            count: entity.count,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            item_name: self.item_name,
            order_price: self.order_price,
            count: self.count,
        }
    }
}

/// Order summary with its line items, used by the paginated order listing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithItems {
    pub order: SimpleOrder,
    pub items: Vec<OrderItem>,
}

impl OrderWithItems {
    pub fn into_dto(self) -> OrderDto {
        let order = self.order.into_dto();

        OrderDto {
            order_id: order.order_id,
            member_name: order.member_name,
            order_date: order.order_date,
            order_status: order.order_status,
            address: order.address,
            order_items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }
}

/// Offset pagination for the order listing with line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPage {
    pub offset: u64,
    pub limit: u64,
}
