use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatusDto {
    Ordered,
    Canceled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AddressDto {
    pub city: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
}

/// Flat order summary shared by every simple-order read strategy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderDto {
    pub order_id: i32,
    pub member_name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatusDto,
    pub address: AddressDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

/// Order summary with its line items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: i32,
    pub member_name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatusDto,
    pub address: AddressDto,
    pub order_items: Vec<OrderItemDto>,
}
