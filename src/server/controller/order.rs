use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{DataEnvelope, ErrorDto},
        order::{OrderDto, OrderStatusDto, SimpleOrderDto},
    },
    server::{
        data::order::MAX_ORDER_RESULTS,
        error::AppError,
        model::order::{
            FetchStrategy, OrderPage, OrderSearch, OrderStatus, OrderWithItems, SimpleOrder,
        },
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Optional filters accepted by every simple-order listing.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderSearchParams {
    /// Substring the member name must contain
    pub member_name: Option<String>,
    /// Exact order status
    pub order_status: Option<OrderStatusDto>,
}

impl OrderSearchParams {
    fn into_search(self) -> OrderSearch {
        OrderSearch {
            member_name: self.member_name.filter(|name| !name.is_empty()),
            order_status: self.order_status.map(OrderStatus::from_dto),
        }
    }
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderPageParams {
    /// Number of orders to skip (default: 0)
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of orders to return (default: 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

/// List orders by returning the loaded entity graph.
///
/// Loads orders, then member and delivery for each order with separate queries, and
/// serializes the storage rows as a bare array.
///
/// # Returns
/// - `200 OK` - Array of orders with nested `member` and `delivery`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/simple-orders",
    tag = ORDER_TAG,
    params(OrderSearchParams),
    responses(
        (status = 200, description = "Stored order graphs"),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_simple_orders_v1(
    State(state): State<AppState>,
    params: Result<Query<OrderSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let service = OrderService::new(&state.db);

    let graphs = service.order_graphs(&params.into_search()).await?;

    Ok((StatusCode::OK, Json(graphs)))
}

/// List order summaries, fetching member and delivery per order.
///
/// # Returns
/// - `200 OK` - `{ "data": [SimpleOrderDto] }`
/// - `400 Bad Request` - Unknown order status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v2/simple-orders",
    tag = ORDER_TAG,
    params(OrderSearchParams),
    responses(
        (status = 200, description = "Order summaries", body = DataEnvelope<SimpleOrderDto>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_simple_orders_v2(
    State(state): State<AppState>,
    params: Result<Query<OrderSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    simple_orders(&state, FetchStrategy::LazyPerField, params).await
}

/// List order summaries, join-fetching member and delivery.
///
/// # Returns
/// - `200 OK` - `{ "data": [SimpleOrderDto] }`
/// - `400 Bad Request` - Unknown order status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v3/simple-orders",
    tag = ORDER_TAG,
    params(OrderSearchParams),
    responses(
        (status = 200, description = "Order summaries", body = DataEnvelope<SimpleOrderDto>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_simple_orders_v3(
    State(state): State<AppState>,
    params: Result<Query<OrderSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    simple_orders(&state, FetchStrategy::JoinFetch, params).await
}

/// List order summaries with a projection query selecting only response columns.
///
/// # Returns
/// - `200 OK` - `{ "data": [SimpleOrderDto] }`
/// - `400 Bad Request` - Unknown order status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v4/simple-orders",
    tag = ORDER_TAG,
    params(OrderSearchParams),
    responses(
        (status = 200, description = "Order summaries", body = DataEnvelope<SimpleOrderDto>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_simple_orders_v4(
    State(state): State<AppState>,
    params: Result<Query<OrderSearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    simple_orders(&state, FetchStrategy::Projection, params).await
}

/// List a page of orders with their line items.
///
/// Member and delivery are join-fetched so `offset`/`limit` count orders; line items
/// for the page are loaded with one batched query.
///
/// # Returns
/// - `200 OK` - `{ "data": [OrderDto] }`
/// - `400 Bad Request` - `limit` is 0 or above 1000, or `offset` is negative or too large
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v3.1/orders",
    tag = ORDER_TAG,
    params(OrderPageParams),
    responses(
        (status = 200, description = "Orders with line items", body = DataEnvelope<OrderDto>),
        (status = 400, description = "Invalid offset or page size", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders_v3_1(
    State(state): State<AppState>,
    params: Result<Query<OrderPageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    if params.limit == 0 || params.limit > MAX_ORDER_RESULTS {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {}",
            MAX_ORDER_RESULTS
        )));
    }
    // SQLite binds OFFSET as a signed 64-bit integer.
    if params.offset > i64::MAX as u64 {
        return Err(AppError::BadRequest(format!(
            "offset must not exceed {}",
            i64::MAX
        )));
    }

    let service = OrderService::new(&state.db);

    let orders = service
        .orders_with_items(OrderPage {
            offset: params.offset,
            limit: params.limit,
        })
        .await?;
    let data = orders.into_iter().map(OrderWithItems::into_dto).collect();

    Ok((StatusCode::OK, Json(DataEnvelope::new(data))))
}

async fn simple_orders(
    state: &AppState,
    strategy: FetchStrategy,
    params: OrderSearchParams,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service
        .simple_orders(strategy, &params.into_search())
        .await?;
    let data: Vec<SimpleOrderDto> = orders.into_iter().map(SimpleOrder::into_dto).collect();

    Ok((StatusCode::OK, Json(DataEnvelope::new(data))))
}
