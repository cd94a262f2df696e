use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{member, order},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Shop API",
    description = "Member registration and order listings with comparable fetch strategies"
))]
struct ApiDoc;

/// Builds the API routes together with their OpenAPI document.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(member::get_members_v1, member::create_member_v1))
        .routes(routes!(member::get_members_v2, member::create_member_v2))
        .routes(routes!(member::get_member_v2, member::update_member_v2))
        .routes(routes!(order::get_simple_orders_v1))
        .routes(routes!(order::get_simple_orders_v2))
        .routes(routes!(order::get_simple_orders_v3))
        .routes(routes!(order::get_simple_orders_v4))
        .routes(routes!(order::get_orders_v3_1))
}

/// Builds the complete application: API routes, Swagger UI at `/api/docs`, and the
/// tracing and CORS layers.
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
