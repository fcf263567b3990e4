use crate::api::controllers::catalog_controller::catalog_error;
use crate::api::extractors::{ApiPath, ApiQuery};
use crate::api::request::LimitQuery;
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::services::product_service::ProductService;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub const DEFAULT_NEW_ARRIVALS: usize = 12;
pub const DEFAULT_RELATED: usize = 8;

/// Get newest products balanced across categories
pub async fn get_new_arrivals(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> impl IntoResponse {
    let service = ProductService::new(state.catalog);

    match service
        .get_new_arrivals(query.limit.unwrap_or(DEFAULT_NEW_ARRIVALS))
        .await
    {
        Ok(products) => (StatusCode::OK, Json(ApiResponse::ok(products))).into_response(),
        Err(e) => catalog_error(e),
    }
}

/// Get products related to a product, grouped by category
pub async fn get_related_products(
    State(state): State<AppState>,
    ApiPath(product_id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> impl IntoResponse {
    let service = ProductService::new(state.catalog);

    match service
        .get_related_products(product_id, query.limit.unwrap_or(DEFAULT_RELATED))
        .await
    {
        Ok(related) => (StatusCode::OK, Json(ApiResponse::ok(related))).into_response(),
        Err(e) => catalog_error(e),
    }
}

/// Count one view of a product
pub async fn record_view(
    State(state): State<AppState>,
    ApiPath(product_id): ApiPath<i32>,
) -> impl IntoResponse {
    let service = ProductService::new(state.catalog);

    match service.record_product_view(product_id).await {
        Ok(views) => (StatusCode::OK, Json(ApiResponse::ok(views))).into_response(),
        Err(e) => catalog_error(e),
    }
}
