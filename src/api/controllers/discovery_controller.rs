use crate::api::extractors::{ApiJson, ApiQuery};
use crate::api::request::{LimitQuery, RecordSearchRequest};
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::services::discovery_service::DiscoveryService;
use crate::services::errors::DiscoveryServiceError;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub const DEFAULT_DISCOVERY_LIMIT: usize = 10;

/// Get the most used product colours
pub async fn get_popular_colors(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> impl IntoResponse {
    let service = DiscoveryService::new(state.catalog);
    let colors = service
        .popular_colors(query.limit.unwrap_or(DEFAULT_DISCOVERY_LIMIT))
        .await;

    (StatusCode::OK, Json(ApiResponse::ok(colors)))
}

/// Get the most searched terms
pub async fn get_trending_searches(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LimitQuery>,
) -> impl IntoResponse {
    let service = DiscoveryService::new(state.catalog);
    let searches = service
        .trending_searches(query.limit.unwrap_or(DEFAULT_DISCOVERY_LIMIT))
        .await;

    (StatusCode::OK, Json(ApiResponse::ok(searches)))
}

/// Record a storefront search
pub async fn record_search(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RecordSearchRequest>,
) -> impl IntoResponse {
    let service = DiscoveryService::new(state.catalog);

    match service.record_search(&payload.term).await {
        Ok(term) => (StatusCode::CREATED, Json(ApiResponse::ok(term))).into_response(),
        Err(e) => {
            let (status, details) = match &e {
                DiscoveryServiceError::EmptySearchTerm => (StatusCode::BAD_REQUEST, None),
                DiscoveryServiceError::DatabaseError(raw) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, Some(raw.clone()))
                }
            };
            (
                status,
                Json(ApiResponse::<()>::err(e.to_string()).with_details(details)),
            )
                .into_response()
        }
    }
}
