use crate::api::extractors::ApiPath;
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::services::catalog_service::CatalogService;
use crate::services::classification::ProductType;
use crate::services::errors::CatalogServiceError;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub(crate) fn catalog_error(e: CatalogServiceError) -> Response {
    match e {
        CatalogServiceError::ProductNotFound | CatalogServiceError::SectionNotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::err(e.to_string())),
        )
            .into_response(),
        CatalogServiceError::DatabaseError(ref raw) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::err(e.to_string()).with_details(Some(raw.clone()))),
        )
            .into_response(),
    }
}

/// Get every non-empty product section
pub async fn get_sections(State(state): State<AppState>) -> impl IntoResponse {
    let service = CatalogService::new(state.catalog);

    match service.get_all_products_by_type().await {
        Ok(sections) => (StatusCode::OK, Json(ApiResponse::ok(sections))).into_response(),
        Err(e) => catalog_error(e),
    }
}

/// Get a single product section by type
pub async fn get_section_by_type(
    State(state): State<AppState>,
    ApiPath(product_type): ApiPath<String>,
) -> impl IntoResponse {
    let Ok(product_type) = product_type.parse::<ProductType>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::err(format!(
                "Unknown product type: {product_type}"
            ))),
        )
            .into_response();
    };

    let service = CatalogService::new(state.catalog);

    match service.get_products_by_type(product_type).await {
        Ok(section) => (StatusCode::OK, Json(ApiResponse::ok(section))).into_response(),
        Err(e) => catalog_error(e),
    }
}
