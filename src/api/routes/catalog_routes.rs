use crate::api::controllers::catalog_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sections", get(catalog_controller::get_sections))
        .route("/sections/{product_type}", get(catalog_controller::get_section_by_type))
}
