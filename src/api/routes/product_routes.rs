use crate::api::controllers::product_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/new-arrivals", get(product_controller::get_new_arrivals))
        .route("/{id}/related", get(product_controller::get_related_products))
        .route("/{id}/views", post(product_controller::record_view))
}
