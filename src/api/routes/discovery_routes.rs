use crate::api::controllers::discovery_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/colors", get(discovery_controller::get_popular_colors))
        .route("/trending", get(discovery_controller::get_trending_searches))
        .route("/searches", post(discovery_controller::record_search))
}
