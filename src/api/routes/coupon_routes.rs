use crate::api::controllers::coupon_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(coupon_controller::create_coupon))
        .route("/validate", post(coupon_controller::validate_coupon))
        .route("/apply", post(coupon_controller::apply_coupon))
}
