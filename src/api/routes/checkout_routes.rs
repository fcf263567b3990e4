use crate::api::controllers::coupon_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppState> {
    Router::new().route("/quote", post(coupon_controller::quote_cart))
}
