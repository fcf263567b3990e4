use crate::api::config::Config;
use crate::api::routes::{
    catalog_routes, checkout_routes, coupon_routes, discovery_routes, product_routes,
};
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(|| async { "Storefront API is running!" }))
        .nest("/api/v1/coupons", coupon_routes::routes())
        .nest("/api/v1/checkout", checkout_routes::routes())
        .nest("/api/v1/catalog", catalog_routes::routes())
        .nest("/api/v1/products", product_routes::routes())
        .nest("/api/v1/discovery", discovery_routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

pub async fn start(config: &Config, state: AppState) -> std::io::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router(state)).await
}
