use crate::api::extractors::ApiJson;
use crate::api::request::{
    ApplyCouponRequest, CartSnapshot, CreateCouponRequest, ValidateCouponRequest,
};
use crate::api::response::ApiResponse;
use crate::api::state::AppState;
use crate::services::errors::CouponError;
use crate::services::pricing_service::PricingService;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

fn coupon_error(e: CouponError) -> Response {
    let status = match e {
        CouponError::EmptyCode
        | CouponError::NegativeSubtotal
        | CouponError::InvalidDiscount
        | CouponError::InvalidWindow => StatusCode::BAD_REQUEST,
        CouponError::InvalidCode => StatusCode::NOT_FOUND,
        CouponError::NotYetValid | CouponError::Expired => StatusCode::UNPROCESSABLE_ENTITY,
        CouponError::CouponAlreadyExists => StatusCode::CONFLICT,
        CouponError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let details = match &e {
        CouponError::DatabaseError(raw) => Some(raw.clone()),
        _ => None,
    };

    (
        status,
        Json(ApiResponse::<()>::err(e.to_string()).with_details(details)),
    )
        .into_response()
}

/// Validate a coupon code
pub async fn validate_coupon(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ValidateCouponRequest>,
) -> impl IntoResponse {
    let service = PricingService::new(state.coupons);

    match service.validate_coupon(&payload.code).await {
        Ok(coupon) => (StatusCode::OK, Json(ApiResponse::ok(coupon))).into_response(),
        Err(e) => {
            tracing::info!("Coupon {:?} rejected: {}", payload.code, e);
            coupon_error(e)
        }
    }
}

/// Apply a coupon to a subtotal
pub async fn apply_coupon(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ApplyCouponRequest>,
) -> impl IntoResponse {
    let service = PricingService::new(state.coupons);

    match service
        .calculate_discount(&payload.subtotal, &payload.code)
        .await
    {
        Ok(discount) => (StatusCode::OK, Json(ApiResponse::ok(discount))).into_response(),
        Err(e) => coupon_error(e),
    }
}

/// Price a cart snapshot, with or without a coupon
pub async fn quote_cart(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CartSnapshot>,
) -> impl IntoResponse {
    let service = PricingService::new(state.coupons);

    match service.quote_cart(&payload).await {
        Ok(quote) => (StatusCode::OK, Json(ApiResponse::ok(quote))).into_response(),
        Err(e) => coupon_error(e),
    }
}

/// Create a coupon
pub async fn create_coupon(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCouponRequest>,
) -> impl IntoResponse {
    let service = PricingService::new(state.coupons);

    match service.create_coupon(payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok("Coupon created successfully")),
        )
            .into_response(),
        Err(e) => coupon_error(e),
    }
}
