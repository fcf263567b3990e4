use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct ValidateCouponRequest {
    #[serde(default)]
    pub code: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplyCouponRequest {
    pub subtotal: BigDecimal,
    #[serde(default)]
    pub code: String,
}

/// A cart as seen by checkout pricing. Only lives for the duration of one quote.
#[derive(Deserialize, Clone, Debug)]
pub struct CartSnapshot {
    pub subtotal: BigDecimal,
    pub coupon_code: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CreateCouponRequest {
    pub code: String,
    pub discount: BigDecimal,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RecordSearchRequest {
    #[serde(default)]
    pub term: String,
}

#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}
