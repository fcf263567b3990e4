use crate::data::models::coupon::{Coupon, NewCoupon};
use async_trait::async_trait;
use diesel::result;

/// Storage seam for coupons. Codes are matched case-insensitively.
#[async_trait]
pub trait CouponStore: Send + Sync {
    async fn get_by_code(&self, code: &str) -> Result<Option<Coupon>, result::Error>;

    async fn add(&self, coupon: NewCoupon) -> Result<(), result::Error>;
}
