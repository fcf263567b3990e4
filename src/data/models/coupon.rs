use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = coupons)]
#[diesel(primary_key(coupon_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Coupon {
    pub coupon_id: i32,
    pub code: String,
    pub discount: BigDecimal,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Coupon {
    /// Where `now` falls relative to the coupon window. Both bounds are inclusive.
    pub fn window_state(&self, now: NaiveDateTime) -> CouponWindow {
        if now < self.start_date {
            CouponWindow::NotYetValid
        } else if now > self.end_date {
            CouponWindow::Expired
        } else {
            CouponWindow::Active
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponWindow {
    NotYetValid,
    Active,
    Expired,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = coupons)]
pub struct NewCoupon {
    pub code: String,
    pub discount: BigDecimal,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}
