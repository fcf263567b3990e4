use crate::api::request::{CartSnapshot, CreateCouponRequest};
use crate::api::response::{CartQuote, CouponResponse, DiscountResult};
use crate::data::models::coupon::{Coupon, CouponWindow, NewCoupon};
use crate::data::repos::traits::coupon_store::CouponStore;
use crate::services::errors::CouponError;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use chrono::{NaiveDateTime, Utc};
use diesel::result;
use std::sync::Arc;

/// Money is kept to two decimal places, rounding half away from zero.
pub const CURRENCY_SCALE: i64 = 2;

pub fn round_currency(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(CURRENCY_SCALE, RoundingMode::HalfUp)
}

/// `(amount, total)` for a subtotal and a percentage discount.
///
/// `amount = subtotal * percentage / 100` and `total = max(0, subtotal - amount)`, both
/// rounded to currency scale. The total is floored at zero even for percentages above 100
/// or a negative subtotal.
pub fn compute_discount(subtotal: &BigDecimal, percentage: &BigDecimal) -> (BigDecimal, BigDecimal) {
    let amount = round_currency(&(subtotal * percentage / BigDecimal::from(100)));
    let total = round_currency(&(subtotal - &amount));

    if total < BigDecimal::zero() {
        (amount, round_currency(&BigDecimal::zero()))
    } else {
        (amount, total)
    }
}

pub struct PricingService {
    store: Arc<dyn CouponStore>,
}

impl PricingService {
    pub fn new(store: Arc<dyn CouponStore>) -> Self {
        PricingService { store }
    }

    pub async fn validate_coupon(&self, code: &str) -> Result<CouponResponse, CouponError> {
        self.validate_coupon_at(code, Utc::now().naive_utc()).await
    }

    /// Validates `code` as of `now`.
    pub async fn validate_coupon_at(
        &self,
        code: &str,
        now: NaiveDateTime,
    ) -> Result<CouponResponse, CouponError> {
        self.find_active(code, now).await.map(CouponResponse::from)
    }

    pub async fn calculate_discount(
        &self,
        subtotal: &BigDecimal,
        code: &str,
    ) -> Result<DiscountResult, CouponError> {
        self.calculate_discount_at(subtotal, code, Utc::now().naive_utc())
            .await
    }

    pub async fn calculate_discount_at(
        &self,
        subtotal: &BigDecimal,
        code: &str,
        now: NaiveDateTime,
    ) -> Result<DiscountResult, CouponError> {
        let coupon = self.find_active(code, now).await?;
        let (amount, total) = compute_discount(subtotal, &coupon.discount);

        tracing::debug!(code = %coupon.code, %amount, %total, "Discount applied");

        Ok(DiscountResult {
            percentage: coupon.discount,
            amount,
            total,
            coupon_code: coupon.code,
        })
    }

    pub async fn quote_cart(&self, cart: &CartSnapshot) -> Result<CartQuote, CouponError> {
        self.quote_cart_at(cart, Utc::now().naive_utc()).await
    }

    pub async fn quote_cart_at(
        &self,
        cart: &CartSnapshot,
        now: NaiveDateTime,
    ) -> Result<CartQuote, CouponError> {
        if cart.subtotal < BigDecimal::zero() {
            return Err(CouponError::NegativeSubtotal);
        }

        let subtotal = round_currency(&cart.subtotal);

        match cart.coupon_code.as_deref() {
            Some(code) if !code.trim().is_empty() => {
                let discount = self.calculate_discount_at(&subtotal, code, now).await?;
                Ok(CartQuote {
                    total: discount.total.clone(),
                    subtotal,
                    discount: Some(discount),
                })
            }
            _ => Ok(CartQuote {
                total: subtotal.clone(),
                subtotal,
                discount: None,
            }),
        }
    }

    /// Stores a new coupon after checking its discount range and window. Codes are stored
    /// upper-cased so lookups stay case-insensitive on every backend.
    pub async fn create_coupon(&self, request: CreateCouponRequest) -> Result<(), CouponError> {
        let code = request.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(CouponError::EmptyCode);
        }
        if request.discount < BigDecimal::zero() || request.discount > BigDecimal::from(100) {
            return Err(CouponError::InvalidDiscount);
        }
        if request.start_date > request.end_date {
            return Err(CouponError::InvalidWindow);
        }

        let existing = self.store.get_by_code(&code).await.map_err(|e| {
            tracing::error!("Coupon lookup failed: {:?}", e);
            CouponError::DatabaseError(e.to_string())
        })?;
        if existing.is_some() {
            return Err(CouponError::CouponAlreadyExists);
        }

        let new_coupon = NewCoupon {
            code,
            discount: request.discount,
            start_date: request.start_date,
            end_date: request.end_date,
        };

        // A concurrent create can still win the race; the unique key on `code` catches it.
        self.store.add(new_coupon).await.map_err(|e| match e {
            result::Error::DatabaseError(result::DatabaseErrorKind::UniqueViolation, _) => {
                CouponError::CouponAlreadyExists
            }
            e => {
                tracing::error!("Coupon creation failed: {:?}", e);
                CouponError::DatabaseError(e.to_string())
            }
        })
    }

    async fn find_active(&self, code: &str, now: NaiveDateTime) -> Result<Coupon, CouponError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CouponError::EmptyCode);
        }

        let coupon = self
            .store
            .get_by_code(code)
            .await
            .map_err(|e| {
                tracing::error!("Coupon lookup failed: {:?}", e);
                CouponError::DatabaseError(e.to_string())
            })?
            .ok_or(CouponError::InvalidCode)?;

        match coupon.window_state(now) {
            CouponWindow::NotYetValid => Err(CouponError::NotYetValid),
            CouponWindow::Expired => Err(CouponError::Expired),
            CouponWindow::Active => Ok(coupon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_twenty_percent_of_one_hundred() {
        let (amount, total) = compute_discount(&dec("100.00"), &dec("20"));
        assert_eq!(amount, dec("20.00"));
        assert_eq!(total, dec("80.00"));
    }

    #[test]
    fn test_amount_rounds_half_up() {
        // 10% of 0.25 is 0.025
        let (amount, total) = compute_discount(&dec("0.25"), &dec("10"));
        assert_eq!(amount, dec("0.03"));
        assert_eq!(total, dec("0.22"));
    }

    #[test]
    fn test_total_never_negative() {
        let (amount, total) = compute_discount(&dec("50"), &dec("150"));
        assert_eq!(amount, dec("75.00"));
        assert_eq!(total, dec("0.00"));

        let (_, total) = compute_discount(&dec("-10"), &dec("10"));
        assert_eq!(total, dec("0"));
    }

    #[test]
    fn test_amount_and_total_follow_formula() {
        let subtotals = ["0", "1", "19.99", "100", "1234.56"];
        let percentages = ["0", "5", "12.5", "33", "100"];
        for s in subtotals {
            for p in percentages {
                let subtotal = dec(s);
                let percentage = dec(p);
                let (amount, total) = compute_discount(&subtotal, &percentage);
                let expected_amount = round_currency(&(&subtotal * &percentage / BigDecimal::from(100)));
                assert_eq!(amount, expected_amount, "amount for {s} at {p}%");
                assert!(total >= BigDecimal::zero());
                assert_eq!(total, round_currency(&(&subtotal - &expected_amount)));
            }
        }
    }

    #[test]
    fn test_zero_percent_keeps_subtotal() {
        let (amount, total) = compute_discount(&dec("42.10"), &dec("0"));
        assert_eq!(amount, dec("0"));
        assert_eq!(total, dec("42.10"));
    }
}
