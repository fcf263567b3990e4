pub mod catalog_store;
pub mod coupon_store;
