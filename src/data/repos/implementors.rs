pub mod catalog_repo;
pub mod coupon_repo;
pub mod memory_store;
