pub mod catalog_controller;
pub mod coupon_controller;
pub mod discovery_controller;
pub mod product_controller;
