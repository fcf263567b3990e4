pub mod catalog_routes;
pub mod checkout_routes;
pub mod coupon_routes;
pub mod discovery_routes;
pub mod product_routes;
