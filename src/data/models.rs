pub mod catalog;
pub mod category;
pub mod coupon;
pub mod product;
pub mod schema;
pub mod search_term;
