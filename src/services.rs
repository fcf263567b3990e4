pub mod catalog_service;
pub mod classification;
pub mod discovery_service;
pub mod errors;
pub mod pricing_service;
pub mod product_service;
