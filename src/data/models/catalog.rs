use crate::data::models::category::{Category, SubCategory};
use crate::data::models::product::ProductDetails;

/// One category with everything the catalog sections need, as read in a single batch.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTree {
    pub category: Category,
    pub sub_categories: Vec<SubCategory>,
    pub products: Vec<ProductDetails>,
}
