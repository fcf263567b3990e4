use crate::data::models::catalog::CategoryTree;
use crate::data::models::product::ProductDetails;
use async_trait::async_trait;
use diesel::result;

/// Read side of the catalog plus the two counters the storefront writes to.
///
/// Every product list is returned fully assembled (category, sizes, images, colours and
/// sub-category links attached) so services never issue follow-up reads per product.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All categories with their sub-categories and products. Products inside each category
    /// are ordered `featured desc, best_seller desc, rating desc, sold desc`.
    async fn load_catalog(&self) -> Result<Vec<CategoryTree>, result::Error>;

    /// The `limit` most recently created products, ordered
    /// `created_at desc, featured desc, rating desc`.
    async fn newest_products(&self, limit: i64) -> Result<Vec<ProductDetails>, result::Error>;

    async fn get_product(&self, product_id: i32) -> Result<Option<ProductDetails>, result::Error>;

    /// Products of `category_id` other than `exclude_id`, best ranked first.
    async fn products_in_category(
        &self,
        category_id: i32,
        exclude_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductDetails>, result::Error>;

    /// Products that do not belong to `category_id` (or to any category when `None`),
    /// other than `exclude_id`, best ranked first.
    async fn products_outside_category(
        &self,
        category_id: Option<i32>,
        exclude_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductDetails>, result::Error>;

    /// Atomically bumps the view counter and returns the new value, or `None` when the
    /// product does not exist.
    async fn increment_views(&self, product_id: i32) -> Result<Option<i64>, result::Error>;

    /// `(colour name, number of product colour entries using it)` for every colour.
    async fn color_usage(&self) -> Result<Vec<(String, i64)>, result::Error>;

    /// The most searched terms with their hit counts, highest first.
    async fn top_search_terms(&self, limit: i64) -> Result<Vec<(String, i64)>, result::Error>;

    async fn record_search_term(&self, term: &str) -> Result<(), result::Error>;
}
