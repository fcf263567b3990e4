use crate::api::response::{ProductCard, RelatedGroup, RelatedProducts, ViewCountResponse};
use crate::data::models::product::ProductDetails;
use crate::data::repos::traits::catalog_store::CatalogStore;
use crate::services::errors::CatalogServiceError;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

pub const NO_CATEGORY_SLUG: &str = "no-category";
pub const MAX_NEW_ARRIVALS: usize = 100;
pub const NEW_ARRIVALS_MIN_FETCH: usize = 30;
pub const RELATED_MAX_PER_CATEGORY: usize = 6;
pub const RELATED_MAX_CATEGORIES: usize = 4;
pub const MAX_RELATED: usize = RELATED_MAX_PER_CATEGORY * RELATED_MAX_CATEGORIES;

/// Picks up to `limit` products by cycling through category buckets, one product per
/// bucket per pass.
///
/// Buckets are visited in alphabetical slug order and each bucket hands out products in
/// the order it received them, so the result is deterministic for a given input.
pub fn round_robin_by_category(products: Vec<ProductDetails>, limit: usize) -> Vec<ProductDetails> {
    let mut buckets: BTreeMap<String, VecDeque<ProductDetails>> = BTreeMap::new();
    for product in products {
        let slug = product
            .category_slug()
            .unwrap_or(NO_CATEGORY_SLUG)
            .to_string();
        buckets.entry(slug).or_default().push_back(product);
    }

    let mut picked = Vec::with_capacity(limit);
    while picked.len() < limit {
        let mut took_any = false;
        for bucket in buckets.values_mut() {
            if picked.len() == limit {
                break;
            }
            if let Some(product) = bucket.pop_front() {
                picked.push(product);
                took_any = true;
            }
        }
        if !took_any {
            break;
        }
    }

    picked
}

pub struct ProductService {
    store: Arc<dyn CatalogStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        ProductService { store }
    }

    /// Newest products, balanced across categories so no single category fills the list.
    pub async fn get_new_arrivals(
        &self,
        limit: usize,
    ) -> Result<Vec<ProductCard>, CatalogServiceError> {
        let limit = limit.min(MAX_NEW_ARRIVALS);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let fetch = (limit * 2).max(NEW_ARRIVALS_MIN_FETCH);
        let candidates = self
            .store
            .newest_products(fetch as i64)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load new arrivals: {:?}", e);
                CatalogServiceError::DatabaseError(e.to_string())
            })?;

        Ok(round_robin_by_category(candidates, limit)
            .into_iter()
            .map(ProductCard::from)
            .collect())
    }

    /// Products to show next to `product_id`: its own category first, then other
    /// categories to fill up to `limit`, grouped by category slug.
    pub async fn get_related_products(
        &self,
        product_id: i32,
        limit: usize,
    ) -> Result<RelatedProducts, CatalogServiceError> {
        let limit = limit.min(MAX_RELATED);
        let product = self
            .store
            .get_product(product_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load product {}: {:?}", product_id, e);
                CatalogServiceError::DatabaseError(e.to_string())
            })?
            .ok_or(CatalogServiceError::ProductNotFound)?;

        let category_id = product.product.category_id;

        let mut related = match category_id {
            Some(id) => self
                .store
                .products_in_category(id, product_id, limit as i64)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to load same-category products: {:?}", e);
                    CatalogServiceError::DatabaseError(e.to_string())
                })?,
            None => Vec::new(),
        };

        if related.len() < limit {
            let backfill = self
                .store
                .products_outside_category(category_id, product_id, (limit - related.len()) as i64)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to load backfill products: {:?}", e);
                    CatalogServiceError::DatabaseError(e.to_string())
                })?;
            related.extend(backfill);
        }

        let groups = group_by_category(related);
        let total = groups.iter().map(|g| g.products.len()).sum();

        Ok(RelatedProducts {
            product_id,
            total,
            groups,
        })
    }

    pub async fn record_product_view(
        &self,
        product_id: i32,
    ) -> Result<ViewCountResponse, CatalogServiceError> {
        let views = self
            .store
            .increment_views(product_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record view for product {}: {:?}", product_id, e);
                CatalogServiceError::DatabaseError(e.to_string())
            })?
            .ok_or(CatalogServiceError::ProductNotFound)?;

        Ok(ViewCountResponse { product_id, views })
    }
}

/// Groups in first-seen order, capped at [`RELATED_MAX_CATEGORIES`] groups of at most
/// [`RELATED_MAX_PER_CATEGORY`] products.
fn group_by_category(products: Vec<ProductDetails>) -> Vec<RelatedGroup> {
    let mut groups: Vec<RelatedGroup> = Vec::new();

    for product in products {
        let slug = product.category_slug().unwrap_or(NO_CATEGORY_SLUG).to_string();
        let name = product.category.as_ref().map(|c| c.name.clone());

        let count = groups.len();
        if let Some(group) = groups.iter_mut().find(|g| g.category_slug == slug) {
            if group.products.len() < RELATED_MAX_PER_CATEGORY {
                group.products.push(ProductCard::from(product));
            }
        } else if count < RELATED_MAX_CATEGORIES {
            groups.push(RelatedGroup {
                category_slug: slug,
                category_name: name,
                products: vec![ProductCard::from(product)],
            });
        }
    }

    groups
}
