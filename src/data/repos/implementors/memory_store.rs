use crate::data::models::catalog::CategoryTree;
use crate::data::models::category::{Category, SubCategory};
use crate::data::models::coupon::{Coupon, NewCoupon};
use crate::data::models::product::{
    Product, ProductColor, ProductDetails, ProductImage, ProductSize,
};
use crate::data::repos::traits::catalog_store::CatalogStore;
use crate::data::repos::traits::coupon_store::CouponStore;
use async_trait::async_trait;
use chrono::Utc;
use diesel::result;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    coupons: Vec<Coupon>,
    categories: Vec<Category>,
    sub_categories: Vec<SubCategory>,
    products: Vec<Product>,
    sizes: Vec<ProductSize>,
    images: Vec<ProductImage>,
    colors: Vec<ProductColor>,
    product_sub_categories: Vec<(i32, i32)>,
    search_terms: BTreeMap<String, i64>,
}

/// In-process implementation of both storage seams.
///
/// Used when no `DATABASE_URL` is configured and by the test suite. Orderings mirror the
/// SQL the MySQL repositories issue. [`MemoryStore::set_unavailable`] makes every call fail
/// the way a dropped connection would.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    fn check_available(&self) -> Result<(), result::Error> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new("storage unavailable".to_string()),
            ));
        }
        Ok(())
    }

    pub async fn insert_coupon(&self, coupon: Coupon) {
        self.tables.write().await.coupons.push(coupon);
    }

    pub async fn insert_category(&self, category: Category) {
        self.tables.write().await.categories.push(category);
    }

    pub async fn insert_sub_category(&self, sub_category: SubCategory) {
        self.tables.write().await.sub_categories.push(sub_category);
    }

    pub async fn insert_product(&self, product: Product) {
        self.tables.write().await.products.push(product);
    }

    pub async fn insert_size(&self, size: ProductSize) {
        self.tables.write().await.sizes.push(size);
    }

    pub async fn insert_image(&self, image: ProductImage) {
        self.tables.write().await.images.push(image);
    }

    pub async fn insert_color(&self, color: ProductColor) {
        self.tables.write().await.colors.push(color);
    }

    pub async fn link_sub_category(&self, product_id: i32, sub_category_id: i32) {
        self.tables
            .write()
            .await
            .product_sub_categories
            .push((product_id, sub_category_id));
    }

    pub async fn views_of(&self, product_id: i32) -> Option<i32> {
        self.tables
            .read()
            .await
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .map(|p| p.views)
    }
}

impl Tables {
    fn details(&self, product: &Product) -> ProductDetails {
        let id = product.product_id;

        let mut sizes: Vec<ProductSize> = self
            .sizes
            .iter()
            .filter(|s| s.product_id == id)
            .cloned()
            .collect();
        sizes.sort_by(|a, b| a.price.cmp(&b.price).then(a.size_id.cmp(&b.size_id)));

        let mut images: Vec<ProductImage> = self
            .images
            .iter()
            .filter(|i| i.product_id == id)
            .cloned()
            .collect();
        images.sort_by_key(|i| (i.position, i.image_id));

        let mut colors: Vec<ProductColor> = self
            .colors
            .iter()
            .filter(|c| c.product_id == id)
            .cloned()
            .collect();
        colors.sort_by_key(|c| c.color_id);

        ProductDetails {
            product: product.clone(),
            category: product.category_id.and_then(|cid| {
                self.categories
                    .iter()
                    .find(|c| c.category_id == cid)
                    .cloned()
            }),
            sizes,
            images,
            colors,
            sub_category_ids: self
                .product_sub_categories
                .iter()
                .filter(|(pid, _)| *pid == id)
                .map(|(_, sid)| *sid)
                .collect(),
        }
    }

    /// `featured desc, rating desc, sold desc`, then id for a stable result.
    fn ranked(&self, mut items: Vec<&Product>, limit: i64) -> Vec<ProductDetails> {
        items.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then(cmp_desc(a.rating, b.rating))
                .then(b.sold.cmp(&a.sold))
                .then(a.product_id.cmp(&b.product_id))
        });
        items
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|p| self.details(p))
            .collect()
    }
}

fn cmp_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[async_trait]
impl CouponStore for MemoryStore {
    async fn get_by_code(&self, code: &str) -> Result<Option<Coupon>, result::Error> {
        self.check_available()?;
        let needle = code.trim().to_uppercase();
        Ok(self
            .tables
            .read()
            .await
            .coupons
            .iter()
            .find(|c| c.code.to_uppercase() == needle)
            .cloned())
    }

    async fn add(&self, coupon: NewCoupon) -> Result<(), result::Error> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.coupons.iter().any(|c| c.code.to_uppercase() == coupon.code.to_uppercase()) {
            return Err(result::Error::DatabaseError(
                result::DatabaseErrorKind::UniqueViolation,
                Box::new(format!("Duplicate entry '{}' for key 'coupons.code'", coupon.code)),
            ));
        }
        let coupon_id = tables.coupons.iter().map(|c| c.coupon_id).max().unwrap_or(0) + 1;
        let now = Utc::now().naive_utc();
        tables.coupons.push(Coupon {
            coupon_id,
            code: coupon.code,
            discount: coupon.discount,
            start_date: coupon.start_date,
            end_date: coupon.end_date,
            created_at: Some(now),
            updated_at: Some(now),
        });
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn load_catalog(&self) -> Result<Vec<CategoryTree>, result::Error> {
        self.check_available()?;
        let tables = self.tables.read().await;

        let mut categories: Vec<&Category> = tables.categories.iter().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(categories
            .into_iter()
            .map(|category| {
                let mut sub_categories: Vec<SubCategory> = tables
                    .sub_categories
                    .iter()
                    .filter(|s| s.category_id == category.category_id)
                    .cloned()
                    .collect();
                sub_categories.sort_by(|a, b| a.name.cmp(&b.name));

                let mut products: Vec<&Product> = tables
                    .products
                    .iter()
                    .filter(|p| p.category_id == Some(category.category_id))
                    .collect();
                products.sort_by(|a, b| {
                    b.featured
                        .cmp(&a.featured)
                        .then(b.best_seller.cmp(&a.best_seller))
                        .then(cmp_desc(a.rating, b.rating))
                        .then(b.sold.cmp(&a.sold))
                });

                CategoryTree {
                    category: category.clone(),
                    sub_categories,
                    products: products.into_iter().map(|p| tables.details(p)).collect(),
                }
            })
            .collect())
    }

    async fn newest_products(&self, limit: i64) -> Result<Vec<ProductDetails>, result::Error> {
        self.check_available()?;
        let tables = self.tables.read().await;

        let mut products: Vec<&Product> = tables.products.iter().collect();
        products.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.featured.cmp(&a.featured))
                .then(cmp_desc(a.rating, b.rating))
        });

        Ok(products
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|p| tables.details(p))
            .collect())
    }

    async fn get_product(&self, product_id: i32) -> Result<Option<ProductDetails>, result::Error> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .map(|p| tables.details(p)))
    }

    async fn products_in_category(
        &self,
        category_id: i32,
        exclude_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductDetails>, result::Error> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let candidates = tables
            .products
            .iter()
            .filter(|p| p.category_id == Some(category_id) && p.product_id != exclude_id)
            .collect();
        Ok(tables.ranked(candidates, limit))
    }

    async fn products_outside_category(
        &self,
        category_id: Option<i32>,
        exclude_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductDetails>, result::Error> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let candidates = tables
            .products
            .iter()
            .filter(|p| p.product_id != exclude_id)
            .filter(|p| match category_id {
                Some(id) => p.category_id != Some(id),
                None => p.category_id.is_some(),
            })
            .collect();
        Ok(tables.ranked(candidates, limit))
    }

    async fn increment_views(&self, product_id: i32) -> Result<Option<i64>, result::Error> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        Ok(tables
            .products
            .iter_mut()
            .find(|p| p.product_id == product_id)
            .map(|p| {
                p.views += 1;
                i64::from(p.views)
            }))
    }

    async fn color_usage(&self) -> Result<Vec<(String, i64)>, result::Error> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut counts: HashMap<String, i64> = HashMap::new();
        for color in &tables.colors {
            *counts.entry(color.name.clone()).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn top_search_terms(&self, limit: i64) -> Result<Vec<(String, i64)>, result::Error> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut terms: Vec<(String, i64)> = tables
            .search_terms
            .iter()
            .map(|(term, hits)| (term.clone(), *hits))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        terms.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(terms)
    }

    async fn record_search_term(&self, term: &str) -> Result<(), result::Error> {
        self.check_available()?;
        *self
            .tables
            .write()
            .await
            .search_terms
            .entry(term.to_string())
            .or_default() += 1;
        Ok(())
    }
}
