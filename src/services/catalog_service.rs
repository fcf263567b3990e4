use crate::api::response::{CategorySummary, ProductCard, ProductTypeSection};
use crate::data::repos::traits::catalog_store::CatalogStore;
use crate::services::classification::{ProductType, classify_product_type};
use crate::services::errors::CatalogServiceError;
use std::sync::Arc;

pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        CatalogService { store }
    }

    /// Groups every category that has products into its marketing section.
    ///
    /// Sections come back in [`ProductType::ALL`] order and empty sections are dropped.
    /// Products keep the order storage returned them in.
    pub async fn get_all_products_by_type(
        &self,
    ) -> Result<Vec<ProductTypeSection>, CatalogServiceError> {
        let catalog = self.store.load_catalog().await.map_err(|e| {
            tracing::error!("Failed to load catalog: {:?}", e);
            CatalogServiceError::DatabaseError(e.to_string())
        })?;

        let mut sections: Vec<ProductTypeSection> = ProductType::ALL
            .iter()
            .map(|product_type| ProductTypeSection {
                product_type: *product_type,
                title: product_type.title().to_string(),
                description: product_type.description().to_string(),
                categories: Vec::new(),
                products: Vec::new(),
            })
            .collect();

        for tree in catalog {
            if tree.products.is_empty() {
                continue;
            }

            let product_type = classify_product_type(&tree.category.name, &tree.category.slug);
            let Some(section) = sections
                .iter_mut()
                .find(|s| s.product_type == product_type)
            else {
                continue;
            };

            section.categories.push(CategorySummary::from(&tree));
            section
                .products
                .extend(tree.products.into_iter().map(ProductCard::from));
        }

        sections.retain(|s| !s.products.is_empty());

        tracing::debug!(sections = sections.len(), "Catalog grouped by type");

        Ok(sections)
    }

    pub async fn get_products_by_type(
        &self,
        product_type: ProductType,
    ) -> Result<ProductTypeSection, CatalogServiceError> {
        self.get_all_products_by_type()
            .await?
            .into_iter()
            .find(|s| s.product_type == product_type)
            .ok_or(CatalogServiceError::SectionNotFound)
    }
}
