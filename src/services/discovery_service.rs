use crate::data::repos::traits::catalog_store::CatalogStore;
use crate::services::errors::DiscoveryServiceError;
use std::sync::Arc;

/// Served when colour usage cannot be read.
pub const FALLBACK_COLORS: [&str; 5] = ["White", "Black", "Beige", "Grey", "Brown"];

/// Served when search statistics cannot be read.
pub const FALLBACK_SEARCHES: [&str; 5] = [
    "marble",
    "granite",
    "kitchen cabinets",
    "quartz",
    "vanity",
];

pub const MAX_SEARCH_TERM_LEN: usize = 100;
pub const MAX_DISCOVERY_LIMIT: usize = 50;

pub struct DiscoveryService {
    store: Arc<dyn CatalogStore>,
}

impl DiscoveryService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        DiscoveryService { store }
    }

    /// Colour names ranked by how many products use them. Never fails: a storage error is
    /// logged and the fallback list is returned instead.
    pub async fn popular_colors(&self, limit: usize) -> Vec<String> {
        let limit = limit.min(MAX_DISCOVERY_LIMIT);
        match self.store.color_usage().await {
            Ok(mut usage) => {
                usage.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                usage.into_iter().take(limit).map(|(name, _)| name).collect()
            }
            Err(e) => {
                tracing::warn!("Falling back to default colours: {:?}", e);
                fallback(&FALLBACK_COLORS, limit)
            }
        }
    }

    /// Most searched terms. Falls back to a fixed list on storage error, like
    /// [`DiscoveryService::popular_colors`].
    pub async fn trending_searches(&self, limit: usize) -> Vec<String> {
        let limit = limit.min(MAX_DISCOVERY_LIMIT);
        match self.store.top_search_terms(limit as i64).await {
            Ok(terms) => terms.into_iter().map(|(term, _)| term).collect(),
            Err(e) => {
                tracing::warn!("Falling back to default trending searches: {:?}", e);
                fallback(&FALLBACK_SEARCHES, limit)
            }
        }
    }

    pub async fn record_search(&self, term: &str) -> Result<String, DiscoveryServiceError> {
        let normalized: String = term
            .trim()
            .to_lowercase()
            .chars()
            .take(MAX_SEARCH_TERM_LEN)
            .collect();

        if normalized.is_empty() {
            return Err(DiscoveryServiceError::EmptySearchTerm);
        }

        self.store
            .record_search_term(&normalized)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record search term: {:?}", e);
                DiscoveryServiceError::DatabaseError(e.to_string())
            })?;

        Ok(normalized)
    }
}

fn fallback(defaults: &[&str], limit: usize) -> Vec<String> {
    defaults.iter().take(limit).map(|s| s.to_string()).collect()
}
