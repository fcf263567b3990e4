use crate::data::database::Database;
use crate::data::repos::implementors::catalog_repo::CatalogRepo;
use crate::data::repos::implementors::coupon_repo::CouponRepo;
use crate::data::repos::implementors::memory_store::MemoryStore;
use crate::data::repos::traits::catalog_store::CatalogStore;
use crate::data::repos::traits::coupon_store::CouponStore;
use std::sync::Arc;

/// Storage handles shared by every request. Services are built per request from these.
#[derive(Clone)]
pub struct AppState {
    pub coupons: Arc<dyn CouponStore>,
    pub catalog: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(coupons: Arc<dyn CouponStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        AppState { coupons, catalog }
    }

    pub fn from_database(db: Database) -> Self {
        Self::new(
            Arc::new(CouponRepo::new(db.clone())),
            Arc::new(CatalogRepo::new(db)),
        )
    }

    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self::new(store.clone(), store)
    }
}
