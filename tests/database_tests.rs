//! These run against a migrated MySQL instance named by `DATABASE_URL`.
//! Run them with `cargo test -- --ignored`.

use std::sync::Arc;
use storefront_server_lib::api::config::Config;
use storefront_server_lib::data::database::Database;
use storefront_server_lib::data::repos::implementors::catalog_repo::CatalogRepo;
use storefront_server_lib::data::repos::implementors::coupon_repo::CouponRepo;
use storefront_server_lib::data::repos::traits::catalog_store::CatalogStore;
use storefront_server_lib::data::repos::traits::coupon_store::CouponStore;

fn database() -> Database {
    let config = Config::new();
    let url = config
        .database_url
        .as_deref()
        .expect("DATABASE_URL must be set for database tests");

    Database::connect(url, config.database_pool_size).expect("pool should build")
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
pub async fn test_database_connection() {
    let database = database();

    // Attempt to get a connection from the pool
    let conn = database.get_connection().await;

    assert!(conn.is_ok(), "Failed to get a database connection");
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
pub async fn test_unknown_coupon_is_none() {
    let repo = CouponRepo::new(database());

    let coupon = repo.get_by_code("NO-SUCH-CODE-0000").await;

    assert_eq!(coupon.map(|c| c.is_none()).ok(), Some(true));
}

#[tokio::test]
#[ignore]
#[serial_test::serial]
pub async fn test_concurrent_views_against_mysql() {
    let repo: Arc<dyn CatalogStore> = Arc::new(CatalogRepo::new(database()));

    let newest = repo.newest_products(1).await.expect("newest products");
    let Some(product) = newest.first() else {
        return;
    };
    let id = product.product.product_id;
    let before = i64::from(product.product.views);

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move { repo.increment_views(id).await }));
    }
    for handle in handles {
        handle.await.expect("task finished").expect("view recorded");
    }

    let after = repo
        .get_product(id)
        .await
        .expect("product lookup")
        .expect("product exists");
    assert_eq!(i64::from(after.product.views), before + 20);
}
