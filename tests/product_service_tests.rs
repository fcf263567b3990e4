mod common;

use chrono::Duration;
use common::{at, at_time, category, product, seed_catalog, store};
use std::collections::HashMap;
use storefront_server_lib::data::repos::implementors::memory_store::MemoryStore;
use storefront_server_lib::services::errors::CatalogServiceError;
use storefront_server_lib::services::product_service::{
    NO_CATEGORY_SLUG, ProductService, RELATED_MAX_CATEGORIES, RELATED_MAX_PER_CATEGORY,
};

/// Five products in each of "doors", "slabs" and "vanities", all created on the same day.
/// Within a category, higher ids are newer; "vanities" holds the five newest overall.
async fn seed_recent_arrivals(store: &MemoryStore) {
    let day = at(2024, 9, 1);
    let categories = [(1, "Doors", "doors"), (2, "Slabs", "slabs"), (3, "Vanities", "vanities")];

    for (cid, name, slug) in categories {
        store.insert_category(category(cid, name, slug)).await;
        for n in 0..5 {
            let id = cid * 100 + n;
            let created = day + Duration::minutes(i64::from(cid * 60 + n));
            store
                .insert_product(product(id, Some(cid), &format!("{slug} {n}"), created))
                .await;
        }
    }
}

fn count_by_category(slugs: &[Option<String>]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for slug in slugs {
        *counts
            .entry(slug.clone().unwrap_or_else(|| NO_CATEGORY_SLUG.to_string()))
            .or_insert(0) += 1;
    }
    counts
}

#[tokio::test]
async fn test_new_arrivals_mix_categories() {
    let store = store();
    seed_recent_arrivals(&store).await;
    let service = ProductService::new(store);

    let arrivals = service.get_new_arrivals(10).await.expect("new arrivals");

    assert_eq!(arrivals.len(), 10);
    let slugs: Vec<Option<String>> = arrivals.iter().map(|p| p.category_slug.clone()).collect();
    let counts = count_by_category(&slugs);
    assert_eq!(counts.len(), 3);
    // Alphabetical bucket order gives "doors" the extra pick.
    assert_eq!(counts["doors"], 4);
    assert_eq!(counts["slabs"], 3);
    assert_eq!(counts["vanities"], 3);
}

#[tokio::test]
async fn test_new_arrivals_cycle_through_categories_before_repeating() {
    let store = store();
    seed_recent_arrivals(&store).await;
    let service = ProductService::new(store);

    let arrivals = service.get_new_arrivals(3).await.unwrap();

    let slugs: Vec<&str> = arrivals
        .iter()
        .map(|p| p.category_slug.as_deref().unwrap())
        .collect();
    assert_eq!(slugs, vec!["doors", "slabs", "vanities"]);
    // Each bucket hands out its newest product first.
    let titles: Vec<&str> = arrivals.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["doors 4", "slabs 4", "vanities 4"]);
}

#[tokio::test]
async fn test_new_arrivals_respect_limit() {
    let store = store();
    seed_recent_arrivals(&store).await;
    let service = ProductService::new(store);

    for limit in [0, 1, 7, 15, 40] {
        let arrivals = service.get_new_arrivals(limit).await.unwrap();
        assert!(arrivals.len() <= limit);
        assert_eq!(arrivals.len(), limit.min(15));
    }
}

#[tokio::test]
async fn test_new_arrivals_bucket_uncategorised_products() {
    let store = store();
    seed_catalog(&store).await;
    let service = ProductService::new(store);

    let arrivals = service.get_new_arrivals(5).await.unwrap();

    assert_eq!(arrivals.len(), 5);
    // kitchen-cabinets, marble-tiles, no-category, perfumes, then marble-tiles again.
    let titles: Vec<&str> = arrivals.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Shaker Base Unit",
            "Nero Slab",
            "Gift Card",
            "Oud Perfume",
            "Carrara Slab"
        ]
    );
}

#[tokio::test]
async fn test_new_arrivals_only_consider_newest_window() {
    let store = store();
    store.insert_category(category(1, "Old", "aaa-old")).await;
    store.insert_category(category(2, "New", "zzz-new")).await;
    // One stale product in an alphabetically early category...
    store
        .insert_product(product(1, Some(1), "Stale", at(2020, 1, 1)))
        .await;
    // ...and more recent products than the over-fetch window holds.
    for n in 0..40 {
        store
            .insert_product(product(100 + n, Some(2), &format!("Fresh {n}"), at_time(2024, 1, 1, 0, n as u32)))
            .await;
    }
    let service = ProductService::new(store);

    let arrivals = service.get_new_arrivals(5).await.unwrap();

    assert_eq!(arrivals.len(), 5);
    assert!(arrivals.iter().all(|p| p.title != "Stale"));
}

#[tokio::test]
async fn test_related_products_fill_from_other_categories() {
    let store = store();
    seed_catalog(&store).await;
    let service = ProductService::new(store);

    let related = service
        .get_related_products(1, 8)
        .await
        .expect("related products");

    assert_eq!(related.product_id, 1);
    assert_eq!(related.total, 4);
    let slugs: Vec<&str> = related.groups.iter().map(|g| g.category_slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["marble-tiles", "kitchen-cabinets", "perfumes", NO_CATEGORY_SLUG]
    );
    assert_eq!(related.groups[0].products[0].title, "Nero Slab");
    assert!(
        related
            .groups
            .iter()
            .flat_map(|g| g.products.iter())
            .all(|p| p.product_id != 1)
    );
}

#[tokio::test]
async fn test_related_products_stop_at_limit() {
    let store = store();
    seed_catalog(&store).await;
    let service = ProductService::new(store);

    let related = service.get_related_products(1, 2).await.unwrap();

    assert_eq!(related.total, 2);
    assert_eq!(related.groups.len(), 2);
    assert_eq!(related.groups[0].category_slug, "marble-tiles");
}

#[tokio::test]
async fn test_related_products_cap_each_group() {
    let store = store();
    store.insert_category(category(1, "Granite", "granite")).await;
    store.insert_category(category(2, "Quartz", "quartz")).await;
    for n in 0..10 {
        store
            .insert_product(product(n, Some(1), &format!("Granite {n}"), at(2024, 1, 1)))
            .await;
    }
    store
        .insert_product(product(50, Some(2), "Quartz 0", at(2024, 1, 1)))
        .await;
    let service = ProductService::new(store);

    let related = service.get_related_products(0, 12).await.unwrap();

    assert_eq!(related.groups[0].category_slug, "granite");
    assert_eq!(related.groups[0].products.len(), RELATED_MAX_PER_CATEGORY);
    assert_eq!(related.groups[1].category_slug, "quartz");
    assert_eq!(related.total, RELATED_MAX_PER_CATEGORY + 1);
}

#[tokio::test]
async fn test_related_products_cap_group_count() {
    let store = store();
    store
        .insert_product(product(1, None, "Loose Sample", at(2024, 1, 1)))
        .await;
    for cid in 1..=6 {
        store
            .insert_category(category(cid, &format!("Range {cid}"), &format!("range-{cid}")))
            .await;
        store
            .insert_product(product(cid * 10, Some(cid), &format!("Item {cid}"), at(2024, 1, 1)))
            .await;
    }
    let service = ProductService::new(store);

    let related = service.get_related_products(1, 8).await.unwrap();

    assert_eq!(related.groups.len(), RELATED_MAX_CATEGORIES);
    assert!(related.groups.iter().all(|g| g.category_slug != NO_CATEGORY_SLUG));
}

#[tokio::test]
async fn test_related_products_for_missing_product() {
    let store = store();
    seed_catalog(&store).await;
    let service = ProductService::new(store);

    let result = service.get_related_products(999, 8).await;

    assert_eq!(result, Err(CatalogServiceError::ProductNotFound));
}

#[tokio::test]
async fn test_each_view_increments_by_one() {
    let store = store();
    seed_catalog(&store).await;
    let service = ProductService::new(store.clone());

    for expected in 1..=3 {
        let response = service.record_product_view(2).await.expect("view recorded");
        assert_eq!(response.product_id, 2);
        assert_eq!(response.views, expected);
    }
    assert_eq!(store.views_of(2).await, Some(3));
    assert_eq!(store.views_of(1).await, Some(0));
}

#[tokio::test]
async fn test_concurrent_views_are_not_lost() {
    let store = store();
    seed_catalog(&store).await;

    let mut handles = Vec::new();
    for _ in 0..50 {
        let service = ProductService::new(store.clone());
        handles.push(tokio::spawn(async move {
            service.record_product_view(4).await.expect("view recorded")
        }));
    }
    for handle in handles {
        handle.await.expect("task finished");
    }

    assert_eq!(store.views_of(4).await, Some(50));
}

#[tokio::test]
async fn test_view_of_missing_product() {
    let service = ProductService::new(store());

    let result = service.record_product_view(42).await;

    assert_eq!(result, Err(CatalogServiceError::ProductNotFound));
}

#[tokio::test]
async fn test_related_products_with_oversized_limit() {
    let store = store();
    seed_catalog(&store).await;
    let service = ProductService::new(store);

    let related = service.get_related_products(1, usize::MAX).await.unwrap();

    assert_eq!(related.total, 4);
    assert_eq!(related.groups.len(), 4);
}

#[tokio::test]
async fn test_new_arrivals_with_oversized_limit() {
    let store = store();
    seed_recent_arrivals(&store).await;
    let service = ProductService::new(store);

    let arrivals = service.get_new_arrivals(usize::MAX).await.unwrap();

    assert_eq!(arrivals.len(), 15);
}
