#![allow(dead_code)]

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use std::str::FromStr;
use std::sync::Arc;
use storefront_server_lib::data::models::category::{Category, SubCategory};
use storefront_server_lib::data::models::coupon::Coupon;
use storefront_server_lib::data::models::product::{
    Product, ProductColor, ProductImage, ProductSize,
};
use storefront_server_lib::data::repos::implementors::memory_store::MemoryStore;

pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("valid decimal")
}

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

pub fn at_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
}

pub fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn coupon(id: i32, code: &str, discount: &str, start: NaiveDateTime, end: NaiveDateTime) -> Coupon {
    Coupon {
        coupon_id: id,
        code: code.to_string(),
        discount: dec(discount),
        start_date: start,
        end_date: end,
        created_at: None,
        updated_at: None,
    }
}

/// SUMMER20: 20% off through 2024.
pub async fn seed_summer_coupon(store: &MemoryStore) {
    store
        .insert_coupon(coupon(
            1,
            "SUMMER20",
            "20",
            at(2024, 1, 1),
            at_time(2024, 12, 31, 23, 59),
        ))
        .await;
}

pub fn category(id: i32, name: &str, slug: &str) -> Category {
    Category {
        category_id: id,
        name: name.to_string(),
        slug: slug.to_string(),
        image_uri: Some(format!("/images/categories/{slug}.jpg")),
        created_at: None,
        updated_at: None,
    }
}

pub fn sub_category(id: i32, category_id: i32, name: &str, slug: &str) -> SubCategory {
    SubCategory {
        sub_category_id: id,
        category_id,
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn product(id: i32, category_id: Option<i32>, title: &str, created_at: NaiveDateTime) -> Product {
    Product {
        product_id: id,
        category_id,
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        description: None,
        featured: false,
        best_seller: false,
        sold: 0,
        rating: 0.0,
        num_reviews: 0,
        views: 0,
        created_at,
        updated_at: None,
    }
}

pub fn size(id: i32, product_id: i32, label: &str, price: &str, qty: i32) -> ProductSize {
    ProductSize {
        size_id: id,
        product_id,
        size: label.to_string(),
        price: dec(price),
        qty,
    }
}

pub fn image(id: i32, product_id: i32, url: &str, position: i32) -> ProductImage {
    ProductImage {
        image_id: id,
        product_id,
        url: url.to_string(),
        position,
    }
}

pub fn color(id: i32, product_id: i32, name: &str) -> ProductColor {
    ProductColor {
        color_id: id,
        product_id,
        name: name.to_string(),
        hex: None,
    }
}

/// Three categories (one per classified section) plus an empty "Lighting" category and a
/// product without a category.
///
/// | id | title            | category          |
/// |----|------------------|-------------------|
/// | 1  | Carrara Slab     | Luxury Marble Tiles |
/// | 2  | Nero Slab        | Luxury Marble Tiles |
/// | 3  | Shaker Base Unit | Kitchen Cabinets  |
/// | 4  | Oud Perfume      | Perfumes          |
/// | 5  | Gift Card        | none              |
pub async fn seed_catalog(store: &MemoryStore) {
    store.insert_category(category(10, "Luxury Marble Tiles", "marble-tiles")).await;
    store.insert_category(category(20, "Kitchen Cabinets", "kitchen-cabinets")).await;
    store.insert_category(category(30, "Perfumes", "perfumes")).await;
    store.insert_category(category(40, "Lighting", "lighting")).await;

    store.insert_sub_category(sub_category(101, 10, "Floor Tiles", "floor-tiles")).await;
    store.insert_sub_category(sub_category(201, 20, "Base Units", "base-units")).await;

    let mut carrara = product(1, Some(10), "Carrara Slab", at(2024, 3, 1));
    carrara.rating = 4.5;
    carrara.sold = 10;
    let mut nero = product(2, Some(10), "Nero Slab", at(2024, 3, 2));
    nero.featured = true;
    nero.rating = 4.0;
    let mut shaker = product(3, Some(20), "Shaker Base Unit", at(2024, 3, 3));
    shaker.best_seller = true;
    let oud = product(4, Some(30), "Oud Perfume", at(2024, 3, 4));
    let gift = product(5, None, "Gift Card", at(2024, 3, 5));

    for p in [carrara, nero, shaker, oud, gift] {
        store.insert_product(p).await;
    }

    store.insert_size(size(1, 1, "60x60", "89.00", 5)).await;
    store.insert_size(size(2, 1, "30x30", "39.50", 0)).await;
    store.insert_size(size(3, 3, "600mm", "420.00", 0)).await;

    store.insert_image(image(1, 1, "/img/carrara-2.jpg", 2)).await;
    store.insert_image(image(2, 1, "/img/carrara-1.jpg", 1)).await;

    store.insert_color(color(1, 1, "White")).await;
    store.insert_color(color(2, 2, "Black")).await;
    store.insert_color(color(3, 3, "White")).await;

    store.link_sub_category(1, 101).await;
    store.link_sub_category(3, 201).await;
}

/// Reads a money field from a JSON body whether it was serialized as a string or a number.
pub fn money(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::String(s) => s.parse().expect("decimal string"),
        other => other.as_f64().expect("number"),
    }
}
