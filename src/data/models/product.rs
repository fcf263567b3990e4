use crate::data::models::category::Category;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(primary_key(product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Product {
    pub product_id: i32,
    pub category_id: Option<i32>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub featured: bool,
    pub best_seller: bool,
    pub sold: i32,
    pub rating: f64,
    pub num_reviews: i32,
    pub views: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = product_sizes)]
#[diesel(primary_key(size_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ProductSize {
    pub size_id: i32,
    pub product_id: i32,
    pub size: String,
    pub price: BigDecimal,
    pub qty: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = product_images)]
#[diesel(primary_key(image_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ProductImage {
    pub image_id: i32,
    pub product_id: i32,
    pub url: String,
    pub position: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = product_colors)]
#[diesel(primary_key(color_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ProductColor {
    pub color_id: i32,
    pub product_id: i32,
    pub name: String,
    pub hex: Option<String>,
}

#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = product_sub_categories)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ProductSubCategory {
    pub product_id: i32,
    pub sub_category_id: i32,
}

/// A product together with its owning category and child rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub product: Product,
    pub category: Option<Category>,
    pub sizes: Vec<ProductSize>,
    pub images: Vec<ProductImage>,
    pub colors: Vec<ProductColor>,
    pub sub_category_ids: Vec<i32>,
}

impl ProductDetails {
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.slug.as_str())
    }
}
