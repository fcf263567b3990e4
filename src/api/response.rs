use crate::data::models::catalog::CategoryTree;
use crate::data::models::coupon::Coupon;
use crate::data::models::product::ProductDetails;
use crate::services::classification::ProductType;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The `{ success, data | error, details? }` envelope every endpoint answers with.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub details: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error.into()),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CouponResponse {
    pub code: String,
    pub discount: BigDecimal,
    pub start_date: String,
    pub end_date: String,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        CouponResponse {
            code: coupon.code,
            discount: coupon.discount,
            start_date: coupon.start_date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end_date: coupon.end_date.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscountResult {
    pub percentage: BigDecimal,
    pub amount: BigDecimal,
    pub total: BigDecimal,
    pub coupon_code: String,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartQuote {
    pub subtotal: BigDecimal,
    pub discount: Option<DiscountResult>,
    pub total: BigDecimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ColorSwatch {
    pub name: String,
    pub hex: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub product_id: i32,
    pub title: String,
    pub slug: String,
    pub category_slug: Option<String>,
    /// Lowest price across size variants; absent when the product has none.
    pub price: Option<BigDecimal>,
    pub images: Vec<String>,
    pub colors: Vec<ColorSwatch>,
    pub rating: f64,
    pub num_reviews: i32,
    pub featured: bool,
    pub best_seller: bool,
    pub sold: i32,
    pub in_stock: bool,
    pub sub_category_ids: Vec<i32>,
}

impl From<ProductDetails> for ProductCard {
    fn from(details: ProductDetails) -> Self {
        let category_slug = details.category_slug().map(str::to_string);
        let price = details.sizes.iter().map(|s| &s.price).min().cloned();
        let in_stock = details.sizes.iter().any(|s| s.qty > 0);
        let product = details.product;

        ProductCard {
            product_id: product.product_id,
            title: product.title,
            slug: product.slug,
            category_slug,
            price,
            images: details.images.into_iter().map(|i| i.url).collect(),
            colors: details
                .colors
                .into_iter()
                .map(|c| ColorSwatch {
                    name: c.name,
                    hex: c.hex,
                })
                .collect(),
            rating: product.rating,
            num_reviews: product.num_reviews,
            featured: product.featured,
            best_seller: product.best_seller,
            sold: product.sold,
            in_stock,
            sub_category_ids: details.sub_category_ids,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubCategorySummary {
    pub sub_category_id: i32,
    pub name: String,
    pub slug: String,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub image_uri: Option<String>,
    pub sub_categories: Vec<SubCategorySummary>,
    pub product_count: usize,
}

impl From<&CategoryTree> for CategorySummary {
    fn from(tree: &CategoryTree) -> Self {
        CategorySummary {
            category_id: tree.category.category_id,
            name: tree.category.name.clone(),
            slug: tree.category.slug.clone(),
            image_uri: tree.category.image_uri.clone(),
            sub_categories: tree
                .sub_categories
                .iter()
                .map(|s| SubCategorySummary {
                    sub_category_id: s.sub_category_id,
                    name: s.name.clone(),
                    slug: s.slug.clone(),
                })
                .collect(),
            product_count: tree.products.len(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductTypeSection {
    pub product_type: ProductType,
    pub title: String,
    pub description: String,
    pub categories: Vec<CategorySummary>,
    pub products: Vec<ProductCard>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RelatedGroup {
    pub category_slug: String,
    pub category_name: Option<String>,
    pub products: Vec<ProductCard>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RelatedProducts {
    pub product_id: i32,
    pub total: usize,
    pub groups: Vec<RelatedGroup>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewCountResponse {
    pub product_id: i32,
    pub views: i64,
}
