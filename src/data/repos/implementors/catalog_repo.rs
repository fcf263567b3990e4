use crate::data::database::Database;
use crate::data::models::catalog::CategoryTree;
use crate::data::models::category::{Category, SubCategory};
use crate::data::models::product::{
    Product, ProductColor, ProductDetails, ProductImage, ProductSize, ProductSubCategory,
};
use crate::data::models::schema::{
    categories, product_colors, product_images, product_sizes, product_sub_categories, products,
    search_terms, sub_categories,
};
use crate::data::models::search_term::SearchTerm;
use crate::data::repos::traits::catalog_store::CatalogStore;
use async_trait::async_trait;
use diesel::dsl::{count_star, sql};
use diesel::prelude::*;
use diesel::result;
use diesel::sql_types::{BigInt, Integer, Unsigned, Varchar};
use diesel_async::{AsyncMysqlConnection, RunQueryDsl};
use std::collections::HashMap;

pub struct CatalogRepo {
    db: Database,
}

impl CatalogRepo {
    pub fn new(db: Database) -> Self {
        CatalogRepo { db }
    }

    /// Loads categories, sizes, images, colours and sub-category links for `items` in one
    /// query per table and stitches them onto each product, keeping the input order.
    async fn attach_details(
        conn: &mut AsyncMysqlConnection,
        items: Vec<Product>,
    ) -> Result<Vec<ProductDetails>, result::Error> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = items.iter().map(|p| p.product_id).collect();
        let category_ids: Vec<i32> = items.iter().filter_map(|p| p.category_id).collect();

        let category_map: HashMap<i32, Category> = categories::table
            .filter(categories::category_id.eq_any(category_ids))
            .select(Category::as_select())
            .load::<Category>(conn)
            .await?
            .into_iter()
            .map(|c| (c.category_id, c))
            .collect();

        let sizes = product_sizes::table
            .filter(product_sizes::product_id.eq_any(ids.clone()))
            .order((product_sizes::price.asc(), product_sizes::size_id.asc()))
            .select(ProductSize::as_select())
            .load::<ProductSize>(conn)
            .await?;

        let images = product_images::table
            .filter(product_images::product_id.eq_any(ids.clone()))
            .order((product_images::position.asc(), product_images::image_id.asc()))
            .select(ProductImage::as_select())
            .load::<ProductImage>(conn)
            .await?;

        let colors = product_colors::table
            .filter(product_colors::product_id.eq_any(ids.clone()))
            .order(product_colors::color_id.asc())
            .select(ProductColor::as_select())
            .load::<ProductColor>(conn)
            .await?;

        let links = product_sub_categories::table
            .filter(product_sub_categories::product_id.eq_any(ids))
            .select(ProductSubCategory::as_select())
            .load::<ProductSubCategory>(conn)
            .await?;

        let mut size_map: HashMap<i32, Vec<ProductSize>> = HashMap::new();
        for size in sizes {
            size_map.entry(size.product_id).or_default().push(size);
        }

        let mut image_map: HashMap<i32, Vec<ProductImage>> = HashMap::new();
        for image in images {
            image_map.entry(image.product_id).or_default().push(image);
        }

        let mut color_map: HashMap<i32, Vec<ProductColor>> = HashMap::new();
        for color in colors {
            color_map.entry(color.product_id).or_default().push(color);
        }

        let mut link_map: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            link_map
                .entry(link.product_id)
                .or_default()
                .push(link.sub_category_id);
        }

        let result = items
            .into_iter()
            .map(|product| {
                let id = product.product_id;
                // Several products share a category, so clone out of the map instead of removing.
                let category = product
                    .category_id
                    .and_then(|cid| category_map.get(&cid).cloned());
                ProductDetails {
                    category,
                    sizes: size_map.remove(&id).unwrap_or_default(),
                    images: image_map.remove(&id).unwrap_or_default(),
                    colors: color_map.remove(&id).unwrap_or_default(),
                    sub_category_ids: link_map.remove(&id).unwrap_or_default(),
                    product,
                }
            })
            .collect();

        Ok(result)
    }
}

#[async_trait]
impl CatalogStore for CatalogRepo {
    async fn load_catalog(&self) -> Result<Vec<CategoryTree>, result::Error> {
        let mut conn = self.db.connection().await?;

        let category_rows = categories::table
            .order(categories::name.asc())
            .select(Category::as_select())
            .load::<Category>(&mut conn)
            .await?;

        let sub_category_rows = sub_categories::table
            .order(sub_categories::name.asc())
            .select(SubCategory::as_select())
            .load::<SubCategory>(&mut conn)
            .await?;

        let product_rows = products::table
            .filter(products::category_id.is_not_null())
            .order((
                products::featured.desc(),
                products::best_seller.desc(),
                products::rating.desc(),
                products::sold.desc(),
            ))
            .select(Product::as_select())
            .load::<Product>(&mut conn)
            .await?;

        let details = Self::attach_details(&mut conn, product_rows).await?;

        let mut sub_map: HashMap<i32, Vec<SubCategory>> = HashMap::new();
        for sub in sub_category_rows {
            sub_map.entry(sub.category_id).or_default().push(sub);
        }

        let mut product_map: HashMap<i32, Vec<ProductDetails>> = HashMap::new();
        for item in details {
            if let Some(cid) = item.product.category_id {
                product_map.entry(cid).or_default().push(item);
            }
        }

        Ok(category_rows
            .into_iter()
            .map(|category| {
                let id = category.category_id;
                CategoryTree {
                    category,
                    sub_categories: sub_map.remove(&id).unwrap_or_default(),
                    products: product_map.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }

    async fn newest_products(&self, limit: i64) -> Result<Vec<ProductDetails>, result::Error> {
        let mut conn = self.db.connection().await?;

        let rows = products::table
            .order((
                products::created_at.desc(),
                products::featured.desc(),
                products::rating.desc(),
            ))
            .limit(limit)
            .select(Product::as_select())
            .load::<Product>(&mut conn)
            .await?;

        Self::attach_details(&mut conn, rows).await
    }

    async fn get_product(&self, product_id: i32) -> Result<Option<ProductDetails>, result::Error> {
        let mut conn = self.db.connection().await?;

        let row = match products::table
            .filter(products::product_id.eq(product_id))
            .select(Product::as_select())
            .first::<Product>(&mut conn)
            .await
        {
            Ok(value) => value,
            Err(result::Error::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };

        Ok(Self::attach_details(&mut conn, vec![row]).await?.pop())
    }

    async fn products_in_category(
        &self,
        category_id: i32,
        exclude_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductDetails>, result::Error> {
        let mut conn = self.db.connection().await?;

        let rows = products::table
            .filter(products::category_id.eq(category_id))
            .filter(products::product_id.ne(exclude_id))
            .order((
                products::featured.desc(),
                products::rating.desc(),
                products::sold.desc(),
                products::product_id.asc(),
            ))
            .limit(limit)
            .select(Product::as_select())
            .load::<Product>(&mut conn)
            .await?;

        Self::attach_details(&mut conn, rows).await
    }

    async fn products_outside_category(
        &self,
        category_id: Option<i32>,
        exclude_id: i32,
        limit: i64,
    ) -> Result<Vec<ProductDetails>, result::Error> {
        let mut conn = self.db.connection().await?;

        let mut query = products::table
            .select(Product::as_select())
            .filter(products::product_id.ne(exclude_id))
            .into_boxed();

        query = match category_id {
            Some(id) => query.filter(
                products::category_id
                    .ne(id)
                    .or(products::category_id.is_null()),
            ),
            None => query.filter(products::category_id.is_not_null()),
        };

        let rows = query
            .order((
                products::featured.desc(),
                products::rating.desc(),
                products::sold.desc(),
                products::product_id.asc(),
            ))
            .limit(limit)
            .load::<Product>(&mut conn)
            .await?;

        Self::attach_details(&mut conn, rows).await
    }

    async fn increment_views(&self, product_id: i32) -> Result<Option<i64>, result::Error> {
        let mut conn = self.db.connection().await?;

        // LAST_INSERT_ID(expr) stores the incremented value on this connection, so the
        // read below sees our own increment even under concurrent views.
        let updated = diesel::sql_query(
            "UPDATE products SET views = LAST_INSERT_ID(views + 1) WHERE product_id = ?",
        )
        .bind::<Integer, _>(product_id)
        .execute(&mut conn)
        .await?;

        if updated == 0 {
            return Ok(None);
        }

        let views: u64 = diesel::select(sql::<Unsigned<BigInt>>("LAST_INSERT_ID()"))
            .get_result(&mut conn)
            .await?;

        Ok(Some(views as i64))
    }

    async fn color_usage(&self) -> Result<Vec<(String, i64)>, result::Error> {
        let mut conn = self.db.connection().await?;

        product_colors::table
            .group_by(product_colors::name)
            .select((product_colors::name, count_star()))
            .load::<(String, i64)>(&mut conn)
            .await
    }

    async fn top_search_terms(&self, limit: i64) -> Result<Vec<(String, i64)>, result::Error> {
        let mut conn = self.db.connection().await?;

        let rows = search_terms::table
            .order((search_terms::hits.desc(), search_terms::term.asc()))
            .limit(limit)
            .select(SearchTerm::as_select())
            .load::<SearchTerm>(&mut conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.term, i64::from(row.hits)))
            .collect())
    }

    async fn record_search_term(&self, term: &str) -> Result<(), result::Error> {
        let mut conn = self.db.connection().await?;

        diesel::sql_query(
            "INSERT INTO search_terms (term, hits, last_searched_at) VALUES (?, 1, NOW()) \
             ON DUPLICATE KEY UPDATE hits = hits + 1, last_searched_at = NOW()",
        )
        .bind::<Varchar, _>(term)
        .execute(&mut conn)
        .await?;

        Ok(())
    }
}
