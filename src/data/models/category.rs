use crate::data::models::schema::*;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(primary_key(category_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub image_uri: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = sub_categories)]
#[diesel(primary_key(sub_category_id))]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct SubCategory {
    pub sub_category_id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
}
