use crate::data::models::schema::*;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = search_terms)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct SearchTerm {
    pub term: String,
    pub hits: i32,
    pub last_searched_at: Option<NaiveDateTime>,
}
