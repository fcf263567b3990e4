use crate::data::database::Database;
use crate::data::models::coupon::{Coupon, NewCoupon};
use crate::data::repos::traits::coupon_store::CouponStore;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CouponRepo {
    db: Database,
}

impl CouponRepo {
    pub fn new(db: Database) -> Self {
        CouponRepo { db }
    }
}

#[async_trait]
impl CouponStore for CouponRepo {
    async fn get_by_code(&self, needle: &str) -> Result<Option<Coupon>, result::Error> {
        use crate::data::models::schema::coupons::dsl::{code, coupons};

        let mut conn = self.db.connection().await?;

        // Codes are stored upper-cased, so an upper-cased needle is an exact match.
        match coupons
            .filter(code.eq(needle.trim().to_uppercase()))
            .first::<Coupon>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add(&self, item: NewCoupon) -> Result<(), result::Error> {
        use crate::data::models::schema::coupons::dsl::coupons;

        let mut conn = self.db.connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(coupons)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}
