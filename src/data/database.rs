use diesel::result;
use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::{BuildError, Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, deadpool};

/// Handle to the MySQL connection pool. Cheap to clone; every clone shares the same pool.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    pub fn connect(database_url: &str, max_size: usize) -> Result<Self, BuildError> {
        let config = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(database_url);
        let pool = Pool::builder(config).max_size(max_size).build()?;

        tracing::info!(max_size, "DB connection pool created");

        Ok(Database { pool })
    }

    pub async fn get_connection(
        &self,
    ) -> Result<Object<AsyncMysqlConnection>, deadpool::PoolError> {
        self.pool.get().await
    }

    /// Same as [`Database::get_connection`], with the pool error folded into a diesel error
    /// so repositories can use `?` throughout.
    pub async fn connection(&self) -> Result<Object<AsyncMysqlConnection>, result::Error> {
        self.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }
}
