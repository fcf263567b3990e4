use dotenvy::dotenv;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// MySQL connection string. Without one the server runs on the in-memory store.
    pub database_url: Option<String>,
    pub database_pool_size: usize,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidPoolSize(String),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(v) => write!(f, "SERVER_PORT must be a valid port, got {v:?}"),
            ConfigError::InvalidPoolSize(v) => {
                write!(f, "DATABASE_POOL_SIZE must be a positive integer, got {v:?}")
            }
        }
    }
}

impl Config {
    pub fn new() -> Self {
        CONFIG.clone()
    }

    /// Builds a config from any key lookup, applying defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let database_pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidPoolSize(raw)),
            },
            None => 10,
        };

        Ok(Config {
            host,
            port,
            database_url,
            database_pool_size,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok();

    let config = Config::from_lookup(|key| std::env::var(key).ok())
        .unwrap_or_else(|e| panic!("Invalid configuration: {e}"));

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = config.database_url.is_some(),
        "Config loaded"
    );

    config
});
