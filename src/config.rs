use std::env;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URI"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let pool_size = parse_number(&lookup, "DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE)?;

        Ok(Config {
            database_url,
            host,
            port,
            pool_size,
        })
    }
}

fn parse_number<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<T>() {
            Ok(n) if n != T::default() => Ok(n),
            _ => Err(ConfigError::InvalidNumber { name, value }),
        },
    }
}
