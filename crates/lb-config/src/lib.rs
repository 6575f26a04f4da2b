mod config;
mod database_config;
mod endpoints_config;
mod error;
mod log_level;
mod logging_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use endpoints_config::EndpointsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "LB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".lb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "credentials.db";
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const DEFAULT_SCHEMA_VERSION: i64 = 1;

const DEFAULT_SCORES_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:8001";
const DEFAULT_TOP_SCORES_LIMIT: u32 = 20;
const MIN_TOP_SCORES_LIMIT: u32 = 1;
const MAX_TOP_SCORES_LIMIT: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
