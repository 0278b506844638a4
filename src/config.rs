//! Environment-driven store configuration.
//!
//! Every setting has a default so an empty environment yields an in-memory
//! store with the dated item schema.

use crate::todo::domain::ItemSchema;
use thiserror::Error;

/// Selects the storage backend.
pub const BACKEND_VAR: &str = "TODO_STORE_BACKEND";
/// Full database connection string; takes precedence over the parts below.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Database host used when composing a connection string.
pub const DB_HOST_VAR: &str = "DB_HOST";
/// Database user used when composing a connection string.
pub const DB_USER_VAR: &str = "DB_USER";
/// Database password used when composing a connection string.
pub const DB_PASSWORD_VAR: &str = "DB_PASSWORD";
/// Database name used when composing a connection string.
pub const DB_NAME_VAR: &str = "DB_NAME";
/// Maximum size of the connection pool.
pub const POOL_SIZE_VAR: &str = "TODO_DB_POOL_SIZE";
/// Item schema, `dated` or `minimal`.
pub const SCHEMA_VAR: &str = "TODO_ITEM_SCHEMA";
/// Whether to insert the sample items at start-up.
pub const SEED_VAR: &str = "TODO_SEED_SAMPLE_DATA";

/// Default maximum size of the connection pool.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable held a value outside its accepted set.
    #[error("invalid value '{value}' for {name}: expected {expected}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// Description of the accepted values.
        expected: &'static str,
    },

    /// The Postgres backend was selected without connection settings.
    #[error("postgres backend needs DATABASE_URL or DB_HOST, DB_USER and DB_NAME")]
    MissingDatabaseUrl,
}

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    /// Process-local store; contents are lost on exit.
    Memory,
    /// `PostgreSQL` store reached through a pooled connection.
    Postgres {
        /// libpq connection string or URL.
        database_url: String,
        /// Maximum number of pooled connections.
        pool_size: u32,
    },
}

/// Settings used to build a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage backend.
    pub backend: BackendKind,
    /// Item schema governing due dates and listing order.
    pub schema: ItemSchema,
    /// Whether to insert the sample items after start-up.
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Memory,
            schema: ItemSchema::default(),
            seed_sample_data: false,
        }
    }
}

impl StoreConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unsupported value or
    /// the Postgres backend lacks connection settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let schema = match read(SCHEMA_VAR) {
            None => ItemSchema::default(),
            Some(value) => parse_schema(&value)?,
        };
        let seed_sample_data = match read(SEED_VAR) {
            None => false,
            Some(value) => parse_flag(SEED_VAR, &value)?,
        };
        let backend = match read(BACKEND_VAR).as_deref() {
            None | Some("memory") => BackendKind::Memory,
            Some("postgres") => BackendKind::Postgres {
                database_url: database_url(&read)?,
                pool_size: pool_size(read(POOL_SIZE_VAR))?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: BACKEND_VAR,
                    value: other.to_owned(),
                    expected: "'memory' or 'postgres'",
                });
            }
        };

        Ok(Self {
            backend,
            schema,
            seed_sample_data,
        })
    }
}

fn parse_schema(value: &str) -> Result<ItemSchema, ConfigError> {
    match value {
        "dated" => Ok(ItemSchema::Dated),
        "minimal" => Ok(ItemSchema::Minimal),
        _ => Err(ConfigError::InvalidValue {
            name: SCHEMA_VAR,
            value: value.to_owned(),
            expected: "'dated' or 'minimal'",
        }),
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_owned(),
            expected: "a boolean",
        }),
    }
}

fn pool_size(raw: Option<String>) -> Result<u32, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_POOL_SIZE);
    };
    match value.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidValue {
            name: POOL_SIZE_VAR,
            value,
            expected: "a positive integer",
        }),
    }
}

fn database_url(read: &impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    if let Some(url) = read(DATABASE_URL_VAR) {
        return Ok(url);
    }
    let (Some(host), Some(user), Some(name)) =
        (read(DB_HOST_VAR), read(DB_USER_VAR), read(DB_NAME_VAR))
    else {
        return Err(ConfigError::MissingDatabaseUrl);
    };
    let password = read(DB_PASSWORD_VAR).unwrap_or_default();
    Ok(format!(
        "host={} user={} password={} dbname={} sslmode=disable",
        conninfo_value(&host),
        conninfo_value(&user),
        conninfo_value(&password),
        conninfo_value(&name),
    ))
}

/// Quotes a value for a libpq keyword/value connection string.
fn conninfo_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if matches!(ch, '\'' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}
