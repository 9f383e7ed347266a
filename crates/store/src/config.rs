//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TANGELO_DATA_DIR` - Directory holding the JSON data files (default: `data`)
//! - `TANGELO_TAX_RATE` - Tax rate as a decimal fraction (default: `0.10`)
//! - `TANGELO_SHIPPING_COST` - Flat shipping cost (default: `5.00`)

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use tangelo_core::Money;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the JSON data files.
    pub data_dir: PathBuf,
    /// Tax rate as a decimal fraction (e.g. `0.10` for 10%).
    pub tax_rate: Decimal,
    /// Flat shipping cost, regardless of cart size.
    pub shipping_cost: Money,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("TANGELO_DATA_DIR", "data"));
        let tax_rate = get_env_or_default("TANGELO_TAX_RATE", "0.10")
            .parse::<Decimal>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TANGELO_TAX_RATE".to_string(), e.to_string())
            })?;
        let shipping_cost = get_env_or_default("TANGELO_SHIPPING_COST", "5.00")
            .parse::<Money>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TANGELO_SHIPPING_COST".to_string(), e.to_string())
            })?;

        Ok(Self {
            data_dir,
            tax_rate,
            shipping_cost,
        })
    }

    /// Path of the customers collection.
    #[must_use]
    pub fn customers_file(&self) -> PathBuf {
        self.data_dir.join("customers.json")
    }

    /// Path of the products collection.
    #[must_use]
    pub fn products_file(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    /// Path of the orders collection.
    #[must_use]
    pub fn orders_file(&self) -> PathBuf {
        self.data_dir.join("orders.json")
    }

    /// Reserved path for persisted carts.
    ///
    /// Carts are session-scoped and never written here; the path exists for
    /// parity with the on-disk layout this store inherited.
    #[must_use]
    pub fn carts_file(&self) -> PathBuf {
        self.data_dir.join("carts.json")
    }

    /// Config rooted at an explicit data directory, keeping default pricing
    /// constants. Used by tests and tools that must not touch real data.
    #[must_use]
    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            tax_rate: Decimal::new(10, 2),
            shipping_cost: Money::new(Decimal::new(500, 2)),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
