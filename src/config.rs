//! Machine configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file yields the
//! reference machine:
//!
//! ```toml
//! coin_value = "0.25"
//! history_limit = 64
//!
//! [[items]]
//! name = "Gum"
//! price = "0.50"
//!
//! [[items]]
//! name = "Granola"
//! price = "0.75"
//! ```
//!
//! Amounts are decimal strings; TOML floats are rejected so prices never pass
//! through binary floating point.

use crate::builder::{BuildError, VendingMachineBuilder};
use crate::catalog::{Catalog, Item};
use crate::core::{Money, DEFAULT_HISTORY_LIMIT};
use crate::machine::{VendingMachine, REFERENCE_COIN_VALUE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid machine configuration: {0}")]
    Build(#[from] BuildError),
}

/// Root machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default = "default_coin_value")]
    pub coin_value: Money,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_items")]
    pub items: Vec<Item>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            coin_value: default_coin_value(),
            history_limit: default_history_limit(),
            items: default_items(),
        }
    }
}

fn default_coin_value() -> Money {
    REFERENCE_COIN_VALUE
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_items() -> Vec<Item> {
    Catalog::reference().items().to_vec()
}

impl MachineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), items = config.items.len(), "loaded machine config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration and construct a machine from it.
    pub fn build(&self) -> Result<VendingMachine, ConfigError> {
        let machine = VendingMachineBuilder::new()
            .coin_value(self.coin_value)
            .items(self.items.iter().cloned())
            .history_limit(self.history_limit)
            .build()?;
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::VendState;

    #[test]
    fn empty_config_is_reference_machine() {
        let config = MachineConfig::from_toml_str("").unwrap();
        assert_eq!(config, MachineConfig::default());

        let machine = config.build().unwrap();
        assert_eq!(machine.catalog(), &Catalog::reference());
        assert_eq!(machine.coin_value(), Money::from_cents(25));
        assert_eq!(machine.state(), VendState::Awaiting);
    }

    #[test]
    fn parses_custom_catalog() {
        let config = MachineConfig::from_toml_str(
            r#"
            coin_value = "0.10"
            history_limit = 4

            [[items]]
            name = "Mints"
            price = "0.30"
            "#,
        )
        .unwrap();

        assert_eq!(config.coin_value, Money::from_cents(10));
        assert_eq!(config.history_limit, 4);
        assert_eq!(config.items, vec![Item::new("Mints", Money::from_cents(30))]);

        let machine = config.build().unwrap();
        assert_eq!(machine.catalog().max_price(), Money::from_cents(30));
        assert_eq!(machine.history().limit(), 4);
    }

    #[test]
    fn float_amounts_are_rejected() {
        let result = MachineConfig::from_toml_str("coin_value = 0.25");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        let result = MachineConfig::from_toml_str(r#"coin_value = "0.255""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = MachineConfig::from_toml_str(r#"coin_value = "-0.25""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_catalog_fails_to_build() {
        let config = MachineConfig::from_toml_str(
            r#"
            [[items]]
            name = "Chips"
            price = "0.60"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.build(),
            Err(ConfigError::Build(BuildError::PriceNotCoinMultiple { .. }))
        ));
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = MachineConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("coin_value = \"0.25\""));

        let back = MachineConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = MachineConfig::load("/nonexistent/coinvend.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/coinvend.toml"));
    }
}
