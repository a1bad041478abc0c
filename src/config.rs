//! Runtime configuration.
//!
//! Defaults suit the demo binary. A JSON file can override them and the
//! `COMANDA_BUFFER_SIZE` / `COMANDA_STORAGE_DIR` environment variables are
//! applied last.

use crate::summary::IGV_FACTOR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BUFFER_SIZE_VAR: &str = "COMANDA_BUFFER_SIZE";
pub const STORAGE_DIR_VAR: &str = "COMANDA_STORAGE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Buffer size must be at least 1")]
    ZeroBufferSize,

    #[error("Tax factor must be a finite number of at least 1.0, got {0}")]
    InvalidTaxFactor(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PosConfig {
    /// Channel capacity of every resource actor.
    pub buffer_size: usize,
    /// Where the cart is persisted. `None` keeps it in memory.
    pub storage_dir: Option<PathBuf>,
    /// Divisor that strips the sales tax from a tax-inclusive total.
    pub tax_factor: f64,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            storage_dir: None,
            tax_factor: IGV_FACTOR,
        }
    }
}

impl PosConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(|name| std::env::var(name).ok())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment-style overrides read through `lookup`.
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(BUFFER_SIZE_VAR) {
            self.buffer_size = value.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: BUFFER_SIZE_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(STORAGE_DIR_VAR) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidVar {
                    name: STORAGE_DIR_VAR,
                    value,
                });
            }
            self.storage_dir = Some(PathBuf::from(value));
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        if !self.tax_factor.is_finite() || self.tax_factor < 1.0 {
            return Err(ConfigError::InvalidTaxFactor(self.tax_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PosConfig::default();
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.storage_dir, None);
        assert_eq!(config.tax_factor, 1.18);
        config.validate().unwrap();
    }

    #[test]
    fn test_overlay_applies_variables() {
        let config = PosConfig::default()
            .overlay(lookup_from(&[
                (BUFFER_SIZE_VAR, " 8 "),
                (STORAGE_DIR_VAR, "/var/lib/comanda"),
            ]))
            .unwrap();

        assert_eq!(config.buffer_size, 8);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/var/lib/comanda")));
    }

    #[test]
    fn test_overlay_rejects_bad_values() {
        let err = PosConfig::default()
            .overlay(lookup_from(&[(BUFFER_SIZE_VAR, "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name, .. } if name == BUFFER_SIZE_VAR));

        let err = PosConfig::default()
            .overlay(lookup_from(&[(BUFFER_SIZE_VAR, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBufferSize));
    }

    #[test]
    fn test_load_from_file_fills_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"bufferSize": 4}"#).unwrap();

        let config = PosConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.buffer_size, 4);
        assert_eq!(config.tax_factor, IGV_FACTOR);
    }

    #[test]
    fn test_load_from_file_rejects_low_tax_factor() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"taxFactor": 0.5}"#).unwrap();

        assert!(matches!(
            PosConfig::load_from_file(file.path()),
            Err(ConfigError::InvalidTaxFactor(_))
        ));
    }
}
