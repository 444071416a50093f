//! Runtime configuration (environment variables + defaults).

use thiserror::Error;

use crate::stock::StockPolicy;

pub const BACKEND_URL_VAR: &str = "POCKETBASE_URL";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOREFRONT_LOW_STOCK_THRESHOLD";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8090";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer (got {value:?})")]
    InvalidThreshold { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyUrl { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the record store; file URLs are built from it.
    pub backend_url: String,
    pub low_stock_threshold: i64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            low_stock_threshold: StockPolicy::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = match lookup(BACKEND_URL_VAR) {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::EmptyUrl {
                    var: BACKEND_URL_VAR,
                });
            }
            Some(url) => url.trim().to_string(),
            None => {
                tracing::warn!("{BACKEND_URL_VAR} not set; using {DEFAULT_BACKEND_URL}");
                DEFAULT_BACKEND_URL.to_string()
            }
        };

        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_VAR) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(v) if v >= 0 => v,
                _ => {
                    return Err(ConfigError::InvalidThreshold {
                        var: LOW_STOCK_THRESHOLD_VAR,
                        value: raw,
                    });
                }
            },
            None => StockPolicy::DEFAULT_LOW_STOCK_THRESHOLD,
        };

        Ok(Self {
            backend_url,
            low_stock_threshold,
        })
    }

    pub fn stock_policy(&self) -> StockPolicy {
        StockPolicy::new(self.low_stock_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, StorefrontConfig::default());
        assert_eq!(cfg.stock_policy(), StockPolicy::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = StorefrontConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, " https://pb.example.com "),
            (LOW_STOCK_THRESHOLD_VAR, "2"),
        ]))
        .unwrap();
        assert_eq!(cfg.backend_url, "https://pb.example.com");
        assert_eq!(cfg.low_stock_threshold, 2);
    }

    #[test]
    fn rejects_bad_values() {
        let err = StorefrontConfig::from_lookup(lookup(&[(LOW_STOCK_THRESHOLD_VAR, "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold { .. }));

        let err = StorefrontConfig::from_lookup(lookup(&[(LOW_STOCK_THRESHOLD_VAR, "few")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("{LOW_STOCK_THRESHOLD_VAR} must be a non-negative integer (got \"few\")")
        );

        let err = StorefrontConfig::from_lookup(lookup(&[(BACKEND_URL_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyUrl { var: BACKEND_URL_VAR });
    }
}
