//! Engine configuration.

use std::path::Path;

use chrono::NaiveDate;
use prio_scoring::DEFAULT_ALPHA;
use serde::{Deserialize, Serialize};

use crate::filter::DEFAULT_SELF_ALIASES;

/// Errors in engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Damping exponent must be finite and positive
    #[error("alpha must be a positive number, got {0}")]
    InvalidAlpha(f64),

    /// At least one owner must mean "me"
    #[error("self_aliases must not be empty")]
    EmptyAliases,

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reference "today"; the current local date when unset
    pub reference_date: Option<NaiveDate>,
    /// Damping exponent applied to effort
    pub alpha: f64,
    /// Whether to select the daily MIT list
    pub return_mits: bool,
    /// Owner names that mean the acting user
    pub self_aliases: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            alpha: DEFAULT_ALPHA,
            return_mits: true,
            self_aliases: DEFAULT_SELF_ALIASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON config file. Missing keys take their defaults.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the reference date.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set the damping exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Enable or disable MIT selection.
    pub fn with_return_mits(mut self, return_mits: bool) -> Self {
        self.return_mits = return_mits;
        self
    }

    /// Replace the self-alias set.
    pub fn with_self_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.self_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Check invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        if self.self_aliases.iter().all(|a| a.trim().is_empty()) {
            return Err(ConfigError::EmptyAliases);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.alpha, 0.7);
        assert!(config.return_mits);
        assert!(config.reference_date.is_none());
        assert!(config.self_aliases.contains(&"já".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_alpha() {
        for alpha in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = EngineConfig::new().with_alpha(alpha);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidAlpha(_))));
        }
    }

    #[test]
    fn test_empty_aliases() {
        let config = EngineConfig::new().with_self_aliases(Vec::<String>::new());
        assert!(matches!(config.validate(), Err(ConfigError::EmptyAliases)));
        let config = EngineConfig::new().with_self_aliases(["  "]);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyAliases)));
    }

    #[tokio::test]
    async fn test_from_file_partial() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prio.json");
        std::fs::write(&path, r#"{"alpha": 1.1, "reference_date": "2025-02-01"}"#).unwrap();

        let config = EngineConfig::from_file(&path).await.unwrap();
        assert_eq!(config.alpha, 1.1);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert!(config.return_mits);
        assert_eq!(config.self_aliases.len(), DEFAULT_SELF_ALIASES.len());
    }

    #[tokio::test]
    async fn test_from_file_rejects_bad_alpha() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prio.json");
        std::fs::write(&path, r#"{"alpha": -2}"#).unwrap();
        assert!(matches!(
            EngineConfig::from_file(&path).await,
            Err(ConfigError::InvalidAlpha(_))
        ));
    }
}
