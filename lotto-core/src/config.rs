use crate::error::{LotteryError, Result};
use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CURRENCY: &str = "APT";
pub const DEFAULT_MOCK_ADDRESS: &str = "0xMockUserAddress123";

/// What to do when an address buys a second ticket in the same lottery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Allow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    pub duplicate_policy: DuplicatePolicy,
    pub currency: String,
    pub default_address: String,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            currency: DEFAULT_CURRENCY.to_string(),
            default_address: DEFAULT_MOCK_ADDRESS.to_string(),
        }
    }
}

impl LotteryConfig {
    pub fn allowing_duplicates() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Allow,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(LotteryError::config("Currency label cannot be empty"));
        }

        if self.default_address.trim().is_empty() {
            return Err(LotteryError::config("Default address cannot be empty"));
        }

        Ok(())
    }

    /// Caller identity used when none is given explicitly
    pub fn default_address(&self) -> Result<Address> {
        Address::new(self.default_address.as_str())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = LotteryConfig::default();
        config.validate().unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.default_address().unwrap(), DEFAULT_MOCK_ADDRESS);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut config = LotteryConfig::default();
        config.currency = " ".to_string();
        assert!(matches!(config.validate(), Err(LotteryError::Config(_))));

        let mut config = LotteryConfig::default();
        config.default_address.clear();
        assert!(matches!(config.validate(), Err(LotteryError::Config(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("lottery.json");

        let mut config = LotteryConfig::allowing_duplicates();
        config.currency = "SAT".to_string();
        config.save(&path).unwrap();

        let loaded = LotteryConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lottery.json");
        std::fs::write(&path, r#"{ "duplicate_policy": "allow" }"#).unwrap();

        let loaded = LotteryConfig::from_file(&path).unwrap();
        assert_eq!(loaded.duplicate_policy, DuplicatePolicy::Allow);
        assert_eq!(loaded.currency, DEFAULT_CURRENCY);
    }
}
