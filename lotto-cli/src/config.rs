use anyhow::Context;
use lotto_core::LotteryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    #[serde(skip)]
    pub data_dir: PathBuf,
    pub lottery: LotteryConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            lottery: LotteryConfig::default(),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lotto")
}

impl CliConfig {
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Load `config.json` from `data_dir`, falling back to defaults when the
    /// file is missing or unusable.
    pub async fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE);

        let mut config = match tokio::fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<CliConfig>(&content) {
                Ok(config) => match config.lottery.validate() {
                    Ok(()) => config,
                    Err(e) => {
                        tracing::warn!("Ignoring {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        };

        config.data_dir = data_dir.to_path_buf();
        config
    }

    pub async fn save(&self) -> anyhow::Result<PathBuf> {
        self.lottery.validate()?;

        let path = self.path();
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::DuplicatePolicy;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = CliConfig::load(dir.path()).await;

        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.lottery, LotteryConfig::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let mut config = CliConfig::load(dir.path()).await;
        config.lottery.currency = "SAT".to_string();
        config.lottery.duplicate_policy = DuplicatePolicy::Allow;

        let path = config.save().await.unwrap();
        assert!(path.exists());

        let loaded = CliConfig::load(dir.path()).await;
        assert_eq!(loaded.lottery.currency, "SAT");
        assert_eq!(loaded.lottery.duplicate_policy, DuplicatePolicy::Allow);
    }

    #[tokio::test]
    async fn test_invalid_file_falls_back() {
        let dir = tempdir().unwrap();
        tokio::fs::write(dir.path().join(CONFIG_FILE), "{ not json")
            .await
            .unwrap();
        let config = CliConfig::load(dir.path()).await;
        assert_eq!(config.lottery, LotteryConfig::default());

        tokio::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "lottery": { "currency": "" } }"#,
        )
        .await
        .unwrap();
        let config = CliConfig::load(dir.path()).await;
        assert_eq!(config.lottery.currency, "APT");
    }
}
