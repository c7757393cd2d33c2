use crate::config::types::{BuildSettings, Config, SETTINGS_FILE};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

impl Config {
    /// 讀取工作目錄下的 `settings.json`，不存在或無法解析時使用預設值
    pub fn new() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e:#}，改用預設設定");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: BuildSettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;

        Ok(Self::from_settings(settings))
    }

    #[must_use]
    pub const fn from_settings(settings: BuildSettings) -> Self {
        Self { settings }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_settings(BuildSettings::default())
    }
}
