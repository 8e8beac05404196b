//! # Configuration DTO / 配置数据
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Missing keys fall back to the engine defaults (poll every 500 ms, keep
//! 50 entries). Values are not range-checked here; the history store clamps
//! its own capacity.

use std::time::Duration;

use crate::clipboard::DEFAULT_MAX_ENTRIES;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Application configuration DTO
/// 应用配置 DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Clipboard sampling period in milliseconds
    /// 剪切板轮询间隔（毫秒）
    pub poll_interval_ms: u64,

    /// Maximum number of history entries
    /// 历史记录最大条数
    pub max_entries: usize,

    /// Also write logs to the platform log directory
    pub log_to_file: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let clipboard = toml_value.get("clipboard");
        let logging = toml_value.get("logging");

        let poll_interval_ms = clipboard
            .and_then(|c| c.get("poll_interval_ms"))
            .and_then(|v| v.as_integer())
            .map(u64::try_from)
            .transpose()
            .map_err(|_| anyhow::anyhow!("clipboard.poll_interval_ms must not be negative"))?
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        let max_entries = clipboard
            .and_then(|c| c.get("max_entries"))
            .and_then(|v| v.as_integer())
            .map(usize::try_from)
            .transpose()
            .map_err(|_| anyhow::anyhow!("clipboard.max_entries must not be negative"))?
            .unwrap_or(DEFAULT_MAX_ENTRIES);

        let log_to_file = logging
            .and_then(|l| l.get("file"))
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        Ok(Self {
            poll_interval_ms,
            max_entries,
            log_to_file,
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_entries: DEFAULT_MAX_ENTRIES,
            log_to_file: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_uses_defaults_when_missing() {
        let toml_value: Value = toml::from_str("").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.max_entries, 50);
    }

    #[test]
    fn test_from_toml_parses_clipboard_section() {
        let toml_str = r#"
            [clipboard]
            poll_interval_ms = 250
            max_entries = 10

            [logging]
            file = false
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.max_entries, 10);
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_from_toml_rejects_negative_values() {
        let toml_str = r#"
            [clipboard]
            max_entries = -1
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        assert!(AppConfig::from_toml(&toml_value).is_err());
    }

    #[test]
    fn test_from_toml_ignores_wrongly_typed_values() {
        let toml_str = r#"
            [clipboard]
            poll_interval_ms = "fast"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }
}
