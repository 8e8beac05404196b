//! # Configuration Loader / 配置加载器
//!
//! Reads `config.toml` and maps it onto [`AppConfig`]. An explicitly given
//! path must exist; the default location is optional and falls back to the
//! built-in defaults when absent.

use anyhow::Context;
use nc_core::AppConfig;
use std::path::{Path, PathBuf};
use tracing::info;

const APP_DIR: &str = "notchclip";
const CONFIG_FILE: &str = "config.toml";

/// `<config_dir>/notchclip/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        _ => {
            info!("no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}
