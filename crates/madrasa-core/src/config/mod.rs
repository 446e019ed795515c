mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MadrasaError;
use defaults::*;

/// Top-level Madrasa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Localization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Locale a session starts in when no override is present.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Synthetic locale that renders missing keys as `[MISSING: key]`.
    #[serde(default = "default_pseudo_locale")]
    pub pseudo_locale: String,
    /// Locales laid out right-to-left. Everything else is left-to-right.
    #[serde(default = "default_rtl_locales")]
    pub rtl_locales: Vec<String>,
    /// Directory of `<locale>.json` resources. Empty = bundled resources.
    #[serde(default)]
    pub locales_dir: String,
    /// Environment variable QA tooling sets to force a locale.
    #[serde(default = "default_override_env")]
    pub override_env: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            pseudo_locale: default_pseudo_locale(),
            rtl_locales: default_rtl_locales(),
            locales_dir: String::new(),
            override_env: default_override_env(),
        }
    }
}

impl I18nConfig {
    /// Whether `locale` is laid out right-to-left.
    pub fn is_rtl(&self, locale: &str) -> bool {
        self.rtl_locales.iter().any(|l| l == locale)
    }

    /// Whether `locale` is the pseudo (missing-key detection) locale.
    pub fn is_pseudo(&self, locale: &str) -> bool {
        self.pseudo_locale == locale
    }

    /// The resource directory with `~` expanded, or `None` for bundled resources.
    pub fn locales_path(&self) -> Option<String> {
        let dir = self.locales_dir.trim();
        if dir.is_empty() {
            None
        } else {
            Some(shellexpand(dir))
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, MadrasaError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| MadrasaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, MadrasaError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| MadrasaError::Config(format!("failed to parse config: {}", e)))?;

    if config.i18n.default_locale.trim().is_empty() {
        return Err(MadrasaError::Config(
            "i18n.default_locale must not be empty".to_string(),
        ));
    }

    Ok(config)
}
