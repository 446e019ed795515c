//! CLI subcommands. Each returns the text to print; `main` does the printing.

mod report;
mod validate;


pub use report::{coverage, locales};
pub use validate::validate;

use std::sync::Arc;

use madrasa_core::config::I18nConfig;
use madrasa_core::overrides::EnvOverride;
use madrasa_i18n::{LocaleRegistry, Params, TranslationSession};

/// Parse a `--param name=value` argument.
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty parameter name in '{arg}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Start a session the way the UI does, honouring the override variable.
pub fn open_session(
    registry: Arc<LocaleRegistry>,
    config: &I18nConfig,
) -> anyhow::Result<TranslationSession> {
    let overrides = Arc::new(EnvOverride::new(config.override_env.clone()));
    Ok(TranslationSession::init(registry, config, overrides)?)
}

/// Resolve `key`, optionally switching locale first.
pub fn resolve(
    session: &TranslationSession,
    key: &str,
    locale: Option<&str>,
    params: &[(String, String)],
) -> anyhow::Result<String> {
    if let Some(locale) = locale {
        session.set_locale(locale)?;
    }
    let params: Params = params.iter().map(|(k, v)| (k.as_str(), v)).collect();
    let text = session.t(key, &params);
    let (locale, direction) = session.snapshot();
    Ok(format!("{locale} ({direction}): {text}\n"))
}
