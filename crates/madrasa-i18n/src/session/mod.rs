//! Translation sessions, one active locale per UI session.
//!
//! A session is created Ready: `init` reads the test override once, picks
//! the starting locale, and there is no way back to an uninitialized state.
//! After that only `set_locale` changes the locale. Text direction is derived
//! from the current locale on every call, never stored.
//!
//! The locale sits behind a `RwLock`. Switches are serialized, and `t`,
//! `direction` and `snapshot` read under the same lock, so a render pass
//! never mixes the strings of one locale with the direction of another.

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

use madrasa_core::config::I18nConfig;
use madrasa_core::error::MadrasaError;
use madrasa_core::traits::OverrideStore;

use crate::registry::LocaleRegistry;
use crate::resolver::{Params, Resolver};
use crate::table::LocaleTable;

/// Layout direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// `Rtl` for locales the config lists as right-to-left, `Ltr` otherwise.
    pub fn of(locale: &str, config: &I18nConfig) -> Self {
        if config.is_rtl(locale) {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-session holder of the active locale.
pub struct TranslationSession {
    registry: Arc<LocaleRegistry>,
    resolver: Resolver,
    config: I18nConfig,
    overrides: Arc<dyn OverrideStore>,
    current: RwLock<String>,
}

impl TranslationSession {
    /// Start a session.
    ///
    /// A registered override locale wins; an unregistered one is logged and
    /// ignored. Otherwise the configured default is used, which must be
    /// registered.
    pub fn init(
        registry: Arc<LocaleRegistry>,
        config: &I18nConfig,
        overrides: Arc<dyn OverrideStore>,
    ) -> Result<Self, MadrasaError> {
        let locale = match overrides.read() {
            Some(forced) if registry.contains(&forced) => {
                info!("locale forced to '{forced}' by {} override", overrides.name());
                forced
            }
            Some(forced) => {
                warn!(
                    "ignoring {} override '{forced}': locale not registered",
                    overrides.name()
                );
                config.default_locale.clone()
            }
            None => config.default_locale.clone(),
        };
        registry.load(&locale)?;

        Ok(Self {
            registry,
            resolver: Resolver::new(config.pseudo_locale.clone()),
            config: config.clone(),
            overrides,
            current: RwLock::new(locale),
        })
    }

    /// The active locale id.
    pub fn locale(&self) -> String {
        self.read_current().clone()
    }

    /// Switch locales. Unregistered ids are rejected and the current locale
    /// is kept.
    pub fn set_locale(&self, locale: &str) -> Result<(), MadrasaError> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if !self.registry.contains(locale) {
            return Err(MadrasaError::InvalidLocale(locale.to_string()));
        }
        if *current == locale {
            return Ok(());
        }

        let pseudo = self.resolver.pseudo_locale();
        if locale == pseudo {
            self.overrides.record(locale);
        } else if *current == pseudo {
            self.overrides.clear();
        }

        debug!("locale switched: {} -> {locale}", *current);
        *current = locale.to_string();
        Ok(())
    }

    /// Direction of the active locale.
    pub fn direction(&self) -> Direction {
        Direction::of(&self.read_current(), &self.config)
    }

    /// Locale and direction read together.
    pub fn snapshot(&self) -> (String, Direction) {
        let current = self.read_current();
        let direction = Direction::of(&current, &self.config);
        (current.clone(), direction)
    }

    /// Translate `key` in the active locale.
    pub fn t(&self, key: &str, params: &Params) -> String {
        let current = self.read_current();
        let table = self
            .registry
            .get(&current)
            .unwrap_or(LocaleTable::empty());
        self.resolver.resolve(&current, table, key, params)
    }

    /// Translate `key` without interpolation.
    pub fn t_plain(&self, key: &str) -> String {
        self.t(key, &Params::new())
    }

    /// Whether the active locale is the pseudo locale.
    pub fn is_pseudo(&self) -> bool {
        self.config.is_pseudo(&self.read_current())
    }

    // A poisoned lock still holds a registered locale.
    fn read_current(&self) -> RwLockReadGuard<'_, String> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TranslationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationSession")
            .field("locale", &*self.read_current())
            .field("pseudo_locale", &self.resolver.pseudo_locale())
            .field("overrides", &self.overrides.name())
            .finish()
    }
}
