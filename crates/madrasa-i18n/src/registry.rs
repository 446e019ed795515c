//! Locale registry: every locale table the process knows about.
//!
//! Built once at startup and read-only afterwards. Sessions share it
//! through an `Arc`.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use madrasa_core::config::I18nConfig;
use madrasa_core::error::MadrasaError;

use crate::resource::{locale_id, parse_resource, read_resource, resource_files};
use crate::table::LocaleTable;

/// Resources compiled into the binary: `(locale, source name, json)`.
const BUNDLED: &[(&str, &str, &str)] = &[
    ("ar", "bundled:ar.json", include_str!("../locales/ar.json")),
    ("en", "bundled:en.json", include_str!("../locales/en.json")),
];

/// Mapping from locale id to its table.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    tables: BTreeMap<String, LocaleTable>,
}

/// Collects tables before the registry is frozen.
#[derive(Debug, Default)]
pub struct LocaleRegistryBuilder {
    tables: BTreeMap<String, LocaleTable>,
}

impl LocaleRegistryBuilder {
    /// Register `table` under `locale`, replacing any earlier table.
    pub fn insert(mut self, locale: impl Into<String>, table: LocaleTable) -> Self {
        self.tables.insert(locale.into(), table);
        self
    }

    /// Register an empty table under `locale` unless one already exists.
    pub fn ensure(mut self, locale: impl Into<String>) -> Self {
        self.tables.entry(locale.into()).or_default();
        self
    }

    pub fn build(self) -> LocaleRegistry {
        let registry = LocaleRegistry {
            tables: self.tables,
        };
        for (locale, table) in &registry.tables {
            info!("locale '{locale}' registered ({} keys)", table.leaf_count());
        }
        registry
    }
}

impl LocaleRegistry {
    pub fn builder() -> LocaleRegistryBuilder {
        LocaleRegistryBuilder::default()
    }

    /// The resources shipped with the application plus an empty pseudo locale.
    pub fn bundled(pseudo_locale: &str) -> Result<Self, MadrasaError> {
        let mut builder = Self::builder();
        for (locale, source_name, json) in BUNDLED {
            let parsed = parse_resource(source_name, json)?;
            builder = builder.insert(*locale, parsed.table);
        }
        Ok(builder.ensure(pseudo_locale).build())
    }

    /// One locale per `<locale>.json` file in `dir`, plus the pseudo locale
    /// (empty unless a file supplies it).
    pub fn from_dir(dir: &Path, pseudo_locale: &str) -> Result<Self, MadrasaError> {
        let mut builder = Self::builder();
        for path in resource_files(dir)? {
            let Some(locale) = locale_id(&path) else {
                continue;
            };
            let parsed = read_resource(&path)?;
            builder = builder.insert(locale, parsed.table);
        }
        Ok(builder.ensure(pseudo_locale).build())
    }

    /// Bundled resources, or the configured directory when one is set.
    pub fn from_config(config: &I18nConfig) -> Result<Self, MadrasaError> {
        match config.locales_path() {
            Some(dir) => Self::from_dir(Path::new(&dir), &config.pseudo_locale),
            None => Self::bundled(&config.pseudo_locale),
        }
    }

    /// The table for `locale`.
    pub fn load(&self, locale: &str) -> Result<&LocaleTable, MadrasaError> {
        self.get(locale)
            .ok_or_else(|| MadrasaError::UnknownLocale(locale.to_string()))
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleTable> {
        self.tables.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Registered locale ids, sorted.
    pub fn locales(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
