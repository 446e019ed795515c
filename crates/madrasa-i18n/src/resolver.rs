//! Key resolution: dotted key + locale table → display string.
//!
//! Resolution never fails. A key that is absent, or that names a table
//! rather than a leaf, degrades to a placeholder:
//!
//! - in the pseudo locale: `[MISSING: <key>]`, so scans spot it,
//! - everywhere else: the key itself.
//!
//! Found strings are interpolated: `{name}` (whitespace inside the braces
//! allowed) is replaced by the matching parameter. Placeholders without a
//! parameter stay verbatim.

use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::debug;

use crate::table::LocaleTable;

/// Named interpolation values, stringified at the call boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// The marker rendered for a missing key in the pseudo locale.
pub fn missing_marker(key: &str) -> String {
    format!("[MISSING: {key}]")
}

/// Resolves keys against locale tables. Knows which locale is the pseudo
/// locale; holds no other state.
#[derive(Debug, Clone)]
pub struct Resolver {
    pseudo_locale: String,
}

impl Resolver {
    pub fn new(pseudo_locale: impl Into<String>) -> Self {
        Self {
            pseudo_locale: pseudo_locale.into(),
        }
    }

    pub fn pseudo_locale(&self) -> &str {
        &self.pseudo_locale
    }

    /// Resolve `key` in `table`, which belongs to `locale`.
    pub fn resolve(
        &self,
        locale: &str,
        table: &LocaleTable,
        key: &str,
        params: &Params,
    ) -> String {
        match table.lookup(key) {
            Some(text) => interpolate(text, params),
            None => {
                debug!("missing translation key '{key}' in locale '{locale}'");
                if locale == self.pseudo_locale {
                    missing_marker(key)
                } else {
                    key.to_string()
                }
            }
        }
    }
}

/// Replace `{name}` placeholders that have a parameter. Anything else in
/// braces is copied through as written.
/// Substituted values are not scanned again.
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let inner = &after[..close];
        if inner.contains('{') {
            // `{{name}`: the first brace is literal; retry from the next one.
            out.push('{');
            rest = after;
            continue;
        }
        match placeholder_name(inner).and_then(|name| params.get(name)) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

fn placeholder_name(inner: &str) -> Option<&str> {
    let name = inner.trim();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));
    valid.then_some(name)
}
