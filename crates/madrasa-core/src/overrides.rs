//! Override stores for forcing a locale during automated UI runs.

use std::sync::Mutex;

use crate::traits::OverrideStore;

/// No override source. Sessions always start on the configured default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOverride;

impl OverrideStore for NoOverride {
    fn name(&self) -> &str {
        "none"
    }

    fn read(&self) -> Option<String> {
        None
    }
}

/// Reads the forced locale from an environment variable.
///
/// Empty or whitespace-only values count as unset. The environment is never
/// written, so `record`/`clear` are no-ops.
#[derive(Debug, Clone)]
pub struct EnvOverride {
    var: String,
}

impl EnvOverride {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl OverrideStore for EnvOverride {
    fn name(&self) -> &str {
        &self.var
    }

    fn read(&self) -> Option<String> {
        if self.var.is_empty() {
            return None;
        }
        std::env::var(&self.var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// In-process override slot, scoped to whoever holds the store.
#[derive(Debug, Default)]
pub struct MemoryOverride {
    value: Mutex<Option<String>>,
}

impl MemoryOverride {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts with `locale` already forced.
    pub fn with_value(locale: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(locale.into())),
        }
    }
}

impl OverrideStore for MemoryOverride {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }

    fn record(&self, locale: &str) {
        if let Ok(mut value) = self.value.lock() {
            *value = Some(locale.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut value) = self.value.lock() {
            *value = None;
        }
    }
}
