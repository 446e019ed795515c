use thiserror::Error;

/// Top-level error type for Madrasa.
#[derive(Debug, Error)]
pub enum MadrasaError {
    /// Requested locale is not in the registry.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// `set_locale` was called with a locale that is not in the registry.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    /// Locale resource data is malformed.
    #[error("resource error in {source_name}: {reason}")]
    Resource { source_name: String, reason: String },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MadrasaError {
    /// Build a resource error for the named source (file path or bundle name).
    pub fn resource(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resource {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
