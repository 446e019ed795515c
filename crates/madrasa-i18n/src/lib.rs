//! # madrasa-i18n
//!
//! Key-based translation for the Madrasa portals.
//!
//! - [`LocaleTable`]: immutable nested key → string tree for one locale.
//! - [`LocaleRegistry`]: every table the process knows, built once.
//! - [`Resolver`]: dotted-key lookup, missing-key fallback, `{name}`
//!   interpolation.
//! - [`TranslationSession`]: the active locale of one UI session and its
//!   text direction. UI code translates through [`TranslationSession::t`] or
//!   the [`t!`] macro.
//! - [`resource`]: JSON parsing that drops duplicate keys (first wins) and
//!   validates resource directories.
//!
//! ```
//! use std::sync::Arc;
//! use madrasa_core::{config::I18nConfig, overrides::NoOverride};
//! use madrasa_i18n::{t, LocaleRegistry, TranslationSession};
//!
//! let config = I18nConfig::default();
//! let registry = Arc::new(LocaleRegistry::bundled(&config.pseudo_locale).unwrap());
//! let session = TranslationSession::init(registry, &config, Arc::new(NoOverride)).unwrap();
//!
//! assert_eq!(session.t_plain("app.installApp"), "تثبيت");
//! assert_eq!(t!(session, "dashboard.welcome", name = "سارة"), "مرحباً سارة");
//! assert_eq!(session.direction().as_str(), "rtl");
//! ```

pub mod coverage;
pub mod registry;
pub mod resolver;
pub mod resource;
pub mod session;
pub mod table;

pub use coverage::{coverage, Coverage};
pub use registry::{LocaleRegistry, LocaleRegistryBuilder};
pub use resolver::{interpolate, missing_marker, Params, Resolver};
pub use session::{Direction, TranslationSession};
pub use table::{LocaleTable, Node};

/// Translate through a session with named parameters.
///
/// ```ignore
/// t!(session, "dashboard.welcome", name = user.name)
/// ```
#[macro_export]
macro_rules! t {
    ($session:expr, $key:expr $(, $name:ident = $value:expr )* $(,)?) => {{
        let params = $crate::Params::new() $( .with(stringify!($name), &$value) )*;
        $session.t($key, &params)
    }};
}
