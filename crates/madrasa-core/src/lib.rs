//! # madrasa-core
//!
//! Configuration, error handling, and test-override stores shared by the
//! Madrasa localization crates.

pub mod config;
pub mod error;
pub mod overrides;
pub mod traits;
