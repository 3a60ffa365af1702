#![forbid(unsafe_code)]

//! Internationalization foundation for EduAI Nexus.
//!
//! Provides the fixed locale set with text direction, the structured
//! per-locale content bundles, and a key-based string catalog with
//! default-locale fallback and variable interpolation.

pub mod bundle;
pub mod catalog;
pub mod locale;

pub use bundle::{ActionCard, ContentBundle, TopicEntry, ui_strings};
pub use catalog::{CoverageReport, LocaleCoverage, LocaleStrings, StringCatalog};
pub use locale::{Locale, TextDirection};
