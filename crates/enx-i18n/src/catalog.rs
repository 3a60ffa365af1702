//! String catalog with default-locale fallback and interpolation.
//!
//! # Invariants
//!
//! 1. **Fallback terminates**: every lookup tries the requested locale,
//!    then the default locale, exactly once each. `None` is only possible
//!    for keys no locale provides.
//!
//! 2. **Interpolation is idempotent**: `format()` replaces `{name}`
//!    tokens in a single pass; nested substitution does not occur.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key for locale | Incomplete translation | Default-locale value, WARN logged |
//! | Missing key everywhere | Key unknown | Returns `None` |
//! | Bad interpolation arg | `{name}` with no `name` arg | Token left as-is |

use std::collections::HashMap;

use tracing::warn;

use crate::locale::Locale;

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all keys in this locale.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Central string catalog over the fixed locale set.
///
/// Lookups fall back to [`Locale::DEFAULT`]; a fallback hit is a
/// data-integrity defect in the requested locale and is logged at WARN,
/// never treated as fatal.
///
/// # Example
///
/// ```
/// use enx_i18n::{Locale, LocaleStrings, StringCatalog};
///
/// let mut catalog = StringCatalog::new();
/// let mut en = LocaleStrings::new();
/// en.insert("greeting", "Hello");
/// en.insert("welcome", "Welcome, {name}!");
/// catalog.add_locale(Locale::En, en);
///
/// assert_eq!(catalog.lookup(Locale::En, "greeting"), Some("Hello"));
/// // De has no strings: falls back to the default locale.
/// assert_eq!(catalog.lookup(Locale::De, "greeting"), Some("Hello"));
/// assert_eq!(
///     catalog.format(Locale::En, "welcome", &[("name", "Alice")]),
///     Some("Welcome, Alice!".into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add strings for a locale, replacing any previous set.
    pub fn add_locale(&mut self, locale: Locale, strings: LocaleStrings) {
        self.locales.insert(locale, strings);
    }

    /// Look up a string, falling back to the default locale.
    ///
    /// Returns `None` only when neither the requested locale nor the
    /// default locale provides the key.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        if let Some(value) = self.locales.get(&locale).and_then(|ls| ls.get(key)) {
            return Some(value);
        }
        let fallback = self
            .locales
            .get(&Locale::DEFAULT)
            .and_then(|ls| ls.get(key));
        if fallback.is_some() && locale != Locale::DEFAULT {
            warn!(
                locale = locale.code(),
                key, "missing catalog entry, using default locale"
            );
        }
        fallback
    }

    /// Whether the locale itself provides the key (no fallback).
    #[must_use]
    pub fn has_direct(&self, locale: Locale, key: &str) -> bool {
        self.locales
            .get(&locale)
            .is_some_and(|ls| ls.get(key).is_some())
    }

    /// Look up a string and perform `{key}` interpolation.
    ///
    /// Each `(name, value)` pair in `args` replaces `{name}` in the
    /// template. Tokens without matching args are left as-is.
    #[must_use]
    pub fn format(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.lookup(locale, key)
            .map(|template| interpolate(template, args))
    }

    // -----------------------------------------------------------------
    // Coverage
    // -----------------------------------------------------------------

    /// All unique keys across every locale, sorted and deduplicated.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|ls| ls.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from `reference_keys` the locale does not provide directly.
    ///
    /// Fallback is deliberately excluded here: the report exists to find
    /// the holes the fallback papers over.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale, reference_keys: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|&&key| !self.has_direct(locale, key))
            .map(|&key| key.to_string())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Per-locale direct coverage against the full key set.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all = self.all_keys();
        let ref_keys: Vec<&str> = all.iter().map(String::as_str).collect();
        let total = ref_keys.len();

        let locales = Locale::ALL
            .iter()
            .map(|&locale| {
                let missing = self.missing_keys(locale, &ref_keys);
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale,
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

/// Coverage report for a string catalog.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Total number of unique keys across all locales.
    pub total_keys: usize,
    /// Per-locale coverage data, in `Locale::ALL` order.
    pub locales: Vec<LocaleCoverage>,
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    /// The locale being measured.
    pub locale: Locale,
    /// Number of reference keys the locale provides directly.
    pub present: usize,
    /// Reference keys the locale relies on fallback for.
    pub missing: Vec<String>,
    /// Direct coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}

/// Single-pass `{name}` interpolation. Unmatched tokens left as-is.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            let mut token = String::new();
            let mut found_close = false;
            for c in chars.by_ref() {
                if c == '}' {
                    found_close = true;
                    break;
                }
                token.push(c);
            }

            if found_close {
                if let Some(&(_, value)) = args.iter().find(|&&(name, _)| name == token) {
                    result.push_str(value);
                } else {
                    result.push('{');
                    result.push_str(&token);
                    result.push('}');
                }
            } else {
                // Unclosed brace: emit as-is.
                result.push('{');
                result.push_str(&token);
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();

        let mut en = LocaleStrings::new();
        en.insert("greeting", "Hello");
        en.insert("welcome", "Welcome, {name}!");
        en.insert("quiz.progress", "Question {current} of {total}");
        catalog.add_locale(Locale::En, en);

        let mut de = LocaleStrings::new();
        de.insert("greeting", "Hallo");
        // "welcome" and "quiz.progress" intentionally missing.
        catalog.add_locale(Locale::De, de);

        catalog
    }

    #[test]
    fn direct_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.lookup(Locale::De, "greeting"), Some("Hallo"));
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.lookup(Locale::De, "welcome"),
            Some("Welcome, {name}!")
        );
        // Ar has no strings at all: everything comes from the default.
        assert_eq!(catalog.lookup(Locale::Ar, "greeting"), Some("Hello"));
    }

    #[test]
    fn unknown_key_returns_none() {
        let catalog = sample_catalog();
        assert_eq!(catalog.lookup(Locale::En, "nonexistent"), None);
        assert_eq!(catalog.lookup(Locale::Ar, "nonexistent"), None);
    }

    #[test]
    fn fallback_invariant_over_default_keys() {
        let catalog = sample_catalog();
        let all = catalog.all_keys();
        for &locale in Locale::ALL {
            for key in &all {
                let value = catalog.lookup(locale, key);
                assert!(
                    value.is_some_and(|v| !v.is_empty()),
                    "{locale}/{key} must resolve to a non-empty string"
                );
            }
        }
    }

    #[test]
    fn interpolation_multiple_args() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.format(
                Locale::En,
                "quiz.progress",
                &[("current", "1"), ("total", "2")]
            ),
            Some("Question 1 of 2".into())
        );
    }

    #[test]
    fn interpolation_missing_arg_left_as_is() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.format(Locale::En, "welcome", &[]),
            Some("Welcome, {name}!".into())
        );
    }

    #[test]
    fn interpolation_edge_cases() {
        assert_eq!(interpolate("Hello {world", &[]), "Hello {world");
        assert_eq!(interpolate("Hello {}", &[]), "Hello {}");
        assert_eq!(interpolate("No braces", &[]), "No braces");
        assert_eq!(interpolate("{x} and {x}", &[("x", "A")]), "A and A");
    }

    #[test]
    fn missing_keys_ignore_fallback() {
        let catalog = sample_catalog();
        let missing =
            catalog.missing_keys(Locale::De, &["greeting", "welcome", "quiz.progress"]);
        assert_eq!(missing, vec!["quiz.progress", "welcome"]);
    }

    #[test]
    fn coverage_report_structure() {
        let catalog = sample_catalog();
        let report = catalog.coverage_report();
        assert_eq!(report.total_keys, 3);
        assert_eq!(report.locales.len(), Locale::ALL.len());

        let en = &report.locales[0];
        assert_eq!(en.locale, Locale::En);
        assert_eq!(en.present, 3);
        assert!(en.missing.is_empty());

        let ar = &report.locales[1];
        assert_eq!(ar.locale, Locale::Ar);
        assert_eq!(ar.present, 0);

        let de = &report.locales[2];
        assert_eq!(de.present, 1);
        assert!((de.coverage_percent - 33.333_332).abs() < 0.01);
    }

    #[test]
    fn empty_catalog() {
        let catalog = StringCatalog::new();
        assert_eq!(catalog.lookup(Locale::En, "anything"), None);
        let report = catalog.coverage_report();
        assert_eq!(report.total_keys, 0);
    }
}
