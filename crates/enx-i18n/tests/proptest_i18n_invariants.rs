//! Property-based invariant tests for the i18n subsystem.
//!
//! Verifies structural guarantees of the locale set, catalog fallback,
//! and interpolation:
//!
//! 1. from_code never panics on arbitrary strings and only accepts the
//!    fixed code set
//! 2. Fallback invariant: every default-locale key resolves non-empty
//!    for every supported locale
//! 3. Interpolation with no placeholders is identity
//! 4. Interpolation is idempotent (no recursive substitution)
//! 5. Missing args leave placeholder tokens intact
//! 6. Coverage report coverage_percent is in [0, 100]
//! 7. Bundle shape is identical across locales

use enx_i18n::{Locale, LocaleStrings, StringCatalog, ui_strings};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn catalog_with(en_pairs: &[(&str, &str)]) -> StringCatalog {
    let mut catalog = StringCatalog::new();
    let mut en = LocaleStrings::new();
    for &(k, v) in en_pairs {
        en.insert(k, v);
    }
    catalog.add_locale(Locale::En, en);
    catalog
}

// ═════════════════════════════════════════════════════════════════════════
// 1. from_code is total and only accepts the fixed set
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn from_code_never_panics(code in ".{0,16}") {
        let parsed = Locale::from_code(&code);
        match parsed {
            Some(locale) => prop_assert_eq!(locale.code(), code.as_str()),
            None => prop_assert!(!matches!(code.as_str(), "en" | "ar" | "de")),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Fallback invariant over arbitrary default-locale catalogs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn default_keys_resolve_for_every_locale(
        key in "[a-z][a-z.]{0,24}",
        value in "[^{}]{1,40}",
    ) {
        let catalog = catalog_with(&[(&key, &value)]);
        for &locale in Locale::ALL {
            let resolved = catalog.lookup(locale, &key);
            prop_assert_eq!(resolved, Some(value.as_str()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Interpolation with no placeholders is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolation_identity_without_braces(template in "[^{}]{0,64}") {
        let catalog = catalog_with(&[("k", &template)]);
        let formatted = catalog.format(Locale::En, "k", &[("name", "Alice")]);
        prop_assert_eq!(formatted, Some(template));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Interpolation is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolation_not_recursive(value in "[^{}]{0,24}") {
        // The substituted value may itself look like a token source; a
        // second pass must not occur.
        let catalog = catalog_with(&[("k", "{a}")]);
        let injected = format!("{{{value}}}");
        let formatted = catalog.format(Locale::En, "k", &[("a", &injected)]);
        prop_assert_eq!(formatted, Some(injected));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Missing args leave tokens intact
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_args_keep_tokens(name in "[a-z]{1,12}") {
        let template = format!("before {{{name}}} after");
        let catalog = catalog_with(&[("k", &template)]);
        let formatted = catalog.format(Locale::En, "k", &[]);
        prop_assert_eq!(formatted, Some(template));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Coverage percentages stay in range
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn coverage_percent_in_range() {
    let report = ui_strings().coverage_report();
    for lc in &report.locales {
        assert!(
            (0.0..=100.0).contains(&lc.coverage_percent),
            "{}: {}",
            lc.locale,
            lc.coverage_percent
        );
        assert!(lc.present + lc.missing.len() == report.total_keys);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Bundle shape is identical across locales
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn bundle_shape_matches_default() {
    let reference = Locale::DEFAULT.bundle();
    for &locale in Locale::ALL {
        let bundle = locale.bundle();
        assert_eq!(bundle.topics.len(), reference.topics.len());
        assert_eq!(bundle.actions.len(), reference.actions.len());
    }
}
