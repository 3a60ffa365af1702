//! The fixed, closed locale set and its text directions.

/// Horizontal text direction for a locale-bearing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// A supported language. The set is fixed at build time and never empty;
/// exactly one locale is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// English (default).
    En,
    /// Arabic.
    Ar,
    /// German.
    De,
}

impl Locale {
    /// All supported locales in display order.
    pub const ALL: &[Locale] = &[Self::En, Self::Ar, Self::De];

    /// The fallback locale every catalog lookup terminates at.
    pub const DEFAULT: Locale = Self::En;

    /// Short locale code (`"en"`, `"ar"`, `"de"`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::De => "de",
        }
    }

    /// English display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "Arabic",
            Self::De => "German",
        }
    }

    /// Name in the locale's own language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "\u{627}\u{644}\u{639}\u{631}\u{628}\u{64a}\u{629}",
            Self::De => "Deutsch",
        }
    }

    /// Text direction derived from the locale.
    #[must_use]
    pub fn direction(self) -> TextDirection {
        match self {
            Self::Ar => TextDirection::Rtl,
            Self::En | Self::De => TextDirection::Ltr,
        }
    }

    /// Parse a short code. Returns `None` for anything outside the
    /// supported set; callers treat that as a silent no-op.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            "de" => Some(Self::De),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
