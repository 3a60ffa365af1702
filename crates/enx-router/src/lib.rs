#![forbid(unsafe_code)]

//! Route table and path resolution.
//!
//! Resolution is pure, synchronous, and total: an exact static match
//! wins, anything else lands on the single catch-all fallback. Unknown
//! paths never panic and never leave navigation undefined.
//!
//! When built with the `pages-deploy` feature every route is prefixed
//! with the static-hosting sub-path; the prefix is stripped once at the
//! resolution entry point, not per route.

use tracing::debug;

/// Sub-path prefix applied in the static-hosting deployment mode.
/// A single build-time switch; empty in every other mode.
pub const BASE_PATH: &str = if cfg!(feature = "pages-deploy") {
    "/learn-ai-edu-nexus"
} else {
    ""
};

/// Identity of a page the router can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageId {
    /// Landing page.
    Home,
    /// Personalized teaching demo.
    Teaching,
    /// Governance analytics dashboard.
    Governance,
    /// Administration demo (chatbot, scheduling, attendance).
    Administration,
    /// Cost and implementation proposal.
    Proposal,
    /// Catch-all fallback; never part of the navigation menu.
    NotFound,
}

impl PageId {
    /// The navigable pages in menu order. `NotFound` is excluded.
    pub const NAV: &[PageId] = &[
        Self::Home,
        Self::Teaching,
        Self::Governance,
        Self::Administration,
        Self::Proposal,
    ];

    /// Route path without the base prefix.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Teaching => "/teaching",
            Self::Governance => "/governance",
            Self::Administration => "/administration",
            Self::Proposal => "/proposal",
            Self::NotFound => "/404",
        }
    }

    /// Catalog key of the page's menu label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Teaching => "nav.teaching",
            Self::Governance => "nav.governance",
            Self::Administration => "nav.administration",
            Self::Proposal => "nav.proposal",
            Self::NotFound => "notfound.title",
        }
    }

    /// Stable index, used as the page's timer scope id.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Teaching => 1,
            Self::Governance => 2,
            Self::Administration => 3,
            Self::Proposal => 4,
            Self::NotFound => 5,
        }
    }

    /// Parse a page name as typed in the shell (`open teaching`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Self::Home),
            "teaching" => Some(Self::Teaching),
            "governance" => Some(Self::Governance),
            "administration" => Some(Self::Administration),
            "proposal" => Some(Self::Proposal),
            _ => None,
        }
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// The page to render.
    pub page: PageId,
    /// True when an exact route matched (false means the catch-all).
    pub exact: bool,
}

/// Static mapping from URL paths to page identities.
///
/// Contains exactly one catch-all entry, consulted only when no exact
/// match succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable;

impl RouteTable {
    /// Create the route table.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve a path to a page identity.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let page = strip_base(path).and_then(|stripped| {
            let normalized = normalize(stripped);
            PageId::NAV
                .iter()
                .copied()
                .find(|page| page.path() == normalized)
        });

        let resolution = match page {
            Some(page) => Resolution { page, exact: true },
            None => Resolution {
                page: PageId::NotFound,
                exact: false,
            },
        };
        debug!(path, page = ?resolution.page, exact = resolution.exact, "route resolved");
        resolution
    }

    /// Link text for a page, including the base prefix.
    #[must_use]
    pub fn href(&self, page: PageId) -> String {
        if BASE_PATH.is_empty() {
            page.path().to_string()
        } else if page == PageId::Home {
            format!("{BASE_PATH}/")
        } else {
            format!("{BASE_PATH}{}", page.path())
        }
    }
}

/// Strip the deployment base prefix. `None` means the path is outside
/// the app entirely (deploy mode only) and belongs to the catch-all.
fn strip_base(path: &str) -> Option<&str> {
    if BASE_PATH.is_empty() {
        return Some(path);
    }
    match path.strip_prefix(BASE_PATH) {
        Some("") => Some("/"),
        Some(rest) if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Tolerate one trailing slash on non-root paths; everything else must
/// match exactly.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
