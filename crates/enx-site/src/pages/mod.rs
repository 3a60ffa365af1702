//! Page implementations and the shared render context.
//!
//! Each page owns its ephemeral UI state (active tab, quiz answers, chat
//! transcript), created on mount and discarded when navigation leaves
//! the page. Rendering is pure: `view` maps (state, context) to a
//! [`Document`] and has no side effects.

use enx_i18n::{ContentBundle, Locale, StringCatalog};
use enx_runtime::Cmd;
use enx_view::Document;

use crate::app::AppMsg;

pub mod administration;
pub mod governance;
pub mod home;
pub mod not_found;
pub mod proposal;
pub mod teaching;

/// Explicit context passed to every page render. No ambient globals:
/// the locale and catalogs travel with the call, which keeps rendering
/// deterministic and lets tests pin any combination.
pub struct RenderCtx<'a> {
    pub locale: Locale,
    pub bundle: &'a ContentBundle,
    pub strings: &'a StringCatalog,
}

impl<'a> RenderCtx<'a> {
    /// Build a context for a locale against the shared UI catalog.
    #[must_use]
    pub fn for_locale(locale: Locale, strings: &'a StringCatalog) -> RenderCtx<'a> {
        RenderCtx {
            locale,
            bundle: locale.bundle(),
            strings,
        }
    }

    /// Catalog lookup with the documented default-locale fallback. A key
    /// unknown to every locale echoes the key itself: visible, never
    /// empty.
    #[must_use]
    pub fn s(&self, key: &str) -> String {
        self.strings
            .lookup(self.locale, key)
            .unwrap_or(key)
            .to_string()
    }

    /// Catalog lookup plus `{name}` interpolation.
    #[must_use]
    pub fn fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.strings
            .format(self.locale, key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// Fresh document in this locale's direction.
    #[must_use]
    pub fn doc(&self) -> Document {
        Document::new(self.locale.direction())
    }
}

/// Page-scoped interaction events, routed to the current page only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Activate a tab by index.
    SelectTab(usize),
    /// Activate the next tab (wraps).
    NextTab,
    /// Activate the previous tab (wraps).
    PrevTab,
    /// Submit chat input.
    ChatSubmit(String),
    /// Record a quiz answer for the current question.
    QuizSelect(usize),
    /// Advance the quiz (guarded on a recorded answer).
    QuizAdvance,
    /// Go back one quiz question.
    QuizBack,
    /// Reset the quiz entirely.
    QuizRetake,
}

/// A renderable page with transient local state.
pub trait Page {
    /// Handle an interaction event. The default ignores everything;
    /// stateless pages keep it.
    fn update(&mut self, event: &PageEvent) -> Cmd<AppMsg> {
        let _ = event;
        Cmd::none()
    }

    /// Render the page. Must not mutate state.
    fn view(&self, ctx: &RenderCtx) -> Document;
}
