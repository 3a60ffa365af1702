//! Main application model, message routing, and navigation shell.
//!
//! Implements the Elm architecture over the routing + locale contract:
//! all state lives in [`AppModel`], messages drive transitions, and
//! `view()` is a pure function of state. Navigation resolves through the
//! route table, unconditionally scrolls to the top, resets the outgoing
//! page's ephemeral state, and cancels its pending timers. A panic in
//! any page view is caught at this boundary and replaced by a generic
//! fallback document.

use std::panic::{AssertUnwindSafe, catch_unwind};

use enx_i18n::{Locale, StringCatalog, ui_strings};
use enx_router::{PageId, RouteTable};
use enx_runtime::{Cmd, Model, ScopeId};
use enx_view::{Document, Span};
use tracing::{debug, warn};

use crate::chrome;
use crate::pages::{
    Page, PageEvent, RenderCtx, administration::AdministrationPage, governance::GovernancePage,
    home::HomePage, not_found::NotFoundPage, proposal::ProposalPage, teaching::TeachingPage,
};

/// Timer scope owned by a page; cancelled when navigation leaves it.
#[must_use]
pub fn scope_of(page: PageId) -> ScopeId {
    ScopeId(page.index() as u32)
}

// ---------------------------------------------------------------------------
// NavigationState
// ---------------------------------------------------------------------------

/// The resolved route. Recreated on every URL change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Resolved page identity.
    pub page: PageId,
    /// Whether an exact route matched (false on the catch-all).
    pub exact: bool,
}

// ---------------------------------------------------------------------------
// AppMsg
// ---------------------------------------------------------------------------

/// Top-level application message.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Resolve a path and show the matching page (link click / typed URL).
    Navigate(String),
    /// Navigate to a page by identity (menu entry).
    Open(PageId),
    /// History back (browser back-button analog).
    Back,
    /// History forward.
    Forward,
    /// Switch the active locale; unsupported codes are ignored.
    SetLocale(String),
    /// Scroll the viewport by a line delta.
    Scroll(i32),
    /// Interaction event for the current page.
    Page(PageEvent),
    /// A scheduled chat reply came due.
    ChatReplyDue(u64),
    /// Quit the shell.
    Quit,
}

// ---------------------------------------------------------------------------
// PageStates
// ---------------------------------------------------------------------------

/// Holds the ephemeral state for every page.
#[derive(Default)]
pub struct PageStates {
    pub home: HomePage,
    pub teaching: TeachingPage,
    pub governance: GovernancePage,
    pub administration: AdministrationPage,
    pub proposal: ProposalPage,
    pub not_found: NotFoundPage,
}

impl PageStates {
    fn page(&self, id: PageId) -> &dyn Page {
        match id {
            PageId::Home => &self.home,
            PageId::Teaching => &self.teaching,
            PageId::Governance => &self.governance,
            PageId::Administration => &self.administration,
            PageId::Proposal => &self.proposal,
            PageId::NotFound => &self.not_found,
        }
    }

    /// Forward an event to the page identified by `id`.
    fn update(&mut self, id: PageId, event: &PageEvent) -> Cmd<AppMsg> {
        match id {
            PageId::Home => self.home.update(event),
            PageId::Teaching => self.teaching.update(event),
            PageId::Governance => self.governance.update(event),
            PageId::Administration => self.administration.update(event),
            PageId::Proposal => self.proposal.update(event),
            PageId::NotFound => self.not_found.update(event),
        }
    }

    /// Discard a page's ephemeral state (navigation left the page).
    fn reset(&mut self, id: PageId) {
        match id {
            PageId::Home => self.home = HomePage::default(),
            PageId::Teaching => self.teaching = TeachingPage::default(),
            PageId::Governance => self.governance = GovernancePage::default(),
            PageId::Administration => self.administration = AdministrationPage::default(),
            PageId::Proposal => self.proposal = ProposalPage::default(),
            PageId::NotFound => self.not_found = NotFoundPage::default(),
        }
    }

    /// Render the page identified by `id` behind the panic boundary.
    fn view(&self, id: PageId, ctx: &RenderCtx) -> Document {
        view_boundary(self.page(id), ctx)
    }
}

/// Render a page, replacing any panic with the generic fallback
/// document. The chrome and the rest of the shell keep working.
pub fn view_boundary(page: &dyn Page, ctx: &RenderCtx) -> Document {
    match catch_unwind(AssertUnwindSafe(|| page.view(ctx))) {
        Ok(doc) => doc,
        Err(payload) => {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            warn!(panic = %msg, "page render failed, showing fallback");
            let mut doc = ctx.doc();
            doc.heading(1, ctx.s("error.title"));
            doc.para([Span::muted(ctx.s("error.body"))]);
            doc
        }
    }
}

// ---------------------------------------------------------------------------
// AppModel
// ---------------------------------------------------------------------------

/// Top-level application state.
pub struct AppModel {
    table: RouteTable,
    /// Current resolved route.
    pub nav: NavigationState,
    /// Active locale; reset to the default on construction ("reload").
    pub locale: Locale,
    /// Viewport scroll offset in lines; zeroed on every navigation.
    pub scroll: u16,
    /// Per-page ephemeral state.
    pub pages: PageStates,
    strings: StringCatalog,
    /// Visited paths; `cursor` points at the current entry.
    history: Vec<String>,
    cursor: usize,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModel {
    /// Fresh model at the home route in the default locale.
    pub fn new() -> Self {
        let table = RouteTable::new();
        let home = table.href(PageId::Home);
        let resolution = table.resolve(&home);
        Self {
            table,
            nav: NavigationState {
                page: resolution.page,
                exact: resolution.exact,
            },
            locale: Locale::DEFAULT,
            scroll: 0,
            pages: PageStates::default(),
            strings: ui_strings(),
            history: vec![home],
            cursor: 0,
        }
    }

    /// The route table (for shells and tests).
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The shared UI string catalog.
    #[must_use]
    pub fn strings(&self) -> &StringCatalog {
        &self.strings
    }

    /// Menu entry to highlight; `None` on the fallback page.
    #[must_use]
    pub fn highlight(&self) -> Option<PageId> {
        PageId::NAV.contains(&self.nav.page).then_some(self.nav.page)
    }

    /// Resolve `path` and make it current: scroll to top, reset the
    /// outgoing page, cancel its timers.
    fn goto(&mut self, path: &str) -> Cmd<AppMsg> {
        let resolution = self.table.resolve(path);
        let outgoing = self.nav.page;
        self.nav = NavigationState {
            page: resolution.page,
            exact: resolution.exact,
        };
        // Deterministic, unconditional: every navigation lands at the top.
        self.scroll = 0;

        let mut cmds = vec![Cmd::log(format!("navigate {path} -> {:?}", resolution.page))];
        if outgoing != resolution.page {
            self.pages.reset(outgoing);
            cmds.push(Cmd::CancelScope(scope_of(outgoing)));
        }
        Cmd::batch(cmds)
    }

    /// Push a path onto the history (dropping any forward tail) and go.
    fn navigate(&mut self, path: String) -> Cmd<AppMsg> {
        self.history.truncate(self.cursor + 1);
        self.history.push(path.clone());
        self.cursor = self.history.len() - 1;
        self.goto(&path)
    }
}

impl Model for AppModel {
    type Message = AppMsg;

    fn update(&mut self, msg: AppMsg) -> Cmd<AppMsg> {
        match msg {
            AppMsg::Navigate(path) => self.navigate(path),

            AppMsg::Open(page) => {
                let path = self.table.href(page);
                self.navigate(path)
            }

            AppMsg::Back => {
                if self.cursor == 0 {
                    return Cmd::none();
                }
                self.cursor -= 1;
                let path = self.history[self.cursor].clone();
                self.goto(&path)
            }

            AppMsg::Forward => {
                if self.cursor + 1 >= self.history.len() {
                    return Cmd::none();
                }
                self.cursor += 1;
                let path = self.history[self.cursor].clone();
                self.goto(&path)
            }

            AppMsg::SetLocale(code) => {
                match Locale::from_code(&code) {
                    Some(locale) => self.locale = locale,
                    // Unsupported code: previous locale retained, no
                    // partial application.
                    None => debug!(code = %code, "ignoring unsupported locale"),
                }
                Cmd::none()
            }

            AppMsg::Scroll(delta) => {
                let scrolled = i64::from(self.scroll) + i64::from(delta);
                self.scroll = scrolled.clamp(0, i64::from(u16::MAX)) as u16;
                Cmd::none()
            }

            AppMsg::Page(event) => self.pages.update(self.nav.page, &event),

            AppMsg::ChatReplyDue(token) => {
                // Owned by the administration page; a cancelled scope
                // never delivers, and the widget ignores stale tokens.
                self.pages.administration.chat_reply(token);
                Cmd::none()
            }

            AppMsg::Quit => Cmd::quit(),
        }
    }

    fn view(&self) -> Document {
        let ctx = RenderCtx::for_locale(self.locale, &self.strings);
        let mut doc = ctx.doc();

        chrome::header(&mut doc, &ctx);
        chrome::nav_menu(&mut doc, &ctx, &self.table, self.highlight());
        chrome::locale_switcher(&mut doc, self.locale);
        doc.divider();

        doc.extend(self.pages.view(self.nav.page, &ctx));

        doc.divider();
        chrome::status_line(&mut doc, &self.nav, self.locale, self.scroll);
        doc
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(all(test, not(feature = "pages-deploy")))]
mod tests {
    use super::*;

    fn navigate(app: &mut AppModel, path: &str) {
        app.update(AppMsg::Navigate(path.to_string()));
    }

    #[test]
    fn starts_at_home_in_default_locale() {
        let app = AppModel::new();
        assert_eq!(app.nav.page, PageId::Home);
        assert!(app.nav.exact);
        assert_eq!(app.locale, Locale::DEFAULT);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn navigation_switches_pages() {
        let mut app = AppModel::new();
        navigate(&mut app, "/teaching");
        assert_eq!(app.nav.page, PageId::Teaching);
        navigate(&mut app, "/proposal");
        assert_eq!(app.nav.page, PageId::Proposal);
    }

    #[test]
    fn unknown_path_is_fallback_without_highlight() {
        let mut app = AppModel::new();
        navigate(&mut app, "/unknown-path");
        assert_eq!(app.nav.page, PageId::NotFound);
        assert!(!app.nav.exact);
        assert_eq!(app.highlight(), None);

        let rendered = enx_view::render_plain(&app.view(), 100);
        assert!(rendered.contains("Oops! Page not found"));
    }

    #[test]
    fn navigation_scrolls_to_top() {
        let mut app = AppModel::new();
        app.update(AppMsg::Scroll(25));
        assert_eq!(app.scroll, 25);
        navigate(&mut app, "/governance");
        assert_eq!(app.scroll, 0);
        // Also on a same-page navigation.
        app.update(AppMsg::Scroll(5));
        navigate(&mut app, "/governance");
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn scroll_never_goes_negative() {
        let mut app = AppModel::new();
        app.update(AppMsg::Scroll(-10));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn navigation_resets_outgoing_page_state() {
        let mut app = AppModel::new();
        navigate(&mut app, "/teaching");
        app.update(AppMsg::Page(PageEvent::SelectTab(2)));
        assert_eq!(app.pages.teaching.tabs().active(), 2);

        navigate(&mut app, "/governance");
        navigate(&mut app, "/teaching");
        assert_eq!(app.pages.teaching.tabs().active(), 0);
    }

    #[test]
    fn leaving_a_page_cancels_its_timer_scope() {
        let mut app = AppModel::new();
        navigate(&mut app, "/administration");
        let cmd = app.update(AppMsg::Navigate("/".to_string()));
        // Navigation away must cancel the administration scope.
        let found = match cmd {
            Cmd::Batch(ref cmds) => cmds.iter().any(|c| {
                matches!(c, Cmd::CancelScope(scope) if *scope == scope_of(PageId::Administration))
            }),
            Cmd::CancelScope(scope) => scope == scope_of(PageId::Administration),
            _ => false,
        };
        assert!(found, "expected CancelScope in {cmd:?}");
    }

    #[test]
    fn unsupported_locale_is_a_no_op() {
        let mut app = AppModel::new();
        app.update(AppMsg::SetLocale("ar".to_string()));
        assert_eq!(app.locale, Locale::Ar);
        app.update(AppMsg::SetLocale("xx".to_string()));
        assert_eq!(app.locale, Locale::Ar);
        app.update(AppMsg::SetLocale(String::new()));
        assert_eq!(app.locale, Locale::Ar);
    }

    #[test]
    fn locale_round_trip_restores_output() {
        let mut app = AppModel::new();
        navigate(&mut app, "/teaching");
        let before = enx_view::render_plain(&app.view(), 100);

        app.update(AppMsg::SetLocale("de".to_string()));
        let german = enx_view::render_plain(&app.view(), 100);
        assert_ne!(before, german);

        app.update(AppMsg::SetLocale("en".to_string()));
        let after = enx_view::render_plain(&app.view(), 100);
        assert_eq!(before, after);
    }

    #[test]
    fn locale_switch_is_immediate_no_stale_render() {
        let mut app = AppModel::new();
        navigate(&mut app, "/teaching");
        app.update(AppMsg::SetLocale("ar".to_string()));
        // The very next render reflects the new locale and direction.
        let doc = app.view();
        assert_eq!(doc.dir, enx_view::TextDirection::Rtl);
        assert!(doc.flat_text().contains("تجربة تعليمية شخصية"));
    }

    #[test]
    fn history_back_and_forward() {
        let mut app = AppModel::new();
        navigate(&mut app, "/teaching");
        navigate(&mut app, "/proposal");

        app.update(AppMsg::Back);
        assert_eq!(app.nav.page, PageId::Teaching);
        app.update(AppMsg::Back);
        assert_eq!(app.nav.page, PageId::Home);
        // Underflow is a no-op.
        app.update(AppMsg::Back);
        assert_eq!(app.nav.page, PageId::Home);

        app.update(AppMsg::Forward);
        assert_eq!(app.nav.page, PageId::Teaching);
        // A new navigation truncates the forward tail.
        navigate(&mut app, "/governance");
        app.update(AppMsg::Forward);
        assert_eq!(app.nav.page, PageId::Governance);
    }

    #[test]
    fn open_uses_table_hrefs() {
        let mut app = AppModel::new();
        app.update(AppMsg::Open(PageId::Administration));
        assert_eq!(app.nav.page, PageId::Administration);
        assert!(app.nav.exact);
    }

    #[test]
    fn quit_returns_quit_cmd() {
        let mut app = AppModel::new();
        assert!(matches!(app.update(AppMsg::Quit), Cmd::Quit));
    }

    #[test]
    fn every_page_renders_under_the_boundary() {
        let mut app = AppModel::new();
        for &page in PageId::NAV {
            app.update(AppMsg::Open(page));
            let rendered = enx_view::render_plain(&app.view(), 100);
            assert!(!rendered.is_empty());
        }
    }

    #[test]
    fn panicking_page_renders_fallback() {
        struct Exploding;
        impl Page for Exploding {
            fn view(&self, _ctx: &RenderCtx) -> Document {
                panic!("boom");
            }
        }

        let strings = ui_strings();
        let ctx = RenderCtx::for_locale(Locale::En, &strings);
        let doc = view_boundary(&Exploding, &ctx);
        let text = doc.flat_text();
        assert!(text.contains("Something went wrong"));
    }
}
