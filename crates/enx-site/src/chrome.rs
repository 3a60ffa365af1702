//! Persistent chrome around the pages: brand header, navigation menu,
//! locale switcher, status line.

use enx_i18n::Locale;
use enx_router::{PageId, RouteTable};
use enx_view::{Document, Span};

use crate::app::NavigationState;
use crate::pages::RenderCtx;

/// Brand header line.
pub fn header(doc: &mut Document, ctx: &RenderCtx) {
    doc.para([
        Span::bold(ctx.s("brand.name")),
        Span::muted(format!(" :: {}", ctx.s("brand.tagline"))),
    ]);
}

/// Navigation menu with the active entry highlighted.
///
/// `highlight` is `None` on the fallback page: no entry is active.
pub fn nav_menu(
    doc: &mut Document,
    ctx: &RenderCtx,
    table: &RouteTable,
    highlight: Option<PageId>,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, &page) in PageId::NAV.iter().enumerate() {
        if i > 0 {
            spans.push(Span::muted(" | "));
        }
        let label = ctx.s(page.label_key());
        if highlight == Some(page) {
            spans.push(Span::accent(format!("[{label}]")));
        } else {
            spans.push(Span::new(label));
        }
        spans.push(Span::muted(format!(" {}", table.href(page))));
    }
    doc.para(spans);
}

/// Locale switcher line; the active locale is bracketed.
pub fn locale_switcher(doc: &mut Document, active: Locale) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, &locale) in Locale::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::muted(" | "));
        }
        if locale == active {
            spans.push(Span::accent(format!("[{}]", locale.native_name())));
        } else {
            spans.push(Span::new(locale.native_name()));
        }
    }
    spans.push(Span::muted("   (lang <code>)"));
    doc.para(spans);
}

/// Bottom status line: resolved page, locale, direction, scroll.
pub fn status_line(doc: &mut Document, nav: &NavigationState, locale: Locale, scroll: u16) {
    doc.para([Span::muted(format!(
        "page={:?} exact={} locale={} dir={:?} top+{scroll}",
        nav.page,
        nav.exact,
        locale.code(),
        locale.direction(),
    ))]);
}
