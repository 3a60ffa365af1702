//! Catch-all fallback page for unknown paths.

use enx_router::{PageId, RouteTable};
use enx_view::{Document, Span};

use super::{Page, RenderCtx};

#[derive(Debug, Default)]
pub struct NotFoundPage;

impl Page for NotFoundPage {
    fn view(&self, ctx: &RenderCtx) -> Document {
        let mut doc = ctx.doc();
        doc.heading(1, ctx.s("notfound.title"));
        doc.text(ctx.s("notfound.heading"));
        doc.para([Span::accent(format!(
            "{} -> {}",
            ctx.s("notfound.back"),
            RouteTable::new().href(PageId::Home)
        ))]);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enx_i18n::{Locale, ui_strings};

    #[test]
    fn renders_fallback_copy() {
        let strings = ui_strings();
        let ctx = RenderCtx::for_locale(Locale::En, &strings);
        let text = NotFoundPage.view(&ctx).flat_text();
        assert!(text.contains("404"));
        assert!(text.contains("Oops! Page not found"));
    }
}
