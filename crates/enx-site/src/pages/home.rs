//! Landing page: hero, stats, feature and benefit grids, CTA links.

use enx_router::{PageId, RouteTable};
use enx_view::{Document, Span};

use super::{Page, RenderCtx};
use crate::data;

#[derive(Debug, Default)]
pub struct HomePage;

impl Page for HomePage {
    fn view(&self, ctx: &RenderCtx) -> Document {
        let table = RouteTable::new();
        let mut doc = ctx.doc();

        doc.heading(1, "Transform Education with AI Technology");
        doc.para([
            Span::muted("also: "),
            Span::new(data::HOME_ROTATING[1..].join(" / ")),
        ]);
        doc.text(data::HOME_LEAD);

        doc.para([
            Span::accent(format!(
                "{} -> {}",
                ctx.s("home.cta.primary"),
                table.href(PageId::Teaching)
            )),
            Span::muted("   |   "),
            Span::accent(format!(
                "{} -> {}",
                ctx.s("home.cta.secondary"),
                table.href(PageId::Proposal)
            )),
        ]);

        doc.divider();
        doc.key_values(
            data::HOME_STATS
                .iter()
                .map(|stat| (format!("{} {}", stat.value, stat.label), stat.detail)),
        );

        doc.heading(2, "What the platform does");
        doc.key_values(
            data::HOME_FEATURES
                .iter()
                .map(|f| (f.title, f.description)),
        );

        doc.heading(2, "Why schools adopt it");
        doc.key_values(
            data::HOME_BENEFITS
                .iter()
                .map(|b| (b.title, b.description)),
        );

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enx_i18n::{Locale, ui_strings};

    #[test]
    fn renders_stats_and_ctas() {
        let strings = ui_strings();
        let ctx = RenderCtx::for_locale(Locale::En, &strings);
        let doc = HomePage.view(&ctx);
        let text = doc.flat_text();
        assert!(text.contains("95% Student Engagement"));
        assert!(text.contains("Start Learning Journey"));
        assert!(text.contains("/teaching"));
    }
}
