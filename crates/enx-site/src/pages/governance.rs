//! Governance analytics page: overview, performance, dropout prevention,
//! and AI insight tabs.

use enx_runtime::Cmd;
use enx_view::{Document, Span};
use enx_widgets::meter::Tier;
use enx_widgets::tabs::TabsState;

use super::{Page, PageEvent, RenderCtx};
use crate::app::AppMsg;
use crate::data;

pub const TAB_LABELS: &[&str] = &["Overview", "Performance", "Dropout Prevention", "AI Insights"];

const TAB_OVERVIEW: usize = 0;
const TAB_PERFORMANCE: usize = 1;
const TAB_DROPOUT: usize = 2;
const TAB_INSIGHTS: usize = 3;

#[derive(Debug)]
pub struct GovernancePage {
    tabs: TabsState,
}

impl Default for GovernancePage {
    fn default() -> Self {
        Self {
            tabs: TabsState::new(TAB_LABELS.len()),
        }
    }
}

impl GovernancePage {
    #[must_use]
    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    fn view_overview(&self, doc: &mut Document) {
        doc.key_values(data::SCHOOL_METRICS.iter().map(|metric| {
            let arrow = if metric.rising { "up" } else { "down" };
            (
                metric.label,
                format!(
                    "{}%  ({} from last semester, {arrow})",
                    metric.value, metric.change
                ),
            )
        }));

        doc.heading(2, "Student Population Overview");
        doc.key_values(data::POPULATION.iter().copied());

        doc.heading(2, "Academic Achievements");
        doc.key_values(data::ACHIEVEMENTS.iter().copied());
    }

    fn view_performance(&self, doc: &mut Document) {
        doc.heading(2, "Grade Level Performance Analysis");
        for grade in data::GRADE_PERFORMANCE {
            doc.meter(
                format!("{} ({} students)", grade.grade, grade.students),
                grade.average,
                Some(grade.trend.to_string()),
            );
        }

        doc.heading(2, "Subject Performance Distribution");
        for &(subject, average) in data::SUBJECT_DISTRIBUTION {
            doc.meter(subject, average, None);
        }

        doc.heading(2, "Teacher Performance Metrics");
        doc.key_values(data::TEACHER_METRICS.iter().copied());
    }

    fn view_dropout(&self, doc: &mut Document) {
        doc.para([Span::bold(data::DROPOUT_ALERT)]);

        doc.heading(2, "High-Risk Students Requiring Intervention");
        for student in data::DROPOUT_RISK {
            let tier = Tier::classify(student.risk);
            doc.meter(
                format!("{} (Grade {})", student.name, student.grade),
                student.risk,
                Some(format!("{} Risk", tier.label())),
            );
            doc.para([Span::muted(format!(
                "Risk factors: {}",
                student.factors.join(", ")
            ))]);
        }

        doc.heading(2, "Intervention Success Rate");
        doc.key_values(data::INTERVENTION_STATS.iter().copied());

        doc.heading(2, "Recommended Actions");
        doc.key_values(
            data::RECOMMENDED_ACTIONS
                .iter()
                .map(|a| (a.title, a.description)),
        );
    }

    fn view_insights(&self, doc: &mut Document) {
        doc.heading(2, "Predictive Analytics");
        doc.text("Expected Improvements");
        doc.bullets(data::EXPECTED_IMPROVEMENTS.iter().copied());
        doc.text("Areas Requiring Attention");
        doc.bullets(data::ATTENTION_AREAS.iter().copied());

        doc.heading(2, "Resource Optimization");
        for insight in data::RESOURCE_INSIGHTS {
            doc.meter(insight.area, insight.current, None);
            doc.para([Span::muted(format!("Recommendation: {}", insight.note))]);
        }

        doc.heading(2, "Strategic Recommendations");
        doc.text("Short-term (1-3 months)");
        doc.bullets(data::SHORT_TERM_STRATEGY.iter().copied());
        doc.text("Long-term (6-12 months)");
        doc.bullets(data::LONG_TERM_STRATEGY.iter().copied());
    }
}

impl Page for GovernancePage {
    fn update(&mut self, event: &PageEvent) -> Cmd<AppMsg> {
        match event {
            PageEvent::SelectTab(index) => self.tabs.select(*index),
            PageEvent::NextTab => self.tabs.next(),
            PageEvent::PrevTab => self.tabs.prev(),
            _ => {}
        }
        Cmd::none()
    }

    fn view(&self, ctx: &RenderCtx) -> Document {
        let mut doc = ctx.doc();
        doc.heading(1, ctx.s("governance.title"));
        doc.para([Span::muted(ctx.s("governance.subtitle"))]);
        doc.tabs(TAB_LABELS.iter().copied(), self.tabs.active());

        match self.tabs.active() {
            TAB_OVERVIEW => self.view_overview(&mut doc),
            TAB_PERFORMANCE => self.view_performance(&mut doc),
            TAB_DROPOUT => self.view_dropout(&mut doc),
            TAB_INSIGHTS => self.view_insights(&mut doc),
            _ => {}
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enx_i18n::{Locale, ui_strings};

    #[test]
    fn overview_shows_metrics() {
        let strings = ui_strings();
        let ctx = RenderCtx::for_locale(Locale::En, &strings);
        let page = GovernancePage::default();
        let text = page.view(&ctx).flat_text();
        assert!(text.contains("Overall Performance"));
        assert!(text.contains("1,248"));
    }

    #[test]
    fn dropout_tab_classifies_risk_tiers() {
        let strings = ui_strings();
        let ctx = RenderCtx::for_locale(Locale::En, &strings);
        let mut page = GovernancePage::default();
        page.update(&PageEvent::SelectTab(TAB_DROPOUT));
        let text = page.view(&ctx).flat_text();
        // 85 -> High, 72/68 -> Medium, 59 -> Low.
        assert!(text.contains("High Risk"));
        assert!(text.contains("Medium Risk"));
        assert!(text.contains("Low Risk"));
        assert!(text.contains("Ahmed M."));
    }

    #[test]
    fn quiz_events_are_ignored() {
        let strings = ui_strings();
        let ctx = RenderCtx::for_locale(Locale::En, &strings);
        let mut page = GovernancePage::default();
        let before = page.view(&ctx);
        page.update(&PageEvent::QuizSelect(1));
        page.update(&PageEvent::ChatSubmit("hello".into()));
        assert_eq!(page.view(&ctx), before);
    }
}
