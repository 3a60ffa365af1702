//! Proposal page: cost breakdown, savings, ROI, and tech stack tabs.
//!
//! All figures are JOD mock data from the pitch; the yearly totals are
//! computed from the breakdown so the table and the summary can never
//! disagree.

use enx_runtime::Cmd;
use enx_view::{Document, Span};
use enx_widgets::tabs::TabsState;

use super::{Page, PageEvent, RenderCtx};
use crate::app::AppMsg;
use crate::data;

pub const TAB_LABELS: &[&str] = &["Cost Breakdown", "Cost Savings", "ROI Analysis", "Tech Stack"];

const TAB_COSTS: usize = 0;
const TAB_SAVINGS: usize = 1;
const TAB_ROI: usize = 2;
const TAB_TECH: usize = 3;

#[derive(Debug)]
pub struct ProposalPage {
    tabs: TabsState,
}

impl Default for ProposalPage {
    fn default() -> Self {
        Self {
            tabs: TabsState::new(TAB_LABELS.len()),
        }
    }
}

fn jd(amount: u32) -> String {
    // Thousands separator, JOD style: JD 14,000.
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("JD {grouped}")
}

impl ProposalPage {
    #[must_use]
    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    fn view_costs(&self, doc: &mut Document) {
        let totals: Vec<u32> = (0..3).map(data::cost_total).collect();
        doc.key_values([
            ("Year 1 Total", jd(totals[0])),
            ("Year 2 Total", jd(totals[1])),
            ("Year 3 Total", jd(totals[2])),
            ("3-Year Total", jd(totals.iter().sum())),
        ]);

        doc.heading(2, "Detailed Cost Breakdown");
        doc.table(
            ["Category", "Year 1", "Year 2", "Year 3"],
            data::COST_BREAKDOWN
                .iter()
                .map(|row| {
                    vec![
                        row.category.to_string(),
                        jd(row.year1),
                        jd(row.year2),
                        jd(row.year3),
                    ]
                })
                .collect(),
        );
        doc.key_values(
            data::COST_BREAKDOWN
                .iter()
                .map(|row| (row.category, row.description)),
        );
    }

    fn view_savings(&self, doc: &mut Document) {
        doc.heading(2, "Before vs After AI Implementation");
        doc.table(
            ["Metric", "Before", "After", "Saved"],
            data::SAVINGS_COMPARISON
                .iter()
                .map(|row| {
                    vec![
                        row.metric.to_string(),
                        row.before.to_string(),
                        row.after.to_string(),
                        row.saving.to_string(),
                    ]
                })
                .collect(),
        );

        doc.heading(2, "Quantified Annual Savings");
        doc.key_values(
            data::ANNUAL_SAVINGS
                .iter()
                .map(|&(title, amount, detail)| (title, format!("{amount} ({detail})"))),
        );
    }

    fn view_roi(&self, doc: &mut Document) {
        doc.heading(2, "3-Year ROI Timeline");
        doc.table(
            ["Year", "Investment", "Savings", "ROI"],
            data::ROI_TIMELINE
                .iter()
                .map(|year| {
                    vec![
                        year.year.to_string(),
                        jd(year.investment),
                        jd(year.savings),
                        format!("{}{:.1}%", if year.roi > 0.0 { "+" } else { "" }, year.roi),
                    ]
                })
                .collect(),
        );

        doc.heading(2, "Risk Assessment & Mitigation");
        doc.text("Potential Risks");
        doc.key_values(data::RISKS.iter().map(|r| (r.title, r.description)));
        doc.text("Mitigation Strategies");
        doc.key_values(data::MITIGATIONS.iter().map(|m| (m.title, m.description)));
    }

    fn view_tech(&self, doc: &mut Document) {
        doc.heading(2, "Recommended Technology Stack");
        for tech in data::TECH_STACK {
            doc.key_values([
                ("Platform", tech.name.to_string()),
                ("Category", tech.category.to_string()),
                ("Cost", tech.cost.to_string()),
            ]);
            doc.bullets(tech.features.iter().copied());
        }

        doc.heading(2, "Implementation Roadmap");
        for phase in data::ROADMAP {
            doc.text(phase.title);
            doc.bullets(phase.items.iter().copied());
        }
    }
}

impl Page for ProposalPage {
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
        doc.heading(1, ctx.s("proposal.title"));
        doc.para([Span::muted(ctx.s("proposal.subtitle"))]);
        doc.tabs(TAB_LABELS.iter().copied(), self.tabs.active());

        match self.tabs.active() {
            TAB_COSTS => self.view_costs(&mut doc),
            TAB_SAVINGS => self.view_savings(&mut doc),
            TAB_ROI => self.view_roi(&mut doc),
            TAB_TECH => self.view_tech(&mut doc),
            _ => {}
        }
        doc
    }
}
