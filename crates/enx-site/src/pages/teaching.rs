//! Teaching page: localized dashboard, quiz, and analytics tabs.

use enx_runtime::Cmd;
use enx_view::{Document, Span};
use enx_widgets::meter::Tier;
use enx_widgets::quiz::QuizWidget;
use enx_widgets::tabs::TabsState;

use super::{Page, PageEvent, RenderCtx};
use crate::app::AppMsg;
use crate::data;

const TAB_DASHBOARD: usize = 0;
const TAB_ASSESSMENT: usize = 1;
const TAB_ANALYTICS: usize = 2;

#[derive(Debug)]
pub struct TeachingPage {
    tabs: TabsState,
    quiz: QuizWidget,
}

impl Default for TeachingPage {
    fn default() -> Self {
        Self {
            tabs: TabsState::new(3),
            quiz: QuizWidget::new(data::QUIZ_QUESTIONS),
        }
    }
}

impl TeachingPage {
    #[must_use]
    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizWidget {
        &self.quiz
    }

    fn view_dashboard(&self, ctx: &RenderCtx, doc: &mut Document) {
        let progress_label = ctx.s("label.progress");
        let recommendation_label = ctx.s("label.recommendation");

        for topic in ctx.bundle.topics {
            let tier = Tier::classify(topic.progress);
            doc.heading(3, format!("{} ({})", topic.name, topic.level));
            doc.meter(
                progress_label.clone(),
                topic.progress,
                Some(tier.label().to_string()),
            );
            doc.key_values([(recommendation_label.clone(), topic.recommendation.to_string())]);
            doc.para([Span::accent(format!("[{}]", ctx.bundle.continue_label))]);
        }

        doc.divider();
        for action in ctx.bundle.actions {
            doc.key_values([(action.title, action.description)]);
            doc.para([Span::accent(format!("[{}]", action.button))]);
        }
    }

    fn view_assessment(&self, ctx: &RenderCtx, doc: &mut Document) {
        doc.heading(2, ctx.s("quiz.title"));
        doc.para([Span::muted(ctx.s("quiz.description"))]);

        if let Some(question) = self.quiz.current() {
            let current = (self.quiz.cursor() + 1).to_string();
            let total = self.quiz.questions().len().to_string();
            doc.heading(
                3,
                ctx.fmt("quiz.progress", &[("current", &current), ("total", &total)]),
            );
            doc.text(question.prompt);

            let selected = self.quiz.answer(self.quiz.cursor());
            doc.bullets(question.options.iter().enumerate().map(|(i, option)| {
                if selected == Some(i) {
                    format!("({}) {option}  <-", i + 1)
                } else {
                    format!("({}) {option}", i + 1)
                }
            }));

            let advance_label = if self.quiz.cursor() + 1 == self.quiz.questions().len() {
                ctx.s("quiz.finish")
            } else {
                ctx.s("quiz.next")
            };
            let mut controls = vec![if self.quiz.cursor() > 0 {
                Span::accent(format!("[{}]", ctx.s("quiz.previous")))
            } else {
                Span::muted(ctx.s("quiz.previous"))
            }];
            controls.push(Span::new("   "));
            // The advance guard is silent: the control renders disabled.
            controls.push(if self.quiz.can_advance() {
                Span::accent(format!("[{advance_label}]"))
            } else {
                Span::muted(advance_label)
            });
            doc.para(controls);
        } else {
            doc.heading(3, ctx.s("quiz.completed"));
            doc.para([Span::muted(ctx.s("quiz.analyzing"))]);
            doc.key_values([
                (ctx.s("quiz.feedback"), data::QUIZ_FEEDBACK.to_string()),
                (
                    "Score".to_string(),
                    format!(
                        "{}/{}",
                        self.quiz.correct_count(),
                        self.quiz.questions().len()
                    ),
                ),
            ]);
            doc.para([Span::accent(format!("[{}]", ctx.s("quiz.retake")))]);
        }
    }

    fn view_analytics(&self, doc: &mut Document) {
        doc.heading(2, "Learning Time Distribution");
        for &(subject, share) in data::TIME_DISTRIBUTION {
            doc.meter(subject, share, None);
        }
        doc.heading(2, "Weekly Performance");
        doc.key_values(data::WEEKLY_STATS.iter().copied());
    }
}

impl Page for TeachingPage {
    fn update(&mut self, event: &PageEvent) -> Cmd<AppMsg> {
        match event {
            PageEvent::SelectTab(index) => self.tabs.select(*index),
            PageEvent::NextTab => self.tabs.next(),
            PageEvent::PrevTab => self.tabs.prev(),
            PageEvent::QuizSelect(option) => self.quiz.select(*option),
            PageEvent::QuizAdvance => {
                self.quiz.advance();
            }
            PageEvent::QuizBack => {
                self.quiz.back();
            }
            PageEvent::QuizRetake => self.quiz.retake(),
            PageEvent::ChatSubmit(_) => {}
        }
        Cmd::none()
    }

    fn view(&self, ctx: &RenderCtx) -> Document {
        let mut doc = ctx.doc();
        doc.para([Span::muted(format!("({})", ctx.bundle.badge))]);
        doc.heading(1, ctx.bundle.title);
        doc.text(ctx.bundle.subtitle);

        doc.tabs(
            [
                ctx.s("teaching.tab.dashboard"),
                ctx.s("teaching.tab.assessment"),
                ctx.s("teaching.tab.analytics"),
            ],
            self.tabs.active(),
        );

        match self.tabs.active() {
            TAB_DASHBOARD => self.view_dashboard(ctx, &mut doc),
            TAB_ASSESSMENT => self.view_assessment(ctx, &mut doc),
            TAB_ANALYTICS => self.view_analytics(&mut doc),
            _ => {}
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enx_i18n::{Locale, ui_strings};

    fn ctx_for(locale: Locale, strings: &enx_i18n::StringCatalog) -> RenderCtx<'_> {
        RenderCtx::for_locale(locale, strings)
    }

    #[test]
    fn dashboard_lists_every_topic_with_tier() {
        let strings = ui_strings();
        let ctx = ctx_for(Locale::En, &strings);
        let page = TeachingPage::default();
        let text = page.view(&ctx).flat_text();
        assert!(text.contains("Mathematics"));
        assert!(text.contains("Focus on Calculus II"));
        // 85 -> High, 72 -> Medium, 94 -> High, 68 -> Medium.
        assert!(text.contains("High"));
        assert!(text.contains("Medium"));
    }

    #[test]
    fn arabic_dashboard_is_rtl_with_same_topic_count() {
        let strings = ui_strings();
        let ctx = ctx_for(Locale::Ar, &strings);
        let page = TeachingPage::default();
        let doc = page.view(&ctx);
        assert_eq!(doc.dir, enx_view::TextDirection::Rtl);
        assert_eq!(
            Locale::Ar.bundle().topics.len(),
            Locale::En.bundle().topics.len()
        );
        assert!(doc.flat_text().contains("الرياضيات"));
    }

    #[test]
    fn quiz_tab_disables_next_until_answered() {
        let strings = ui_strings();
        let ctx = ctx_for(Locale::En, &strings);
        let mut page = TeachingPage::default();
        page.update(&PageEvent::SelectTab(TAB_ASSESSMENT));

        let before = page.view(&ctx).flat_text();
        assert!(before.contains("Question 1 of 2"));
        assert!(!before.contains("[Next]"));

        page.update(&PageEvent::QuizSelect(0));
        let after = page.view(&ctx).flat_text();
        assert!(after.contains("[Next]"));
    }

    #[test]
    fn finishing_quiz_shows_feedback_and_retake_resets() {
        let strings = ui_strings();
        let ctx = ctx_for(Locale::En, &strings);
        let mut page = TeachingPage::default();
        page.update(&PageEvent::SelectTab(TAB_ASSESSMENT));
        page.update(&PageEvent::QuizSelect(0));
        page.update(&PageEvent::QuizAdvance);
        page.update(&PageEvent::QuizSelect(1));
        page.update(&PageEvent::QuizAdvance);

        let done = page.view(&ctx).flat_text();
        assert!(done.contains("Quiz Completed!"));
        assert!(done.contains("Score 2/2"));

        page.update(&PageEvent::QuizRetake);
        let restarted = page.view(&ctx).flat_text();
        assert!(restarted.contains("Question 1 of 2"));
    }

    #[test]
    fn analytics_tab_shows_distribution() {
        let strings = ui_strings();
        let ctx = ctx_for(Locale::En, &strings);
        let mut page = TeachingPage::default();
        page.update(&PageEvent::SelectTab(TAB_ANALYTICS));
        let text = page.view(&ctx).flat_text();
        assert!(text.contains("Learning Time Distribution"));
        assert!(text.contains("23.5 hours"));
    }
}
