//! Administration page: support chatbot, smart scheduling, attendance.

use enx_router::PageId;
use enx_runtime::Cmd;
use enx_view::{ChatLine, Document, Span};
use enx_widgets::chat::{ChatWidget, REPLY_DELAY};
use enx_widgets::tabs::TabsState;

use super::{Page, PageEvent, RenderCtx};
use crate::app::{AppMsg, scope_of};
use crate::data::{self, AttendanceStatus};

pub const TAB_LABELS: &[&str] = &["AI Chatbot", "Smart Scheduling", "Attendance Tracking"];

const TAB_CHATBOT: usize = 0;
const TAB_SCHEDULING: usize = 1;
const TAB_ATTENDANCE: usize = 2;

#[derive(Debug)]
pub struct AdministrationPage {
    tabs: TabsState,
    chat: ChatWidget,
}

impl Default for AdministrationPage {
    fn default() -> Self {
        Self {
            tabs: TabsState::new(TAB_LABELS.len()),
            chat: ChatWidget::with_transcript(data::chat_seed()),
        }
    }
}

impl AdministrationPage {
    #[must_use]
    pub fn chat(&self) -> &ChatWidget {
        &self.chat
    }

    #[must_use]
    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    /// Deliver a scheduled reply token to the chat widget.
    pub fn chat_reply(&mut self, token: u64) -> bool {
        self.chat.deliver(token)
    }

    fn view_chatbot(&self, ctx: &RenderCtx, doc: &mut Document) {
        doc.heading(2, ctx.s("chat.title"));
        doc.para([Span::muted(ctx.s("chat.description"))]);

        let lines: Vec<ChatLine> = self
            .chat
            .transcript()
            .iter()
            .map(|msg| ChatLine {
                author: msg.sender.label().to_string(),
                body: msg.body.clone(),
                stamp: msg.stamp.map(str::to_string),
                inbound: msg.sender == enx_widgets::chat::Sender::Assistant,
            })
            .collect();
        doc.chat(lines);

        if self.chat.is_awaiting() {
            doc.para([Span::muted("AI Assistant is typing...")]);
        } else {
            doc.para([Span::muted(format!("> {}", ctx.s("chat.placeholder")))]);
        }

        doc.heading(2, "Quick Actions");
        doc.bullets(data::QUICK_ACTIONS.iter().copied());

        doc.heading(2, "Chatbot Analytics");
        doc.key_values(data::CHATBOT_ANALYTICS.iter().copied());
    }

    fn view_scheduling(&self, doc: &mut Document) {
        doc.heading(2, "AI-Generated Weekly Schedule");
        for day in data::SCHEDULE {
            doc.heading(3, day.day);
            doc.table(
                ["Time", "Subject", "Teacher", "Room"],
                day.periods
                    .iter()
                    .map(|p| {
                        vec![
                            p.time.to_string(),
                            p.subject.to_string(),
                            p.teacher.to_string(),
                            p.room.to_string(),
                        ]
                    })
                    .collect(),
            );
        }

        doc.heading(2, "Schedule Optimization");
        doc.text("Optimizations Applied");
        doc.bullets(data::SCHEDULE_OPTIMIZATIONS.iter().copied());
        doc.key_values(data::SCHEDULE_STATS.iter().copied());
    }

    fn view_attendance(&self, doc: &mut Document) {
        doc.heading(2, "Real-time Attendance Monitoring");
        doc.table(
            ["Student", "ID", "Status", "Time", "Method"],
            data::ATTENDANCE
                .iter()
                .map(|r| {
                    vec![
                        r.name.to_string(),
                        r.id.to_string(),
                        r.status.label().to_string(),
                        r.time.to_string(),
                        r.method.to_string(),
                    ]
                })
                .collect(),
        );

        let count = |status: AttendanceStatus| {
            data::ATTENDANCE
                .iter()
                .filter(|r| r.status == status)
                .count()
        };
        doc.heading(2, "Attendance Summary");
        doc.key_values([
            ("Present Today", data::PRESENT_TODAY.to_string()),
            (
                "Present",
                format!("{} students", count(AttendanceStatus::Present)),
            ),
            ("Late", format!("{} student", count(AttendanceStatus::Late))),
            (
                "Absent",
                format!("{} student", count(AttendanceStatus::Absent)),
            ),
        ]);
    }
}

impl Page for AdministrationPage {
    fn update(&mut self, event: &PageEvent) -> Cmd<AppMsg> {
        match event {
            PageEvent::SelectTab(index) => self.tabs.select(*index),
            PageEvent::NextTab => self.tabs.next(),
            PageEvent::PrevTab => self.tabs.prev(),
            PageEvent::ChatSubmit(text) => {
                // The widget validates; a rejected submission schedules
                // nothing.
                if let Some(token) = self.chat.submit(text) {
                    return Cmd::delay(
                        REPLY_DELAY,
                        scope_of(PageId::Administration),
                        AppMsg::ChatReplyDue(token),
                    );
                }
            }
            _ => {}
        }
        Cmd::none()
    }

    fn view(&self, ctx: &RenderCtx) -> Document {
        let mut doc = ctx.doc();
        doc.heading(1, ctx.s("administration.title"));
        doc.para([Span::muted(ctx.s("administration.subtitle"))]);
        doc.tabs(TAB_LABELS.iter().copied(), self.tabs.active());

        match self.tabs.active() {
            TAB_CHATBOT => self.view_chatbot(ctx, &mut doc),
            TAB_SCHEDULING => self.view_scheduling(&mut doc),
            TAB_ATTENDANCE => self.view_attendance(&mut doc),
            _ => {}
        }
        doc
    }
}
