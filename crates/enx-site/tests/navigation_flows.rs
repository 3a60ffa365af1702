#![cfg(not(feature = "pages-deploy"))]

//! End-to-end flows through the runtime: navigation, locale switching,
//! and the simulated chat reply timer (delivery and cancellation).

use std::time::{Duration, Instant};

use enx_router::PageId;
use enx_runtime::Runtime;
use enx_site::app::{AppModel, AppMsg};
use enx_site::pages::PageEvent;
use enx_view::render_plain;
use enx_widgets::chat::{CANNED_REPLY, REPLY_DELAY, Sender};

fn runtime() -> Runtime<AppModel> {
    Runtime::new(AppModel::new())
}

#[test]
fn chat_reply_arrives_after_fixed_delay() {
    let start = Instant::now();
    let mut rt = runtime();
    rt.dispatch(AppMsg::Navigate("/administration".into()), start);

    let seed_len = rt.model().pages.administration.chat().transcript().len();
    rt.dispatch(
        AppMsg::Page(PageEvent::ChatSubmit("What is the schedule?".into())),
        start,
    );

    // Exactly one user message immediately, none from the assistant yet.
    let transcript = rt.model().pages.administration.chat().transcript();
    assert_eq!(transcript.len(), seed_len + 1);
    assert_eq!(transcript.last().unwrap().sender, Sender::Student);
    assert!(rt.model().pages.administration.chat().is_awaiting());
    assert_eq!(rt.pending_timers(), 1);

    // Just before the deadline: still waiting.
    rt.poll(start + REPLY_DELAY - Duration::from_millis(1));
    assert!(rt.model().pages.administration.chat().is_awaiting());

    // At the deadline: exactly one assistant message, back to Idle.
    rt.poll(start + REPLY_DELAY);
    let transcript = rt.model().pages.administration.chat().transcript();
    assert_eq!(transcript.len(), seed_len + 2);
    assert_eq!(transcript.last().unwrap().sender, Sender::Assistant);
    assert_eq!(transcript.last().unwrap().body, CANNED_REPLY);
    assert!(!rt.model().pages.administration.chat().is_awaiting());
    assert_eq!(rt.pending_timers(), 0);
}

#[test]
fn empty_chat_submission_changes_nothing() {
    let start = Instant::now();
    let mut rt = runtime();
    rt.dispatch(AppMsg::Navigate("/administration".into()), start);

    let before = rt.model().pages.administration.chat().transcript().len();
    rt.dispatch(AppMsg::Page(PageEvent::ChatSubmit("   ".into())), start);
    assert_eq!(
        rt.model().pages.administration.chat().transcript().len(),
        before
    );
    assert_eq!(rt.pending_timers(), 0);
}

#[test]
fn navigating_away_cancels_pending_reply() {
    let start = Instant::now();
    let mut rt = runtime();
    rt.dispatch(AppMsg::Navigate("/administration".into()), start);
    rt.dispatch(
        AppMsg::Page(PageEvent::ChatSubmit("anyone there?".into())),
        start,
    );
    assert_eq!(rt.pending_timers(), 1);

    // Leave mid-AwaitingReply: the timer is cancelled with the scope.
    rt.dispatch(AppMsg::Navigate("/".into()), start);
    assert_eq!(rt.pending_timers(), 0);

    // Long after the would-be deadline, nothing fires and the fresh
    // page state has only the seed transcript.
    rt.poll(start + Duration::from_secs(60));
    rt.dispatch(AppMsg::Navigate("/administration".into()), start);
    let transcript = rt.model().pages.administration.chat().transcript();
    assert!(transcript.iter().all(|m| m.body != "anyone there?"));
    assert!(!rt.model().pages.administration.chat().is_awaiting());
}

#[test]
fn unknown_path_renders_fallback_with_unhighlighted_menu() {
    let start = Instant::now();
    let mut rt = runtime();
    rt.dispatch(AppMsg::Navigate("/unknown-path".into()), start);

    assert_eq!(rt.model().nav.page, PageId::NotFound);
    assert_eq!(rt.model().highlight(), None);

    let text = render_plain(&rt.view(), 100);
    assert!(text.contains("Oops! Page not found"));
    // No bracketed menu entry on the nav line.
    let nav_line = text
        .lines()
        .find(|line| line.contains("/administration"))
        .expect("nav menu line");
    assert!(!nav_line.contains('['));
}

#[test]
fn arabic_locale_flips_direction_everywhere() {
    let start = Instant::now();
    let mut rt = runtime();
    rt.dispatch(AppMsg::Navigate("/teaching".into()), start);
    rt.dispatch(AppMsg::SetLocale("ar".into()), start);

    let doc = rt.view();
    assert_eq!(doc.dir, enx_view::TextDirection::Rtl);
    // Same topic count as the English bundle.
    assert_eq!(
        enx_i18n::Locale::Ar.bundle().topics.len(),
        enx_i18n::Locale::En.bundle().topics.len()
    );
}

#[test]
fn locale_round_trip_through_runtime() {
    let start = Instant::now();
    let mut rt = runtime();
    rt.dispatch(AppMsg::Navigate("/teaching".into()), start);

    let before = render_plain(&rt.view(), 100);
    rt.dispatch(AppMsg::SetLocale("ar".into()), start);
    rt.dispatch(AppMsg::SetLocale("en".into()), start);
    assert_eq!(render_plain(&rt.view(), 100), before);
}

#[test]
fn quiz_flow_through_runtime() {
    let start = Instant::now();
    let mut rt = runtime();
    rt.dispatch(AppMsg::Navigate("/teaching".into()), start);
    rt.dispatch(AppMsg::Page(PageEvent::SelectTab(1)), start);

    // Guard: advancing without an answer stays on question 0.
    rt.dispatch(AppMsg::Page(PageEvent::QuizAdvance), start);
    assert_eq!(rt.model().pages.teaching.quiz().cursor(), 0);

    rt.dispatch(AppMsg::Page(PageEvent::QuizSelect(0)), start);
    rt.dispatch(AppMsg::Page(PageEvent::QuizAdvance), start);
    rt.dispatch(AppMsg::Page(PageEvent::QuizSelect(1)), start);
    rt.dispatch(AppMsg::Page(PageEvent::QuizAdvance), start);
    assert!(rt.model().pages.teaching.quiz().is_completed());

    rt.dispatch(AppMsg::Page(PageEvent::QuizRetake), start);
    let quiz = rt.model().pages.teaching.quiz();
    assert_eq!(quiz.cursor(), 0);
    assert!(!quiz.is_completed());
    assert_eq!(quiz.answer(0), None);
    assert_eq!(quiz.answer(1), None);
}

proptest::proptest! {
    // The shell survives any typed path: resolution is total and the
    // fallback page always renders.
    #[test]
    fn arbitrary_paths_never_break_the_shell(path in ".{0,48}") {
        let start = Instant::now();
        let mut rt = runtime();
        rt.dispatch(AppMsg::Navigate(path), start);
        let text = render_plain(&rt.view(), 100);
        proptest::prop_assert!(text.contains("EduAI Nexus"));
    }
}

#[test]
fn quit_stops_the_runtime() {
    let start = Instant::now();
    let mut rt = runtime();
    assert!(rt.is_running());
    rt.dispatch(AppMsg::Quit, start);
    assert!(!rt.is_running());
}
