#![forbid(unsafe_code)]

//! Widget state machines for the EduAI Nexus pages.
//!
//! These are pure state: no timers, no I/O. The chat widget hands its
//! caller a reply token to schedule; the quiz and tab widgets are plain
//! guarded transitions. Rendering lives with the pages.

pub mod chat;
pub mod meter;
pub mod quiz;
pub mod tabs;

pub use chat::{CANNED_REPLY, ChatMessage, ChatState, ChatWidget, REPLY_DELAY, Sender};
pub use meter::Tier;
pub use quiz::{QuizQuestion, QuizWidget};
pub use tabs::TabsState;
