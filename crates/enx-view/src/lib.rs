#![forbid(unsafe_code)]

//! Document model for EduAI Nexus pages.
//!
//! Pages are pure functions from state to a [`Document`]: an ordered list
//! of blocks (headings, paragraphs, tables, meters, tab strips, chat
//! logs) that carries the text direction of its locale. Presenting a
//! document (colors, animation, layout polish) is a collaborator
//! concern; this crate ships only the plain-text presenter the terminal
//! shell and the snapshot tests use.

pub mod document;
pub mod plain;

pub use document::{BlockNode, ChatLine, Document, Span, SpanFlags};
pub use enx_i18n::TextDirection;
pub use plain::render_plain;
