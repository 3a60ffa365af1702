#![forbid(unsafe_code)]

//! Elm-style runtime for the EduAI Nexus shell.
//!
//! The runtime separates state (Model) from presentation (view) and
//! funnels every side effect through a command tree. The only side
//! effects this application has are quitting, logging, and delayed
//! messages; delayed messages are explicit scheduled tasks owned by a
//! scope so that navigating away from a page cancels its timers.

pub mod program;
pub mod scheduler;

pub use program::{Cmd, Model, Runtime};
pub use scheduler::{Scheduler, ScopeId};
