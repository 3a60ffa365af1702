//! The Model trait, command tree, and dispatch loop.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use enx_runtime::{Cmd, Model, Runtime};
//! use enx_view::{Document, TextDirection};
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Increment => {
//!                 self.count += 1;
//!                 Cmd::none()
//!             }
//!             Msg::Quit => Cmd::quit(),
//!         }
//!     }
//!
//!     fn view(&self) -> Document {
//!         let mut doc = Document::new(TextDirection::Ltr);
//!         doc.text(format!("count: {}", self.count));
//!         doc
//!     }
//! }
//!
//! let mut runtime = Runtime::new(Counter { count: 0 });
//! runtime.dispatch(Msg::Increment, Instant::now());
//! assert_eq!(runtime.model().count, 1);
//! ```

use std::time::{Duration, Instant};

use enx_view::Document;
use tracing::info;

use crate::scheduler::{Scheduler, ScopeId};

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// Messages that drive state transitions.
    type Message;

    /// Update the model in response to a message, returning commands
    /// for any side effects.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state. Pure: same state, same document.
    fn view(&self) -> Document;
}

/// Side effects returned from `update()`.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Stop the program loop.
    Quit,
    /// Feed a message straight back into `update()`.
    Msg(M),
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Deliver `msg` after `after`, owned by `scope`.
    Delay {
        after: Duration,
        scope: ScopeId,
        msg: M,
    },
    /// Cancel every pending delayed message in a scope.
    CancelScope(ScopeId),
    /// Emit an operator-facing log line.
    Log(String),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Delay { after, scope, msg } => f
                .debug_struct("Delay")
                .field("after", after)
                .field("scope", scope)
                .field("msg", msg)
                .finish(),
            Self::CancelScope(scope) => f.debug_tuple("CancelScope").field(scope).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a delayed message owned by `scope`.
    #[inline]
    pub fn delay(after: Duration, scope: ScopeId, msg: M) -> Self {
        Self::Delay { after, scope, msg }
    }

    /// Create a batch of commands; empty and singleton batches collapse.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Self::None))
            .collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }
}

/// Couples a model with a scheduler and executes command trees.
///
/// Single-threaded and event-driven: one message is processed at a
/// time, and the only asynchrony is the scheduler's delayed messages.
pub struct Runtime<M: Model> {
    model: M,
    scheduler: Scheduler<M::Message>,
    running: bool,
}

impl<M: Model> Runtime<M> {
    /// Wrap a model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            scheduler: Scheduler::new(),
            running: true,
        }
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Whether `Cmd::Quit` has been executed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Feed one message through `update()` and execute the resulting
    /// command tree.
    pub fn dispatch(&mut self, msg: M::Message, now: Instant) {
        let cmd = self.model.update(msg);
        self.exec(cmd, now);
    }

    /// Fire every timer due at `now`. Fired messages run through
    /// `dispatch`, so they may themselves schedule or cancel timers.
    pub fn poll(&mut self, now: Instant) {
        loop {
            let due = self.scheduler.due(now);
            if due.is_empty() {
                return;
            }
            for msg in due {
                self.dispatch(msg, now);
            }
        }
    }

    /// Render the current state.
    #[must_use]
    pub fn view(&self) -> Document {
        self.model.view()
    }

    fn exec(&mut self, cmd: Cmd<M::Message>, now: Instant) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(msg) => self.dispatch(msg, now),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.exec(cmd, now);
                }
            }
            Cmd::Delay { after, scope, msg } => {
                self.scheduler.schedule(now, after, scope, msg);
            }
            Cmd::CancelScope(scope) => {
                self.scheduler.cancel_scope(scope);
            }
            Cmd::Log(line) => info!(target: "enx", "{line}"),
        }
    }
}
