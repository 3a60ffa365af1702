//! Cancellable delayed-message scheduler.
//!
//! # Invariants
//!
//! 1. **No orphan timers**: cancelling a scope removes every pending
//!    task in that scope; a task can never fire after its owning scope
//!    was cancelled.
//!
//! 2. **Deterministic order**: tasks due at the same instant fire in
//!    schedule order.
//!
//! 3. **Injected time**: the scheduler never samples a clock. Callers
//!    pass `now` in, so tests drive a virtual clock.

use std::time::{Duration, Instant};

use tracing::debug;

/// Identifies the owner of a scheduled task (one scope per page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

#[derive(Debug)]
struct Scheduled<M> {
    fire_at: Instant,
    seq: u64,
    scope: ScopeId,
    msg: M,
}

/// Pending delayed messages.
#[derive(Debug)]
pub struct Scheduler<M> {
    pending: Vec<Scheduled<M>>,
    seq: u64,
}

impl<M> Default for Scheduler<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Scheduler<M> {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            seq: 0,
        }
    }

    /// Schedule `msg` to fire `after` the given `now`, owned by `scope`.
    pub fn schedule(&mut self, now: Instant, after: Duration, scope: ScopeId, msg: M) {
        self.seq += 1;
        debug!(scope = scope.0, after_ms = after.as_millis() as u64, "timer scheduled");
        self.pending.push(Scheduled {
            fire_at: now + after,
            seq: self.seq,
            scope,
            msg,
        });
    }

    /// Drop every pending task owned by `scope`. Returns the number of
    /// tasks cancelled.
    pub fn cancel_scope(&mut self, scope: ScopeId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|task| task.scope != scope);
        let cancelled = before - self.pending.len();
        if cancelled > 0 {
            debug!(scope = scope.0, cancelled, "timers cancelled");
        }
        cancelled
    }

    /// Remove and return every message due at `now`, in firing order.
    pub fn due(&mut self, now: Instant) -> Vec<M> {
        let mut ready: Vec<Scheduled<M>> = Vec::new();
        let mut rest: Vec<Scheduled<M>> = Vec::new();
        for task in self.pending.drain(..) {
            if task.fire_at <= now {
                ready.push(task);
            } else {
                rest.push(task);
            }
        }
        self.pending = rest;
        ready.sort_by_key(|task| (task.fire_at, task.seq));
        ready.into_iter().map(|task| task.msg).collect()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|task| task.fire_at).min()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ScopeId = ScopeId(1);
    const B: ScopeId = ScopeId(2);

    #[test]
    fn fires_only_when_due() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, Duration::from_millis(100), A, "x");

        assert!(sched.due(start).is_empty());
        assert!(sched.due(start + Duration::from_millis(99)).is_empty());
        assert_eq!(sched.due(start + Duration::from_millis(100)), vec!["x"]);
        assert!(sched.is_empty());
    }

    #[test]
    fn cancel_scope_drops_only_that_scope() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, Duration::from_millis(10), A, "a");
        sched.schedule(start, Duration::from_millis(10), B, "b");
        sched.schedule(start, Duration::from_millis(20), A, "a2");

        assert_eq!(sched.cancel_scope(A), 2);
        assert_eq!(sched.due(start + Duration::from_millis(50)), vec!["b"]);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, Duration::from_millis(10), A, "a");
        sched.cancel_scope(A);
        assert!(sched.due(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn same_deadline_fires_in_schedule_order() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, Duration::from_millis(10), A, 1);
        sched.schedule(start, Duration::from_millis(10), A, 2);
        sched.schedule(start, Duration::from_millis(5), A, 3);
        assert_eq!(sched.due(start + Duration::from_millis(10)), vec![3, 1, 2]);
    }

    #[test]
    fn next_deadline_is_earliest() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        assert_eq!(sched.next_deadline(), None);
        sched.schedule(start, Duration::from_millis(30), A, "late");
        sched.schedule(start, Duration::from_millis(10), B, "early");
        assert_eq!(
            sched.next_deadline(),
            Some(start + Duration::from_millis(10))
        );
    }
}
