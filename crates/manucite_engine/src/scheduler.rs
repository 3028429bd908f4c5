/*
SPDX-License-Identifier: MPL-2.0
*/

//! Debounced recompute scheduling.
//!
//! Rapid edit bursts are coalesced into a single recomputation after a quiet
//! interval. The scheduler is an explicit {Idle, Pending} state machine over
//! an injectable millisecond clock rather than a platform timer, so the
//! "scan the current document at fire time, never a stale snapshot" contract
//! is testable without wall-clock sleeps. The host run loop drives it by
//! calling [`DebounceScheduler::run_due`].

use crate::document::CitationScan;
use crate::numbering::assign_numbers;
use crate::store::ReferenceStore;
use std::cell::Cell;
use std::time::Instant;
use tracing::{debug, trace};

/// Quiet interval between the last mutation and the recompute, in
/// milliseconds.
pub const DEFAULT_QUIET_MS: u64 = 100;

/// A monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time since process start. Used by the CLI.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// A hand-advanced logical clock for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No recompute pending.
    Idle,
    /// A recompute will run once the deadline passes without further
    /// mutations.
    Pending { deadline_ms: u64 },
}

/// Outcome of one [`DebounceScheduler::run_due`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeOutcome {
    /// Nothing pending, or the quiet interval has not elapsed yet.
    NotDue,
    /// Recompute ran and the store was updated.
    Published,
    /// Recompute ran but produced a value-equal map; the write was skipped.
    Unchanged,
}

/// Coalesces document mutations into debounced recomputations.
#[derive(Debug)]
pub struct DebounceScheduler {
    quiet_ms: u64,
    state: SchedulerState,
}

impl Default for DebounceScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl DebounceScheduler {
    pub fn new() -> Self {
        Self::with_quiet_ms(DEFAULT_QUIET_MS)
    }

    pub fn with_quiet_ms(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Record a document mutation: cancel any pending recompute and arm the
    /// timer afresh.
    pub fn on_mutation(&mut self, now_ms: u64) {
        let deadline_ms = now_ms + self.quiet_ms;
        trace!(deadline_ms, "mutation observed, recompute (re)scheduled");
        self.state = SchedulerState::Pending { deadline_ms };
    }

    /// Whether the armed deadline has passed.
    pub fn due(&self, now_ms: u64) -> bool {
        match self.state {
            SchedulerState::Pending { deadline_ms } => now_ms >= deadline_ms,
            SchedulerState::Idle => false,
        }
    }

    /// Cancel any pending recompute (teardown path).
    pub fn cancel(&mut self) {
        if self.state != SchedulerState::Idle {
            trace!("pending recompute cancelled");
        }
        self.state = SchedulerState::Idle;
    }

    /// Run the recompute pipeline if the quiet interval has elapsed.
    ///
    /// The document is scanned as it is *now*, not as it was when the timer
    /// was armed. Exactly one recompute runs per quiet period; the scheduler
    /// returns to Idle afterwards.
    pub fn run_due<D: CitationScan + ?Sized>(
        &mut self,
        now_ms: u64,
        document: &D,
        store: &mut ReferenceStore,
    ) -> RecomputeOutcome {
        if !self.due(now_ms) {
            return RecomputeOutcome::NotDue;
        }
        self.state = SchedulerState::Idle;
        recompute(document, store)
    }
}

/// The recompute pipeline: scan → assign → change-detect → publish.
///
/// Pure with respect to the document; the only side effect is the gated
/// store write.
pub fn recompute<D: CitationScan + ?Sized>(
    document: &D,
    store: &mut ReferenceStore,
) -> RecomputeOutcome {
    let map = assign_numbers(document);
    debug!(distinct_ids = map.len(), "recompute complete");
    if store.publish_numbering_map(map) {
        RecomputeOutcome::Published
    } else {
        RecomputeOutcome::Unchanged
    }
}
