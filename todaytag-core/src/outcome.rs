//! Per-event and per-run results of a reconciliation.

use std::fmt;

use crate::category::CategorySet;
use crate::constants::exit_code;
use crate::error::{MutationFailure, ReconcileError};
use crate::event::EventId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Remove the tag from every event still holding it.
    ClearStale,
    /// Add the tag to every event taking place today.
    ApplyToday,
}

impl Phase {
    pub fn number(&self) -> u8 {
        match self {
            Phase::ClearStale => 1,
            Phase::ApplyToday => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::ClearStale => write!(f, "phase 1 (clear stale tag)"),
            Phase::ApplyToday => write!(f, "phase 2 (apply today's tag)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No write was attempted.
    Skipped,
    Succeeded,
    Failed(MutationFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    pub event_id: EventId,
    pub url: String,
    /// Category set the event was (or would have been) written with.
    pub categories: CategorySet,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: Phase,
    pub events: Vec<EventOutcome>,
}

impl PhaseReport {
    pub fn new(phase: Phase) -> Self {
        PhaseReport {
            phase,
            events: Vec::new(),
        }
    }

    /// The query returned nothing, so nothing was attempted.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Succeeded))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.outcome)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    /// Ran to completion. Individual event failures do not change this.
    Done,
    Failed(ReconcileError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Reports of the phases that got past their query, in order.
    pub phases: Vec<PhaseReport>,
    pub terminal: Terminal,
}

impl RunReport {
    /// A run stopped before any phase started.
    pub fn aborted(err: ReconcileError) -> Self {
        RunReport {
            phases: Vec::new(),
            terminal: Terminal::Failed(err),
        }
    }

    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn exit_code(&self) -> u8 {
        match &self.terminal {
            Terminal::Done => exit_code::OK,
            Terminal::Failed(err) => err.exit_code(),
        }
    }
}
