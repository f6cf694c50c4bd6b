//! Two-phase reconciliation of the "today" tag.
//!
//! Phase 1 clears the tag from every event that still carries it, phase 2
//! sets it on every event taking place today. Phase 2 starts only after
//! phase 1 has finished. A failed query aborts the run; a failed write is
//! recorded and the loop moves on to the next event.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::category::{CategorySet, TodayTag};
use crate::error::{MutationFailure, ReconcileError};
use crate::event::Event;
use crate::filter::ReconciliationFilter;
use crate::outcome::{EventOutcome, Outcome, Phase, PhaseReport, RunReport, Terminal};
use crate::remote::{CategoryMutator, EventQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Phase1Running,
    Phase2Running,
    Done,
    /// The query of the given phase failed.
    Failed(Phase),
}

pub struct ReconciliationEngine {
    query: Arc<dyn EventQuery>,
    mutator: Arc<dyn CategoryMutator>,
    tag: TodayTag,
    dry_run: bool,
    state: RunState,
}

impl ReconciliationEngine {
    pub fn new(
        query: Arc<dyn EventQuery>,
        mutator: Arc<dyn CategoryMutator>,
        tag: TodayTag,
    ) -> Self {
        ReconciliationEngine {
            query,
            mutator,
            tag,
            dry_run: false,
            state: RunState::Idle,
        }
    }

    /// Compute target sets without writing anything back.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run both phases for the calendar day `today`.
    pub async fn run(&mut self, today: NaiveDate) -> RunReport {
        let mut phases = Vec::with_capacity(2);

        self.transition(RunState::Phase1Running);
        let filter = ReconciliationFilter::stale_tags(&self.tag, today);
        match self.run_phase(Phase::ClearStale, filter).await {
            Ok(report) => phases.push(report),
            Err(err) => return self.abort(Phase::ClearStale, phases, err),
        }

        self.transition(RunState::Phase2Running);
        let filter = ReconciliationFilter::occurring_on(today);
        match self.run_phase(Phase::ApplyToday, filter).await {
            Ok(report) => phases.push(report),
            Err(err) => return self.abort(Phase::ApplyToday, phases, err),
        }

        self.transition(RunState::Done);
        RunReport {
            phases,
            terminal: Terminal::Done,
        }
    }

    async fn run_phase(
        &self,
        phase: Phase,
        filter: ReconciliationFilter,
    ) -> Result<PhaseReport, ReconcileError> {
        info!("Querying {} for {}", filter, phase);
        let events = self
            .query
            .query(&filter)
            .await
            .map_err(|source| ReconcileError::QueryFailure { phase, source })?;

        let mut report = PhaseReport::new(phase);
        if events.is_empty() {
            return Ok(report);
        }

        info!(count = events.len(), "Found events for {}", phase);
        for event in &events {
            // The backend's result stays authoritative; a mismatch is only reported.
            if !filter.matches(event) {
                warn!(event_id = %event.id, "Event {} is outside {}", event.url, filter);
            }
            let target = self.target_categories(phase, event);
            report.events.push(self.apply(phase, event, target).await);
        }

        Ok(report)
    }

    fn target_categories(&self, phase: Phase, event: &Event) -> CategorySet {
        match phase {
            // Written even if the tag was already absent: the query result is authoritative.
            Phase::ClearStale => self.tag.remove_from(&event.categories),
            Phase::ApplyToday => self.tag.add_to(&event.categories),
        }
    }

    async fn apply(&self, phase: Phase, event: &Event, target: CategorySet) -> EventOutcome {
        let action = match phase {
            Phase::ClearStale => "remove category 'today' from",
            Phase::ApplyToday => "set category 'today' for",
        };

        let outcome = if self.dry_run {
            info!(
                event_id = %event.id,
                categories = %target,
                "Dry run: would {} event {}", action, event.url
            );
            Outcome::Skipped
        } else {
            info!(event_id = %event.id, "Trying to {} event {}", action, event.url);
            match self.mutator.apply(event, &target).await {
                Ok(()) => Outcome::Succeeded,
                Err(source) => Outcome::Failed(MutationFailure {
                    event_id: event.id,
                    source,
                }),
            }
        };

        EventOutcome {
            event_id: event.id,
            url: event.url.clone(),
            categories: target,
            outcome,
        }
    }

    fn abort(&mut self, phase: Phase, phases: Vec<PhaseReport>, err: ReconcileError) -> RunReport {
        self.transition(RunState::Failed(phase));
        RunReport {
            phases,
            terminal: Terminal::Failed(err),
        }
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "Run state changed");
        self.state = next;
    }
}
