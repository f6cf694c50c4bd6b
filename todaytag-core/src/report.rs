//! Human-readable summary of a run.

use tracing::{error, info};

use crate::error::ReconcileError;
use crate::outcome::{EventOutcome, Outcome, Phase, PhaseReport, RunReport, Terminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub level: Level,
    pub message: String,
}

impl ReportLine {
    fn info(message: String) -> Self {
        ReportLine {
            level: Level::Info,
            message,
        }
    }

    fn error(message: String) -> Self {
        ReportLine {
            level: Level::Error,
            message,
        }
    }
}

pub struct RunReporter;

impl RunReporter {
    /// One line per event, one per empty phase, one per aborted phase, then a summary.
    pub fn lines(report: &RunReport) -> Vec<ReportLine> {
        let mut lines = Vec::new();

        for phase in &report.phases {
            if phase.is_noop() {
                lines.push(ReportLine::info(noop_message(phase.phase).to_string()));
                continue;
            }
            lines.extend(phase.events.iter().map(|e| event_line(phase.phase, e)));
        }

        match &report.terminal {
            Terminal::Done => lines.push(ReportLine::info(summary(&report.phases))),
            Terminal::Failed(err) => lines.push(ReportLine::error(abort_message(err))),
        }

        lines
    }

    /// Log every line and return the process exit code.
    pub fn emit(report: &RunReport) -> u8 {
        for line in Self::lines(report) {
            match line.level {
                Level::Info => info!("{}", line.message),
                Level::Error => error!("{}", line.message),
            }
        }
        report.exit_code()
    }
}

fn noop_message(phase: Phase) -> &'static str {
    match phase {
        Phase::ClearStale => "No events found to reset with category 'today'",
        Phase::ApplyToday => "No events found today that would need the category 'today'",
    }
}

fn event_line(phase: Phase, event: &EventOutcome) -> ReportLine {
    let subject = format!("event {} ({})", event.url, event.event_id);
    match (&event.outcome, phase) {
        (Outcome::Succeeded, Phase::ClearStale) => {
            ReportLine::info(format!("Removed category 'today' from {subject}"))
        }
        (Outcome::Succeeded, Phase::ApplyToday) => {
            ReportLine::info(format!("Added category 'today' to {subject}"))
        }
        (Outcome::Skipped, _) => ReportLine::info(format!(
            "Skipped {subject}, categories would be {}",
            event.categories
        )),
        (Outcome::Failed(failure), Phase::ClearStale) => ReportLine::error(format!(
            "Could not remove category 'today' from {subject}: {}",
            failure.source
        )),
        (Outcome::Failed(failure), Phase::ApplyToday) => ReportLine::error(format!(
            "Could not set category 'today' for {subject}: {}",
            failure.source
        )),
    }
}

fn abort_message(err: &ReconcileError) -> String {
    match err {
        ReconcileError::MissingCredential { .. } => format!("{err}. Aborting before any request"),
        ReconcileError::QueryFailure { .. } => format!("{err}. Run aborted"),
    }
}

fn summary(phases: &[PhaseReport]) -> String {
    let parts: Vec<String> = phases
        .iter()
        .map(|p| {
            format!(
                "phase {}: {} succeeded, {} failed, {} skipped",
                p.phase.number(),
                p.succeeded(),
                p.failed(),
                p.skipped()
            )
        })
        .collect();
    format!("Reconciliation finished ({})", parts.join("; "))
}
