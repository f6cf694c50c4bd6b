//! Core of todaytag.
//!
//! Keeps a single "today" category on a calendar's events in line with the
//! current date. A run clears the category from every event that still holds
//! it, then sets it on every event taking place today:
//! - `category` holds the category set and the tag codec
//! - `remote` defines the collaborators that talk to the calendar backend
//! - `reconcile` drives the two phases and collects per-event outcomes
//! - `report` turns those outcomes into log lines and an exit status

pub mod category;
pub mod constants;
pub mod credential;
pub mod error;
pub mod event;
pub mod filter;
pub mod outcome;
pub mod reconcile;
pub mod remote;
pub mod report;

pub use category::{CategoryId, CategorySet, TodayTag};
pub use credential::Credential;
pub use error::{MutationFailure, ReconcileError, RemoteError, RemoteResult};
pub use event::{Event, EventId, OccurrenceWindow};
pub use filter::ReconciliationFilter;
pub use outcome::{EventOutcome, Outcome, Phase, PhaseReport, RunReport, Terminal};
pub use reconcile::{ReconciliationEngine, RunState};
pub use remote::{CategoryMutator, EventQuery};
pub use report::RunReporter;
