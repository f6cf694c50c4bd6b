//! Collaborators that talk to the calendar backend.
//!
//! Both return ordinary backend failures as [`RemoteError`] values; nothing
//! here panics on a non-success status.

use async_trait::async_trait;

use crate::category::CategorySet;
use crate::error::RemoteResult;
use crate::event::Event;
use crate::filter::ReconciliationFilter;

/// Fetches the events matching a filter, in backend order.
#[async_trait]
pub trait EventQuery: Send + Sync {
    async fn query(&self, filter: &ReconciliationFilter) -> RemoteResult<Vec<Event>>;
}

/// Replaces the stored category set of one event. One backend write per call.
#[async_trait]
pub trait CategoryMutator: Send + Sync {
    async fn apply(&self, event: &Event, categories: &CategorySet) -> RemoteResult<()>;
}
