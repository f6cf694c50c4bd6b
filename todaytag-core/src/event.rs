//! Backend-neutral event snapshot.
//!
//! Providers convert their API records into these types; the engine works
//! exclusively with them. A snapshot lives for one run only.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::category::CategorySet;

/// Identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// When an event takes place, as wall-clock times in its own timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub timezone: Tz,
    pub all_day: bool,
}

impl OccurrenceWindow {
    /// Whether any part of the event falls on `day`.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start.date() <= day && day <= self.end.date()
    }

    /// Whether the event overlaps the inclusive day band `from..=to`.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start.date() <= to && self.end.date() >= from
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    /// Public page of the event, used to identify it in logs.
    pub url: String,
    pub title: String,
    pub window: OccurrenceWindow,
    pub categories: CategorySet,
}
