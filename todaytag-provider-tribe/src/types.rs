//! Wire types of The Events Calendar REST API (`tribe/events/v1`).
//!
//! Only the fields todaytag reads or has to send back are modelled; serde
//! ignores the rest of each record.

use serde::{Deserialize, Serialize};

// =============================================================================
// Responses
// =============================================================================

/// One page of `GET /events`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsPage {
    #[serde(default)]
    pub events: Vec<TribeEvent>,
    /// Absent on the last page.
    #[serde(default)]
    pub next_rest_url: Option<String>,
}

/// An event record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct TribeEvent {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub all_day: bool,
    /// IANA name, or a `UTC+2` style offset on sites without a named zone.
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub categories: Vec<TribeCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TribeCategory {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /events/{id}`.
///
/// The endpoint validates the whole record, so the fields it requires are
/// sent along with the new categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub all_day: bool,
    pub timezone: String,
    pub categories: Vec<u64>,
}
