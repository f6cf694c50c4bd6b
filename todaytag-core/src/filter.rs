//! Selection of the events each phase works on.

use std::fmt;

use chrono::{Months, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::category::{CategoryId, TodayTag};
use crate::constants::STALE_TAG_WINDOW_MONTHS;
use crate::event::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationFilter {
    /// Events carrying `tag` whose window overlaps `from..=to`.
    TaggedWithin {
        tag: CategoryId,
        from: NaiveDate,
        to: NaiveDate,
    },
    /// Events taking place on `day`.
    OccurringOn { day: NaiveDate },
}

impl ReconciliationFilter {
    /// Clear pass: tagged events from a year before `today` to a year after.
    pub fn stale_tags(tag: &TodayTag, today: NaiveDate) -> Self {
        let band = Months::new(STALE_TAG_WINDOW_MONTHS);
        ReconciliationFilter::TaggedWithin {
            tag: tag.id(),
            from: today.checked_sub_months(band).unwrap_or(NaiveDate::MIN),
            to: today.checked_add_months(band).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Apply pass: everything happening on `today`.
    pub fn occurring_on(today: NaiveDate) -> Self {
        ReconciliationFilter::OccurringOn { day: today }
    }

    /// Local evaluation of the filter against a snapshot.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            ReconciliationFilter::TaggedWithin { tag, from, to } => {
                event.categories.contains(*tag) && event.window.intersects(*from, *to)
            }
            ReconciliationFilter::OccurringOn { day } => event.window.covers(*day),
        }
    }
}

impl fmt::Display for ReconciliationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconciliationFilter::TaggedWithin { tag, from, to } => write!(
                f,
                "events in category {} between {} and {}",
                tag,
                format_day(*from),
                format_day(*to)
            ),
            ReconciliationFilter::OccurringOn { day } => {
                write!(f, "events on {}", format_day(*day))
            }
        }
    }
}

/// YYYY-MM-DD, the form the backend expects for date parameters.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// The current calendar day in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}
