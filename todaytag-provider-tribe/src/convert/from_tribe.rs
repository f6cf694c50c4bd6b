use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use todaytag_core::{CategoryId, Event, EventId, OccurrenceWindow};

use super::{DATE_TIME_FORMAT, FromTribe};
use crate::types::TribeEvent;

impl FromTribe<TribeEvent> for Event {
    fn from_tribe(event: TribeEvent, fallback_tz: Tz) -> Result<Self> {
        let start = parse_wall_clock(&event.start_date)
            .with_context(|| format!("Event {} has an invalid start_date", event.id))?;
        let end = parse_wall_clock(&event.end_date)
            .with_context(|| format!("Event {} has an invalid end_date", event.id))?;

        let timezone = event.timezone.parse::<Tz>().unwrap_or(fallback_tz);

        Ok(Event {
            id: EventId(event.id),
            url: event.url,
            title: event.title,
            window: OccurrenceWindow {
                start,
                end,
                timezone,
                all_day: event.all_day,
            },
            categories: event.categories.iter().map(|c| CategoryId(c.id)).collect(),
        })
    }
}

fn parse_wall_clock(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .with_context(|| format!("'{}' is not in the form YYYY-MM-DD HH:MM:SS", s))
}
