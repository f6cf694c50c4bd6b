use todaytag_core::{CategorySet, Event};

use super::{DATE_TIME_FORMAT, ToTribe};
use crate::types::EventPayload;

/// An event together with the category set it should be stored with.
pub struct CategoryUpdate<'a> {
    pub event: &'a Event,
    pub categories: &'a CategorySet,
}

impl ToTribe<EventPayload> for CategoryUpdate<'_> {
    fn to_tribe(&self) -> EventPayload {
        let window = &self.event.window;
        EventPayload {
            title: self.event.title.clone(),
            start_date: window.start.format(DATE_TIME_FORMAT).to_string(),
            end_date: window.end.format(DATE_TIME_FORMAT).to_string(),
            all_day: window.all_day,
            timezone: window.timezone.name().to_string(),
            categories: self.categories.iter().map(|id| id.0).collect(),
        }
    }
}
