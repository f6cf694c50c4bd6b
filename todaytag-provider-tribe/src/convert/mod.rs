mod from_tribe;
mod to_tribe;

pub use to_tribe::CategoryUpdate;

use chrono_tz::Tz;

/// Convert from API records to todaytag types.
///
/// `fallback_tz` is used when the record's timezone is not an IANA name.
pub trait FromTribe<T> {
    fn from_tribe(value: T, fallback_tz: Tz) -> anyhow::Result<Self>
    where
        Self: Sized;
}

/// Convert todaytag types into API request bodies.
pub trait ToTribe<T> {
    fn to_tribe(&self) -> T;
}

/// Wall-clock format used by the API for `start_date` and `end_date`.
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
