use super::context::DEFAULT_MONTH;
use super::timestamps::TimestampMapping;
use crate::utils::time::calendar_date;
use chrono::{NaiveDate, Weekday};

/// What a day header tells us about its date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDescriptor {
    pub day_number: u32,
    /// Zero-based month named in the header itself
    pub explicit_month: Option<u32>,
    pub weekday: Option<Weekday>,
}

/// Signals collected from the rest of the roster
#[derive(Debug, Clone, Copy)]
pub struct ResolveHints<'a> {
    pub context_month: Option<u32>,
    pub timestamps: &'a TimestampMapping,
    pub reference_year: i32,
}

/// Pick the month for a day and build its date.
///
/// Priority: month in the header, then the timestamp mapping, then the context
/// month, then July. Always returns a date.
pub fn resolve_date(descriptor: &DayDescriptor, hints: &ResolveHints<'_>) -> NaiveDate {
    let month = descriptor
        .explicit_month
        .or_else(|| hints.timestamps.get(&descriptor.day_number).copied())
        .or(hints.context_month)
        .unwrap_or(DEFAULT_MONTH);

    calendar_date(hints.reference_year, month, descriptor.day_number)
}
