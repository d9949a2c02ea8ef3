use chrono::{Datelike, Duration, NaiveDate};

/// English month names as printed on the roster, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Indonesian month names used when drafting the leave message
pub const INDONESIAN_MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Map an English month name (any case) to its zero-based index
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name.trim()))
        .map(|idx| idx as u32)
}

/// Build a date from a year, a zero-based month and a day number.
///
/// Never fails: a day number past the end of the month rolls into the next
/// month, and day `0` is the last day of the previous month. Months past 11
/// roll into the following year.
pub fn calendar_date(year: i32, month0: u32, day: u32) -> NaiveDate {
    let year = year + (month0 / 12) as i32;
    let month = month0 % 12 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();

    first
        .checked_add_signed(Duration::days(day as i64 - 1))
        .unwrap_or(first)
}

/// Shift a date by a (possibly negative) number of days, saturating at the calendar bounds
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Absolute distance between two dates in whole days
pub fn days_apart(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days().abs()
}

/// Format a date as `D <Indonesian month> YYYY`, e.g. `1 Agustus 2025`
pub fn format_date_id(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        INDONESIAN_MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}
