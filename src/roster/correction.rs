use super::models::{Day, LabelForm};
use super::timestamps::TimestampMapping;
use crate::utils::time::calendar_date;
use chrono::Datelike;
use tracing::debug;

/// Re-check every `DD Weekday` day against the timestamp mapping and fix its month.
///
/// Explicit-month days are left alone. Returns how many dates changed;
/// running it twice changes nothing the second time.
pub fn correct_dates(days: &mut [Day], timestamps: &TimestampMapping, reference_year: i32) -> usize {
    let mut corrections = 0;

    for day in days.iter_mut().filter(|day| day.form == LabelForm::Simple) {
        let Some(&month) = timestamps.get(&day.day_number) else {
            continue;
        };

        let corrected = calendar_date(reference_year, month, day.day_number);
        if day.date.month0() != month && day.date != corrected {
            debug!("Correcting {} from {} to {}", day.label, day.date, corrected);
            day.date = corrected;
            corrections += 1;
        }
    }

    corrections
}

/// Sort days by date; on equal dates the explicit-month header comes first
pub fn sort_days(days: &mut [Day]) {
    days.sort_by(|a, b| {
        a.date.cmp(&b.date).then_with(|| {
            let a_explicit = a.form == LabelForm::ExplicitMonth;
            let b_explicit = b.form == LabelForm::ExplicitMonth;
            b_explicit.cmp(&a_explicit)
        })
    });
}
