use super::cycle::CycleStatus;
use super::models::{Day, Period};
use chrono::NaiveDate;
use tracing::debug;

/// Upcoming days worth reporting: after the anchor, working, not skipped, with flights
pub fn future_days(days: &[Day], anchor: NaiveDate) -> Vec<&Day> {
    days.iter()
        .filter(|day| {
            day.date > anchor
                && day.is_working_day()
                && !day.skipped_for_flights()
                && day.has_flights()
        })
        .collect()
}

/// Build the reported period from days sorted by date.
///
/// Upcoming days are taken in order up to and including the first one whose
/// last flight lands at `home_base`. Returns `None` when nothing is upcoming.
pub fn build_period(
    days: &[Day],
    anchor: NaiveDate,
    cycle: &CycleStatus,
    home_base: &str,
) -> Option<Period> {
    let mut period_days = Vec::new();

    for day in future_days(days, anchor) {
        period_days.push(day.clone());

        if day
            .last_flight()
            .is_some_and(|flight| flight.destination == home_base)
        {
            debug!("{} returns to {}, closing the period", day.label, home_base);
            break;
        }
    }

    let start_label = period_days.first()?.label.clone();

    Some(Period {
        days: period_days,
        start_label,
        ordinal_label: cycle.tomorrow_ordinal().to_string(),
        completed_cycle_days_tomorrow: cycle.tomorrow_number(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::models::{DayKind, Flight, LabelForm};

    fn day(d: u32, kind: DayKind, destinations: &[&str]) -> Day {
        let mut day = Day::new(
            format!("{d:02} Day"),
            LabelForm::Simple,
            d,
            NaiveDate::from_ymd_opt(2025, 7, d).unwrap(),
        );
        day.kind = kind;
        day.flights = destinations
            .iter()
            .map(|to| Flight {
                code: "IU100".to_string(),
                departure_time: "0700".to_string(),
                origin: "XXX".to_string(),
                destination: to.to_string(),
                arrival_time: "0900".to_string(),
            })
            .collect();
        day
    }

    fn anchor(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn cycle() -> CycleStatus {
        CycleStatus {
            cycle_start_index: 0,
            completed_working_days: 1,
        }
    }

    #[test]
    fn test_future_days_filter() {
        let days = vec![
            day(20, DayKind::Flying, &["BTH"]),
            day(21, DayKind::Off, &[]),
            day(22, DayKind::GroundDuty, &[]),
            day(23, DayKind::Flying, &[]),
            day(24, DayKind::Flying, &["KNO"]),
        ];
        let labels: Vec<&str> = future_days(&days, anchor(20))
            .iter()
            .map(|d| d.label.as_str())
            .collect();
        assert_eq!(labels, vec!["24 Day"]);
    }

    #[test]
    fn test_period_stops_at_home_base() {
        let days = vec![
            day(20, DayKind::Flying, &["BTH"]),
            day(21, DayKind::Flying, &["KNO", "CGK"]),
            day(22, DayKind::Flying, &["DPS"]),
        ];
        let period = build_period(&days, anchor(19), &cycle(), "CGK").unwrap();
        assert_eq!(period.days.len(), 2);
        assert_eq!(period.start_label, "20 Day");
        assert_eq!(period.ordinal_label, "kedua");
        assert_eq!(period.completed_cycle_days_tomorrow, 2);
    }

    #[test]
    fn test_home_base_must_be_last_leg() {
        let days = vec![
            day(20, DayKind::Flying, &["CGK", "BTH"]),
            day(21, DayKind::Flying, &["DPS"]),
        ];
        let period = build_period(&days, anchor(19), &cycle(), "CGK").unwrap();
        assert_eq!(period.days.len(), 2);
    }

    #[test]
    fn test_no_future_days() {
        let days = vec![day(20, DayKind::Flying, &["CGK"])];
        assert!(build_period(&days, anchor(20), &cycle(), "CGK").is_none());
        assert!(build_period(&[], anchor(20), &cycle(), "CGK").is_none());
    }
}
