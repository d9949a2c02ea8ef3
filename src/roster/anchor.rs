//! Inference of the roster's "today".
//!
//! The roster has no marker for the current day, so the anchor is derived
//! from the shape of the duty cycle. Days on or before the anchor have
//! already been flown; days after it are upcoming. The caller supplies the
//! real current date so the result is reproducible.

use super::models::Day;
use crate::utils::time::{calendar_date, days_apart, shift_days};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

/// How close a roster date must be to `now` for `now` to be trusted as the anchor
const NEAR_NOW_DAYS: i64 = 3;

/// Which rule produced the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRule {
    /// The whole roster lies before `now`
    Historical,
    /// Day after the last day off, with work following it
    AfterDayOff,
    /// Day off closes the roster; anchored before the first flying day
    CompletedCycle,
    /// Roster spans months without a usable day off
    CrossMonth,
    /// A roster date is close to `now` and `now` precedes the first working day
    NearNow,
    /// Day before the first working day
    BeforeFirstWorkingDay,
    /// `now`, moved into the roster's month when needed
    Fallback,
}

/// The inferred "today" and the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub date: NaiveDate,
    pub rule: AnchorRule,
}

/// Infer the anchor from days sorted by date
pub fn detect_anchor(days: &[Day], now: NaiveDate) -> Anchor {
    let anchor = choose_anchor(days, now);
    debug!("Anchor {} via {:?}", anchor.date, anchor.rule);
    anchor
}

fn choose_anchor(days: &[Day], now: NaiveDate) -> Anchor {
    let (Some(earliest), Some(latest)) = (days.first(), days.last()) else {
        return Anchor {
            date: now,
            rule: AnchorRule::Fallback,
        };
    };

    let first_flying = days
        .iter()
        .find(|day| day.is_working_day() && day.has_flights());

    if latest.date < now {
        let date = match first_flying {
            Some(day) => shift_days(day.date, -1),
            None => shift_days(earliest.date, -1),
        };
        return Anchor {
            date,
            rule: AnchorRule::Historical,
        };
    }

    if let Some(off_idx) = days.iter().rposition(|day| !day.is_working_day()) {
        let work_follows = days[off_idx + 1..].iter().any(Day::is_working_day);

        if work_follows {
            return Anchor {
                date: shift_days(days[off_idx].date, 1),
                rule: AnchorRule::AfterDayOff,
            };
        }

        if let Some(day) = first_flying {
            return Anchor {
                date: shift_days(day.date, -1),
                rule: AnchorRule::CompletedCycle,
            };
        }
    }

    let months: BTreeSet<(i32, u32)> = days
        .iter()
        .map(|day| (day.date.year(), day.date.month()))
        .collect();

    if months.len() > 1 {
        // Two days back so every roster day counts as upcoming
        return Anchor {
            date: shift_days(earliest.date, -2),
            rule: AnchorRule::CrossMonth,
        };
    }

    let first_working = days.iter().find(|day| day.is_working_day());
    let near_now = days
        .iter()
        .any(|day| days_apart(day.date, now) <= NEAR_NOW_DAYS);

    if near_now {
        if let Some(day) = first_working {
            if now < day.date {
                return Anchor {
                    date: now,
                    rule: AnchorRule::NearNow,
                };
            }
        }
    }

    if let Some(day) = first_working {
        return Anchor {
            date: shift_days(day.date, -1),
            rule: AnchorRule::BeforeFirstWorkingDay,
        };
    }

    let date = if now.month() != earliest.date.month() || now.year() != earliest.date.year() {
        calendar_date(earliest.date.year(), earliest.date.month0(), now.day())
    } else {
        now
    };

    Anchor {
        date,
        rule: AnchorRule::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::models::{DayKind, Flight, LabelForm};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(date: NaiveDate, kind: DayKind, destinations: &[&str]) -> Day {
        let mut day = Day::new(
            format!("{:02} {}", date.day(), date.weekday()),
            LabelForm::Simple,
            date.day(),
            date,
        );
        day.kind = kind;
        day.flights = destinations
            .iter()
            .map(|to| Flight {
                code: "IU100".to_string(),
                departure_time: "0700".to_string(),
                origin: "CGK".to_string(),
                destination: to.to_string(),
                arrival_time: "0900".to_string(),
            })
            .collect();
        day
    }

    #[test]
    fn test_empty_roster_uses_now() {
        let now = ymd(2025, 7, 28);
        assert_eq!(
            detect_anchor(&[], now),
            Anchor {
                date: now,
                rule: AnchorRule::Fallback
            }
        );
    }

    #[test]
    fn test_historical_roster() {
        let days = vec![
            day(ymd(2025, 7, 29), DayKind::Off, &[]),
            day(ymd(2025, 7, 30), DayKind::Flying, &["BTH"]),
            day(ymd(2025, 7, 31), DayKind::Flying, &["CGK"]),
        ];
        let anchor = detect_anchor(&days, ymd(2025, 9, 1));
        assert_eq!(anchor.rule, AnchorRule::Historical);
        assert_eq!(anchor.date, ymd(2025, 7, 29));
    }

    #[test]
    fn test_historical_roster_without_flights() {
        let days = vec![
            day(ymd(2025, 7, 29), DayKind::Off, &[]),
            day(ymd(2025, 7, 30), DayKind::GroundDuty, &[]),
        ];
        let anchor = detect_anchor(&days, ymd(2025, 9, 1));
        assert_eq!(anchor.date, ymd(2025, 7, 28));
    }

    #[test]
    fn test_after_day_off() {
        let days = vec![
            day(ymd(2025, 7, 28), DayKind::Flying, &["BTH"]),
            day(ymd(2025, 7, 29), DayKind::Off, &[]),
            day(ymd(2025, 7, 30), DayKind::Flying, &["BTH"]),
        ];
        let anchor = detect_anchor(&days, ymd(2025, 7, 20));
        assert_eq!(anchor.rule, AnchorRule::AfterDayOff);
        assert_eq!(anchor.date, ymd(2025, 7, 30));
    }

    #[test]
    fn test_completed_cycle() {
        let days = vec![
            day(ymd(2025, 7, 28), DayKind::Flying, &["BTH"]),
            day(ymd(2025, 7, 29), DayKind::Flying, &["CGK"]),
            day(ymd(2025, 7, 30), DayKind::Off, &[]),
        ];
        let anchor = detect_anchor(&days, ymd(2025, 7, 20));
        assert_eq!(anchor.rule, AnchorRule::CompletedCycle);
        assert_eq!(anchor.date, ymd(2025, 7, 27));
    }

    #[test]
    fn test_cross_month_without_day_off() {
        let days = vec![
            day(ymd(2025, 7, 31), DayKind::Flying, &["BTH"]),
            day(ymd(2025, 8, 1), DayKind::Flying, &["CGK"]),
        ];
        let anchor = detect_anchor(&days, ymd(2025, 7, 1));
        assert_eq!(anchor.rule, AnchorRule::CrossMonth);
        assert_eq!(anchor.date, ymd(2025, 7, 29));
    }

    #[test]
    fn test_near_now() {
        let days = vec![
            day(ymd(2025, 7, 10), DayKind::Flying, &["BTH"]),
            day(ymd(2025, 7, 11), DayKind::Flying, &["CGK"]),
        ];
        let anchor = detect_anchor(&days, ymd(2025, 7, 8));
        assert_eq!(anchor.rule, AnchorRule::NearNow);
        assert_eq!(anchor.date, ymd(2025, 7, 8));
    }

    #[test]
    fn test_before_first_working_day() {
        let days = vec![
            day(ymd(2025, 7, 20), DayKind::Flying, &["BTH"]),
            day(ymd(2025, 7, 21), DayKind::Flying, &["CGK"]),
        ];
        // Far from now
        let anchor = detect_anchor(&days, ymd(2025, 7, 1));
        assert_eq!(anchor.rule, AnchorRule::BeforeFirstWorkingDay);
        assert_eq!(anchor.date, ymd(2025, 7, 19));

        // Close to now but now is already past the first working day
        let anchor = detect_anchor(&days, ymd(2025, 7, 21));
        assert_eq!(anchor.rule, AnchorRule::BeforeFirstWorkingDay);
        assert_eq!(anchor.date, ymd(2025, 7, 19));
    }

    #[test]
    fn test_fallback_moves_now_into_roster_month() {
        // Only an off day that is also the roster's end: nothing works after it and nothing flies
        let days = vec![day(ymd(2025, 7, 20), DayKind::Off, &[])];

        let anchor = detect_anchor(&days, ymd(2025, 5, 12));
        assert_eq!(anchor.rule, AnchorRule::Fallback);
        assert_eq!(anchor.date, ymd(2025, 7, 12));

        let anchor = detect_anchor(&days, ymd(2025, 7, 12));
        assert_eq!(anchor.date, ymd(2025, 7, 12));
    }
}
