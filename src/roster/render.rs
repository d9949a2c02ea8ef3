use super::models::{Flight, Period};
use crate::utils::time::format_date_id;
use serde::Serialize;

/// Headline numbers shown once a roster has been parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    /// First reported date, e.g. `30 Juli 2025`
    pub start: String,
    pub day_count: usize,
    pub ordinal_label: String,
}

impl PeriodSummary {
    pub fn from_period(period: &Period) -> Self {
        Self {
            start: period
                .days
                .first()
                .map(|day| format_date_id(day.date))
                .unwrap_or_else(|| period.start_label.clone()),
            day_count: period.days.len(),
            ordinal_label: period.ordinal_label.clone(),
        }
    }
}

/// `IU856 CGK-BTH (ETD 0730)`
pub fn format_flight(flight: &Flight) -> String {
    format!(
        "{} {}-{} (ETD {})",
        flight.code, flight.origin, flight.destination, flight.departure_time
    )
}

/// Route listing: one block per day with its flights
pub fn format_routes(period: &Period) -> String {
    let mut out = String::new();

    for day in &period.days {
        out.push_str(&format!("Pada tanggal {}:\n", format_date_id(day.date)));
        for flight in &day.flights {
            out.push_str(&format!("- {}\n", format_flight(flight)));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::models::{Day, LabelForm};
    use chrono::NaiveDate;

    fn flight(code: &str, from: &str, to: &str, etd: &str) -> Flight {
        Flight {
            code: code.to_string(),
            departure_time: etd.to_string(),
            origin: from.to_string(),
            destination: to.to_string(),
            arrival_time: "0000".to_string(),
        }
    }

    fn period() -> Period {
        let mut day = Day::new(
            "31 Thu".to_string(),
            LabelForm::Simple,
            31,
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
        );
        day.flights = vec![
            flight("IU856", "CGK", "BTH", "0730"),
            flight("IU857", "BTH", "CGK", "1200"),
        ];
        Period {
            days: vec![day],
            start_label: "31 Thu".to_string(),
            ordinal_label: "kedua".to_string(),
            completed_cycle_days_tomorrow: 2,
        }
    }

    #[test]
    fn test_format_flight() {
        assert_eq!(
            format_flight(&flight("IU856", "CGK", "BTH", "0730")),
            "IU856 CGK-BTH (ETD 0730)"
        );
    }

    #[test]
    fn test_format_routes() {
        assert_eq!(
            format_routes(&period()),
            "Pada tanggal 31 Juli 2025:\n- IU856 CGK-BTH (ETD 0730)\n- IU857 BTH-CGK (ETD 1200)\n\n"
        );
    }

    #[test]
    fn test_summary() {
        let summary = PeriodSummary::from_period(&period());
        assert_eq!(summary.start, "31 Juli 2025");
        assert_eq!(summary.day_count, 1);
        assert_eq!(summary.ordinal_label, "kedua");
    }
}
