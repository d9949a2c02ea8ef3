//! Compiled line patterns shared by the roster stages.
//!
//! Weekday and month names are matched case-insensitively; flight codes and
//! station codes must be upper case, which keeps prose lines out of the
//! flight patterns.

use lazy_static::lazy_static;
use regex::Regex;

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";
const WEEKDAYS: &str = "Mon|Tue|Wed|Thu|Fri|Sat|Sun";

/// Day-off and duty-cycle breaker codes
pub const NON_WORKING_CODES: [&str; 3] = ["OFF", "DO", "S/L"];

/// Simulator and training codes: a working day without scheduled flights
pub const GROUND_DUTY_CODES: [&str; 5] = ["R2T2", "R1T2", "R3T2", "SA1", "SA2"];

lazy_static! {
    /// `29 Tue`
    pub static ref SIMPLE_HEADER: Regex =
        Regex::new(&format!(r"(?i)^([0-9]{{1,2}})\s+({WEEKDAYS})$"))
            .expect("Failed to compile SIMPLE_HEADER regex");

    /// `August 01 Fri`
    pub static ref EXPLICIT_HEADER: Regex =
        Regex::new(&format!(r"(?i)^({MONTHS})\s+([0-9]{{1,2}})\s+({WEEKDAYS})$"))
            .expect("Failed to compile EXPLICIT_HEADER regex");

    /// A line holding nothing but a month name
    pub static ref STANDALONE_MONTH: Regex =
        Regex::new(&format!(r"(?i)^({MONTHS})$"))
            .expect("Failed to compile STANDALONE_MONTH regex");

    /// A month name anywhere in the line
    pub static ref ANY_MONTH: Regex =
        Regex::new(&format!(r"(?i)({MONTHS})"))
            .expect("Failed to compile ANY_MONTH regex");

    /// `IU856 0730 CGK BTH 0910`
    pub static ref FLIGHT: Regex =
        Regex::new(r"^([A-Z0-9]{2,})\s+([0-9]{4})\s+([A-Z]{3})\s+([A-Z]{3})\s+([0-9]{4})$")
            .expect("Failed to compile FLIGHT regex");

    /// Flight-shaped training entry, e.g. `R2T2 0800 CGK CGK 1200`
    pub static ref TRAINING_FLIGHT: Regex =
        Regex::new(r"^(R[0-9]+T[0-9]+)\s+([0-9]{4})\s+([A-Z]{3})\s+([A-Z]{3})\s+([0-9]{4})$")
            .expect("Failed to compile TRAINING_FLIGHT regex");

    /// First half of a split flight: the code alone
    pub static ref FLIGHT_CODE: Regex =
        Regex::new(r"^([A-Z0-9]{2,})$")
            .expect("Failed to compile FLIGHT_CODE regex");

    /// Second half of a split flight: `1200 BKS CGK 1315`
    pub static ref FLIGHT_DETAILS: Regex =
        Regex::new(r"^([0-9]{4})\s+([A-Z]{3})\s+([A-Z]{3})\s+([0-9]{4})$")
            .expect("Failed to compile FLIGHT_DETAILS regex");

    /// `29/07/2025 21:30`
    pub static ref DIRECT_TIMESTAMP: Regex =
        Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})\s+([0-9]{1,2}):([0-9]{2})")
            .expect("Failed to compile DIRECT_TIMESTAMP regex");

    /// `Rest : 28:55 (01/08/2025 05:00)`
    pub static ref REST_TIMESTAMP: Regex =
        Regex::new(r"Rest\s*:\s*[0-9]{1,2}:[0-9]{2}\s*\(([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})\s+([0-9]{1,2}):([0-9]{2})\)")
            .expect("Failed to compile REST_TIMESTAMP regex");

    /// Any `dd/mm/yyyy`
    pub static ref BARE_DATE: Regex =
        Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})")
            .expect("Failed to compile BARE_DATE regex");
}

/// Whether the line carries a day-off code
pub fn has_non_working_code(line: &str) -> bool {
    NON_WORKING_CODES.iter().any(|code| line.contains(code))
}

/// Whether the line carries a simulator or training code
pub fn has_ground_duty_code(line: &str) -> bool {
    GROUND_DUTY_CODES.iter().any(|code| line.contains(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        assert!(SIMPLE_HEADER.is_match("29 Tue"));
        assert!(SIMPLE_HEADER.is_match("01 fri"));
        assert!(!SIMPLE_HEADER.is_match("29 Tuesday"));
        assert!(!SIMPLE_HEADER.is_match("August 01 Fri"));

        assert!(EXPLICIT_HEADER.is_match("August 01 Fri"));
        assert!(EXPLICIT_HEADER.is_match("AUGUST 1 fri"));
        assert!(!EXPLICIT_HEADER.is_match("Aug 01 Fri"));
    }

    #[test]
    fn test_flight_shapes() {
        assert!(FLIGHT.is_match("IU856 0730 CGK BTH 0910"));
        assert!(!FLIGHT.is_match("iu856 0730 cgk bth 0910"));
        assert!(TRAINING_FLIGHT.is_match("R2T2 0800 CGK CGK 1200"));
        assert!(!TRAINING_FLIGHT.is_match("IU856 0730 CGK BTH 0910"));
        assert!(FLIGHT_CODE.is_match("IU831"));
        assert!(FLIGHT_DETAILS.is_match("1200 BKS CGK 1315"));
    }

    #[test]
    fn test_status_codes() {
        assert!(has_non_working_code("OFF"));
        assert!(has_non_working_code("S/L"));
        assert!(!has_non_working_code("IU856 0730 CGK BTH 0910"));

        assert!(has_ground_duty_code("SA1"));
        assert!(has_ground_duty_code("R1T2 SIM"));
        assert!(!has_ground_duty_code("OFF"));
    }
}
