use chrono::NaiveDate;
use serde::Serialize;

/// A single flight leg as printed on the roster.
///
/// All fields are OCR-literal; only their shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    /// Flight identifier, e.g. `IU856`
    pub code: String,
    /// Departure time in `HHMM`
    pub departure_time: String,
    /// Origin station code
    pub origin: String,
    /// Destination station code
    pub destination: String,
    /// Arrival time in `HHMM`
    pub arrival_time: String,
}

/// Duty status of a roster day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Regular flying day
    #[default]
    Flying,
    /// Working day without scheduled flights (simulator, training)
    GroundDuty,
    /// Day off, breaks the duty cycle
    Off,
}

/// Which header shape produced a day label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelForm {
    /// `29 Tue`
    Simple,
    /// `August 01 Fri`
    ExplicitMonth,
}

/// Bridge for a flight code printed on its own line, waiting for its times and route
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitFlight {
    #[default]
    Idle,
    AwaitingDetails(String),
}

/// A roster day with its resolved date and flights
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    /// Header exactly as matched, e.g. `29 Tue` or `August 01 Fri`
    pub label: String,
    pub form: LabelForm,
    pub day_number: u32,
    pub date: NaiveDate,
    /// Flights in the order they appear in the text
    pub flights: Vec<Flight>,
    pub kind: DayKind,
    #[serde(skip)]
    pub split: SplitFlight,
}

impl Day {
    /// Create a flying day with no flights yet
    pub fn new(label: String, form: LabelForm, day_number: u32, date: NaiveDate) -> Self {
        Self {
            label,
            form,
            day_number,
            date,
            flights: Vec::new(),
            kind: DayKind::Flying,
            split: SplitFlight::Idle,
        }
    }

    /// False only for day-off codes
    pub fn is_working_day(&self) -> bool {
        self.kind != DayKind::Off
    }

    /// True when flights must not be attributed to this day
    pub fn skipped_for_flights(&self) -> bool {
        self.kind != DayKind::Flying
    }

    pub fn has_flights(&self) -> bool {
        !self.flights.is_empty()
    }

    pub fn last_flight(&self) -> Option<&Flight> {
        self.flights.last()
    }
}

/// Indonesian ordinals for "the n-th working day"
pub const ORDINAL_LABELS: [&str; 6] = ["pertama", "kedua", "ketiga", "keempat", "kelima", "keenam"];

/// Map a one-based working day number to its ordinal, falling back to the first entry
pub fn ordinal_label(number: u32) -> &'static str {
    number
        .checked_sub(1)
        .and_then(|idx| ORDINAL_LABELS.get(idx as usize))
        .copied()
        .unwrap_or(ORDINAL_LABELS[0])
}

/// The forward-looking travel period reported to the leave message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    /// Chronological, never empty
    pub days: Vec<Day>,
    pub start_label: String,
    pub ordinal_label: String,
    /// Which working day of the current cycle tomorrow is (at least 1)
    pub completed_cycle_days_tomorrow: u32,
}

/// Engine settings supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSettings {
    /// Station that closes a work cycle
    pub home_base: String,
    /// Year used for every constructed date
    pub reference_year: i32,
}

/// Home base of the crew the roster app was written for
pub const DEFAULT_HOME_BASE: &str = "CGK";

/// Year the roster sheets are assumed to belong to
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            home_base: DEFAULT_HOME_BASE.to_string(),
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}
