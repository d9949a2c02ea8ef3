use super::context::{local_month_before, ScheduleContext};
use super::models::{Day, DayKind, Flight, LabelForm, SplitFlight};
use super::patterns::{
    has_ground_duty_code, has_non_working_code, EXPLICIT_HEADER, FLIGHT, FLIGHT_CODE,
    FLIGHT_DETAILS, SIMPLE_HEADER, TRAINING_FLIGHT,
};
use super::resolve::{resolve_date, DayDescriptor, ResolveHints};
use super::timestamps::TimestampMapping;
use crate::utils::time::month_from_name;
use chrono::Weekday;
use regex::Captures;
use std::collections::HashMap;
use tracing::debug;

/// Split raw OCR text into trimmed, non-empty lines
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// What a single roster line is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    ExplicitHeader {
        label: String,
        descriptor: DayDescriptor,
    },
    SimpleHeader {
        label: String,
        descriptor: DayDescriptor,
    },
    NonWorking,
    GroundDuty,
    TrainingFlight,
    Flight(Flight),
    FlightCode(String),
    FlightDetails {
        departure_time: String,
        origin: String,
        destination: String,
        arrival_time: String,
    },
    Noise,
}

/// Classify one line. Headers come first, then duty codes, then flight shapes.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(caps) = EXPLICIT_HEADER.captures(line) {
        let day_number = caps[2].parse().unwrap_or(0);
        return LineKind::ExplicitHeader {
            label: format!("{} {} {}", &caps[1], &caps[2], &caps[3]),
            descriptor: DayDescriptor {
                day_number,
                explicit_month: month_from_name(&caps[1]),
                weekday: caps[3].parse::<Weekday>().ok(),
            },
        };
    }

    if let Some(caps) = SIMPLE_HEADER.captures(line) {
        let day_number = caps[1].parse().unwrap_or(0);
        return LineKind::SimpleHeader {
            label: format!("{} {}", &caps[1], &caps[2]),
            descriptor: DayDescriptor {
                day_number,
                explicit_month: None,
                weekday: caps[2].parse::<Weekday>().ok(),
            },
        };
    }

    if has_non_working_code(line) {
        return LineKind::NonWorking;
    }

    if has_ground_duty_code(line) {
        return LineKind::GroundDuty;
    }

    if TRAINING_FLIGHT.is_match(line) {
        return LineKind::TrainingFlight;
    }

    if let Some(caps) = FLIGHT.captures(line) {
        return LineKind::Flight(flight_from(&caps[1], &caps, 2));
    }

    if let Some(caps) = FLIGHT_CODE.captures(line) {
        return LineKind::FlightCode(caps[1].to_string());
    }

    if let Some(caps) = FLIGHT_DETAILS.captures(line) {
        return LineKind::FlightDetails {
            departure_time: caps[1].to_string(),
            origin: caps[2].to_string(),
            destination: caps[3].to_string(),
            arrival_time: caps[4].to_string(),
        };
    }

    LineKind::Noise
}

/// Build a flight from the four groups starting at `first`: ETD, origin, destination, ETA
fn flight_from(code: &str, caps: &Captures<'_>, first: usize) -> Flight {
    Flight {
        code: code.to_string(),
        departure_time: caps[first].to_string(),
        origin: caps[first + 1].to_string(),
        destination: caps[first + 2].to_string(),
        arrival_time: caps[first + 3].to_string(),
    }
}

/// Accumulates roster days in a single pass over the lines
pub struct DayBuilder<'a> {
    timestamps: &'a TimestampMapping,
    context: ScheduleContext,
    reference_year: i32,
    days: Vec<Day>,
    by_label: HashMap<String, usize>,
    current: Option<usize>,
}

impl<'a> DayBuilder<'a> {
    pub fn new(
        timestamps: &'a TimestampMapping,
        context: ScheduleContext,
        reference_year: i32,
    ) -> Self {
        Self {
            timestamps,
            context,
            reference_year,
            days: Vec::new(),
            by_label: HashMap::new(),
            current: None,
        }
    }

    /// Feed every line in order and return the days in order of first appearance
    pub fn build(mut self, lines: &[String]) -> Vec<Day> {
        for (index, line) in lines.iter().enumerate() {
            let kind = classify_line(line);
            debug!("Line {}: {:?} -> {:?}", index, line, kind);
            self.apply(lines, index, kind);
        }

        self.leave_current();
        self.days
    }

    fn apply(&mut self, lines: &[String], index: usize, kind: LineKind) {
        match kind {
            LineKind::ExplicitHeader { label, descriptor } => {
                let hints = self.hints(Some(self.context.context_month));
                let date = resolve_date(&descriptor, &hints);
                self.enter(label, LabelForm::ExplicitMonth, descriptor, date);
            }
            LineKind::SimpleHeader { label, descriptor } => {
                let mut context_month = self.context.context_month;

                // A month restated just above a block of dates overrides the global context
                if !self.timestamps.contains_key(&descriptor.day_number) {
                    if let Some(local) = local_month_before(lines, index) {
                        if local != context_month {
                            debug!("Local month {} overrides context for {}", local, label);
                            context_month = local;
                        }
                    }
                }

                let date = resolve_date(&descriptor, &self.hints(Some(context_month)));
                self.enter(label, LabelForm::Simple, descriptor, date);
            }
            other => {
                let Some(day) = self.current.and_then(|idx| self.days.get_mut(idx)) else {
                    return;
                };
                apply_to_day(day, other);
            }
        }
    }

    fn hints(&self, context_month: Option<u32>) -> ResolveHints<'a> {
        ResolveHints {
            context_month,
            timestamps: self.timestamps,
            reference_year: self.reference_year,
        }
    }

    /// Make the day with this label current, creating it on first sight
    fn enter(
        &mut self,
        label: String,
        form: LabelForm,
        descriptor: DayDescriptor,
        date: chrono::NaiveDate,
    ) {
        self.leave_current();

        let idx = match self.by_label.get(&label) {
            Some(&idx) => {
                debug!("Reusing day {}", label);
                idx
            }
            None => {
                debug!("New day {} -> {}", label, date);
                self.days
                    .push(Day::new(label.clone(), form, descriptor.day_number, date));
                self.by_label.insert(label, self.days.len() - 1);
                self.days.len() - 1
            }
        };

        self.current = Some(idx);
    }

    /// A staged split-flight code never crosses into another day
    fn leave_current(&mut self) {
        if let Some(day) = self.current.and_then(|idx| self.days.get_mut(idx)) {
            if let SplitFlight::AwaitingDetails(code) = &day.split {
                debug!("Dropping unmatched flight code {} on {}", code, day.label);
            }
            day.split = SplitFlight::Idle;
        }
        self.current = None;
    }
}

/// Apply a non-header line to the current day
fn apply_to_day(day: &mut Day, kind: LineKind) {
    match kind {
        LineKind::NonWorking => day.kind = DayKind::Off,
        LineKind::GroundDuty | LineKind::TrainingFlight => day.kind = DayKind::GroundDuty,
        LineKind::Flight(flight) => day.flights.push(flight),
        LineKind::FlightCode(code) => day.split = SplitFlight::AwaitingDetails(code),
        LineKind::FlightDetails {
            departure_time,
            origin,
            destination,
            arrival_time,
        } => {
            if let SplitFlight::AwaitingDetails(code) = std::mem::take(&mut day.split) {
                day.flights.push(Flight {
                    code,
                    departure_time,
                    origin,
                    destination,
                    arrival_time,
                });
            }
        }
        LineKind::ExplicitHeader { .. } | LineKind::SimpleHeader { .. } | LineKind::Noise => {}
    }
}
