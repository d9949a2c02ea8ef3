//! Roster-to-schedule inference.
//!
//! Turns the OCR text of a photographed duty roster into the upcoming travel
//! period. The pipeline is pure: normalize, extract timestamps, detect the
//! month context, build days, correct and sort them, then infer the anchor,
//! the work cycle and the period.

pub mod anchor;
pub mod builder;
pub mod context;
pub mod correction;
pub mod cycle;
pub mod models;
pub mod patterns;
pub mod period;
pub mod render;
pub mod resolve;
pub mod timestamps;

pub use anchor::{detect_anchor, Anchor, AnchorRule};
pub use builder::{classify_line, normalize_lines, DayBuilder, LineKind};
pub use context::{detect_schedule_context, ScheduleContext};
pub use correction::{correct_dates, sort_days};
pub use cycle::{account_cycle, CycleStatus};
pub use models::{Day, DayKind, Flight, LabelForm, Period, RosterSettings, SplitFlight};
pub use period::{build_period, future_days};
pub use render::{format_flight, format_routes, PeriodSummary};
pub use resolve::{resolve_date, DayDescriptor, ResolveHints};
pub use timestamps::{extract_timestamp_mapping, TimestampMapping};

use chrono::NaiveDate;
use tracing::{info, warn};

/// Everything the pipeline learned about one roster
#[derive(Debug, Clone)]
pub struct RosterAnalysis {
    pub timestamps: TimestampMapping,
    pub context: ScheduleContext,
    /// Corrected and sorted by date
    pub days: Vec<Day>,
    pub anchor: Anchor,
    pub cycle: CycleStatus,
    pub period: Option<Period>,
}

/// Run every stage on the OCR text and keep the intermediate results
pub fn analyze_roster(text: &str, now: NaiveDate, settings: &RosterSettings) -> RosterAnalysis {
    let lines = normalize_lines(text);
    let timestamps = extract_timestamp_mapping(&lines);
    let context = detect_schedule_context(&lines);

    let mut days = DayBuilder::new(&timestamps, context, settings.reference_year).build(&lines);
    let corrections = correct_dates(&mut days, &timestamps, settings.reference_year);
    sort_days(&mut days);

    let anchor = detect_anchor(&days, now);
    let cycle = account_cycle(&days, anchor.date);
    let period = build_period(&days, anchor.date, &cycle, &settings.home_base);

    info!(
        "Parsed {} lines into {} days ({} corrected), anchor {}, {} days reported",
        lines.len(),
        days.len(),
        corrections,
        anchor.date,
        period.as_ref().map_or(0, |p| p.days.len())
    );

    RosterAnalysis {
        timestamps,
        context,
        days,
        anchor,
        cycle,
        period,
    }
}

/// Derive the upcoming travel period from roster OCR text.
///
/// `now` is the real current date; the engine never reads the clock itself.
/// Returns `None` when no upcoming flying day can be found.
pub fn parse_schedule(text: &str, now: NaiveDate, settings: &RosterSettings) -> Option<Period> {
    let period = analyze_roster(text, now, settings).period;
    if period.is_none() {
        warn!("No upcoming period found in roster text");
    }
    period
}

/// [`parse_schedule`] with the default home base and reference year
pub fn parse_schedule_default(text: &str, now: NaiveDate) -> Option<Period> {
    parse_schedule(text, now, &RosterSettings::default())
}
