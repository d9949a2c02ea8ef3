use super::patterns::{ANY_MONTH, STANDALONE_MONTH};
use crate::utils::time::month_from_name;
use std::collections::BTreeSet;
use tracing::debug;

/// Month assumed when the roster never names one (July)
pub const DEFAULT_MONTH: u32 = 6;

/// Month context of the whole roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleContext {
    /// Zero-based month used for headers without their own month
    pub context_month: u32,
    pub has_multiple_months: bool,
}

impl Default for ScheduleContext {
    fn default() -> Self {
        Self {
            context_month: DEFAULT_MONTH,
            has_multiple_months: false,
        }
    }
}

/// Find the month context from month names anywhere in the text.
///
/// The first month seen wins, unless several distinct months appear, in which
/// case the numerically smallest one is used. Year wraparound is not handled.
pub fn detect_schedule_context(lines: &[String]) -> ScheduleContext {
    let mut months = BTreeSet::new();
    let mut first = None;

    for line in lines {
        let Some(month) = ANY_MONTH
            .captures(line)
            .and_then(|caps| month_from_name(&caps[1]))
        else {
            continue;
        };

        months.insert(month);
        if first.is_none() {
            debug!("First month in roster: {} ({})", line, month);
            first = Some(month);
        }
    }

    let mut context = ScheduleContext {
        context_month: first.unwrap_or(DEFAULT_MONTH),
        has_multiple_months: months.len() > 1,
    };

    if context.has_multiple_months {
        if let Some(earliest) = months.first() {
            debug!("Multiple months {:?}, using earliest {}", months, earliest);
            context.context_month = *earliest;
        }
    }

    context
}

/// Look back up to 10 lines before `index` for a line that is only a month name
pub fn local_month_before(lines: &[String], index: usize) -> Option<u32> {
    lines[index.saturating_sub(10)..index.min(lines.len())]
        .iter()
        .rev()
        .find_map(|line| {
            STANDALONE_MONTH
                .captures(line)
                .and_then(|caps| month_from_name(&caps[1]))
        })
}
