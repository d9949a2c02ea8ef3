use super::models::{ordinal_label, Day};
use chrono::NaiveDate;
use tracing::debug;

/// Position in the current work cycle as of the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStatus {
    /// Index of the first day after the last day off on or before the anchor
    pub cycle_start_index: usize,
    /// Working days already done in this cycle, anchor included
    pub completed_working_days: u32,
}

impl CycleStatus {
    /// Which working day of the cycle tomorrow is
    pub fn tomorrow_number(&self) -> u32 {
        self.completed_working_days + 1
    }

    pub fn tomorrow_ordinal(&self) -> &'static str {
        ordinal_label(self.tomorrow_number())
    }
}

/// Count the completed working days of the current cycle in days sorted by date
pub fn account_cycle(days: &[Day], anchor: NaiveDate) -> CycleStatus {
    let cycle_start_index = days
        .iter()
        .rposition(|day| day.date <= anchor && !day.is_working_day())
        .map_or(0, |idx| idx + 1);

    let completed_working_days = days[cycle_start_index..]
        .iter()
        .filter(|day| day.date <= anchor && day.is_working_day())
        .count() as u32;

    debug!(
        "Cycle starts at index {}, {} working days completed by {}",
        cycle_start_index, completed_working_days, anchor
    );

    CycleStatus {
        cycle_start_index,
        completed_working_days,
    }
}
