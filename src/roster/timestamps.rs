use super::patterns::{BARE_DATE, DIRECT_TIMESTAMP, REST_TIMESTAMP};
use regex::Captures;
use std::collections::BTreeMap;
use tracing::debug;

/// Day-of-month to zero-based month, learned from absolute timestamps in the roster
pub type TimestampMapping = BTreeMap<u32, u32>;

/// Scan lines for `dd/mm/yyyy` timestamps and record which month each day number belongs to.
///
/// A line is tried against the direct `dd/mm/yyyy HH:MM` form and the
/// `Rest : HH:MM (dd/mm/yyyy HH:MM)` form; the bare date form only counts when
/// neither matched. Later lines overwrite earlier ones for the same day number.
pub fn extract_timestamp_mapping(lines: &[String]) -> TimestampMapping {
    let mut mapping = TimestampMapping::new();

    for line in lines {
        let direct = DIRECT_TIMESTAMP.captures(line);
        let rest = REST_TIMESTAMP.captures(line);

        if let Some(caps) = &direct {
            record(&mut mapping, caps, "direct");
        }

        if let Some(caps) = &rest {
            record(&mut mapping, caps, "rest");
        }

        if direct.is_none() && rest.is_none() {
            if let Some(caps) = BARE_DATE.captures(line) {
                record(&mut mapping, &caps, "bare");
            }
        }
    }

    debug!("Timestamp mapping: {:?}", mapping);
    mapping
}

fn record(mapping: &mut TimestampMapping, caps: &Captures<'_>, source: &str) {
    let day = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
    let month = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());

    match (day, month) {
        (Some(day), Some(month)) if (1..=12).contains(&month) => {
            debug!("{} timestamp: day {} -> month {}", source, day, month - 1);
            mapping.insert(day, month - 1);
        }
        _ => debug!("Ignoring {} timestamp with unusable parts: {}", source, &caps[0]),
    }
}
