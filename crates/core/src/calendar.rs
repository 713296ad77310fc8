//! Calendar helpers for year records.

use chrono::{Duration, NaiveDate};

/// Every day of the event, start and end inclusive.
///
/// Returns an empty sequence when either bound is missing or the range is
/// inverted.
pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<NaiveDate> {
    match (start, end) {
        (Some(start), Some(end)) if start <= end => {
            let days = (end - start).num_days();
            (0..=days).map(|d| start + Duration::days(d)).collect()
        }
        _ => Vec::new(),
    }
}
