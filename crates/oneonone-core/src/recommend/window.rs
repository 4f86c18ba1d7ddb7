//! Coverage sweep over timeslot endpoints.
//!
//! Every start and end time becomes a boundary. Between two consecutive
//! boundaries the set of covering timeslots is constant, so checking each
//! boundary pair is enough to find the best-covered stretch of the day.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::Timeslot;
use crate::time_fmt::hhmm;

/// A stretch between two consecutive boundaries and how many timeslots span it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSegment {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub coverage: usize,
}

/// Sorted, deduplicated start and end times.
fn boundaries(slots: &[Timeslot]) -> Vec<NaiveTime> {
    let mut points: Vec<NaiveTime> = slots
        .iter()
        .flat_map(|s| [s.start_time, s.end_time])
        .collect();
    points.sort();
    points.dedup();
    points
}

/// Coverage of every consecutive boundary pair, in time order.
///
/// A timeslot covers `[from, to]` when `start <= from` and `end >= to`; a
/// timeslot ending exactly on `to` still counts.
pub fn coverage_profile(slots: &[Timeslot]) -> Vec<CoverageSegment> {
    boundaries(slots)
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let coverage = slots
                .iter()
                .filter(|s| s.start_time <= start && s.end_time >= end)
                .count();
            CoverageSegment {
                start,
                end,
                coverage,
            }
        })
        .collect()
}

/// The first segment reaching the maximum coverage.
///
/// Later segments only win on strictly higher coverage. Returns `None` when
/// there are fewer than two distinct boundaries or nothing covers any
/// segment, which only happens for inverted or zero-length timeslots.
pub fn best_window(slots: &[Timeslot]) -> Option<CoverageSegment> {
    let mut best: Option<CoverageSegment> = None;
    for segment in coverage_profile(slots) {
        if segment.coverage > best.map_or(0, |b| b.coverage) {
            best = Some(segment);
        }
    }
    best
}
