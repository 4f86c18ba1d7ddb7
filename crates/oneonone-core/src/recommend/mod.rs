//! Best meeting time recommendation.
//!
//! This module provides:
//! - Day selection by distinct submitters, then ranking
//! - A coverage sweep over the chosen day's timeslot endpoints
//! - The one-hour [`Recommendation`] built from the best-covered boundary
//!
//! Everything here is pure: the same calendar snapshot always yields the same
//! answer, so callers may recompute on every render.

mod day;
mod window;

pub use day::select_day;
pub use window::{best_window, coverage_profile, CoverageSegment};

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Calendar;
use crate::time_fmt::{format_time, hhmm, ymd};

/// Shown instead of a recommendation while nobody has submitted availability.
pub const NO_DATA_MESSAGE: &str = "No timeslots have been added yet.";

/// Length of the recommended meeting window.
pub const WINDOW_MINUTES: i64 = 60;

/// A concrete meeting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl Recommendation {
    /// A window of [`WINDOW_MINUTES`] starting at `start_time`. Wraps past midnight.
    pub fn starting_at(date: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            date,
            start_time,
            end_time: start_time + Duration::minutes(WINDOW_MINUTES),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} - {}",
            self.date.format("%Y-%m-%d"),
            format_time(self.start_time),
            format_time(self.end_time)
        )
    }
}

/// Either a recommendation or a message explaining why there is none.
///
/// Serialized untagged: a bare string for [`RecommendedTime::NoData`], an
/// object with `date`, `startTime` and `endTime` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendedTime {
    NoData(String),
    Slot(Recommendation),
}

impl RecommendedTime {
    pub fn no_data() -> Self {
        Self::NoData(NO_DATA_MESSAGE.to_string())
    }

    pub fn slot(&self) -> Option<&Recommendation> {
        match self {
            Self::Slot(r) => Some(r),
            Self::NoData(_) => None,
        }
    }
}

impl fmt::Display for RecommendedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData(message) => f.write_str(message),
            Self::Slot(r) => r.fmt(f),
        }
    }
}

/// How a recommendation was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub day_id: i64,
    pub ranking: i32,
    /// Distinct submitters on the chosen day.
    pub submitters: usize,
    /// Timeslots spanning the winning boundary segment.
    pub coverage: usize,
    pub segment: CoverageSegment,
    pub recommendation: Recommendation,
}

/// Pick the day and window for a calendar, with the numbers behind the choice.
///
/// Returns `None` when there is nothing to recommend.
pub fn explain(calendar: &Calendar) -> Option<RecommendationReport> {
    let Some(day) = select_day(&calendar.days) else {
        tracing::debug!(calendar = calendar.id, "no timeslots submitted");
        return None;
    };

    let Some(segment) = best_window(day.timeslots.as_slice()) else {
        tracing::debug!(
            calendar = calendar.id,
            day = day.id,
            "chosen day has no covered segment"
        );
        return None;
    };

    let recommendation = Recommendation::starting_at(day.date, segment.start);
    tracing::debug!(
        calendar = calendar.id,
        day = day.id,
        ranking = day.ranking,
        coverage = segment.coverage,
        %recommendation,
        "recommended meeting time"
    );

    Some(RecommendationReport {
        day_id: day.id,
        ranking: day.ranking,
        submitters: day.submitter_count(),
        coverage: segment.coverage,
        segment,
        recommendation,
    })
}

/// Best meeting time for a calendar, or the no-data message.
pub fn recommend(calendar: &Calendar) -> RecommendedTime {
    explain(calendar)
        .map(|report| RecommendedTime::Slot(report.recommendation))
        .unwrap_or_else(RecommendedTime::no_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Availability, Day, Timeslot};

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn slot(owner: &str, start: &str, end: &str) -> Timeslot {
        Timeslot {
            id: 0,
            day_id: None,
            owner_username: owner.into(),
            start_time: t(start),
            end_time: t(end),
        }
    }

    fn day(id: i64, date: &str, ranking: i32, slots: Vec<Timeslot>) -> Day {
        Day {
            id,
            date: d(date),
            ranking,
            timeslots: Availability::from(slots),
        }
    }

    fn calendar(days: Vec<Day>) -> Calendar {
        Calendar {
            id: 1,
            creator_username: "host".into(),
            title: "Sync".into(),
            description: String::new(),
            days,
            participants: Vec::new(),
        }
    }

    #[test]
    fn staggered_slots_pick_full_overlap() {
        let cal = calendar(vec![day(
            1,
            "2024-06-03",
            1,
            vec![
                slot("a", "09:00", "10:00"),
                slot("b", "09:30", "10:30"),
                slot("c", "09:45", "11:00"),
            ],
        )]);
        let rec = recommend(&cal);
        assert_eq!(
            rec,
            RecommendedTime::Slot(Recommendation {
                date: d("2024-06-03"),
                start_time: t("09:45"),
                end_time: t("10:45"),
            })
        );
        assert_eq!(rec.to_string(), "2024-06-03 at 09:45 - 10:45");
    }

    #[test]
    fn ranking_tie_break_selects_higher_ranked_day() {
        let cal = calendar(vec![
            day(1, "2024-06-03", 2, vec![slot("a", "09:00", "10:00"), slot("b", "09:00", "10:00")]),
            day(2, "2024-06-04", 5, vec![slot("a", "14:00", "15:00"), slot("b", "14:30", "16:00")]),
        ]);
        let rec = recommend(&cal);
        let slot = rec.slot().unwrap();
        assert_eq!(slot.date, d("2024-06-04"));
        assert_eq!(slot.start_time, t("14:30"));
    }

    #[test]
    fn submitter_count_beats_ranking() {
        let cal = calendar(vec![
            day(
                1,
                "2024-06-03",
                5,
                vec![
                    slot("a", "09:00", "12:00"),
                    slot("b", "10:00", "12:00"),
                    slot("c", "11:00", "12:00"),
                ],
            ),
            day(2, "2024-06-04", 9, vec![slot("a", "09:00", "10:00")]),
        ]);
        let report = explain(&cal).unwrap();
        assert_eq!(report.day_id, 1);
        assert_eq!(report.submitters, 3);
        assert_eq!(report.coverage, 3);
        assert_eq!(report.recommendation.start_time, t("11:00"));
    }

    #[test]
    fn no_submissions_yield_message() {
        let cal = calendar(vec![day(1, "2024-06-03", 1, vec![]), day(2, "2024-06-04", 2, vec![])]);
        let rec = recommend(&cal);
        assert_eq!(rec, RecommendedTime::NoData(NO_DATA_MESSAGE.into()));
        assert!(rec.slot().is_none());
        assert_eq!(recommend(&calendar(Vec::new())), RecommendedTime::no_data());
    }

    #[test]
    fn window_wraps_past_midnight() {
        let cal = calendar(vec![day(1, "2024-06-03", 1, vec![slot("a", "23:30", "23:59")])]);
        let slot = *recommend(&cal).slot().unwrap();
        assert_eq!(slot.end_time, t("00:30"));
        assert_eq!(slot.date, d("2024-06-03"));
    }

    #[test]
    fn inverted_only_slots_yield_message() {
        let cal = calendar(vec![day(1, "2024-06-03", 1, vec![slot("a", "11:00", "10:00")])]);
        assert_eq!(recommend(&cal), RecommendedTime::no_data());
    }

    #[test]
    fn serializes_like_the_finalize_dialog_expects() {
        let rec = RecommendedTime::Slot(Recommendation::starting_at(d("2024-06-03"), t("09:05")));
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2024-06-03", "startTime": "09:05", "endTime": "10:05"})
        );
        assert_eq!(
            serde_json::to_value(RecommendedTime::no_data()).unwrap(),
            serde_json::json!(NO_DATA_MESSAGE)
        );

        let back: RecommendedTime = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }
}
