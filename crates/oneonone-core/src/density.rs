//! Per-day submission summaries.
//!
//! Calendar overviews shade each candidate day by how many participants have
//! submitted availability, and list who is still missing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Calendar;
use crate::time_fmt::ymd;

/// Share of participants who submitted on a day, bucketed 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DensityGroup(u8);

impl DensityGroup {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(10);

    /// Bucket `submitters / participants`.
    ///
    /// Group `k` holds ratios in `((k-1)/10, k/10]` for `k` in 1..=9. Group 10
    /// is reserved for exactly everyone; ratios just under or above one land
    /// in 9.
    pub fn from_counts(submitters: usize, participants: usize) -> Self {
        if participants == 0 || submitters == 0 {
            return Self::EMPTY;
        }
        if submitters == participants {
            return Self::FULL;
        }
        // ratio <= k/10  <=>  10 * submitters <= k * participants
        (1..=9u8)
            .find(|k| 10 * submitters <= usize::from(*k) * participants)
            .map_or(Self(9), Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Distinct submitters per candidate date, in first-seen order.
pub fn timeslot_density(calendar: &Calendar) -> BTreeMap<NaiveDate, Vec<String>> {
    calendar
        .days
        .iter()
        .map(|day| {
            let names = day.submitters().into_iter().map(str::to_string).collect();
            (day.date, names)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day_id: i64,
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    pub ranking: i32,
    pub submitters: Vec<String>,
    /// Participants with no timeslot on this day.
    pub missing: Vec<String>,
    pub group: DensityGroup,
}

/// One summary per day, in calendar order.
pub fn day_summaries(calendar: &Calendar) -> Vec<DaySummary> {
    let participants = calendar.participant_usernames();
    calendar
        .days
        .iter()
        .map(|day| {
            let submitters = day.submitters();
            let missing = participants
                .iter()
                .filter(|name| !submitters.contains(*name))
                .map(|name| (*name).to_string())
                .collect();
            DaySummary {
                day_id: day.id,
                date: day.date,
                ranking: day.ranking,
                group: DensityGroup::from_counts(submitters.len(), participants.len()),
                submitters: submitters.into_iter().map(str::to_string).collect(),
                missing,
            }
        })
        .collect()
}
