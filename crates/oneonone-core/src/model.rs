//! Calendar snapshot types as served by the backend.
//!
//! A [`Calendar`] holds ranked candidate [`Day`]s; each day carries the
//! [`Timeslot`]s participants have submitted so far. These values are treated
//! as read-only snapshots by the rest of the crate.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::time_fmt::{hhmm, ymd};

/// A host-created scheduling poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: i64,
    #[serde(default)]
    pub creator_username: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub days: Vec<Day>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Calendar {
    /// True when no day has a single submitted timeslot.
    pub fn has_no_submissions(&self) -> bool {
        self.days.iter().all(|d| d.timeslots.is_empty())
    }

    /// Find a candidate day by date.
    pub fn day_on(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn participant_usernames(&self) -> Vec<&str> {
        self.participants.iter().map(|p| p.username.as_str()).collect()
    }
}

/// One candidate date within a calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: i64,
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    /// Host priority. Higher wins ties.
    pub ranking: i32,
    #[serde(default)]
    pub timeslots: Availability,
}

impl Day {
    /// Distinct submitters in first-seen order.
    pub fn submitters(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.timeslots
            .as_slice()
            .iter()
            .map(|t| t.owner_username.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn submitter_count(&self) -> usize {
        self.timeslots
            .as_slice()
            .iter()
            .map(|t| t.owner_username.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Timeslots submitted for a day.
///
/// The API sends `null`, omits the field, or sends `[]` before anyone has
/// submitted; all three decode to [`Availability::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<Timeslot>>", into = "Option<Vec<Timeslot>>")]
pub enum Availability {
    #[default]
    Empty,
    Submitted(Vec<Timeslot>),
}

impl Availability {
    pub fn as_slice(&self) -> &[Timeslot] {
        match self {
            Self::Empty => &[],
            Self::Submitted(slots) => slots,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
}

impl From<Option<Vec<Timeslot>>> for Availability {
    fn from(value: Option<Vec<Timeslot>>) -> Self {
        match value {
            Some(slots) if !slots.is_empty() => Self::Submitted(slots),
            _ => Self::Empty,
        }
    }
}

impl From<Vec<Timeslot>> for Availability {
    fn from(value: Vec<Timeslot>) -> Self {
        Some(value).into()
    }
}

impl From<Availability> for Option<Vec<Timeslot>> {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Empty => None,
            Availability::Submitted(slots) => Some(slots),
        }
    }
}

/// A participant's availability interval `[start_time, end_time)` on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    pub id: i64,
    /// Owning day. Write-only on the API, so usually absent in responses.
    #[serde(default, rename = "day", skip_serializing_if = "Option::is_none")]
    pub day_id: Option<i64>,
    pub owner_username: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact entry the participant was invited through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<i64>,
}
