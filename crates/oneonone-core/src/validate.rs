//! Calendar draft and timeslot checks.
//!
//! Ranking uniqueness and interval ordering are enforced here, before data
//! reaches the backend, so the recommendation engine can assume them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{ValidationError, ValidationErrors};
use crate::time_fmt::ymd;

/// A calendar as submitted by the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDraft {
    pub title: String,
    pub description: String,
    pub days: Vec<DayDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDraft {
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    pub ranking: i32,
}

/// Check a draft, collecting every issue.
///
/// A repeated date is flagged on each occurrence after the first. A repeated
/// ranking is flagged on every day that shares it.
pub fn validate_draft(draft: &CalendarDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.title.trim().is_empty() {
        errors.push(None, ValidationError::EmptyField("title"));
    }
    if draft.description.trim().is_empty() {
        errors.push(None, ValidationError::EmptyField("description"));
    }
    if draft.days.is_empty() {
        errors.push(None, ValidationError::NoDays);
    }

    let mut ranking_counts: HashMap<i32, usize> = HashMap::new();
    for day in &draft.days {
        *ranking_counts.entry(day.ranking).or_default() += 1;
    }

    let mut seen_dates = HashSet::new();
    for (index, day) in draft.days.iter().enumerate() {
        if day.ranking <= 0 {
            errors.push(Some(index), ValidationError::NonPositiveRanking(day.ranking));
        }
        if !seen_dates.insert(day.date) {
            errors.push(Some(index), ValidationError::DuplicateDate(day.date));
        }
        if ranking_counts[&day.ranking] > 1 {
            errors.push(Some(index), ValidationError::DuplicateRanking(day.ranking));
        }
    }

    errors.into_result()
}

/// Ranking for a day appended to the form: one above the current highest.
pub fn next_ranking(days: &[DayDraft]) -> i32 {
    days.iter().map(|d| d.ranking).fold(0, i32::max) + 1
}

/// A submitted timeslot must end strictly after it starts.
pub fn validate_timeslot(start: NaiveTime, end: NaiveTime) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::InvalidTimeRange { start, end });
    }
    Ok(())
}
