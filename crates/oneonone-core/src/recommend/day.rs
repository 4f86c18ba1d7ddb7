//! Day selection.

use crate::model::Day;

/// Pick the day with the most distinct submitters, breaking ties by the
/// highest ranking.
///
/// The scan only replaces the current best on strict improvement of
/// `(submitters, ranking)`, so among days sharing both values the earliest
/// wins. Days nobody has submitted to are never selected; `None` means no day
/// has any timeslot.
pub fn select_day(days: &[Day]) -> Option<&Day> {
    let mut best: Option<(&Day, usize)> = None;

    for day in days {
        let count = day.submitter_count();
        if count == 0 {
            continue;
        }

        let better = match best {
            None => true,
            Some((current, current_count)) => {
                count > current_count || (count == current_count && day.ranking > current.ranking)
            }
        };
        if better {
            best = Some((day, count));
        }
    }

    best.map(|(day, _)| day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Availability, Timeslot};
    use chrono::{NaiveDate, NaiveTime};

    fn day(id: i64, ranking: i32, owners: &[&str]) -> Day {
        let slots: Vec<Timeslot> = owners
            .iter()
            .enumerate()
            .map(|(i, owner)| Timeslot {
                id: i as i64,
                day_id: Some(id),
                owner_username: (*owner).to_string(),
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            })
            .collect();
        Day {
            id,
            date: NaiveDate::from_ymd_opt(2024, 5, id as u32).unwrap(),
            ranking,
            timeslots: Availability::from(slots),
        }
    }

    #[test]
    fn count_beats_ranking() {
        let days = vec![day(1, 5, &["a", "b", "c"]), day(2, 9, &["a"])];
        assert_eq!(select_day(&days).map(|d| d.id), Some(1));
    }

    #[test]
    fn ranking_breaks_ties() {
        let days = vec![day(1, 2, &["a", "b"]), day(2, 5, &["c", "d"])];
        assert_eq!(select_day(&days).map(|d| d.id), Some(2));
    }

    #[test]
    fn repeated_owner_counts_once() {
        let days = vec![day(1, 1, &["a", "a", "a"]), day(2, 2, &["a", "b"])];
        assert_eq!(select_day(&days).map(|d| d.id), Some(2));
    }

    #[test]
    fn duplicate_rankings_keep_the_earlier_day() {
        let days = vec![day(1, 3, &["a"]), day(2, 3, &["b"])];
        assert_eq!(select_day(&days).map(|d| d.id), Some(1));
    }

    #[test]
    fn empty_days_are_never_selected() {
        let days = vec![day(1, 10, &[]), day(2, 1, &[])];
        assert!(select_day(&days).is_none());
        assert!(select_day(&[]).is_none());
    }
}
