//! Meeting finalization.
//!
//! The host confirms one date and window. The form starts from the current
//! recommendation and may be edited freely before submission.

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrors};
use crate::recommend::RecommendedTime;
use crate::time_fmt::{hhmm, ymd};

/// Editable finalization fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeForm {
    #[serde(with = "ymd")]
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// Body of `PUT calendars/{id}/finalize/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeRequest {
    #[serde(with = "ymd")]
    pub final_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub final_timeslot_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub final_timeslot_end: NaiveTime,
}

impl FinalizeForm {
    /// Defaults: the recommendation when there is one, otherwise `today` with
    /// both times at midnight.
    pub fn from_recommendation(recommended: &RecommendedTime, today: NaiveDate) -> Self {
        match recommended {
            RecommendedTime::Slot(r) => Self {
                date: r.date,
                start_time: r.start_time,
                end_time: r.end_time,
            },
            RecommendedTime::NoData(_) => Self {
                date: today,
                start_time: NaiveTime::MIN,
                end_time: NaiveTime::MIN,
            },
        }
    }

    /// End must be after start; the date may be at most `allow_days_in_past`
    /// days before `today`.
    pub fn validate(&self, today: NaiveDate, allow_days_in_past: u32) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.end_time <= self.start_time {
            errors.push(
                None,
                ValidationError::InvalidTimeRange {
                    start: self.start_time,
                    end: self.end_time,
                },
            );
        }

        let earliest = today
            .checked_sub_days(Days::new(u64::from(allow_days_in_past)))
            .unwrap_or(NaiveDate::MIN);
        if self.date < earliest {
            errors.push(
                None,
                ValidationError::DateInPast {
                    date: self.date,
                    earliest,
                },
            );
        }

        errors.into_result()
    }

    /// Validate and convert to the API body.
    pub fn into_request(
        self,
        today: NaiveDate,
        allow_days_in_past: u32,
    ) -> Result<FinalizeRequest, ValidationErrors> {
        self.validate(today, allow_days_in_past)?;
        Ok(FinalizeRequest {
            final_date: self.date,
            final_timeslot_start: self.start_time,
            final_timeslot_end: self.end_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::Recommendation;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn defaults_follow_recommendation() {
        let rec = RecommendedTime::Slot(Recommendation::starting_at(d("2024-09-10"), t("13:15")));
        let form = FinalizeForm::from_recommendation(&rec, d("2024-09-01"));
        assert_eq!(form.date, d("2024-09-10"));
        assert_eq!(form.start_time, t("13:15"));
        assert_eq!(form.end_time, t("14:15"));
    }

    #[test]
    fn no_data_defaults_fail_validation_until_edited() {
        let today = d("2024-09-01");
        let mut form = FinalizeForm::from_recommendation(&RecommendedTime::no_data(), today);
        assert_eq!(form.date, today);
        assert_eq!(form.start_time, NaiveTime::MIN);
        assert!(form.validate(today, 1).is_err());

        form.end_time = t("00:30");
        assert!(form.validate(today, 1).is_ok());
    }

    #[test]
    fn past_dates_beyond_window_rejected() {
        let today = d("2024-09-10");
        let mut form = FinalizeForm {
            date: d("2024-09-09"),
            start_time: t("10:00"),
            end_time: t("11:00"),
        };
        assert!(form.validate(today, 1).is_ok());

        form.date = d("2024-09-08");
        let errors = form.validate(today, 1).unwrap_err();
        assert_eq!(
            errors.0,
            vec![(
                None,
                ValidationError::DateInPast {
                    date: d("2024-09-08"),
                    earliest: d("2024-09-09"),
                }
            )]
        );
    }

    #[test]
    fn huge_past_window_saturates_instead_of_overflowing() {
        let today = d("2024-09-10");
        let form = FinalizeForm {
            date: d("1900-01-01"),
            start_time: t("10:00"),
            end_time: t("11:00"),
        };
        assert!(form.validate(today, u32::MAX).is_ok());
        assert!(form.into_request(today, u32::MAX).is_ok());
    }

    #[test]
    fn request_uses_api_field_names() {
        let form = FinalizeForm {
            date: d("2024-09-12"),
            start_time: t("09:00"),
            end_time: t("10:00"),
        };
        let request = form.into_request(d("2024-09-10"), 1).unwrap();
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({
                "final_date": "2024-09-12",
                "final_timeslot_start": "09:00",
                "final_timeslot_end": "10:00",
            })
        );
    }
}
