//! # 1on1 Core Library
//!
//! This library provides the scheduling logic behind the 1on1 group-meeting
//! planner. Hosts create calendars with ranked candidate days, participants
//! submit availability timeslots per day, and the host finalizes one meeting
//! window. The `oneonone` CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Model**: Calendar snapshots as served by the backend API
//! - **Recommendation**: Day selection and a sweep over timeslot endpoints that
//!   finds the best one-hour window
//! - **Density**: Per-day submitter summaries for calendar overviews
//! - **Validation**: Calendar draft, timeslot and finalization rules
//! - **Client**: REST client taking an explicit [`Session`]
//!
//! ## Key Components
//!
//! - [`recommend()`]: Best meeting time for a calendar
//! - [`FinalizeForm`]: Editable finalization defaults and checks
//! - [`ApiClient`]: Backend access
//! - [`Config`]: Application configuration management

pub mod client;
pub mod density;
pub mod error;
pub mod finalize;
pub mod model;
pub mod recommend;
pub mod storage;
mod time_fmt;
pub mod validate;

pub use client::{ApiClient, Page, Session};
pub use density::{day_summaries, timeslot_density, DaySummary, DensityGroup};
pub use error::{ApiError, ConfigError, CoreError, ValidationError, ValidationErrors};
pub use finalize::{FinalizeForm, FinalizeRequest};
pub use model::{Availability, Calendar, Day, Participant, Timeslot};
pub use recommend::{
    best_window, coverage_profile, explain, recommend, select_day, CoverageSegment,
    Recommendation, RecommendationReport, RecommendedTime, NO_DATA_MESSAGE, WINDOW_MINUTES,
};
pub use storage::Config;
pub use validate::{next_ranking, validate_draft, validate_timeslot, CalendarDraft, DayDraft};
