pub mod api;
pub mod config;
pub mod density;
pub mod finalize;
pub mod recommend;
pub mod validate;

use chrono::NaiveDate;
use oneonone_core::Calendar;
use std::io::Read;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}").into())
    }
}

pub fn read_calendar(path: &str) -> Result<Calendar, Box<dyn std::error::Error>> {
    let calendar: Calendar = serde_json::from_str(&read_input(path)?)?;
    tracing::debug!(id = calendar.id, days = calendar.days.len(), "loaded calendar");
    Ok(calendar)
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("invalid date '{value}': {e}"))
}

pub fn parse_time(value: &str) -> Result<chrono::NaiveTime, String> {
    chrono::NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| format!("invalid time '{value}': {e}"))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
