use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use oneonone_core::{recommend, Config, FinalizeForm};

use super::{parse_date, parse_time, read_calendar, today, CommandResult};

#[derive(Args)]
pub struct FinalizeArgs {
    /// Calendar JSON file, or - for stdin
    pub calendar: String,
    /// Override the meeting date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    /// Override the start time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub start: Option<NaiveTime>,
    /// Override the end time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub end: Option<NaiveTime>,
    /// Reference date for the past-date check (default: local today)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

/// Apply command-line overrides on top of the recommended defaults.
pub fn with_overrides(
    mut form: FinalizeForm,
    date: Option<NaiveDate>,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> FinalizeForm {
    form.date = date.unwrap_or(form.date);
    form.start_time = start.unwrap_or(form.start_time);
    form.end_time = end.unwrap_or(form.end_time);
    form
}

pub fn run(args: FinalizeArgs) -> CommandResult {
    let calendar = read_calendar(&args.calendar)?;
    let reference = args.today.unwrap_or_else(today);
    let config = Config::load_or_default();

    let defaults = FinalizeForm::from_recommendation(&recommend(&calendar), reference);
    let request = with_overrides(defaults, args.date, args.start, args.end)
        .into_request(reference, config.finalize.allow_days_in_past)?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}
