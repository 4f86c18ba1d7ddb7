use chrono::NaiveDate;
use clap::Args;
use oneonone_core::{coverage_profile, explain, recommend, select_day, Config};

use super::{parse_date, read_calendar, CommandResult};

#[derive(Args)]
pub struct RecommendArgs {
    /// Calendar JSON file, or - for stdin
    pub calendar: String,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Include the chosen day, submitter count and coverage
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args)]
pub struct CoverageArgs {
    /// Calendar JSON file, or - for stdin
    pub calendar: String,
    /// Day to inspect (default: the day the recommendation picks)
    #[arg(long, value_parser = parse_date)]
    pub day: Option<NaiveDate>,
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let calendar = read_calendar(&args.calendar)?;
    let json = args.json || Config::load_or_default().output.json;

    if args.explain {
        let report = explain(&calendar);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            match report {
                Some(r) => {
                    println!("{}", r.recommendation);
                    println!(
                        "day {} (ranking {}): {} submitter(s), {} overlapping",
                        r.day_id, r.ranking, r.submitters, r.coverage
                    );
                }
                None => println!("{}", recommend(&calendar)),
            }
        }
        return Ok(());
    }

    let recommended = recommend(&calendar);
    if json {
        println!("{}", serde_json::to_string_pretty(&recommended)?);
    } else {
        println!("{recommended}");
    }
    Ok(())
}

pub fn run_coverage(args: CoverageArgs) -> CommandResult {
    let calendar = read_calendar(&args.calendar)?;
    let day = match args.day {
        Some(date) => calendar
            .day_on(date)
            .ok_or_else(|| format!("calendar has no day {date}"))?,
        None => match select_day(&calendar.days) {
            Some(day) => day,
            None => {
                println!("[]");
                return Ok(());
            }
        },
    };

    let profile = coverage_profile(day.timeslots.as_slice());
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
