use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use oneonone_core::{recommend, ApiClient, Config, FinalizeForm, Session};

use super::finalize::with_overrides;
use super::{parse_date, parse_time, today, CommandResult};

#[derive(Subcommand)]
pub enum ApiAction {
    /// Fetch one calendar and print it with its recommendation
    Fetch {
        /// Calendar ID
        id: i64,
        /// Access token
        #[arg(long, env = "ONEONONE_TOKEN")]
        token: String,
    },
    /// List every calendar visible to the user
    List {
        /// Access token
        #[arg(long, env = "ONEONONE_TOKEN")]
        token: String,
    },
    /// Finalize a calendar, defaulting to its recommended time
    Finalize {
        /// Calendar ID
        id: i64,
        /// Access token
        #[arg(long, env = "ONEONONE_TOKEN")]
        token: String,
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        start: Option<NaiveTime>,
        #[arg(long, value_parser = parse_time)]
        end: Option<NaiveTime>,
    },
}

pub fn run(action: ApiAction) -> CommandResult {
    let config = Config::load_or_default();
    let client = ApiClient::new(&config.api.base_url)?;
    let runtime = tokio::runtime::Runtime::new()?;

    match action {
        ApiAction::Fetch { id, token } => {
            let calendar = runtime.block_on(client.fetch_calendar(&Session::new(token), id))?;
            println!("{}", serde_json::to_string_pretty(&calendar)?);
            println!("recommended: {}", recommend(&calendar));
        }
        ApiAction::List { token } => {
            let calendars = runtime.block_on(
                client.fetch_all_calendars(&Session::new(token), config.api.max_pages),
            )?;
            for calendar in &calendars {
                println!("{}\t{}\t{}", calendar.id, calendar.title, recommend(calendar));
            }
        }
        ApiAction::Finalize {
            id,
            token,
            date,
            start,
            end,
        } => {
            let session = Session::new(token);
            let calendar = runtime.block_on(client.fetch_calendar(&session, id))?;
            let reference = today();

            let defaults = FinalizeForm::from_recommendation(&recommend(&calendar), reference);
            let request = with_overrides(defaults, date, start, end)
                .into_request(reference, config.finalize.allow_days_in_past)?;
            runtime.block_on(client.finalize(&session, id, &request))?;
            println!("Meeting time confirmed successfully");
        }
    }
    Ok(())
}
