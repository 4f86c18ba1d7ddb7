use clap::Args;
use oneonone_core::{day_summaries, Config};

use super::{read_calendar, CommandResult};

#[derive(Args)]
pub struct DensityArgs {
    /// Calendar JSON file, or - for stdin
    pub calendar: String,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DensityArgs) -> CommandResult {
    let calendar = read_calendar(&args.calendar)?;
    let summaries = day_summaries(&calendar);

    if args.json || Config::load_or_default().output.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for s in &summaries {
        println!(
            "{} (ranking {}) group {}: submitted [{}] missing [{}]",
            s.date.format("%Y-%m-%d"),
            s.ranking,
            s.group.value(),
            s.submitters.join(", "),
            s.missing.join(", ")
        );
    }
    Ok(())
}
