use clap::Args;
use oneonone_core::{next_ranking, validate_draft, CalendarDraft};

use super::{read_input, CommandResult};

#[derive(Args)]
pub struct ValidateArgs {
    /// Calendar draft JSON file, or - for stdin
    pub draft: String,
}

pub fn run(args: ValidateArgs) -> CommandResult {
    let draft: CalendarDraft = serde_json::from_str(&read_input(&args.draft)?)?;
    validate_draft(&draft)?;
    println!("ok (next ranking: {})", next_ranking(&draft.days));
    Ok(())
}
