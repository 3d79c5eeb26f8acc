//! List command - print the phone numbers on the account.

use anyhow::Result;
use fidousage_portal::Aggregator;
use tracing::info;

use super::{build_session, line_mode};
use crate::output::{JsonFormatter, TextFormatter};
use crate::Cli;

/// Runs the list command.
pub async fn run(cli: &Cli) -> Result<()> {
    let session = build_session(cli)?;
    let numbers = Aggregator::for_session(&session)
        .with_mode(line_mode(cli))
        .phone_numbers()
        .await?;

    info!(count = numbers.len(), "Listed phone numbers");

    let output = if cli.json {
        JsonFormatter::new(cli.pretty).format_numbers(&numbers)?
    } else {
        TextFormatter::new(!cli.no_color).format_numbers(&numbers)
    };
    println!("{output}");

    Ok(())
}
