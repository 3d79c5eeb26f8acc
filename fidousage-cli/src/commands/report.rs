//! Report command - fetch and display balance and usage.

use anyhow::Result;
use fidousage_core::{PhoneNumber, ResultSet};
use fidousage_portal::Aggregator;
use tracing::info;

use super::{build_session, line_mode};
use crate::output::{JsonFormatter, TextFormatter};
use crate::Cli;

/// Runs the report command.
pub async fn run(cli: &Cli) -> Result<()> {
    let session = build_session(cli)?;
    let results = Aggregator::for_session(&session)
        .with_mode(line_mode(cli))
        .run()
        .await?;

    let results = select(results, cli.number.as_deref());
    if results.is_empty() {
        info!("No data to report");
        return Ok(());
    }

    let output = if cli.json {
        JsonFormatter::new(cli.pretty).format_results(&results)?
    } else {
        TextFormatter::new(!cli.no_color).format_results(&results)
    };
    println!("{output}");

    Ok(())
}

/// Restricts the result to one number when one was asked for.
fn select(results: ResultSet, number: Option<&str>) -> ResultSet {
    match number {
        Some(number) => results.only(&PhoneNumber::new(number)),
        None => results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fidousage_core::{AccountRecord, LineRecord, UsageMap};

    fn results() -> ResultSet {
        ResultSet::new(
            AccountRecord::new(10.0),
            [
                LineRecord::new(PhoneNumber::new("111"), 1.0, UsageMap::new()),
                LineRecord::new(PhoneNumber::new("222"), 2.0, UsageMap::new()),
            ],
        )
    }

    #[test]
    fn test_select_all() {
        assert_eq!(select(results(), None).lines().len(), 2);
    }

    #[test]
    fn test_select_one() {
        let selected = select(results(), Some("222"));
        assert_eq!(
            selected.phone_numbers().map(PhoneNumber::as_str).collect::<Vec<_>>(),
            vec!["222"]
        );
    }

    #[test]
    fn test_select_unknown_is_empty() {
        assert!(select(results(), Some("333")).is_empty());
    }
}
