// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! FidoUsage CLI - Fido account balance and usage from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Balance and usage for every line on the account
//! fidousage -u me@example.com -p secret
//!
//! # One line only
//! fidousage -u me@example.com -p secret --number 5145550001
//!
//! # The login is the phone number; skip line enumeration
//! fidousage -u 5145550001 -p secret --single-line
//!
//! # JSON output
//! fidousage -u me@example.com -p secret --json --pretty
//!
//! # List the lines on the account
//! fidousage -u me@example.com -p secret --list
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{list, report};
use fidousage_fetch::DEFAULT_TIMEOUT_SECS;

// ============================================================================
// CLI Definition
// ============================================================================

/// FidoUsage CLI - Fido balance and usage.
#[derive(Parser)]
#[command(name = "fidousage")]
#[command(about = "Fido account balance and usage CLI")]
#[command(long_about = r#"
FidoUsage signs in to the Fido self-serve portal and reports, for each
phone line on the account:

  • the account balance
  • the line's Fido dollars
  • talk, text, MMS and data usage against the plan limits

Examples:
  fidousage -u me@example.com -p secret              # Every line
  fidousage -u me@example.com -p secret -n 5145550001
  fidousage -u me@example.com -p secret --json       # JSON output
  fidousage -u me@example.com -p secret --list       # Lines only
"#)]
#[command(version)]
pub struct Cli {
    /// Fido username (email or phone number).
    #[arg(long, short, env = "FIDOUSAGE_USERNAME")]
    pub username: String,

    /// Fido password.
    #[arg(long, short, env = "FIDOUSAGE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Only report this phone number.
    #[arg(long, short)]
    pub number: Option<String>,

    /// List the phone numbers on the account and exit.
    #[arg(long)]
    pub list: bool,

    /// Treat the username as the only line instead of listing the account's lines.
    #[arg(long)]
    pub single_line: bool,

    /// JSON output.
    #[arg(long, short)]
    pub json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Request timeout in seconds.
    #[arg(long, short, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Identity-provider host override.
    #[arg(long, env = "FIDOUSAGE_IDP_HOST", hide = true)]
    pub idp_host: Option<String>,

    /// Carrier API host override.
    #[arg(long, env = "FIDOUSAGE_API_HOST", hide = true)]
    pub api_host: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no logs, no error message).
    #[arg(long, short)]
    pub quiet: bool,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success, including an empty result.
    Success = 0,
    /// Retrieval or other error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let default = if verbose {
        "fidousage=debug,info"
    } else {
        "fidousage=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = if cli.list {
        list::run(&cli).await
    } else {
        report::run(&cli).await
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    std::process::exit(ExitCode::Success as i32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fidousage", "-u", "me", "-p", "secret"]).unwrap();
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(!cli.json);
        assert!(!cli.list);
        assert!(!cli.single_line);
        assert!(cli.number.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "fidousage", "-u", "me", "-p", "secret", "-n", "5145550001", "-j", "-t", "30", "-v",
        ])
        .unwrap();
        assert_eq!(cli.number.as_deref(), Some("5145550001"));
        assert!(cli.json);
        assert_eq!(cli.timeout, 30);
        assert!(cli.verbose);
    }
}
