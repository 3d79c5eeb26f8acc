//! Command implementations.

pub mod list;
pub mod report;

use std::time::Duration;

use anyhow::{Context, Result};
use fidousage_core::Credentials;
use fidousage_fetch::{Endpoints, FetchSettings, Session};
use fidousage_portal::LineMode;
use tracing::debug;

use crate::Cli;

/// Builds the session for a run from the command line.
pub fn build_session(cli: &Cli) -> Result<Session> {
    let mut settings = FetchSettings::default().with_timeout(Duration::from_secs(cli.timeout));

    if cli.idp_host.is_some() || cli.api_host.is_some() {
        let identity = cli
            .idp_host
            .as_deref()
            .unwrap_or(Endpoints::DEFAULT_IDENTITY_HOST);
        let api = cli.api_host.as_deref().unwrap_or(Endpoints::DEFAULT_API_HOST);
        let endpoints = Endpoints::new(identity, api).context("Invalid host override")?;
        debug!(identity = %endpoints.identity_host(), api = %endpoints.api_host(), "Using custom hosts");
        settings = settings.with_endpoints(endpoints);
    }

    Ok(Session::new(
        Credentials::new(cli.username.as_str(), cli.password.as_str()),
        settings,
    ))
}

/// Returns the line mode selected on the command line.
pub fn line_mode(cli: &Cli) -> LineMode {
    if cli.single_line {
        LineMode::Single
    } else {
        LineMode::Multi
    }
}
