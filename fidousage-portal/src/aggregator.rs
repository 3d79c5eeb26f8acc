//! Run orchestration.
//!
//! The aggregator runs the stages in order:
//!
//! ```text
//! sign in -> resolve account -> enumerate lines -> account balance
//!         -> for each line (concurrently): loyalty balance, usage
//! ```
//!
//! It does not catch or rewrap errors. The first failing stage ends the
//! run and its error is returned as is.

use fidousage_core::{
    AccountNumber, AccountRecord, LineRecord, PhoneNumber, ResultSet, RetrievalError,
};
use fidousage_fetch::Session;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::portal::{FidoPortal, Portal};

// ============================================================================
// Line Mode
// ============================================================================

/// How the lines of a run are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    /// Ask the portal for every line on the account.
    #[default]
    Multi,
    /// Treat the login identifier as the only line.
    Single,
}

// ============================================================================
// Aggregator
// ============================================================================

/// Sequences the retrieval stages into a [`ResultSet`].
#[derive(Debug, Clone)]
pub struct Aggregator<P> {
    portal: P,
    mode: LineMode,
}

impl<'s> Aggregator<FidoPortal<'s>> {
    /// Creates an aggregator over the real portal.
    pub fn for_session(session: &'s Session) -> Self {
        Self::new(FidoPortal::new(session))
    }
}

impl<P: Portal> Aggregator<P> {
    /// Creates an aggregator in multi-line mode.
    pub fn new(portal: P) -> Self {
        Self {
            portal,
            mode: LineMode::default(),
        }
    }

    /// Sets the line mode.
    pub fn with_mode(mut self, mode: LineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the line mode.
    pub fn mode(&self) -> LineMode {
        self.mode
    }

    /// Returns the portal.
    pub fn portal(&self) -> &P {
        &self.portal
    }

    /// Runs every stage and assembles the result.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that fails.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn run(&self) -> Result<ResultSet, RetrievalError> {
        let (account, numbers) = self.lines().await?;

        let balance = self.portal.get_balance(&account).await?;
        debug!(lines = numbers.len(), "Collecting line data");

        let lines = try_join_all(numbers.iter().map(|number| self.collect_line(&account, number)))
            .await?;

        info!(lines = lines.len(), "Run complete");
        Ok(ResultSet::new(AccountRecord::new(balance), lines))
    }

    /// Runs only the stages needed to list the lines.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that fails.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn phone_numbers(&self) -> Result<Vec<PhoneNumber>, RetrievalError> {
        let (_, numbers) = self.lines().await?;
        Ok(numbers)
    }

    async fn lines(&self) -> Result<(AccountNumber, Vec<PhoneNumber>), RetrievalError> {
        let token = self.portal.sign_in().await?;
        let account = self.portal.resolve_account(&token).await?;
        let numbers = match self.mode {
            LineMode::Multi => self.portal.list_numbers(&account).await?,
            LineMode::Single => vec![PhoneNumber::new(self.portal.login_identifier())],
        };
        Ok((account, numbers))
    }

    async fn collect_line(
        &self,
        account: &AccountNumber,
        number: &PhoneNumber,
    ) -> Result<LineRecord, RetrievalError> {
        let loyalty = self.portal.get_loyalty_balance(account, number).await?;
        let usage = self.portal.get_usage(account, number).await?;
        Ok(LineRecord::new(number.clone(), loyalty, usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_multi() {
        assert_eq!(LineMode::default(), LineMode::Multi);
    }

    #[test]
    fn test_line_mode_serde() {
        assert_eq!(serde_json::to_string(&LineMode::Single).unwrap(), r#""single""#);
    }

    #[test]
    fn test_for_session_builder() {
        let session = Session::new(
            fidousage_core::Credentials::new("me", "secret"),
            fidousage_fetch::FetchSettings::default(),
        );
        let aggregator = Aggregator::for_session(&session).with_mode(LineMode::Single);
        assert_eq!(aggregator.mode(), LineMode::Single);
        assert_eq!(aggregator.portal().login_identifier(), "me");
    }
}
