//! The portal trait and its HTTP implementation.
//!
//! The aggregator only sequences stages; it talks to the carrier through
//! [`Portal`], so it can run against the real portal ([`FidoPortal`]) or
//! against fixtures in tests.

use async_trait::async_trait;
use fidousage_core::{AccountNumber, AuthToken, PhoneNumber, RetrievalError, UsageMap};
use fidousage_fetch::Session;

use crate::{account, auth, balance, numbers, usage};

// ============================================================================
// Portal Trait
// ============================================================================

/// One retrieval stage per method.
///
/// Each method fails with its own [`RetrievalError`] variant.
///
/// ## Implementing a Portal
///
/// ```ignore
/// struct Fixtures;
///
/// #[async_trait]
/// impl Portal for Fixtures {
///     fn login_identifier(&self) -> &str {
///         "5145550001"
///     }
///
///     async fn sign_in(&self) -> Result<AuthToken, RetrievalError> {
///         Ok(AuthToken::new("token", "uuid"))
///     }
///
///     // ...
/// }
/// ```
#[async_trait]
pub trait Portal: Send + Sync {
    /// The identifier the user signed in with.
    ///
    /// Used as the line in single-line mode.
    fn login_identifier(&self) -> &str;

    /// Signs in and returns the access token.
    async fn sign_in(&self) -> Result<AuthToken, RetrievalError>;

    /// Exchanges a token for the account number.
    async fn resolve_account(&self, token: &AuthToken) -> Result<AccountNumber, RetrievalError>;

    /// Lists the phone numbers on the account.
    async fn list_numbers(
        &self,
        account: &AccountNumber,
    ) -> Result<Vec<PhoneNumber>, RetrievalError>;

    /// Fetches the account balance.
    async fn get_balance(&self, account: &AccountNumber) -> Result<f64, RetrievalError>;

    /// Fetches the loyalty balance of one line.
    async fn get_loyalty_balance(
        &self,
        account: &AccountNumber,
        number: &PhoneNumber,
    ) -> Result<f64, RetrievalError>;

    /// Fetches the usage of one line.
    async fn get_usage(
        &self,
        account: &AccountNumber,
        number: &PhoneNumber,
    ) -> Result<UsageMap, RetrievalError>;
}

// ============================================================================
// Fido Portal
// ============================================================================

/// The carrier's self-serve portal, reached over a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct FidoPortal<'s> {
    session: &'s Session,
}

impl<'s> FidoPortal<'s> {
    /// Creates a portal over a session.
    pub fn new(session: &'s Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Portal for FidoPortal<'_> {
    fn login_identifier(&self) -> &str {
        self.session.credentials().identifier()
    }

    async fn sign_in(&self) -> Result<AuthToken, RetrievalError> {
        auth::sign_in(self.session).await
    }

    async fn resolve_account(&self, token: &AuthToken) -> Result<AccountNumber, RetrievalError> {
        account::resolve_account(self.session, token).await
    }

    async fn list_numbers(
        &self,
        account: &AccountNumber,
    ) -> Result<Vec<PhoneNumber>, RetrievalError> {
        numbers::list_numbers(self.session, account).await
    }

    async fn get_balance(&self, account: &AccountNumber) -> Result<f64, RetrievalError> {
        balance::get_balance(self.session, account).await
    }

    async fn get_loyalty_balance(
        &self,
        account: &AccountNumber,
        number: &PhoneNumber,
    ) -> Result<f64, RetrievalError> {
        balance::get_loyalty_balance(self.session, account, number).await
    }

    async fn get_usage(
        &self,
        account: &AccountNumber,
        number: &PhoneNumber,
    ) -> Result<UsageMap, RetrievalError> {
        usage::get_usage(self.session, account, number).await
    }
}
