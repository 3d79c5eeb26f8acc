//! Identity values produced and consumed by the retrieval stages.
//!
//! - [`Credentials`] - What the user logs in with
//! - [`AuthToken`] - What the identity provider hands back
//! - [`AccountNumber`] - The billing account
//! - [`PhoneNumber`] - One line on the account

use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "[REDACTED]";

// ============================================================================
// Credentials
// ============================================================================

/// Login identifier (username or phone number) and secret.
///
/// Immutable once built. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Creates credentials from an identifier and a secret.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Returns the login identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &REDACTED)
            .finish()
    }
}

// ============================================================================
// Auth Token
// ============================================================================

/// Bearer token and subject identifier extracted from the identity provider.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// Opaque access token.
    pub token: String,
    /// Opaque subject (user) identifier.
    pub subject_id: String,
}

impl AuthToken {
    /// Creates a new auth token.
    pub fn new(token: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            subject_id: subject_id.into(),
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &REDACTED)
            .field("subject_id", &self.subject_id)
            .finish()
    }
}

// ============================================================================
// Account & Phone Numbers
// ============================================================================

/// Opaque billing account number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Wraps an account number.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the account number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque phone number identifying one line on the account.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Wraps a phone number.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
