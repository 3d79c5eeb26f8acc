//! Core error types for `FidoUsage`.
//!
//! Every retrieval stage fails with its own variant of [`RetrievalError`].
//! The variants carry a human-readable reason and nothing else, so an error
//! raised by one stage reaches the caller unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Stage
// ============================================================================

/// The retrieval stage an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Identity-provider sign-in and token extraction.
    Auth,
    /// Account number resolution.
    Account,
    /// Phone number enumeration.
    Number,
    /// Account balance collection.
    Balance,
    /// Loyalty-currency balance collection.
    Loyalty,
    /// Usage collection.
    Usage,
}

impl Stage {
    /// Returns the short name of this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Account => "account",
            Self::Number => "number",
            Self::Balance => "balance",
            Self::Loyalty => "loyalty",
            Self::Usage => "usage",
        }
    }

    /// Builds the error variant for this stage.
    pub fn error(self, reason: impl Into<String>) -> RetrievalError {
        let reason = reason.into();
        match self {
            Self::Auth => RetrievalError::Auth(reason),
            Self::Account => RetrievalError::Account(reason),
            Self::Number => RetrievalError::Number(reason),
            Self::Balance => RetrievalError::Balance(reason),
            Self::Loyalty => RetrievalError::Loyalty(reason),
            Self::Usage => RetrievalError::Usage(reason),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Retrieval Error
// ============================================================================

/// Retrieval failed at one of the stages of a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    /// Sign-in or token extraction failed.
    #[error("auth failed: {0}")]
    Auth(String),

    /// The account number could not be resolved.
    #[error("account failed: {0}")]
    Account(String),

    /// The phone numbers could not be listed.
    #[error("number failed: {0}")]
    Number(String),

    /// The account balance could not be read.
    #[error("balance failed: {0}")]
    Balance(String),

    /// The loyalty balance could not be read.
    #[error("loyalty failed: {0}")]
    Loyalty(String),

    /// The usage figures could not be read.
    #[error("usage failed: {0}")]
    Usage(String),
}

impl RetrievalError {
    /// Returns the stage that raised this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Auth(_) => Stage::Auth,
            Self::Account(_) => Stage::Account,
            Self::Number(_) => Stage::Number,
            Self::Balance(_) => Stage::Balance,
            Self::Loyalty(_) => Stage::Loyalty,
            Self::Usage(_) => Stage::Usage,
        }
    }

    /// Returns the human-readable reason.
    pub fn reason(&self) -> &str {
        match self {
            Self::Auth(r)
            | Self::Account(r)
            | Self::Number(r)
            | Self::Balance(r)
            | Self::Loyalty(r)
            | Self::Usage(r) => r,
        }
    }
}
