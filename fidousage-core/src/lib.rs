// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `FidoUsage` Core
//!
//! Core types, models, and errors for the `FidoUsage` client.
//!
//! This crate has no I/O. It provides the values that flow between the
//! retrieval stages and the record assembled at the end of a run:
//!
//! - Identity values (credentials, auth token, account and phone numbers)
//! - Usage types (categories, figures, the unlimited sentinel)
//! - Result types (account record, line records, result set)
//! - The per-stage error taxonomy
//!
//! ## Key Types
//!
//! ### Identity Types
//! - [`Credentials`] - Login identifier and secret
//! - [`AuthToken`] - Bearer token and subject id from the identity provider
//! - [`AccountNumber`] - Billing account
//! - [`PhoneNumber`] - One line on the account
//!
//! ### Usage Types
//! - [`UsageCategory`] - Data, texts, MMS, talk and their international variants
//! - [`UsageFigure`] - Used / remaining / limit for one category
//! - [`Allowance`] - A remaining or limit value, or the unlimited sentinel
//!
//! ### Result Types
//! - [`AccountRecord`] - Account-wide balance
//! - [`LineRecord`] - Loyalty balance and usage for one line
//! - [`ResultSet`] - Everything collected by one run
//!
//! ### Errors
//! - [`RetrievalError`] - One variant per stage, each with a reason
//! - [`Stage`] - The stage a failure belongs to

pub mod error;
pub mod models;

// Re-export error types
pub use error::{RetrievalError, Stage};

// Re-export all model types
pub use models::{
    // Identity types
    AccountNumber,
    AuthToken,
    Credentials,
    PhoneNumber,
    // Usage types
    Allowance,
    UsageCategory,
    UsageFigure,
    UsageMap,
    // Result types
    AccountRecord,
    LineRecord,
    ResultSet,
};
