// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `FidoUsage` Portal
//!
//! The retrieval stages for the Fido self-serve portal and the aggregator
//! that sequences them.
//!
//! A run is a strict chain: each request is built from the previous
//! stage's result.
//!
//! | Stage | Module | Input | Output |
//! |-------|--------|-------|--------|
//! | Authenticator | [`auth`] | credentials | [`AuthToken`](fidousage_core::AuthToken) |
//! | Account Resolver | [`account`] | token | [`AccountNumber`](fidousage_core::AccountNumber) |
//! | Number Enumerator | [`numbers`] | account | phone numbers |
//! | Balance / Loyalty | [`balance`] | account (+ number) | dollars |
//! | Usage | [`usage`] | account + number | usage per category |
//! | Aggregator | [`aggregator`] | all of the above | [`ResultSet`](fidousage_core::ResultSet) |
//!
//! Every stage fails with its own [`RetrievalError`](fidousage_core::RetrievalError)
//! variant; the aggregator stops at the first failure and returns it as is.
//!
//! ## Usage
//!
//! ```ignore
//! use fidousage_core::Credentials;
//! use fidousage_fetch::{FetchSettings, Session};
//! use fidousage_portal::{Aggregator, FidoPortal};
//!
//! let session = Session::new(Credentials::new("user", "secret"), FetchSettings::default());
//! let results = Aggregator::new(FidoPortal::new(&session)).run().await?;
//! ```

pub mod account;
pub mod aggregator;
pub mod auth;
pub mod balance;
pub mod numbers;
pub mod portal;
mod response;
pub mod usage;

// Re-export key types
pub use aggregator::{Aggregator, LineMode};
pub use portal::{FidoPortal, Portal};

#[cfg(test)]
mod parser_edge_tests;
