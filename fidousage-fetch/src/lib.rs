// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `FidoUsage` Fetch
//!
//! HTTP transport and session state for the `FidoUsage` client.
//!
//! ## Transport
//!
//! - [`client::HttpClient`] - reqwest wrapper with cookie jar, default
//!   headers and a per-request timeout
//! - [`client::HttpResponse`] - Status, headers and the fully-read body
//!
//! ## Configuration
//!
//! - [`settings::FetchSettings`] - Timeout, default headers, endpoints
//! - [`settings::Endpoints`] - Identity-provider and carrier URLs
//!
//! ## Session
//!
//! - [`session::Session`] - Credentials plus a lazily created transport,
//!   shared by every retrieval stage of a run
//!
//! ## Example
//!
//! ```ignore
//! use fidousage_core::Credentials;
//! use fidousage_fetch::{FetchSettings, Session};
//!
//! let settings = FetchSettings::default().with_timeout(Duration::from_secs(30));
//! let session = Session::new(Credentials::new("user", "secret"), settings);
//!
//! let http = session.http().await?;
//! let response = http.get(&session.endpoints().token()).await?;
//! ```

pub mod client;
pub mod error;
pub mod session;
pub mod settings;

// Re-export key types at crate root
pub use client::{HttpClient, HttpResponse, JSON_CONTENT_TYPE};
pub use error::HttpError;
pub use session::Session;
pub use settings::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, Endpoints, FetchSettings};
