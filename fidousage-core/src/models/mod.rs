//! Domain models for `FidoUsage`.
//!
//! This module contains the values passed between retrieval stages and the
//! record a run produces.
//!
//! ## Submodules
//!
//! - [`identity`] - Credentials, AuthToken, AccountNumber, PhoneNumber
//! - [`usage`] - UsageCategory, UsageFigure, Allowance
//! - [`result`] - AccountRecord, LineRecord, ResultSet

mod identity;
mod result;
mod usage;

// Re-export everything at the models level
pub use identity::{AccountNumber, AuthToken, Credentials, PhoneNumber};
pub use result::{AccountRecord, LineRecord, ResultSet};
pub use usage::{Allowance, UsageCategory, UsageFigure, UsageMap};
