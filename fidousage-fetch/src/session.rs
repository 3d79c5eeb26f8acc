//! The session shared by every stage of a run.
//!
//! A session owns the credentials, the fetch settings and the transport.
//! The transport (and its cookie jar) is created on first use and never
//! handed out by value, so two sessions never share cookie state.

use fidousage_core::Credentials;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::client::HttpClient;
use crate::error::HttpError;
use crate::settings::{Endpoints, FetchSettings};

/// Credentials, settings and the lazily created transport.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    settings: FetchSettings,
    http: OnceCell<HttpClient>,
}

impl Session {
    /// Creates a session. No connection is made until the first request.
    pub fn new(credentials: Credentials, settings: FetchSettings) -> Self {
        Self {
            credentials,
            settings,
            http: OnceCell::new(),
        }
    }

    /// Returns the login credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the fetch settings.
    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Returns the endpoint table.
    pub fn endpoints(&self) -> &Endpoints {
        &self.settings.endpoints
    }

    /// Returns the transport, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::ClientBuild` if the client cannot be created.
    pub async fn http(&self) -> Result<&HttpClient, HttpError> {
        self.http
            .get_or_try_init(|| async {
                debug!(timeout = ?self.settings.timeout, "Creating HTTP transport");
                HttpClient::new(&self.settings)
            })
            .await
    }

    /// Returns true once the transport has been created.
    pub fn is_connected(&self) -> bool {
        self.http.initialized()
    }
}
