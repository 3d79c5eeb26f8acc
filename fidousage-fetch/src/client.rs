//! HTTP client with tracing, cookie jar, and per-request timeout.
//!
//! This module provides a wrapped HTTP client that adds:
//! - Request/response tracing
//! - A cookie jar, so sign-in state carries over to later requests
//! - Default headers applied to every request
//! - Convenience methods for form and JSON posts

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::HttpError;
use crate::settings::FetchSettings;

/// Content type the carrier expects on JSON posts.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

// ============================================================================
// HTTP Response
// ============================================================================

/// A response with its body already read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: StatusCode,
    /// Body as text.
    pub body: String,
}

impl HttpResponse {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing, cookies and default headers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client from fetch settings.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::ClientBuild` if a default header is invalid or the
    /// TLS backend cannot be initialised.
    pub fn new(settings: &FetchSettings) -> Result<Self, HttpError> {
        let headers = build_headers(&settings.headers)?;
        let inner = Client::builder()
            .cookie_store(true)
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self {
            inner,
            timeout: settings.timeout,
        })
    }

    /// Performs a GET request.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        debug!("GET request");
        self.send(self.inner.get(url)).await
    }

    /// Performs a POST request with form data.
    #[instrument(skip(self, form), fields(url = %url))]
    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
    ) -> Result<HttpResponse, HttpError> {
        debug!("POST request with form data");
        self.send(self.inner.post(url).form(form)).await
    }

    /// Performs a POST request with a JSON body.
    ///
    /// The content type is [`JSON_CONTENT_TYPE`], not reqwest's bare
    /// `application/json`.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<HttpResponse, HttpError> {
        debug!("POST request with JSON");
        let bytes = serde_json::to_vec(body)?;
        self.send(
            self.inner
                .post(url)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(bytes),
        )
        .await
    }

    async fn send(&self, request: RequestBuilder) -> Result<HttpResponse, HttpError> {
        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        debug!(status = %status, "Response received");

        let body = response.text().await.map_err(|e| self.classify(e))?;
        Ok(HttpResponse { status, body })
    }

    fn classify(&self, err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(self.timeout)
        } else {
            HttpError::Request(err)
        }
    }
}

fn build_headers(headers: &BTreeMap<String, String>) -> Result<HeaderMap, HttpError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| HttpError::ClientBuild(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| HttpError::ClientBuild(format!("invalid value for {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

// ============================================================================
// Tests
// ============================================================================
