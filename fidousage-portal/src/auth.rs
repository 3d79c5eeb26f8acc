//! Authenticator: identity-provider sign-in and token extraction.
//!
//! Sign-in is two requests over the same cookie jar. The form post only
//! sets server-side state; the token comes back from the "get result"
//! endpoint wrapped in a callback envelope:
//!
//! ```text
//! janrain.capture.ui.handler({"result": {"accessToken": "...", "userData": {"uuid": "..."}}});
//! ```

use std::sync::LazyLock;

use fidousage_core::{AuthToken, RetrievalError, Stage};
use fidousage_fetch::Session;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::response::{check_status, parse_json, request_failed, text, transport};

/// OAuth client id the carrier's web portal signs in with.
pub const CLIENT_ID: &str = "bfkecrvys7sprse8kc4wtwugr2bj9hmp";

/// Page the identity provider redirects to after sign-in.
pub const REDIRECT_URI: &str = "https://www.fido.ca/pages/#/";

/// First parenthesised JSON object in a body.
static ENVELOPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\{.*\}\)").expect("Invalid regex"));

#[derive(Serialize)]
struct SignInForm<'a> {
    form: &'static str,
    client_id: &'static str,
    redirect_uri: &'static str,
    response_type: &'static str,
    locale: &'static str,
    #[serde(rename = "userID")]
    user_id: &'a str,
    #[serde(rename = "currentPassword")]
    current_password: &'a str,
}

impl<'a> SignInForm<'a> {
    fn new(user_id: &'a str, current_password: &'a str) -> Self {
        Self {
            form: "signInForm",
            client_id: CLIENT_ID,
            redirect_uri: REDIRECT_URI,
            response_type: "token",
            locale: "en-US",
            user_id,
            current_password,
        }
    }
}

/// Signs in with the session's credentials and returns the access token.
///
/// # Errors
///
/// Returns `RetrievalError::Auth` if either request fails or the token
/// response does not carry both the token and the subject id.
#[instrument(skip(session), fields(user = %session.credentials().identifier()))]
pub async fn sign_in(session: &Session) -> Result<AuthToken, RetrievalError> {
    let http = transport(session, Stage::Auth).await?;
    let endpoints = session.endpoints();
    let credentials = session.credentials();

    debug!("Submitting sign-in form");
    let form = SignInForm::new(credentials.identifier(), credentials.secret());
    let response = http
        .post_form(&endpoints.sign_in(), &form)
        .await
        .map_err(|e| request_failed(Stage::Auth, "sign-in failed", &e))?;
    check_status(Stage::Auth, &response);

    debug!("Requesting token");
    let response = http
        .get(&endpoints.token())
        .await
        .map_err(|e| request_failed(Stage::Auth, "token request failed", &e))?;
    check_status(Stage::Auth, &response);

    let token = parse_token(&response.body)?;
    info!("Signed in");
    Ok(token)
}

/// Returns the first `({...})` substring without its parentheses.
pub fn extract_envelope(body: &str) -> Option<&str> {
    ENVELOPE_RE
        .find(body)
        .map(|m| &body[m.start() + 1..m.end() - 1])
}

/// Extracts the token and subject id from a "get result" body.
///
/// # Errors
///
/// Returns `RetrievalError::Auth` if there is no envelope, its content is
/// not JSON, or either field is missing.
pub fn parse_token(body: &str) -> Result<AuthToken, RetrievalError> {
    let inner = extract_envelope(body).ok_or_else(|| Stage::Auth.error("token not found"))?;
    let json = parse_json(Stage::Auth, inner)
        .map_err(|e| Stage::Auth.error(format!("token not found: {}", e.reason())))?;
    let result = &json["result"];

    let token = text(&result["accessToken"])
        .ok_or_else(|| Stage::Auth.error("token not found: no accessToken"))?;
    let subject_id = text(&result["userData"]["uuid"])
        .ok_or_else(|| Stage::Auth.error("token not found: no uuid"))?;

    Ok(AuthToken::new(token, subject_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_regex_compiles() {
        assert!(ENVELOPE_RE.is_match("({})"));
    }

    #[test]
    fn test_parse_token_strips_envelope() {
        let body = r#"foo({"result":{"accessToken":"T","userData":{"uuid":"U"}}})bar"#;
        let token = parse_token(body).unwrap();
        assert_eq!(token, AuthToken::new("T", "U"));
    }

    #[test]
    fn test_parse_token_real_shape() {
        let body = concat!(
            "janrain.capture.ui.handler(",
            r#"{"result":{"accessToken":"abc","userData":{"uuid":"u-1","email":"x@y"}},"stat":"ok"}"#,
            ");"
        );
        let token = parse_token(body).unwrap();
        assert_eq!(token.token, "abc");
        assert_eq!(token.subject_id, "u-1");
    }

    #[test]
    fn test_parse_token_without_envelope() {
        let err = parse_token(r#"{"result":{"accessToken":"T"}}"#).unwrap_err();
        assert_eq!(err, RetrievalError::Auth("token not found".to_string()));
    }

    #[test]
    fn test_parse_token_missing_uuid() {
        let err = parse_token(r#"x({"result":{"accessToken":"T","userData":{}}})"#).unwrap_err();
        assert_eq!(err.stage(), Stage::Auth);
        assert!(err.reason().contains("uuid"));
    }

    #[test]
    fn test_parse_token_missing_token() {
        let err = parse_token(r#"x({"result":{"userData":{"uuid":"U"}}})"#).unwrap_err();
        assert!(err.reason().contains("accessToken"));
    }

    #[test]
    fn test_sign_in_form_encoding() {
        let form = SignInForm::new("me@example.com", "p&ss");
        let encoded = serde_json::to_value(&form).unwrap();
        assert_eq!(encoded["userID"], "me@example.com");
        assert_eq!(encoded["currentPassword"], "p&ss");
        assert_eq!(encoded["client_id"], CLIENT_ID);
        assert_eq!(encoded["form"], "signInForm");
    }
}
