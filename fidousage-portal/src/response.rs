//! Helpers shared by the stage parsers.
//!
//! Every helper takes the [`Stage`] it is working for, so a failure is
//! raised as that stage's error and nothing upstream has to rewrap it.

use fidousage_core::{RetrievalError, Stage};
use fidousage_fetch::{HttpClient, HttpError, HttpResponse, Session};
use serde_json::Value;
use tracing::warn;

/// Fetches the session transport, failing as `stage`.
pub(crate) async fn transport<'s>(
    session: &'s Session,
    stage: Stage,
) -> Result<&'s HttpClient, RetrievalError> {
    session
        .http()
        .await
        .map_err(|e| stage.error(format!("transport unavailable: {e}")))
}

/// Turns a transport failure into `stage`'s error.
pub(crate) fn request_failed(stage: Stage, what: &str, err: &HttpError) -> RetrievalError {
    stage.error(format!("{what}: {err}"))
}

/// Logs a non-success status. The body is parsed regardless.
pub(crate) fn check_status(stage: Stage, response: &HttpResponse) {
    if !response.is_success() {
        warn!(stage = %stage, status = %response.status, "Non-success status from portal");
    }
}

/// Parses a body as JSON, failing as `stage`.
pub(crate) fn parse_json(stage: Stage, body: &str) -> Result<Value, RetrievalError> {
    serde_json::from_str(body).map_err(|e| stage.error(format!("malformed response: {e}")))
}

/// Reads a JSON number or a numeric string. `NaN` and infinities are
/// rejected.
pub(crate) fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Reads a non-empty string, or a number rendered as text.
pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_accepts_strings_and_numbers() {
        assert_eq!(number(&json!(12.5)), Some(12.5));
        assert_eq!(number(&json!("12.50")), Some(12.5));
        assert_eq!(number(&json!(" -1 ")), Some(-1.0));
        assert_eq!(number(&json!("n/a")), None);
        assert_eq!(number(&json!(null)), None);
    }

    #[test]
    fn test_number_rejects_non_finite() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", "Infinity"] {
            assert_eq!(number(&json!(raw)), None, "{raw}");
        }
    }

    #[test]
    fn test_text() {
        assert_eq!(text(&json!("123")), Some("123".to_string()));
        assert_eq!(text(&json!(123)), Some("123".to_string()));
        assert_eq!(text(&json!("  ")), None);
        assert_eq!(text(&json!(null)), None);
    }

    #[test]
    fn test_parse_json_uses_stage() {
        let err = parse_json(Stage::Balance, "<html>").unwrap_err();
        assert_eq!(err.stage(), Stage::Balance);
        assert!(err.reason().starts_with("malformed response"));
    }
}
