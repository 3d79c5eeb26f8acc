//! Number Enumerator: the phone numbers (lines) on an account.

use fidousage_core::{AccountNumber, PhoneNumber, RetrievalError, Stage};
use fidousage_fetch::Session;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::response::{check_status, parse_json, request_failed, text, transport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NumbersForm<'a> {
    account_number: &'a str,
    refresh: &'static str,
}

/// Lists every phone number on the account, in portal order.
///
/// # Errors
///
/// Returns `RetrievalError::Number` if the request fails or no number can
/// be read from the response.
#[instrument(skip(session), fields(account = %account))]
pub async fn list_numbers(
    session: &Session,
    account: &AccountNumber,
) -> Result<Vec<PhoneNumber>, RetrievalError> {
    let http = transport(session, Stage::Number).await?;
    let form = NumbersForm {
        account_number: account.as_str(),
        refresh: "False",
    };
    let response = http
        .post_form(&session.endpoints().numbers(), &form)
        .await
        .map_err(|e| request_failed(Stage::Number, "number request failed", &e))?;
    check_status(Stage::Number, &response);

    let numbers = parse_phone_numbers(&response.body)?;
    info!(count = numbers.len(), "Listed phone numbers");
    Ok(numbers)
}

/// Reads `getAccountInfo.subscriberService[*].service[0].subscriberNo`.
///
/// Services without a subscriber number are skipped.
///
/// # Errors
///
/// Returns `RetrievalError::Number` for malformed JSON or when no number
/// is found at all.
pub fn parse_phone_numbers(body: &str) -> Result<Vec<PhoneNumber>, RetrievalError> {
    let json = parse_json(Stage::Number, body)?;
    let services = json["getAccountInfo"]["subscriberService"]
        .as_array()
        .ok_or_else(|| Stage::Number.error("no subscriber services"))?;

    let mut numbers = Vec::with_capacity(services.len());
    for (index, service) in services.iter().enumerate() {
        match subscriber_number(service) {
            Some(number) => numbers.push(PhoneNumber::new(number)),
            None => warn!(index, "Subscriber service without a number"),
        }
    }

    if numbers.is_empty() {
        return Err(Stage::Number.error("no phone number found"));
    }
    Ok(numbers)
}

fn subscriber_number(service: &Value) -> Option<String> {
    service["service"]
        .as_array()
        .and_then(|entries| entries.first())
        .and_then(|entry| text(&entry["subscriberNo"]))
}
