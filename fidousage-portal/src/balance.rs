//! Balance and loyalty collectors.
//!
//! The account balance comes from the account overview (form post); the
//! loyalty balance ("Fido dollars") from the rewards endpoint, which only
//! accepts a JSON body.

use fidousage_core::{AccountNumber, PhoneNumber, RetrievalError, Stage};
use fidousage_fetch::Session;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::response::{check_status, number, parse_json, request_failed, transport};

/// Language sent with overview and usage requests.
pub(crate) const LANGUAGE: &str = "en-US";

/// Form for endpoints keyed by a line (`ctn`) and the account.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineForm<'a> {
    pub(crate) ctn: &'a str,
    pub(crate) language: &'static str,
    pub(crate) account_number: &'a str,
}

impl<'a> LineForm<'a> {
    pub(crate) fn new(ctn: &'a str, account: &'a AccountNumber) -> Self {
        Self {
            ctn,
            language: LANGUAGE,
            account_number: account.as_str(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoyaltyRequest<'a> {
    fido_dollar_balance_form_list: [LoyaltyForm<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoyaltyForm<'a> {
    phone_number: &'a str,
    account_number: &'a str,
}

// ============================================================================
// Account Balance
// ============================================================================

/// Fetches the account's outstanding balance.
///
/// The overview request is keyed by the login identifier, not by a line.
///
/// # Errors
///
/// Returns `RetrievalError::Balance` if the request fails or the balance
/// is missing or not numeric.
#[instrument(skip(session), fields(account = %account))]
pub async fn get_balance(session: &Session, account: &AccountNumber) -> Result<f64, RetrievalError> {
    let http = transport(session, Stage::Balance).await?;
    let form = LineForm::new(session.credentials().identifier(), account);
    let response = http
        .post_form(&session.endpoints().balance(), &form)
        .await
        .map_err(|e| request_failed(Stage::Balance, "balance request failed", &e))?;
    check_status(Stage::Balance, &response);

    let balance = parse_balance(&response.body)?;
    debug!(balance, "Fetched account balance");
    Ok(balance)
}

/// Reads `getAccountInfo.balance`.
///
/// # Errors
///
/// Returns `RetrievalError::Balance` if the field is absent or not numeric.
pub fn parse_balance(body: &str) -> Result<f64, RetrievalError> {
    let json = parse_json(Stage::Balance, body)?;
    let raw = &json["getAccountInfo"]["balance"];
    if raw.is_null() {
        return Err(Stage::Balance.error("balance not found"));
    }
    number(raw).ok_or_else(|| Stage::Balance.error(format!("balance is not a number: {raw}")))
}

// ============================================================================
// Loyalty Balance
// ============================================================================

/// Fetches the loyalty-currency balance of one line.
///
/// # Errors
///
/// Returns `RetrievalError::Loyalty` if the request fails or the balance
/// is missing or not numeric.
#[instrument(skip(session), fields(account = %account, number = %number))]
pub async fn get_loyalty_balance(
    session: &Session,
    account: &AccountNumber,
    number: &PhoneNumber,
) -> Result<f64, RetrievalError> {
    let http = transport(session, Stage::Loyalty).await?;
    let body = LoyaltyRequest {
        fido_dollar_balance_form_list: [LoyaltyForm {
            phone_number: number.as_str(),
            account_number: account.as_str(),
        }],
    };
    let response = http
        .post_json(&session.endpoints().loyalty(), &body)
        .await
        .map_err(|e| request_failed(Stage::Loyalty, "loyalty request failed", &e))?;
    check_status(Stage::Loyalty, &response);

    let balance = parse_loyalty_balance(&response.body)?;
    debug!(balance, "Fetched loyalty balance");
    Ok(balance)
}

/// Reads `fidoDollarBalanceInfoList[0].fidoDollarBalance`.
///
/// # Errors
///
/// Returns `RetrievalError::Loyalty` if the field is absent or not numeric.
pub fn parse_loyalty_balance(body: &str) -> Result<f64, RetrievalError> {
    let json = parse_json(Stage::Loyalty, body)?;
    let raw = &json["fidoDollarBalanceInfoList"][0]["fidoDollarBalance"];
    if raw.is_null() {
        return Err(Stage::Loyalty.error("loyalty balance not found"));
    }
    number(raw)
        .ok_or_else(|| Stage::Loyalty.error(format!("loyalty balance is not a number: {raw}")))
}
