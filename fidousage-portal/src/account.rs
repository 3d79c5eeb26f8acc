//! Account Resolver: token to billing account number.

use fidousage_core::{AccountNumber, AuthToken, RetrievalError, Stage};
use fidousage_fetch::Session;
use serde::Serialize;
use tracing::{info, instrument};

use crate::response::{check_status, parse_json, request_failed, text, transport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountForm<'a> {
    access_token: &'a str,
    uuid: &'a str,
}

/// Exchanges the token for the first account number on the login.
///
/// # Errors
///
/// Returns `RetrievalError::Account` if the request fails or the response
/// lists no account.
#[instrument(skip(session, token))]
pub async fn resolve_account(
    session: &Session,
    token: &AuthToken,
) -> Result<AccountNumber, RetrievalError> {
    let http = transport(session, Stage::Account).await?;
    let form = AccountForm {
        access_token: &token.token,
        uuid: &token.subject_id,
    };
    let response = http
        .post_form(&session.endpoints().account(), &form)
        .await
        .map_err(|e| request_failed(Stage::Account, "account request failed", &e))?;
    check_status(Stage::Account, &response);

    let account = parse_account_number(&response.body)?;
    info!(account = %account, "Resolved account");
    Ok(account)
}

/// Reads `getCustomerAccounts.accounts[0].accountNumber`.
///
/// # Errors
///
/// Returns `RetrievalError::Account` for malformed JSON, an empty account
/// list, or an account without a number.
pub fn parse_account_number(body: &str) -> Result<AccountNumber, RetrievalError> {
    let json = parse_json(Stage::Account, body)?;
    let first = json["getCustomerAccounts"]["accounts"]
        .as_array()
        .and_then(|accounts| accounts.first())
        .ok_or_else(|| Stage::Account.error("no account found"))?;

    text(&first["accountNumber"])
        .map(AccountNumber::new)
        .ok_or_else(|| Stage::Account.error("account has no number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_number() {
        let body = r#"{"getCustomerAccounts":{"accounts":[{"accountNumber":"123"}]}}"#;
        assert_eq!(parse_account_number(body).unwrap().as_str(), "123");
    }

    #[test]
    fn test_first_account_wins() {
        let body = r#"{"getCustomerAccounts":{"accounts":[{"accountNumber":"1"},{"accountNumber":"2"}]}}"#;
        assert_eq!(parse_account_number(body).unwrap().as_str(), "1");
    }

    #[test]
    fn test_empty_account_list() {
        let body = r#"{"getCustomerAccounts":{"accounts":[]}}"#;
        let err = parse_account_number(body).unwrap_err();
        assert_eq!(err.stage(), Stage::Account);
    }

    #[test]
    fn test_missing_account_number() {
        let body = r#"{"getCustomerAccounts":{"accounts":[{"status":"open"}]}}"#;
        assert!(matches!(
            parse_account_number(body),
            Err(RetrievalError::Account(_))
        ));
    }

    #[test]
    fn test_unexpected_shape() {
        assert!(parse_account_number(r#"{"error":"expired"}"#).is_err());
        assert!(parse_account_number("").is_err());
    }
}
