//! Edge cases for the response parsers.

use fidousage_core::{PhoneNumber, Stage, UsageCategory};

use crate::account::parse_account_number;
use crate::auth::{extract_envelope, parse_token};
use crate::balance::{parse_balance, parse_loyalty_balance};
use crate::numbers::parse_phone_numbers;
use crate::usage::parse_usage;

// ============================================================================
// Token
// ============================================================================

#[test]
fn test_envelope_with_no_text_around_it() {
    assert_eq!(extract_envelope(r#"({"a":1})"#), Some(r#"{"a":1}"#));
}

#[test]
fn test_envelope_requires_braces() {
    assert_eq!(extract_envelope("callback(42)"), None);
    assert_eq!(extract_envelope(""), None);
}

#[test]
fn test_envelope_with_malformed_json() {
    let err = parse_token("cb({not json})").unwrap_err();
    assert_eq!(err.stage(), Stage::Auth);
    assert!(err.reason().starts_with("token not found"), "{}", err.reason());
}

#[test]
fn test_token_with_numeric_uuid() {
    let token = parse_token(r#"cb({"result":{"accessToken":"T","userData":{"uuid":7}}})"#).unwrap();
    assert_eq!(token.subject_id, "7");
}

#[test]
fn test_token_with_empty_access_token() {
    let err = parse_token(r#"cb({"result":{"accessToken":"","userData":{"uuid":"U"}}})"#)
        .unwrap_err();
    assert_eq!(err.stage(), Stage::Auth);
}

#[test]
fn test_token_error_body() {
    let body = r#"cb({"stat":"error","message":"invalid credentials"})"#;
    assert_eq!(parse_token(body).unwrap_err().stage(), Stage::Auth);
}

// ============================================================================
// Account and Numbers
// ============================================================================

#[test]
fn test_numeric_account_number() {
    let body = r#"{"getCustomerAccounts":{"accounts":[{"accountNumber":123456}]}}"#;
    assert_eq!(parse_account_number(body).unwrap().as_str(), "123456");
}

#[test]
fn test_accounts_not_a_list() {
    let body = r#"{"getCustomerAccounts":{"accounts":{"accountNumber":"1"}}}"#;
    assert_eq!(parse_account_number(body).unwrap_err().stage(), Stage::Account);
}

#[test]
fn test_only_first_service_entry_is_read() {
    let body = r#"{"getAccountInfo":{"subscriberService":[
        {"service":[{"subscriberNo":"111"},{"subscriberNo":"222"}]}
    ]}}"#;
    assert_eq!(parse_phone_numbers(body).unwrap(), vec![PhoneNumber::new("111")]);
}

#[test]
fn test_services_not_a_list() {
    let body = r#"{"getAccountInfo":{"subscriberService":"none"}}"#;
    assert_eq!(parse_phone_numbers(body).unwrap_err().stage(), Stage::Number);
}

// ============================================================================
// Balances
// ============================================================================

#[test]
fn test_integer_balance() {
    assert!((parse_balance(r#"{"getAccountInfo":{"balance":0}}"#).unwrap()).abs() < f64::EPSILON);
}

#[test]
fn test_balance_null_is_missing() {
    let err = parse_balance(r#"{"getAccountInfo":{"balance":null}}"#).unwrap_err();
    assert_eq!(err.reason(), "balance not found");
}

#[test]
fn test_loyalty_balance_wrong_type() {
    let body = r#"{"fidoDollarBalanceInfoList":[{"fidoDollarBalance":{"amount":1}}]}"#;
    assert_eq!(parse_loyalty_balance(body).unwrap_err().stage(), Stage::Loyalty);
}

#[test]
fn test_non_finite_balances_are_rejected() {
    let err = parse_balance(r#"{"getAccountInfo":{"balance":"NaN"}}"#).unwrap_err();
    assert_eq!(err.stage(), Stage::Balance);
    assert!(err.reason().starts_with("balance is not a number"));

    let body = r#"{"fidoDollarBalanceInfoList":[{"fidoDollarBalance":"inf"}]}"#;
    let err = parse_loyalty_balance(body).unwrap_err();
    assert_eq!(err.stage(), Stage::Loyalty);
    assert!(err.reason().starts_with("loyalty balance is not a number"));
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn test_unknown_subtypes_are_ignored() {
    let body = r#"{"text":[{"wirelessUsageSummaryInfoList":[
        {"usageSummaryType":"ZZ","used":1,"remaining":1,"total":2},
        {"usageSummaryType":"M","used":3,"remaining":-1,"total":-1}
    ]}]}"#;
    let usage = parse_usage(body).unwrap();
    assert_eq!(usage.keys().copied().collect::<Vec<_>>(), vec![UsageCategory::Mms]);
}

#[test]
fn test_subtype_in_wrong_domain_is_not_matched() {
    let body = r#"{"data":[{"wirelessUsageSummaryInfoList":[
        {"usageSummaryType":"V","used":1,"remaining":1,"total":2}
    ]}]}"#;
    assert!(parse_usage(body).unwrap().is_empty());
}

#[test]
fn test_domain_with_unexpected_shape() {
    let body = r#"{"data":{"wirelessUsageSummaryInfoList":[]},"talk":[{}],"text":null}"#;
    assert!(parse_usage(body).unwrap().is_empty());
}

#[test]
fn test_non_finite_usage_values() {
    let body = r#"{"data":[{"wirelessUsageSummaryInfoList":[
        {"usageSummaryType":"D","used":"NaN","remaining":"NaN","total":"infinity"}
    ]}]}"#;
    let data = parse_usage(body).unwrap()[&UsageCategory::Data];
    assert_eq!(data.used, 0.0);
    assert!(data.remaining.is_unlimited());
    assert!(data.limit.is_unlimited());
}

#[test]
fn test_non_object_usage_body() {
    assert!(parse_usage("[]").unwrap().is_empty());
}
