//! Usage Collector: usage per category for one line.
//!
//! The response groups summaries by domain, each domain holding a list of
//! entries tagged with a subtype code:
//!
//! ```text
//! {"data": [{"wirelessUsageSummaryInfoList": [
//!     {"usageSummaryType": "D", "used": 1024, "remaining": 3072, "total": 4096}
//! ]}], "talk": [...], "text": [...]}
//! ```
//!
//! Each [`UsageCategory`] names one `(domain, subtype)` pair. A pair that
//! is not in the response means the category does not apply to the line;
//! it is left out of the map, never reported as zero.

use fidousage_core::{
    AccountNumber, PhoneNumber, RetrievalError, Stage, UsageCategory, UsageFigure, UsageMap,
};
use fidousage_fetch::Session;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::balance::LineForm;
use crate::response::{check_status, number, parse_json, request_failed, transport};

const SUMMARY_LIST: &str = "wirelessUsageSummaryInfoList";

/// Fetches the usage of one line.
///
/// # Errors
///
/// Returns `RetrievalError::Usage` if the request fails or the body is
/// not JSON.
#[instrument(skip(session), fields(account = %account, number = %number))]
pub async fn get_usage(
    session: &Session,
    account: &AccountNumber,
    number: &PhoneNumber,
) -> Result<UsageMap, RetrievalError> {
    let http = transport(session, Stage::Usage).await?;
    let form = LineForm::new(number.as_str(), account);
    let response = http
        .post_form(&session.endpoints().usage(), &form)
        .await
        .map_err(|e| request_failed(Stage::Usage, "usage request failed", &e))?;
    check_status(Stage::Usage, &response);

    let usage = parse_usage(&response.body)?;
    debug!(categories = usage.len(), "Fetched usage");
    Ok(usage)
}

/// Projects a usage body onto the category table.
///
/// # Errors
///
/// Returns `RetrievalError::Usage` only if the body is not JSON. Missing
/// domains or subtypes are not errors.
pub fn parse_usage(body: &str) -> Result<UsageMap, RetrievalError> {
    let json = parse_json(Stage::Usage, body)?;
    Ok(UsageCategory::ALL
        .iter()
        .filter_map(|&category| {
            find_summary(&json, category).map(|entry| (category, project(entry)))
        })
        .collect())
}

fn find_summary(json: &Value, category: UsageCategory) -> Option<&Value> {
    json[category.domain()][0][SUMMARY_LIST]
        .as_array()?
        .iter()
        .find(|entry| entry["usageSummaryType"].as_str() == Some(category.subtype()))
}

fn project(entry: &Value) -> UsageFigure {
    UsageFigure::from_raw(
        number(&entry["used"]),
        number(&entry["remaining"]),
        number(&entry["total"]),
    )
}
