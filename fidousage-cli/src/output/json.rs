//! JSON output formatting.
//!
//! Results are flattened to one object keyed by phone number:
//!
//! ```text
//! {"balance": 42.5,
//!  "5145550001": {"fido_dollar": 12.0, "data_used": 1024.0, "data_remaining": 3072.0, "data_limit": 4096.0}}
//! ```
//!
//! Unlimited allowances are `null`. Categories a line does not have are left
//! out.

use anyhow::Result;
use fidousage_core::{Allowance, LineRecord, PhoneNumber, ResultSet, UsageCategory};
use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats a result set in the flattened shape.
    pub fn format_results(&self, results: &ResultSet) -> Result<String> {
        self.format(&flatten(results))
    }

    /// Formats a list of phone numbers as a JSON array.
    pub fn format_numbers(&self, numbers: &[PhoneNumber]) -> Result<String> {
        self.format(&numbers)
    }
}

// ============================================================================
// Flattening
// ============================================================================

/// Builds the flattened object for a result set.
pub(crate) fn flatten(results: &ResultSet) -> Value {
    let mut root = Map::new();
    root.insert("balance".to_string(), Value::from(results.account().balance));

    for (number, line) in results.lines() {
        root.insert(number.to_string(), Value::Object(flatten_line(line)));
    }

    Value::Object(root)
}

fn flatten_line(line: &LineRecord) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("fido_dollar".to_string(), Value::from(line.loyalty_balance));

    for category in UsageCategory::ALL {
        let Some(figure) = line.figure(category) else {
            continue;
        };
        let key = category.key();
        fields.insert(format!("{key}_used"), Value::from(figure.used));
        fields.insert(format!("{key}_remaining"), allowance(figure.remaining));
        fields.insert(format!("{key}_limit"), allowance(figure.limit));
    }

    fields
}

fn allowance(value: Allowance) -> Value {
    value.amount().map_or(Value::Null, Value::from)
}

// ============================================================================
// Tests
// ============================================================================
