//! The record one run produces.
//!
//! - [`AccountRecord`] - Account-wide figures
//! - [`LineRecord`] - Per-line figures
//! - [`ResultSet`] - Both, assembled by the aggregator

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::identity::PhoneNumber;
use super::usage::{UsageCategory, UsageFigure, UsageMap};

// ============================================================================
// Account Record
// ============================================================================

/// Account-wide figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Current account balance, in dollars.
    pub balance: f64,
}

impl AccountRecord {
    /// Creates an account record.
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }
}

// ============================================================================
// Line Record
// ============================================================================

/// Loyalty balance and usage for one phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    /// The line this record belongs to.
    pub phone_number: PhoneNumber,
    /// Loyalty-currency balance, in dollars.
    pub loyalty_balance: f64,
    /// Usage per category. Absent categories do not apply to the line.
    pub usage: UsageMap,
}

impl LineRecord {
    /// Creates a line record.
    pub fn new(phone_number: PhoneNumber, loyalty_balance: f64, usage: UsageMap) -> Self {
        Self {
            phone_number,
            loyalty_balance,
            usage,
        }
    }

    /// Returns the figure for a category, if the line reports it.
    pub fn figure(&self, category: UsageCategory) -> Option<&UsageFigure> {
        self.usage.get(&category)
    }
}

// ============================================================================
// Result Set
// ============================================================================

/// Everything collected by one run.
///
/// Built once by the aggregator and not mutated afterwards; lines are keyed
/// and ordered by phone number so identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    account: AccountRecord,
    lines: BTreeMap<PhoneNumber, LineRecord>,
}

impl ResultSet {
    /// Assembles a result set from the account record and line records.
    ///
    /// A later record for the same phone number replaces an earlier one.
    pub fn new(account: AccountRecord, lines: impl IntoIterator<Item = LineRecord>) -> Self {
        let lines = lines
            .into_iter()
            .map(|line| (line.phone_number.clone(), line))
            .collect();
        Self { account, lines }
    }

    /// Returns the account-wide record.
    pub fn account(&self) -> &AccountRecord {
        &self.account
    }

    /// Returns all line records keyed by phone number.
    pub fn lines(&self) -> &BTreeMap<PhoneNumber, LineRecord> {
        &self.lines
    }

    /// Returns the record for one line.
    pub fn line(&self, number: &PhoneNumber) -> Option<&LineRecord> {
        self.lines.get(number)
    }

    /// Returns the phone numbers present, in order.
    pub fn phone_numbers(&self) -> impl Iterator<Item = &PhoneNumber> {
        self.lines.keys()
    }

    /// Returns a copy restricted to a single line.
    ///
    /// The copy has no lines when the number is not on the account.
    pub fn only(&self, number: &PhoneNumber) -> Self {
        Self {
            account: self.account,
            lines: self
                .lines
                .get(number)
                .map(|line| (number.clone(), line.clone()))
                .into_iter()
                .collect(),
        }
    }

    /// Returns true when no line data was collected.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: &str, loyalty: f64) -> LineRecord {
        let mut usage = UsageMap::new();
        usage.insert(
            UsageCategory::Talk,
            UsageFigure::from_raw(Some(10.0), Some(90.0), Some(100.0)),
        );
        LineRecord::new(PhoneNumber::new(number), loyalty, usage)
    }

    #[test]
    fn test_result_set_keys_by_number() {
        let set = ResultSet::new(
            AccountRecord::new(42.5),
            vec![line("222", 2.0), line("111", 1.0)],
        );

        let numbers: Vec<_> = set.phone_numbers().map(PhoneNumber::as_str).collect();
        assert_eq!(numbers, vec!["111", "222"]);
        assert_eq!(set.account().balance, 42.5);
        assert_eq!(set.line(&PhoneNumber::new("222")).unwrap().loyalty_balance, 2.0);
    }

    #[test]
    fn test_only_filters_lines() {
        let set = ResultSet::new(
            AccountRecord::new(0.0),
            vec![line("111", 1.0), line("222", 2.0)],
        );

        let one = set.only(&PhoneNumber::new("222"));
        assert_eq!(one.lines().len(), 1);
        assert_eq!(one.account(), set.account());

        let none = set.only(&PhoneNumber::new("999"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_line_figure_lookup() {
        let record = line("111", 1.0);
        assert!(record.figure(UsageCategory::Talk).is_some());
        assert!(record.figure(UsageCategory::Data).is_none());
    }
}
