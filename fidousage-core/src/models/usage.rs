//! Usage-related types.
//!
//! This module contains types related to per-line usage:
//! - [`UsageCategory`] - The six categories the portal reports
//! - [`UsageFigure`] - Used, remaining and limit for one category
//! - [`Allowance`] - A remaining/limit value or the unlimited sentinel

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Usage figures for one line, keyed by category.
///
/// A category missing from the map does not apply to the line.
pub type UsageMap = BTreeMap<UsageCategory, UsageFigure>;

// ============================================================================
// Usage Category
// ============================================================================

/// A usage category reported by the carrier.
///
/// Each category is located in the raw usage response by a
/// `(domain key, subtype code)` pair; see [`UsageCategory::domain`] and
/// [`UsageCategory::subtype`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UsageCategory {
    /// Mobile data.
    #[serde(rename = "data")]
    Data,
    /// Regular text messages.
    #[serde(rename = "text")]
    Text,
    /// Picture and video messages.
    #[serde(rename = "mms")]
    Mms,
    /// International text messages.
    #[serde(rename = "text_int")]
    InternationalText,
    /// Voice minutes.
    #[serde(rename = "talk")]
    Talk,
    /// International / long-distance voice minutes.
    #[serde(rename = "other_talk")]
    InternationalTalk,
}

impl UsageCategory {
    /// All categories, in report order.
    pub const ALL: [UsageCategory; 6] = [
        Self::Talk,
        Self::InternationalTalk,
        Self::Text,
        Self::Mms,
        Self::InternationalText,
        Self::Data,
    ];

    /// Domain key grouping this category in the usage response.
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Text | Self::Mms | Self::InternationalText => "text",
            Self::Talk | Self::InternationalTalk => "talk",
        }
    }

    /// Subtype code tagging this category's entry within its domain.
    pub fn subtype(&self) -> &'static str {
        match self {
            Self::Data => "D",
            Self::Text => "BL",
            Self::Mms => "M",
            Self::InternationalText => "SI",
            Self::Talk => "V",
            Self::InternationalTalk => "VL",
        }
    }

    /// Stable key used in flattened output (`data`, `text_int`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Text => "text",
            Self::Mms => "mms",
            Self::InternationalText => "text_int",
            Self::Talk => "talk",
            Self::InternationalTalk => "other_talk",
        }
    }

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Data => "Data plan",
            Self::Text => "Texts",
            Self::Mms => "MMS",
            Self::InternationalText => "International texts",
            Self::Talk => "Talk",
            Self::InternationalTalk => "Other Talk (like international calls)",
        }
    }

    /// Unit the portal reports this category in.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Data => "Kb",
            Self::Text | Self::Mms | Self::InternationalText => "messages",
            Self::Talk | Self::InternationalTalk => "minutes",
        }
    }
}

impl fmt::Display for UsageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Allowance
// ============================================================================

/// A remaining or limit value.
///
/// Serializes as a number, or `null` for [`Allowance::Unlimited`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Allowance {
    /// A concrete, non-negative amount.
    Amount(f64),
    /// No cap.
    Unlimited,
}

impl Allowance {
    /// Normalizes a raw portal value.
    ///
    /// The portal signals "no cap" with a negative number. Zero is a real
    /// amount, not the sentinel.
    pub fn from_raw(raw: f64) -> Self {
        if raw < 0.0 {
            Self::Unlimited
        } else {
            Self::Amount(raw)
        }
    }

    /// Returns true for the unlimited sentinel.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Returns the amount, or `None` when unlimited.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(v) => Some(*v),
            Self::Unlimited => None,
        }
    }
}

// ============================================================================
// Usage Figure
// ============================================================================

/// Usage for one category on one line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageFigure {
    /// Amount used in the current period.
    pub used: f64,
    /// Amount left, or unlimited.
    pub remaining: Allowance,
    /// Period cap, or unlimited.
    pub limit: Allowance,
}

impl UsageFigure {
    /// Builds a figure from raw portal values.
    ///
    /// A missing `used` counts as zero and a negative one is clamped to
    /// zero. A missing or negative `remaining` / `limit` becomes
    /// [`Allowance::Unlimited`].
    pub fn from_raw(used: Option<f64>, remaining: Option<f64>, limit: Option<f64>) -> Self {
        Self {
            used: used.unwrap_or(0.0).max(0.0),
            remaining: remaining.map_or(Allowance::Unlimited, Allowance::from_raw),
            limit: limit.map_or(Allowance::Unlimited, Allowance::from_raw),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table() {
        let table: Vec<_> = UsageCategory::ALL
            .iter()
            .map(|c| (c.domain(), c.subtype()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("talk", "V"),
                ("talk", "VL"),
                ("text", "BL"),
                ("text", "M"),
                ("text", "SI"),
                ("data", "D"),
            ]
        );
    }

    #[test]
    fn test_allowance_negative_is_unlimited() {
        assert_eq!(Allowance::from_raw(-1.0), Allowance::Unlimited);
        assert_eq!(Allowance::from_raw(-0.5), Allowance::Unlimited);
    }

    #[test]
    fn test_allowance_zero_passes_through() {
        assert_eq!(Allowance::from_raw(0.0), Allowance::Amount(0.0));
        assert_eq!(Allowance::from_raw(250.0), Allowance::Amount(250.0));
    }

    #[test]
    fn test_figure_defaults() {
        let figure = UsageFigure::from_raw(None, None, Some(100.0));
        assert_eq!(figure.used, 0.0);
        assert!(figure.remaining.is_unlimited());
        assert_eq!(figure.limit.amount(), Some(100.0));
    }

    #[test]
    fn test_figure_negative_used_is_zero() {
        let figure = UsageFigure::from_raw(Some(-0.4), Some(10.0), Some(10.0));
        assert_eq!(figure.used, 0.0);
        assert!(figure.used.is_sign_positive());

        let figure = UsageFigure::from_raw(Some(-12.0), None, None);
        assert_eq!(figure.used, 0.0);
    }
}
