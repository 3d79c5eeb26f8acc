//! Text output formatting.

use fidousage_core::{Allowance, LineRecord, PhoneNumber, ResultSet, UsageCategory, UsageFigure};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Shown instead of a number for an unlimited allowance.
const NO_LIMIT: &str = "No limit";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats every line of a result set, separated by a blank line.
    pub fn format_results(&self, results: &ResultSet) -> String {
        results
            .lines()
            .values()
            .map(|line| self.format_line(results.account().balance, line))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Formats one line.
    ///
    /// Categories the line does not have are left out.
    pub fn format_line(&self, balance: f64, line: &LineRecord) -> String {
        let mut sections = vec![format!("Fido data for number: {}", line.phone_number)];

        sections.push(self.section(
            "Balance",
            &[
                format!("Balance:      {balance:.2} $"),
                format!("Fido Dollars: {:.2} $", line.loyalty_balance),
            ],
        ));

        for category in UsageCategory::ALL {
            if let Some(figure) = line.figure(category) {
                sections.push(self.section(
                    category.display_name(),
                    &figure_rows(figure, category.unit()),
                ));
            }
        }

        sections.join("\n\n")
    }

    /// Formats phone numbers, one per row.
    pub fn format_numbers(&self, numbers: &[PhoneNumber]) -> String {
        numbers
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A heading, its underline, then the rows.
    fn section(&self, title: &str, rows: &[String]) -> String {
        let mut out = vec![self.bold(title), "=".repeat(title.chars().count())];
        out.extend(rows.iter().cloned());
        out.join("\n")
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

fn figure_rows(figure: &UsageFigure, unit: &str) -> [String; 3] {
    [
        format!("Limit:        {}", allowance(figure.limit, unit)),
        format!("Used:         {} {unit}", whole(figure.used)),
        format!("Remaining:    {}", allowance(figure.remaining, unit)),
    ]
}

fn allowance(value: Allowance, unit: &str) -> String {
    match value {
        Allowance::Amount(amount) => format!("{} {unit}", whole(amount)),
        Allowance::Unlimited => NO_LIMIT.to_string(),
    }
}

/// Drops the fractional part. Negative zero prints as `0`.
fn whole(value: f64) -> String {
    format!("{:.0}", value.trunc() + 0.0)
}

// ============================================================================
// Tests
// ============================================================================
