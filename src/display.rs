//! Currency rendering of a cost result

use crate::calculator::CostResult;
use crate::planner::CostObserver;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Shown in place of an amount that is NaN or infinite
pub const NOT_A_NUMBER: &str = "N/A";

pub const SUMMARY_HEADING: &str = "Team Cost Summary";

/// Renders the most recent result it was given
#[derive(Debug, Clone)]
pub struct CostDisplay {
    currency_symbol: String,
    last: CostResult,
}

impl Default for CostDisplay {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl CostDisplay {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            last: CostResult::default(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Result currently on display
    pub fn last(&self) -> &CostResult {
        &self.last
    }

    /// Replace the displayed result
    pub fn show(&mut self, result: &CostResult) {
        self.last = *result;
    }

    /// Format an amount with exactly two decimals, e.g. `$18449.76`
    pub fn format_amount(&self, value: f64) -> String {
        if value.is_finite() {
            format!("{}{:.2}", self.currency_symbol, value)
        } else {
            NOT_A_NUMBER.to_string()
        }
    }

    /// Summary block for a result, one entry per line
    pub fn summary_lines(&self, result: &CostResult) -> Vec<String> {
        vec![
            SUMMARY_HEADING.to_string(),
            "Total Cost:".to_string(),
            self.format_amount(result.total),
            "Per Player:".to_string(),
            self.format_amount(result.per_player),
        ]
    }

    /// Summary block for the result currently on display
    pub fn render(&self) -> Vec<String> {
        self.summary_lines(&self.last)
    }
}

impl CostObserver for CostDisplay {
    fn on_result(&mut self, result: &CostResult) {
        self.show(result);
    }
}
