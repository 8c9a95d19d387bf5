use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The single weekly budget threshold and its anchor date.
///
/// Replaced wholesale whenever the user sets a new budget; no history is
/// kept, and resetting the budget moves `week_start` to the day it was set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub weekly_budget: f64,
    pub week_start: NaiveDate,
}
