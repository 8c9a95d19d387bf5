use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    domain::{BudgetPlan, Expense},
    errors::Result,
};

use super::write_atomic;

/// Spend share of the weekly budget that triggers the warning alert.
const WARNING_PERCENT: f64 = 80.0;
/// Spend share at which the budget counts as exceeded.
const EXCEEDED_PERCENT: f64 = 100.0;

/// Repository for the singleton weekly budget document.
#[derive(Debug, Clone)]
pub struct BudgetTracker {
    path: PathBuf,
}

impl BudgetTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current plan. A missing or non-conforming document means no
    /// budget is set.
    pub fn load(&self) -> Result<Option<BudgetPlan>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data).ok())
    }

    /// Replaces the whole plan with `amount` anchored at `today`, redefining
    /// the comparison window.
    pub fn set_weekly(&self, amount: f64, today: NaiveDate) -> Result<()> {
        let plan = BudgetPlan {
            weekly_budget: amount,
            week_start: today,
        };
        let json = serde_json::to_string_pretty(&plan)?;
        write_atomic(&self.path, &json)?;
        debug!(amount, "weekly budget replaced");
        Ok(())
    }

    /// Alert lines for the given spending snapshot; empty when no budget is
    /// set or spending sits below the warning threshold.
    pub fn alerts(&self, expenses: &[Expense]) -> Result<Vec<String>> {
        match self.load()? {
            Some(plan) => Ok(budget_alerts(&plan, expenses)),
            None => Ok(Vec::new()),
        }
    }
}

/// Alert computation over a loaded plan and snapshot. Sums dated rows from
/// `week_start` onward; undated rows never count toward the week.
pub fn budget_alerts(plan: &BudgetPlan, expenses: &[Expense]) -> Vec<String> {
    let spent: f64 = expenses
        .iter()
        .filter(|expense| {
            expense
                .recorded_on()
                .is_some_and(|date| date >= plan.week_start)
        })
        .map(|expense| expense.amount)
        .sum();

    let percentage = spent / plan.weekly_budget * 100.0;
    if percentage >= EXCEEDED_PERCENT {
        vec![format!(
            "Budget exceeded! Spent ₹{spent:.0} of ₹{budget} ({percentage:.0}%)",
            budget = plan.weekly_budget
        )]
    } else if percentage >= WARNING_PERCENT {
        vec![format!(
            "Budget at {percentage:.0}% (₹{spent:.0}/₹{budget})",
            budget = plan.weekly_budget
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan(budget: f64) -> BudgetPlan {
        BudgetPlan {
            weekly_budget: budget,
            week_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn spent_rows(amount: f64) -> Vec<Expense> {
        vec![Expense::new(
            "stuff",
            amount,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        )]
    }

    #[test]
    fn below_warning_threshold_is_silent() {
        assert!(budget_alerts(&plan(1000.0), &spent_rows(799.0)).is_empty());
    }

    #[test]
    fn warning_fires_at_eighty_percent_exactly() {
        let alerts = budget_alerts(&plan(1000.0), &spent_rows(800.0));
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("80%"), "unexpected alert: {}", alerts[0]);
        assert!(alerts[0].contains("Budget at"));
    }

    #[test]
    fn exceeded_fires_at_one_hundred_percent() {
        let alerts = budget_alerts(&plan(1000.0), &spent_rows(1000.0));
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("Budget exceeded!"));
        assert!(alerts[0].contains("100%"));
    }

    #[test]
    fn spending_before_week_start_does_not_count() {
        let rows = vec![Expense::new(
            "old",
            5000.0,
            NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(),
        )];
        assert!(budget_alerts(&plan(1000.0), &rows).is_empty());
    }

    #[test]
    fn no_budget_file_means_no_alerts() {
        let temp = TempDir::new().unwrap();
        let tracker = BudgetTracker::new(temp.path().join("budget.json"));
        assert!(tracker.alerts(&spent_rows(9999.0)).expect("alerts").is_empty());
    }

    #[test]
    fn set_weekly_replaces_prior_plan() {
        let temp = TempDir::new().unwrap();
        let tracker = BudgetTracker::new(temp.path().join("budget.json"));
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        tracker.set_weekly(1000.0, monday).expect("set");
        tracker.set_weekly(2500.0, friday).expect("set again");

        let plan = tracker.load().expect("load").expect("plan");
        assert_eq!(plan.weekly_budget, 2500.0);
        assert_eq!(plan.week_start, friday);
    }
}
