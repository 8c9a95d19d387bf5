use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    domain::{Expense, Goal, GoalProgress, Projection, ProjectionGap},
    errors::Result,
};

use super::{expenses::total_spent, write_atomic};

/// Ledger rows required before the average spend per row is considered a
/// meaningful pace signal.
const SPEND_SAMPLE_FLOOR: usize = 10;

const PACE_WARNING: &str = "You might need to save more to reach this goal";

/// Repository for the savings goal list.
#[derive(Debug, Clone)]
pub struct GoalTracker {
    path: PathBuf,
}

impl GoalTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted list; a missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Goal>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Overwrites the stored list in one atomic step.
    pub fn save(&self, goals: &[Goal]) -> Result<()> {
        let json = serde_json::to_string_pretty(goals)?;
        write_atomic(&self.path, &json)?;
        debug!(count = goals.len(), "saved goals");
        Ok(())
    }

    /// Appends a goal created `today` and persists the list.
    pub fn add(
        &self,
        name: &str,
        target_amount: f64,
        timeframe_months: u32,
        today: NaiveDate,
    ) -> Result<()> {
        let mut goals = self.load()?;
        goals.push(Goal::new(name, target_amount, timeframe_months, today));
        self.save(&goals)
    }

    /// Adds `amount` to the goal at ordinal `index`. An out-of-range index
    /// changes nothing, including the file on disk.
    pub fn update_progress(&self, index: usize, amount: f64) -> Result<()> {
        let mut goals = self.load()?;
        match goals.get_mut(index) {
            Some(goal) => {
                goal.current_amount += amount;
                self.save(&goals)
            }
            None => Ok(()),
        }
    }

    /// Projects every goal against `today`, using the spending snapshot for
    /// the pace warning. A goal whose projection cannot be computed is still
    /// returned, carrying the reason instead of derived fields.
    pub fn progress(&self, expenses: &[Expense], today: NaiveDate) -> Result<Vec<GoalProgress>> {
        let goals = self.load()?;
        let spent = total_spent(expenses);
        let sample = expenses.len();
        Ok(goals
            .into_iter()
            .map(|goal| project_goal(goal, spent, sample, today))
            .collect())
    }
}

fn project_goal(goal: Goal, total_spent: f64, sample: usize, today: NaiveDate) -> GoalProgress {
    let days_left = (goal.target_date - today).num_days();
    if days_left <= 0 {
        return GoalProgress {
            goal,
            projection: Projection::Unavailable(ProjectionGap::DeadlinePassed),
        };
    }

    let daily_saving = goal.remaining() / days_left as f64;
    let mut warning = None;
    if total_spent > 0.0 && sample > SPEND_SAMPLE_FLOOR {
        // Rough average: total spend over row count, not per calendar day.
        let average_spend = total_spent / sample as f64;
        if average_spend > daily_saving * 2.0 {
            warning = Some(PACE_WARNING.to_string());
        }
    }

    GoalProgress {
        goal,
        projection: Projection::Projected {
            days_left,
            daily_saving,
            warning,
        },
    }
}
