use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days assumed per month when projecting a target date. A deliberate
/// simplification: a 12-month goal lands 360 days out, not a calendar year.
pub const DAYS_PER_MONTH: i64 = 30;

/// A savings goal as persisted on disk. `current_amount` only ever grows
/// through progress updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub timeframe_months: u32,
    pub created: NaiveDate,
    pub target_date: NaiveDate,
}

impl Goal {
    /// Creates a goal starting at zero, with the target date a fixed
    /// [`DAYS_PER_MONTH`] days per month after `created`.
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        timeframe_months: u32,
        created: NaiveDate,
    ) -> Self {
        let target_date = created + Duration::days(DAYS_PER_MONTH * i64::from(timeframe_months));
        Self {
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            timeframe_months,
            created,
            target_date,
        }
    }

    /// Amount still missing to reach the target.
    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_amount
    }

    /// Share of the target already saved, capped at 100.
    pub fn percent_complete(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 100.0;
        }
        (self.current_amount / self.target_amount * 100.0).min(100.0)
    }
}

/// A goal snapshot together with its read-time projection.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal: Goal,
    pub projection: Projection,
}

/// Outcome of projecting one goal. A goal without derived fields carries the
/// reason instead of silently lacking them, so callers (and tests) can tell
/// *why* no projection exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Projected {
        days_left: i64,
        daily_saving: f64,
        warning: Option<String>,
    },
    Unavailable(ProjectionGap),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionGap {
    /// The target date is today or already behind us.
    DeadlinePassed,
}

impl fmt::Display for ProjectionGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionGap::DeadlinePassed => f.write_str("target date has passed"),
        }
    }
}
