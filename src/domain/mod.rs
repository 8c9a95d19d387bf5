//! Data models persisted by the stores, plus their read-time projections.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod reminder;
pub mod restaurant;

pub use budget::BudgetPlan;
pub use expense::Expense;
pub use goal::{Goal, GoalProgress, Projection, ProjectionGap};
pub use reminder::{DueTime, Reminder};
pub use restaurant::Restaurant;
