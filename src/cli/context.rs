use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::{
    config::{ApiKeys, HubPaths},
    store::{BudgetTracker, ExpenseLedger, GoalTracker, ReminderStore, RestaurantCatalog},
};

/// Stores and settings shared by every CLI flow. Each store re-reads its file
/// per operation, so the context itself carries no data, only locations.
pub struct HubContext {
    pub reminders: ReminderStore,
    pub expenses: ExpenseLedger,
    pub budget: BudgetTracker,
    pub goals: GoalTracker,
    pub catalog: RestaurantCatalog,
    pub keys: ApiKeys,
}

impl HubContext {
    /// Builds the context from the process environment.
    pub fn from_env() -> Self {
        Self::with_paths(HubPaths::resolve(), ApiKeys::from_env())
    }

    pub fn with_paths(paths: HubPaths, keys: ApiKeys) -> Self {
        Self {
            reminders: ReminderStore::new(paths.reminders_file()),
            expenses: ExpenseLedger::new(paths.expenses_file()),
            budget: BudgetTracker::new(paths.budget_file()),
            goals: GoalTracker::new(paths.goals_file()),
            catalog: RestaurantCatalog::new(paths.restaurants_file()),
            keys,
        }
    }

    /// Wall-clock timestamp used for due checks.
    pub fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Wall-clock date used for ledger and goal computations.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
