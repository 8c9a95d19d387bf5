//! Path resolution and environment-backed settings.

use std::{
    env,
    path::{Path, PathBuf},
};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".lifehub";
const REMINDERS_FILE: &str = "reminders.json";
const EXPENSES_FILE: &str = "expenses.csv";
const BUDGET_FILE: &str = "budget.json";
const GOALS_FILE: &str = "goals.json";
const RESTAURANTS_FILE: &str = "Bengaluru_Restaurants.csv";

const HOME_ENV: &str = "LIFEHUB_HOME";
const RESTAURANTS_ENV: &str = "LIFEHUB_RESTAURANTS";
const WEATHER_KEY_ENV: &str = "WEATHER_API_KEY";
const NEWS_KEY_ENV: &str = "NEWS_API_KEY";

/// Resolves the flat files every store persists to.
#[derive(Debug, Clone)]
pub struct HubPaths {
    base: PathBuf,
}

impl HubPaths {
    /// Data directory from `LIFEHUB_HOME`, defaulting to `~/.lifehub`.
    pub fn resolve() -> Self {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return Self {
                base: PathBuf::from(custom),
            };
        }
        let base = home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME);
        Self { base }
    }

    /// Uses an explicit base directory (tests, portable installs).
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn reminders_file(&self) -> PathBuf {
        self.base.join(REMINDERS_FILE)
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.base.join(EXPENSES_FILE)
    }

    pub fn budget_file(&self) -> PathBuf {
        self.base.join(BUDGET_FILE)
    }

    pub fn goals_file(&self) -> PathBuf {
        self.base.join(GOALS_FILE)
    }

    /// Restaurant dataset path: `LIFEHUB_RESTAURANTS` override, else the
    /// conventional CSV name in the current working directory.
    pub fn restaurants_file(&self) -> PathBuf {
        if let Some(custom) = env::var_os(RESTAURANTS_ENV) {
            return PathBuf::from(custom);
        }
        PathBuf::from(RESTAURANTS_FILE)
    }
}

/// API keys for the outbound weather and news lookups. A missing key simply
/// disables the corresponding feature; it is not an error.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub weather: Option<String>,
    pub news: Option<String>,
}

impl ApiKeys {
    /// Loads `.env` when present, then reads the key variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            weather: read_key(WEATHER_KEY_ENV),
            news: read_key(NEWS_KEY_ENV),
        }
    }
}

fn read_key(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_base_dir() {
        let paths = HubPaths::with_base("/tmp/hub");
        assert_eq!(paths.reminders_file(), PathBuf::from("/tmp/hub/reminders.json"));
        assert_eq!(paths.expenses_file(), PathBuf::from("/tmp/hub/expenses.csv"));
        assert_eq!(paths.budget_file(), PathBuf::from("/tmp/hub/budget.json"));
        assert_eq!(paths.goals_file(), PathBuf::from("/tmp/hub/goals.json"));
    }
}
