use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::{domain::Reminder, errors::Result};

use super::write_atomic;

/// Repository for the reminder list, one JSON document per data directory.
#[derive(Debug, Clone)]
pub struct ReminderStore {
    path: PathBuf,
}

impl ReminderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted list. A missing file is an empty list, and records
    /// saved before the `completed` flag existed load as not completed.
    pub fn load(&self) -> Result<Vec<Reminder>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Overwrites the stored list in one atomic step.
    pub fn save(&self, reminders: &[Reminder]) -> Result<()> {
        let json = serde_json::to_string_pretty(reminders)?;
        write_atomic(&self.path, &json)?;
        debug!(count = reminders.len(), "saved reminders");
        Ok(())
    }

    /// Appends a reminder with `completed = false` and persists the list.
    pub fn add(&self, task: &str, time: &str) -> Result<()> {
        let mut reminders = self.load()?;
        reminders.push(Reminder::new(task, time));
        self.save(&reminders)
    }

    /// Flips the completed flag at ordinal `index`. An out-of-range index
    /// changes nothing.
    pub fn toggle(&self, index: usize) -> Result<()> {
        let mut reminders = self.load()?;
        match reminders.get_mut(index) {
            Some(reminder) => {
                reminder.completed = !reminder.completed;
                self.save(&reminders)
            }
            None => Ok(()),
        }
    }

    /// Tasks of open reminders due at or before `now`. Once due, a reminder
    /// stays due until completed; entries with unparseable times are skipped.
    pub fn due_now(&self, now: NaiveDateTime) -> Result<Vec<String>> {
        let reminders = self.load()?;
        Ok(reminders
            .iter()
            .filter(|reminder| reminder.is_due(now))
            .map(|reminder| reminder.task.clone())
            .collect())
    }

    /// Number of reminders still open.
    pub fn pending_count(&self) -> Result<usize> {
        Ok(self
            .load()?
            .iter()
            .filter(|reminder| !reminder.completed)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (ReminderStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = ReminderStore::new(temp.path().join("reminders.json"));
        (store, temp)
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let (store, _guard) = store_in_temp_dir();
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn back_fills_missing_completed_flag() {
        let (store, _guard) = store_in_temp_dir();
        fs::write(
            store.path(),
            r#"[{"task": "water plants", "time": "2024-05-01"}]"#,
        )
        .unwrap();

        let reminders = store.load().expect("load");
        assert_eq!(reminders.len(), 1);
        assert!(!reminders[0].completed);
    }

    #[test]
    fn toggle_out_of_range_is_a_no_op() {
        let (store, _guard) = store_in_temp_dir();
        store.add("call mom", "2024-05-01 18:00").expect("add");
        let before = fs::read_to_string(store.path()).unwrap();

        store.toggle(7).expect("toggle");
        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn due_now_skips_completed_and_unparseable() {
        let (store, _guard) = store_in_temp_dir();
        store.add("overdue", "2024-01-01 08:00").expect("add");
        store.add("someday", "whenever").expect("add");
        store.add("done", "2024-01-01 08:00").expect("add");
        store.toggle(2).expect("toggle");

        let now = NaiveDateTime::parse_from_str("2024-02-01 00:00", "%Y-%m-%d %H:%M").unwrap();
        assert_eq!(store.due_now(now).expect("due"), vec!["overdue".to_string()]);
    }
}
