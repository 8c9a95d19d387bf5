use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single reminder entry as persisted on disk.
///
/// `time` keeps the raw text the user entered; [`Reminder::due_time`] is the
/// parse boundary for callers that need an actual timestamp. Records written
/// before the `completed` flag existed deserialize as not completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub task: String,
    pub time: String,
    #[serde(default)]
    pub completed: bool,
}

/// Parsed due moment of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueTime {
    DateTime(NaiveDateTime),
    DateOnly(NaiveDate),
}

impl Reminder {
    /// Creates an open reminder, trimming surrounding whitespace off the task.
    pub fn new(task: impl Into<String>, time: impl Into<String>) -> Self {
        let task = task.into();
        Self {
            task: task.trim().to_string(),
            time: time.into(),
            completed: false,
        }
    }

    /// Parses the stored `time` string, first as date+time, then date-only.
    pub fn due_time(&self) -> Option<DueTime> {
        if let Ok(moment) = NaiveDateTime::parse_from_str(&self.time, DATE_TIME_FORMAT) {
            return Some(DueTime::DateTime(moment));
        }
        NaiveDate::parse_from_str(&self.time, DATE_FORMAT)
            .ok()
            .map(DueTime::DateOnly)
    }

    /// True when the reminder is open and its due moment is at or before
    /// `now`. Date-only reminders compare against the start of today, and
    /// times the parser does not understand are never due.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        if self.completed {
            return false;
        }
        match self.due_time() {
            Some(DueTime::DateTime(moment)) => moment <= now,
            Some(DueTime::DateOnly(day)) => day <= now.date(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn parses_date_time_before_date_only() {
        let reminder = Reminder::new("call", "2024-03-01 09:30");
        assert_eq!(reminder.due_time(), Some(DueTime::DateTime(at("2024-03-01 09:30"))));

        let date_only = Reminder::new("call", "2024-03-01");
        assert!(matches!(date_only.due_time(), Some(DueTime::DateOnly(_))));
    }

    #[test]
    fn garbled_time_is_never_due() {
        let reminder = Reminder::new("call", "next tuesday-ish");
        assert_eq!(reminder.due_time(), None);
        assert!(!reminder.is_due(at("2099-01-01 00:00")));
    }

    #[test]
    fn date_only_reminder_is_due_from_start_of_day() {
        let reminder = Reminder::new("pay rent", "2024-03-01");
        assert!(reminder.is_due(at("2024-03-01 00:00")));
        assert!(!reminder.is_due(at("2024-02-29 23:59")));
    }

    #[test]
    fn completed_reminder_is_not_due() {
        let mut reminder = Reminder::new("call", "2024-03-01 09:30");
        reminder.completed = true;
        assert!(!reminder.is_due(at("2024-03-02 00:00")));
    }
}
