use chrono::{Duration, NaiveDate, NaiveDateTime};
use lifehub_core::domain::Projection;
use lifehub_core::store::{BudgetTracker, ExpenseLedger, GoalTracker, ReminderStore};
use tempfile::tempdir;

fn day(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

fn at(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").unwrap()
}

#[test]
fn eighty_percent_of_the_weekly_budget_triggers_a_warning() {
    let temp = tempdir().unwrap();
    let ledger = ExpenseLedger::new(temp.path().join("expenses.csv"));
    let tracker = BudgetTracker::new(temp.path().join("budget.json"));

    tracker.set_weekly(1000.0, day("2024-01-01")).unwrap();
    ledger.add("Groceries", 500.0, day("2024-01-02")).unwrap();
    ledger.add("Fuel", 300.0, day("2024-01-03")).unwrap();

    let snapshot = ledger.load().unwrap();
    let alerts = tracker.alerts(&snapshot).unwrap();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("80%"), "unexpected alert: {}", alerts[0]);
    assert!(!alerts[0].contains("exceeded"));
}

#[test]
fn once_due_a_reminder_stays_due() {
    let temp = tempdir().unwrap();
    let store = ReminderStore::new(temp.path().join("reminders.json"));
    store.add("review budget", "2024-03-10 12:00").unwrap();
    store.add("date only", "2024-03-12").unwrap();

    let mut previous: Vec<String> = Vec::new();
    let mut clock = at("2024-03-09 00:00");
    for _ in 0..8 {
        let due = store.due_now(clock).unwrap();
        for task in &previous {
            assert!(
                due.contains(task),
                "{task} was due earlier but not at {clock}"
            );
        }
        previous = due;
        clock = clock + Duration::hours(13);
    }
    assert_eq!(previous.len(), 2, "both reminders due by the end of the walk");
}

#[test]
fn goal_projection_matches_the_thirty_day_arithmetic() {
    let temp = tempdir().unwrap();
    let goals = GoalTracker::new(temp.path().join("goals.json"));
    let created = day("2024-01-01");
    goals.add("Laptop", 12_000.0, 12, created).unwrap();

    let progress = goals.progress(&[], created).unwrap();
    match &progress[0].projection {
        Projection::Projected {
            days_left,
            daily_saving,
            ..
        } => {
            assert_eq!(*days_left, 360);
            assert!((daily_saving - 33.333_333).abs() < 0.001);
        }
        other => panic!("expected a projection, got {other:?}"),
    }
}

#[test]
fn contributions_shrink_the_required_daily_saving() {
    let temp = tempdir().unwrap();
    let goals = GoalTracker::new(temp.path().join("goals.json"));
    let created = day("2024-01-01");
    goals.add("Laptop", 12_000.0, 12, created).unwrap();
    goals.update_progress(0, 6_000.0).unwrap();

    let progress = goals.progress(&[], created).unwrap();
    match &progress[0].projection {
        Projection::Projected { daily_saving, .. } => {
            assert!((daily_saving - 6_000.0 / 360.0).abs() < 0.001);
        }
        other => panic!("expected a projection, got {other:?}"),
    }
}
