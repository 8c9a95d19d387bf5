use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use chrono::{Datelike, Duration, NaiveDate};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, warn};

use crate::{
    domain::Expense,
    errors::{HubError, Result},
};

use super::write_atomic;

const NO_DATA_INSIGHT: &str = "No expenses yet to analyze";

/// Relative month-over-month change that has to be exceeded before the
/// comparison is reported. Decreases are never reported.
const MONTH_JUMP_THRESHOLD: f64 = 10.0;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Repository for the `Item,Amount,Date` spending table.
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    path: PathBuf,
}

impl ExpenseLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the table; a missing file is an empty table. Rows whose amount
    /// cell is not numeric are dropped, not defaulted to zero.
    pub fn load(&self) -> Result<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let item = record.get(0).unwrap_or("").to_string();
            let amount = match record.get(1).and_then(|cell| cell.trim().parse::<f64>().ok()) {
                Some(amount) => amount,
                None => {
                    warn!(item = %item, "dropping expense row with non-numeric amount");
                    continue;
                }
            };
            let date = record.get(2).unwrap_or("").to_string();
            rows.push(Expense { item, amount, date });
        }
        Ok(rows)
    }

    /// Rewrites the whole table, header included, in one atomic step.
    pub fn save(&self, expenses: &[Expense]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(["Item", "Amount", "Date"])?;
        for expense in expenses {
            let amount = expense.amount.to_string();
            writer.write_record([expense.item.as_str(), amount.as_str(), expense.date.as_str()])?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|err| HubError::Storage(err.to_string()))?;
        let data =
            String::from_utf8(buffer).map_err(|err| HubError::Storage(err.to_string()))?;
        write_atomic(&self.path, &data)?;
        debug!(count = expenses.len(), "saved expense table");
        Ok(())
    }

    /// Appends one row dated `today` and persists.
    pub fn add(&self, item: &str, amount: f64, today: NaiveDate) -> Result<()> {
        let mut expenses = self.load()?;
        expenses.push(Expense::new(item, amount, today));
        self.save(&expenses)
    }

    /// Human-readable observations over the current snapshot.
    pub fn insights(&self, today: NaiveDate) -> Result<Vec<String>> {
        Ok(spending_insights(&self.load()?, today))
    }
}

/// Sum of every amount in the snapshot, dated or not.
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Chronological per-ISO-week totals, oldest first, keyed by (year, week).
/// Undated rows are excluded.
pub fn weekly_totals(expenses: &[Expense]) -> Vec<((i32, u32), f64)> {
    let mut weeks: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for expense in expenses {
        if let Some(date) = expense.recorded_on() {
            let week = date.iso_week();
            *weeks.entry((week.year(), week.week())).or_insert(0.0) += expense.amount;
        }
    }
    weeks.into_iter().collect()
}

/// Spending observations over a snapshot.
///
/// An empty table yields exactly one "no data" message. Otherwise, up to three
/// observations are produced: the highest-spending weekday, a week-over-week
/// rise, and a month-over-month jump beyond [`MONTH_JUMP_THRESHOLD`] percent.
/// Rows whose date cell does not parse are excluded from every aggregate,
/// never counted as zero.
pub fn spending_insights(expenses: &[Expense], today: NaiveDate) -> Vec<String> {
    if expenses.is_empty() {
        return vec![NO_DATA_INSIGHT.to_string()];
    }

    let dated: Vec<(NaiveDate, f64)> = expenses
        .iter()
        .filter_map(|expense| expense.recorded_on().map(|date| (date, expense.amount)))
        .collect();

    let mut insights = Vec::new();

    if let Some(day) = highest_spending_weekday(&dated) {
        insights.push(format!("Highest spending day: {day}"));
    }

    if let Some(increase) = weekly_increase(&dated) {
        insights.push(format!("Spending increased by {increase:.0}% this week"));
    }

    if let Some(change) = monthly_jump(&dated, today) {
        insights.push(format!("Spending {change:.0}% higher than last month"));
    }

    insights
}

/// Weekday with the largest summed amount; earliest weekday wins ties.
fn highest_spending_weekday(dated: &[(NaiveDate, f64)]) -> Option<&'static str> {
    if dated.is_empty() {
        return None;
    }
    let mut totals = [0.0_f64; 7];
    for (date, amount) in dated {
        totals[date.weekday().num_days_from_monday() as usize] += amount;
    }
    let mut best = 0;
    for index in 1..totals.len() {
        if totals[index] > totals[best] {
            best = index;
        }
    }
    Some(WEEKDAY_NAMES[best])
}

/// Percentage rise between the two most recent ISO weeks with data, when the
/// latest one is higher. Falls are not reported.
fn weekly_increase(dated: &[(NaiveDate, f64)]) -> Option<f64> {
    let mut weeks: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for (date, amount) in dated {
        let week = date.iso_week();
        *weeks.entry((week.year(), week.week())).or_insert(0.0) += amount;
    }
    if weeks.len() < 2 {
        return None;
    }
    let sums: Vec<f64> = weeks.into_values().collect();
    let latest = sums[sums.len() - 1];
    let previous = sums[sums.len() - 2];
    if latest > previous && previous > 0.0 {
        Some((latest - previous) / previous * 100.0)
    } else {
        None
    }
}

/// Relative change of this calendar month (day 1 through today) against the
/// prior calendar month. Only increases beyond the threshold are reported,
/// and only when both months have positive spend.
fn monthly_jump(dated: &[(NaiveDate, f64)], today: NaiveDate) -> Option<f64> {
    let month_start = today.with_day(1)?;
    let previous_month_start = (month_start - Duration::days(1)).with_day(1)?;

    let mut this_month = 0.0;
    let mut last_month = 0.0;
    for (date, amount) in dated {
        if *date >= month_start {
            this_month += amount;
        } else if *date >= previous_month_start {
            last_month += amount;
        }
    }

    if this_month <= 0.0 || last_month <= 0.0 {
        return None;
    }
    let change = (this_month - last_month) / last_month * 100.0;
    (change > MONTH_JUMP_THRESHOLD).then_some(change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ledger_in_temp_dir() -> (ExpenseLedger, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let ledger = ExpenseLedger::new(temp.path().join("expenses.csv"));
        (ledger, temp)
    }

    fn day(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn missing_file_loads_as_empty_table() {
        let (ledger, _guard) = ledger_in_temp_dir();
        assert!(ledger.load().expect("load").is_empty());
    }

    #[test]
    fn save_writes_header_row() {
        let (ledger, _guard) = ledger_in_temp_dir();
        ledger.save(&[]).expect("save");
        let data = std::fs::read_to_string(ledger.path()).unwrap();
        assert!(data.starts_with("Item,Amount,Date"));
    }

    #[test]
    fn non_numeric_amount_rows_are_dropped() {
        let (ledger, _guard) = ledger_in_temp_dir();
        std::fs::write(
            ledger.path(),
            "Item,Amount,Date\nGroceries,250,2024-06-03\nMystery,lots,2024-06-04\n",
        )
        .unwrap();

        let rows = ledger.load().expect("load");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "Groceries");
    }

    #[test]
    fn empty_table_yields_single_no_data_message() {
        let insights = spending_insights(&[], day("2024-06-10"));
        assert_eq!(insights, vec![NO_DATA_INSIGHT.to_string()]);
    }

    #[test]
    fn undated_rows_are_excluded_from_aggregates() {
        let rows = vec![Expense {
            item: "Mystery".into(),
            amount: 999.0,
            date: "not a date".into(),
        }];
        let insights = spending_insights(&rows, day("2024-06-10"));
        assert!(insights.is_empty());
    }

    #[test]
    fn weekly_increase_reports_rise_only() {
        // ISO week 23 of 2024: Jun 3-9; week 24: Jun 10-16.
        let rising = vec![
            Expense::new("a", 100.0, day("2024-06-03")),
            Expense::new("b", 150.0, day("2024-06-10")),
        ];
        let insights = spending_insights(&rising, day("2024-06-11"));
        assert!(insights.iter().any(|i| i == "Spending increased by 50% this week"));

        let falling = vec![
            Expense::new("a", 150.0, day("2024-06-03")),
            Expense::new("b", 100.0, day("2024-06-10")),
        ];
        let insights = spending_insights(&falling, day("2024-06-11"));
        assert!(!insights.iter().any(|i| i.contains("increased")));
    }

    #[test]
    fn monthly_jump_needs_both_months_and_ten_percent() {
        let today = day("2024-06-15");
        let jump = vec![
            Expense::new("a", 100.0, day("2024-05-10")),
            Expense::new("b", 150.0, day("2024-06-05")),
        ];
        let insights = spending_insights(&jump, today);
        assert!(insights.iter().any(|i| i == "Spending 50% higher than last month"));

        // A decrease is never reported.
        let drop = vec![
            Expense::new("a", 150.0, day("2024-05-10")),
            Expense::new("b", 100.0, day("2024-06-05")),
        ];
        let insights = spending_insights(&drop, today);
        assert!(!insights.iter().any(|i| i.contains("last month")));

        // +10% exactly is below the reporting bar.
        let small = vec![
            Expense::new("a", 100.0, day("2024-05-10")),
            Expense::new("b", 110.0, day("2024-06-05")),
        ];
        let insights = spending_insights(&small, today);
        assert!(!insights.iter().any(|i| i.contains("last month")));
    }

    #[test]
    fn highest_spending_day_sums_by_weekday() {
        let rows = vec![
            Expense::new("a", 100.0, day("2024-06-03")), // Monday
            Expense::new("b", 60.0, day("2024-06-04")),  // Tuesday
            Expense::new("c", 70.0, day("2024-06-11")),  // Tuesday
        ];
        let insights = spending_insights(&rows, day("2024-06-12"));
        assert!(insights.iter().any(|i| i == "Highest spending day: Tuesday"));
    }
}
