use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One spending entry in the `Item,Amount,Date` table.
///
/// The date stays the raw cell text so that loading and re-saving a file
/// never rewrites rows it did not touch; [`Expense::recorded_on`] is the
/// parse boundary. Aggregations must skip undated rows rather than count
/// them as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub item: String,
    pub amount: f64,
    pub date: String,
}

impl Expense {
    pub fn new(item: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            item: item.into(),
            amount,
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parses the raw date cell; empty or malformed cells yield `None`.
    pub fn recorded_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}
