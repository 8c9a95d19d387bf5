//! File-backed repositories. Each store owns one flat file, injected at
//! construction time, and re-reads it on every operation. There is no shared
//! in-memory cache, so each call sees the last writer's snapshot.

pub mod budget;
pub mod expenses;
pub mod goals;
pub mod reminders;
pub mod restaurants;

pub use budget::BudgetTracker;
pub use expenses::ExpenseLedger;
pub use goals::GoalTracker;
pub use reminders::ReminderStore;
pub use restaurants::RestaurantCatalog;

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const TMP_SUFFIX: &str = "tmp";

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` through a temp file followed by a rename, so a failed write
/// never leaves a truncated file where the previous snapshot was.
pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
