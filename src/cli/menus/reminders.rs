use chrono::NaiveDateTime;
use dialoguer::theme::ColorfulTheme;

use crate::cli::{context::HubContext, io, output};
use crate::domain::Reminder;
use crate::errors::CliError;

const MENU: [&str; 4] = ["List reminders", "Add reminder", "Toggle reminder", "Back"];

pub fn show(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        match io::select(theme, "Reminders", &MENU)? {
            0 => list(context)?,
            1 => add(context, theme)?,
            2 => toggle(context, theme)?,
            _ => return Ok(()),
        }
    }
}

fn list(context: &HubContext) -> Result<(), CliError> {
    let reminders = context.reminders.load()?;
    if reminders.is_empty() {
        output::info("No reminders yet.");
        return Ok(());
    }
    for (index, reminder) in reminders.iter().enumerate() {
        let status = if reminder.completed { "done" } else { "open" };
        println!(
            "{index:>3}. [{status}] {} ({})",
            reminder.task,
            display_time(reminder)
        );
    }
    Ok(())
}

/// Friendly rendering of the stored time; raw text when it does not parse.
fn display_time(reminder: &Reminder) -> String {
    match NaiveDateTime::parse_from_str(&reminder.time, "%Y-%m-%d %H:%M") {
        Ok(moment) => moment.format("%b %d, %I:%M %p").to_string(),
        Err(_) => reminder.time.clone(),
    }
}

fn add(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let task = io::prompt_text(theme, "Reminder")?;
    if task.trim().is_empty() {
        output::warning("Reminder text cannot be empty.");
        return Ok(());
    }
    let time = io::prompt_text(theme, "Due (YYYY-MM-DD or YYYY-MM-DD HH:MM)")?;
    context.reminders.add(&task, &time)?;
    output::success("Reminder added.");
    Ok(())
}

fn toggle(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let reminders = context.reminders.load()?;
    if reminders.is_empty() {
        output::info("No reminders to toggle.");
        return Ok(());
    }
    let labels: Vec<String> = reminders
        .iter()
        .map(|reminder| format!("{} ({})", reminder.task, reminder.time))
        .collect();
    let index = io::select(theme, "Toggle which reminder?", &labels)?;
    context.reminders.toggle(index)?;
    output::success("Reminder updated.");
    Ok(())
}
