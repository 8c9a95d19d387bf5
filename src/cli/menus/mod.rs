//! Dialoguer-driven dashboard menus.

pub mod expenses;
pub mod goals;
pub mod reminders;
pub mod restaurants;
pub mod weather;

use dialoguer::theme::ColorfulTheme;

use crate::errors::CliError;
use crate::store::expenses::total_spent;

use super::{context::HubContext, io, output};

const MAIN_MENU: [&str; 7] = [
    "Home",
    "Reminders",
    "Expenses & budget",
    "Savings goals",
    "Restaurants",
    "Weather & news",
    "Exit",
];

/// Interactive main loop. Due reminders are surfaced once on entry and again
/// from the home screen.
pub fn run(context: &HubContext) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    show_notifications(context);
    loop {
        match io::select(&theme, "Main menu", &MAIN_MENU)? {
            0 => home(context),
            1 => reminders::show(context, &theme)?,
            2 => expenses::show(context, &theme)?,
            3 => goals::show(context, &theme)?,
            4 => restaurants::show(context, &theme)?,
            5 => weather::show(context, &theme)?,
            _ => {
                if io::confirm(&theme, "Exit the dashboard?", true)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn show_notifications(context: &HubContext) {
    match context.reminders.due_now(context.now()) {
        Ok(due) => {
            for task in due {
                output::warning(format!("Reminder due: {task}"));
            }
        }
        Err(err) => output::error(err),
    }
}

fn home(context: &HubContext) {
    output::section("Dashboard");
    show_notifications(context);
    match context.reminders.pending_count() {
        Ok(count) => output::info(format!("Pending reminders: {count}")),
        Err(err) => output::error(err),
    }
    match context.expenses.load() {
        Ok(snapshot) => {
            output::info(format!("Total expenses: ₹{:.2}", total_spent(&snapshot)))
        }
        Err(err) => output::error(err),
    }
}
