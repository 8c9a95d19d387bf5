//! Line-oriented mode: each stdin line is one command. Used when the CLI is
//! driven by a pipe instead of a terminal.

use std::io::{self, BufRead};

use crate::errors::CliError;

use super::{context::HubContext, filter, output};

pub fn run(context: &HubContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !handle_line(context, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Dispatches one command line; returns `false` when the loop should stop.
/// Store failures are reported and the loop keeps going.
fn handle_line(context: &HubContext, line: &str) -> bool {
    if line.is_empty() {
        return true;
    }
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Could not parse line: {err}"));
            return true;
        }
    };
    let Some((command, args)) = tokens.split_first() else {
        return true;
    };

    match command.to_lowercase().as_str() {
        "filter" => {
            let keyword = args.first().cloned().unwrap_or_default();
            let min_rating = args
                .get(1)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            filter::run_query(&context.catalog, &keyword, min_rating);
        }
        "due" => match context.reminders.due_now(context.now()) {
            Ok(due) => {
                if due.is_empty() {
                    output::info("Nothing due right now.");
                }
                for task in due {
                    output::info(format!("Due: {task}"));
                }
            }
            Err(err) => output::error(err),
        },
        "insights" => match context.expenses.insights(context.today()) {
            Ok(insights) => {
                for insight in insights {
                    output::info(insight);
                }
            }
            Err(err) => output::error(err),
        },
        "alerts" => match context
            .expenses
            .load()
            .and_then(|snapshot| context.budget.alerts(&snapshot))
        {
            Ok(alerts) => {
                if alerts.is_empty() {
                    output::info("No budget alerts.");
                }
                for alert in alerts {
                    output::warning(alert);
                }
            }
            Err(err) => output::error(err),
        },
        "exit" | "quit" => return false,
        other => output::warning(format!("Unknown command: {other}")),
    }
    true
}
