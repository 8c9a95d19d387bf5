use dialoguer::theme::ColorfulTheme;

use crate::cli::{context::HubContext, io, output};
use crate::domain::Projection;
use crate::errors::CliError;

const MENU: [&str; 4] = ["Show progress", "Set new goal", "Add to goal", "Back"];

const TIMEFRAMES: [u32; 5] = [1, 2, 3, 6, 12];

pub fn show(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        match io::select(theme, "Savings goals", &MENU)? {
            0 => progress(context)?,
            1 => add(context, theme)?,
            2 => contribute(context, theme)?,
            _ => return Ok(()),
        }
    }
}

fn progress(context: &HubContext) -> Result<(), CliError> {
    let snapshot = context.expenses.load()?;
    let entries = context.goals.progress(&snapshot, context.today())?;
    if entries.is_empty() {
        output::info("No savings goals yet.");
        return Ok(());
    }
    for entry in entries {
        let goal = &entry.goal;
        println!(
            "{}: ₹{:.0}/₹{:.0} ({:.1}%)",
            goal.name,
            goal.current_amount,
            goal.target_amount,
            goal.percent_complete()
        );
        match &entry.projection {
            Projection::Projected {
                days_left,
                daily_saving,
                warning,
            } => {
                println!("    {days_left} days left, save ₹{daily_saving:.0}/day");
                if let Some(warning) = warning {
                    output::warning(warning);
                }
            }
            Projection::Unavailable(gap) => output::info(format!("No projection: {gap}")),
        }
    }
    Ok(())
}

fn add(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let name = io::prompt_text(theme, "Goal name")?;
    if name.trim().is_empty() {
        output::warning("Goal name cannot be empty.");
        return Ok(());
    }
    let target = io::prompt_amount(theme, "Target amount (₹)", 0.0)?;
    if target <= 0.0 {
        output::warning("Target amount must be positive.");
        return Ok(());
    }
    let labels: Vec<String> = TIMEFRAMES
        .iter()
        .map(|months| {
            if *months == 1 {
                "1 month".to_string()
            } else {
                format!("{months} months")
            }
        })
        .collect();
    let choice = io::select(theme, "Timeframe", &labels)?;
    context
        .goals
        .add(name.trim(), target, TIMEFRAMES[choice], context.today())?;
    output::success(format!("Goal '{}' set!", name.trim()));
    Ok(())
}

fn contribute(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let goals = context.goals.load()?;
    if goals.is_empty() {
        output::info("No savings goals yet.");
        return Ok(());
    }
    let labels: Vec<String> = goals
        .iter()
        .map(|goal| format!("{} (₹{:.0}/₹{:.0})", goal.name, goal.current_amount, goal.target_amount))
        .collect();
    let index = io::select(theme, "Add to which goal?", &labels)?;
    let amount = io::prompt_amount(theme, "Amount to add (₹)", 0.0)?;
    if amount <= 0.0 {
        output::warning("Amount must be positive.");
        return Ok(());
    }
    context.goals.update_progress(index, amount)?;
    output::success(format!("Added ₹{amount:.0} to {}", goals[index].name));
    Ok(())
}
