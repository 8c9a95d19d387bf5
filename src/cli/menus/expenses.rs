use dialoguer::theme::ColorfulTheme;

use crate::cli::{context::HubContext, io, output};
use crate::errors::CliError;
use crate::store::expenses::weekly_totals;

const MENU: [&str; 6] = [
    "Add expense",
    "List expenses",
    "Spending insights",
    "Budget alerts",
    "Set weekly budget",
    "Back",
];

/// Recent weeks shown in the insights summary.
const WEEKS_SHOWN: usize = 8;

pub fn show(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    alerts_banner(context);
    loop {
        match io::select(theme, "Expenses & budget", &MENU)? {
            0 => add(context, theme)?,
            1 => list(context)?,
            2 => insights(context)?,
            3 => alerts(context)?,
            4 => set_budget(context, theme)?,
            _ => return Ok(()),
        }
    }
}

fn alerts_banner(context: &HubContext) {
    let alerts = context
        .expenses
        .load()
        .and_then(|snapshot| context.budget.alerts(&snapshot));
    match alerts {
        Ok(alerts) => {
            for alert in alerts {
                if alert.contains("exceeded") {
                    output::error(alert);
                } else {
                    output::warning(alert);
                }
            }
        }
        Err(err) => output::error(err),
    }
}

fn add(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let item = io::prompt_text(theme, "Item")?;
    if item.trim().is_empty() {
        output::warning("Item cannot be empty.");
        return Ok(());
    }
    let amount = io::prompt_amount(theme, "Amount (₹)", 0.0)?;
    if amount <= 0.0 {
        output::warning("Amount must be positive.");
        return Ok(());
    }
    context.expenses.add(item.trim(), amount, context.today())?;
    output::success(format!("Added: {} - ₹{amount:.2}", item.trim()));
    Ok(())
}

fn list(context: &HubContext) -> Result<(), CliError> {
    let mut expenses = context.expenses.load()?;
    if expenses.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    // Newest first; undated rows sink to the end.
    expenses.sort_by(|a, b| b.recorded_on().cmp(&a.recorded_on()));
    for expense in &expenses {
        println!(
            "{:<28} ₹{:>10.2}  {}",
            expense.item, expense.amount, expense.date
        );
    }
    Ok(())
}

fn insights(context: &HubContext) -> Result<(), CliError> {
    for insight in context.expenses.insights(context.today())? {
        output::info(insight);
    }

    let snapshot = context.expenses.load()?;
    let totals = weekly_totals(&snapshot);
    if !totals.is_empty() {
        output::section("Weekly totals");
        let skip = totals.len().saturating_sub(WEEKS_SHOWN);
        for ((year, week), sum) in totals.into_iter().skip(skip) {
            println!("{year}-W{week:02}  ₹{sum:.0}");
        }
    }
    Ok(())
}

fn alerts(context: &HubContext) -> Result<(), CliError> {
    let snapshot = context.expenses.load()?;
    let alerts = context.budget.alerts(&snapshot)?;
    if alerts.is_empty() {
        output::info("No budget alerts.");
        return Ok(());
    }
    for alert in alerts {
        if alert.contains("exceeded") {
            output::error(alert);
        } else {
            output::warning(alert);
        }
    }
    Ok(())
}

fn set_budget(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    if let Some(plan) = context.budget.load()? {
        output::info(format!(
            "Current weekly budget: ₹{:.0} (since {})",
            plan.weekly_budget, plan.week_start
        ));
    }
    let amount = io::prompt_amount(theme, "New weekly budget (₹)", 0.0)?;
    if amount <= 0.0 {
        output::warning("Budget must be positive.");
        return Ok(());
    }
    context.budget.set_weekly(amount, context.today())?;
    output::success(format!("Weekly budget set to ₹{amount:.0}"));
    Ok(())
}
