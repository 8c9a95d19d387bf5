use chrono::{Local, Timelike};
use dialoguer::theme::ColorfulTheme;

use crate::cli::{context::HubContext, filter, io, output};
use crate::errors::CliError;
use crate::store::restaurants::{known_occasions, suggest_for_occasion, time_slot};

const MENU: [&str; 6] = [
    "Search by keyword",
    "Filter (name or cuisine)",
    "Occasion suggestions",
    "Feeling lucky",
    "What fits the hour",
    "Back",
];

/// Top results expanded in the keyword search view.
const SEARCH_SHOWN: usize = 10;
const DESCRIPTION_SNIPPET: usize = 150;

pub fn show(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    if context.catalog.load().is_empty() {
        output::error("Restaurant dataset not available.");
        return Ok(());
    }
    loop {
        match io::select(theme, "Restaurants", &MENU)? {
            0 => search(context, theme)?,
            1 => filter::run_interactive(theme, &context.catalog)?,
            2 => occasion(context, theme)?,
            3 => lucky(context),
            4 => by_hour(context),
            _ => return Ok(()),
        }
    }
}

fn search(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let keyword = io::prompt_text_with_default(theme, "Cuisine or type", "Indian")?;
    let min_rating = io::prompt_amount(theme, "Minimum rating", 0.0)?;

    let results = context.catalog.recommend(&keyword, min_rating);
    if results.is_empty() {
        output::warning(format!("No restaurants found for '{}'", keyword.trim()));
        suggest_similar(context, &keyword);
        return Ok(());
    }

    output::success(format!("Found {} restaurants", results.len()));
    for restaurant in results.iter().take(SEARCH_SHOWN) {
        println!("\n{} ({})", restaurant.name, restaurant.rating_label());
        println!("  Cuisine: {}", restaurant.cuisine);
        println!("  Address: {}", restaurant.local_address);
        println!("  Phone: {}", restaurant.phone);
        if !restaurant.description.is_empty() {
            println!(
                "  Description: {}",
                snippet(&restaurant.description, DESCRIPTION_SNIPPET)
            );
        }
    }
    Ok(())
}

fn suggest_similar(context: &HubContext, keyword: &str) {
    let needle = keyword.trim().to_lowercase();
    let similar: Vec<String> = context
        .catalog
        .cuisines()
        .into_iter()
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .take(3)
        .collect();
    if !similar.is_empty() {
        output::info(format!("Try similar cuisines: {}", similar.join(", ")));
    }
}

fn occasion(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let occasions = known_occasions();
    let choice = io::select(theme, "Select occasion", &occasions)?;
    let tags = suggest_for_occasion(occasions[choice]);
    output::info(format!("Suggested cuisines: {}", tags.join(", ")));

    // Search with the strongest suggestion, the way the dashboard does.
    let matches = context.catalog.query(tags[0], 0.0);
    filter::print_matches(&matches);
    Ok(())
}

fn lucky(context: &HubContext) {
    match context.catalog.lucky() {
        Some(pick) => {
            output::success(format!("{} ({})", pick.name, pick.rating_label()));
            output::info(format!("Cuisine: {}", pick.cuisine));
            output::info(format!("Address: {}", snippet(&pick.local_address, 50)));
        }
        None => output::warning("Restaurant dataset not available."),
    }
}

fn by_hour(context: &HubContext) {
    let slot = time_slot(Local::now().hour());
    output::info(format!("It's {slot} time"));
    let matches = context.catalog.recommend(slot, 0.0);
    filter::print_matches(&matches);
}

fn snippet(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}...")
}
