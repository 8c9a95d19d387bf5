//! The restaurant filter flow: keyword plus minimum rating over the static
//! dataset, printed as a capped list.

use dialoguer::theme::ColorfulTheme;

use crate::{domain::Restaurant, errors::CliError, store::RestaurantCatalog};

use super::{io, output};

const MAX_SHOWN: usize = 20;

/// Prompts for a keyword and minimum rating, then prints matching rows.
/// Non-numeric rating input falls back to `0.0`.
pub fn run_interactive(
    theme: &ColorfulTheme,
    catalog: &RestaurantCatalog,
) -> Result<(), CliError> {
    let keyword = io::prompt_text(theme, "Keyword (name or cuisine)")?;
    let min_rating = io::prompt_amount(theme, "Minimum rating", 0.0)?;
    run_query(catalog, &keyword, min_rating);
    Ok(())
}

/// Runs one filter query and prints the result; shared by the interactive
/// prompt and the script-mode `filter` command.
pub fn run_query(catalog: &RestaurantCatalog, keyword: &str, min_rating: f64) {
    output::section("Your filters");
    output::info(format!("keyword: \"{}\"", keyword.trim()));
    output::info(format!("rating: \"{min_rating}+\""));

    let matches = catalog.query(keyword, min_rating);
    print_matches(&matches);
}

/// Renders up to [`MAX_SHOWN`] matches, with a count of what was cut off.
pub fn print_matches(matches: &[Restaurant]) {
    if matches.is_empty() {
        output::warning("No restaurants matched these filters.");
        return;
    }

    output::success(format!("Found {} restaurant(s):", matches.len()));
    println!();
    for restaurant in matches.iter().take(MAX_SHOWN) {
        println!("- {}", restaurant.name);
        println!("  Address: {}", restaurant.address);
        println!("  Rating: {}", restaurant.rating_label());
        println!("  Description: {}", restaurant.description);
        println!("  Cuisine: {}", restaurant.cuisine);
        println!();
    }

    if matches.len() > MAX_SHOWN {
        output::info(format!(
            "...and {} more matching restaurants not shown.",
            matches.len() - MAX_SHOWN
        ));
    }
}
