use dialoguer::theme::ColorfulTheme;

use crate::cli::{context::HubContext, io, output};
use crate::errors::CliError;
use crate::net;

const MENU: [&str; 3] = ["Current weather", "Latest headlines", "Back"];

const DEFAULT_CITY: &str = "Bangalore";

pub fn show(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        match io::select(theme, "Weather & news", &MENU)? {
            0 => weather(context, theme)?,
            1 => headlines(context),
            _ => return Ok(()),
        }
    }
}

fn weather(context: &HubContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let Some(key) = context.keys.weather.as_deref() else {
        output::warning("WEATHER_API_KEY is not set; weather lookups are disabled.");
        return Ok(());
    };
    let city = io::prompt_text_with_default(theme, "City", DEFAULT_CITY)?;
    match net::weather(city.trim(), key) {
        Ok(report) => {
            output::section(format!("Weather in {}", report.city));
            output::info(format!("Temperature: {:.1}°C", report.temperature_c));
            output::info(format!("Humidity: {:.0}%", report.humidity_percent));
            output::info(format!("Condition: {}", report.condition));
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn headlines(context: &HubContext) {
    let Some(key) = context.keys.news.as_deref() else {
        output::warning("NEWS_API_KEY is not set; news lookups are disabled.");
        return;
    };
    match net::headlines(key) {
        Ok(headlines) => {
            for headline in headlines {
                println!("\n{}", headline.title);
                if !headline.description.is_empty() {
                    println!("  {}", headline.description);
                }
            }
        }
        Err(err) => output::error(err),
    }
}
