//! Outbound weather and news lookups.
//!
//! Failures come back as [`HubError::ServiceUnavailable`]; callers render
//! them as a message, they never crash the dashboard.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::errors::{HubError, Result};

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const NEWS_URL: &str = "https://newsdata.io/api/1/news";
const NEWS_QUERY: &str = "india";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HEADLINE_LIMIT: usize = 5;

/// Current conditions for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub condition: String,
}

/// One news result: title plus optional description.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub description: String,
}

fn client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(HubError::from)
}

/// Fetches current weather for `city` in metric units.
pub fn weather(city: &str, api_key: &str) -> Result<WeatherReport> {
    let body: Value = client()?
        .get(WEATHER_URL)
        .query(&[("q", city), ("appid", api_key), ("units", "metric")])
        .send()?
        .json()?;

    // The upstream reports errors in-band: `cod` is 200 only on success.
    if body.get("cod").and_then(Value::as_i64) != Some(200) {
        return Err(HubError::ServiceUnavailable(format!(
            "city `{city}` not found"
        )));
    }

    let main = body.get("main").ok_or_else(malformed)?;
    let temperature_c = main
        .get("temp")
        .and_then(Value::as_f64)
        .ok_or_else(malformed)?;
    let humidity_percent = main
        .get("humidity")
        .and_then(Value::as_f64)
        .ok_or_else(malformed)?;
    let condition = body
        .get("weather")
        .and_then(|list| list.get(0))
        .and_then(|entry| entry.get("description"))
        .and_then(Value::as_str)
        .map(title_case)
        .ok_or_else(malformed)?;

    Ok(WeatherReport {
        city: city.to_string(),
        temperature_c,
        humidity_percent,
        condition,
    })
}

/// Fetches the latest English headlines, at most [`HEADLINE_LIMIT`] of them.
pub fn headlines(api_key: &str) -> Result<Vec<Headline>> {
    let body: Value = client()?
        .get(NEWS_URL)
        .query(&[("apikey", api_key), ("q", NEWS_QUERY), ("language", "en")])
        .send()?
        .json()?;

    let results = body
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(malformed)?;

    Ok(results
        .iter()
        .take(HEADLINE_LIMIT)
        .map(|article| Headline {
            title: article
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or("No title")
                .to_string(),
            description: article
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        })
        .collect())
}

fn malformed() -> HubError {
    HubError::ServiceUnavailable("unexpected response payload".into())
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("scattered clouds"), "Scattered Clouds");
        assert_eq!(title_case("haze"), "Haze");
    }
}
