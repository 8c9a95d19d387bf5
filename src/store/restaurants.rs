use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::domain::Restaurant;

/// Rating floor applied when picking a random "good" restaurant.
const LUCKY_MIN_RATING: f64 = 4.0;

/// Cuisine tags suggested when the requested occasion is unknown.
const DEFAULT_SUGGESTIONS: [&str; 3] = ["Indian", "Chinese", "Italian"];

static OCCASION_SUGGESTIONS: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            "Romantic Dinner",
            vec!["Fine Dining", "Italian", "French", "Candle Light"],
        ),
        (
            "Family Dinner",
            vec!["North Indian", "Chinese", "Multi-cuisine", "Vegetarian"],
        ),
        (
            "Business Lunch",
            vec!["Quick Bites", "Cafe", "Sandwiches", "Salads"],
        ),
        (
            "Birthday Party",
            vec!["Pub", "Barbeque", "Multi-cuisine", "Desserts"],
        ),
        (
            "Quick Lunch",
            vec!["Fast Food", "South Indian", "Street Food", "Snacks"],
        ),
        (
            "Date Night",
            vec!["Italian", "Chinese", "Continental", "Wine Bar"],
        ),
    ]
});

/// The occasions the suggestion table knows about, in display order.
pub fn known_occasions() -> Vec<&'static str> {
    OCCASION_SUGGESTIONS.iter().map(|(name, _)| *name).collect()
}

/// Ordered cuisine tags for a named occasion; unknown occasions fall back to
/// a fixed default list.
pub fn suggest_for_occasion(occasion: &str) -> Vec<&'static str> {
    OCCASION_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == occasion)
        .map(|(_, tags)| tags.clone())
        .unwrap_or_else(|| DEFAULT_SUGGESTIONS.to_vec())
}

/// Meal keyword for the hour of day (24h clock).
pub fn time_slot(hour: u32) -> &'static str {
    match hour {
        6..=10 => "Breakfast",
        11..=14 => "Lunch",
        15..=17 => "Snacks",
        _ => "Dinner",
    }
}

/// Read-only view over the restaurant dataset CSV. The dataset is never
/// mutated; every query re-reads the file.
#[derive(Debug, Clone)]
pub struct RestaurantCatalog {
    path: PathBuf,
}

impl RestaurantCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the dataset. Any failure to open or read the file yields an
    /// empty catalog rather than an error; bad rating cells load as missing.
    pub fn load(&self) -> Vec<Restaurant> {
        let mut reader = match ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "restaurant dataset unavailable");
                return Vec::new();
            }
        };
        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(err) => {
                warn!(%err, "restaurant dataset header unreadable");
                return Vec::new();
            }
        };

        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(name))
        };
        let name_at = column("name");
        let cuisine_at = column("cuisine");
        let rating_at = column("rating");
        let address_at = column("address");
        let local_address_at = column("localAddress");
        let phone_at = column("phone");
        let description_at = column("description");

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(_) => continue,
            };
            let rating = rating_at
                .and_then(|index| record.get(index))
                .and_then(|cell| cell.trim().parse::<f64>().ok());
            rows.push(Restaurant {
                name: cell(&record, name_at),
                cuisine: cell(&record, cuisine_at),
                rating,
                address: cell(&record, address_at),
                local_address: cell(&record, local_address_at),
                phone: cell(&record, phone_at),
                description: cell(&record, description_at),
            });
        }
        rows
    }

    /// Case-insensitive keyword match on cuisine or name, conjoined with the
    /// rating floor. Missing ratings compare as zero, so they never match a
    /// positive threshold.
    pub fn query(&self, keyword: &str, min_rating: f64) -> Vec<Restaurant> {
        let needle = keyword.trim().to_lowercase();
        self.load()
            .into_iter()
            .filter(|row| {
                (contains_ci(&row.cuisine, &needle) || contains_ci(&row.name, &needle))
                    && row.rating_or_zero() >= min_rating
            })
            .collect()
    }

    /// Keyword match on cuisine or description (the dashboard search),
    /// best-rated first.
    pub fn recommend(&self, keyword: &str, min_rating: f64) -> Vec<Restaurant> {
        let needle = keyword.trim().to_lowercase();
        let mut results: Vec<Restaurant> = self
            .load()
            .into_iter()
            .filter(|row| {
                (contains_ci(&row.cuisine, &needle) || contains_ci(&row.description, &needle))
                    && row.rating_or_zero() >= min_rating
            })
            .collect();
        results.sort_by(|a, b| {
            b.rating_or_zero()
                .partial_cmp(&a.rating_or_zero())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }

    /// Random pick, preferring well-rated rows when any exist.
    pub fn lucky(&self) -> Option<Restaurant> {
        let rows = self.load();
        let mut rng = rand::thread_rng();
        let good: Vec<&Restaurant> = rows
            .iter()
            .filter(|row| row.rating_or_zero() >= LUCKY_MIN_RATING)
            .collect();
        if let Some(pick) = good.choose(&mut rng) {
            return Some((*pick).clone());
        }
        rows.choose(&mut rng).cloned()
    }

    /// Distinct cuisine tags across the dataset, comma-split and sorted.
    pub fn cuisines(&self) -> Vec<String> {
        let mut tags = BTreeSet::new();
        for restaurant in self.load() {
            for tag in restaurant.cuisine.split(',') {
                let tag = tag.trim();
                if !tag.is_empty() {
                    tags.insert(tag.to_string());
                }
            }
        }
        tags.into_iter().collect()
    }
}

fn cell(record: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|index| record.get(index))
        .unwrap_or("")
        .trim()
        .to_string()
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
