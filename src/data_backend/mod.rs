use anyhow::Result;
use chrono::NaiveDate;
use std::time::Instant;

use crate::constants::UNIMENSA_URL_BASE;
use crate::data_types::Meal;

pub mod loader;
pub mod meal_classifier;
pub mod menu_parser;
pub mod translation;

pub fn unimensa_url(mensa_id: u32) -> String {
    format!("{}/speiseplan_{}_-de.html", UNIMENSA_URL_BASE, mensa_id)
}

async fn get_html_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let now = Instant::now();
    let html_text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    log::debug!("Fetched {}: {:.2?}", url, now.elapsed());
    Ok(html_text)
}

/// Downloads a schedule page and extracts the meals for `date`.
pub async fn fetch_day_meals(
    client: &reqwest::Client,
    url: &str,
    date: NaiveDate,
) -> Result<Vec<Meal>> {
    let html_text = get_html_text(client, url).await?;

    let now = Instant::now();
    let meals = menu_parser::parse_day_meals(&html_text, date)?;
    log::debug!("Parsed {} meals: {:.2?}", meals.len(), now.elapsed());

    Ok(meals)
}
