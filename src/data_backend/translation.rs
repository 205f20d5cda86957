use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::constants::TARGET_LANG;
use crate::data_types::{Meal, Menu};
use crate::errors::TranslationError;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub url: String,
    pub api_key: String,
    pub engine: String,
    pub source_lang: String,
}

/// Client for a Google-Translate-v2 style JSON endpoint.
pub struct HttpTranslator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl HttpTranslator {
    pub fn new(client: reqwest::Client, config: TranslatorConfig) -> Self {
        Self { client, config }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let body = TranslateRequest {
            q: text,
            source: &self.config.source_lang,
            target: TARGET_LANG,
            format: "text",
            model: &self.config.engine,
        };

        let resp = self
            .client
            .post(&self.config.url)
            .query(&[("key", &self.config.api_key)])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(TranslationError::Status(resp.status().as_u16()));
        }

        resp.json::<TranslateResponse>()
            .await?
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(TranslationError::EmptyResponse)
    }
}

/// Fills in `name_english` for every meal. All calls run at once and are
/// joined; a failed call only leaves that meal's English name empty.
pub async fn translate_menu(menu: Menu, translator: &dyn Translator) -> Menu {
    match menu {
        Menu::Parsed { restaurant, meals } => {
            let now = Instant::now();
            let meals = join_all(
                meals
                    .into_iter()
                    .map(|meal| translate_meal(meal, translator)),
            )
            .await;
            log::debug!("Translated {} meals: {:.2?}", meals.len(), now.elapsed());

            Menu::Parsed { restaurant, meals }
        }
        remote @ Menu::Remote { .. } => remote,
    }
}

async fn translate_meal(mut meal: Meal, translator: &dyn Translator) -> Meal {
    match translator.translate(&meal.name).await {
        Ok(english) => meal.name_english = english,
        Err(e) => log::error!("Translating '{}' failed: {}", meal.name, e),
    }
    meal
}
