use chrono::{Local, NaiveDate};
use futures::future::BoxFuture;
use std::sync::Arc;

use crate::constants::{BRUSKO_URL, FINANZMENSA_URL, OSTERIA_URL, UNIMENSA_ID};
use crate::data_backend::translation::{translate_menu, Translator};
use crate::data_backend::{fetch_day_meals, unimensa_url};
use crate::data_types::{Menu, RestaurantType};

/// Resolves a restaurant to today's menu. Holds no per-request state, so a
/// single instance is shared by all concurrently running requests.
pub struct MenuLoader {
    client: reqwest::Client,
    translator: Option<Arc<dyn Translator>>,
    unimensa_url: String,
}

impl MenuLoader {
    pub fn new(client: reqwest::Client, translator: Option<Arc<dyn Translator>>) -> Self {
        Self {
            client,
            translator,
            unimensa_url: unimensa_url(UNIMENSA_ID),
        }
    }

    pub fn with_unimensa_url(mut self, url: impl Into<String>) -> Self {
        self.unimensa_url = url.into();
        self
    }

    /// `None` means the menu could not be fetched or parsed; the cause has
    /// already been logged.
    pub async fn load(&self, restaurant: RestaurantType) -> Option<Menu> {
        self.load_on(restaurant, Local::now().date_naive()).await
    }

    /// Like [`MenuLoader::load`], for the schedule of `date`.
    pub async fn load_on(&self, restaurant: RestaurantType, date: NaiveDate) -> Option<Menu> {
        match restaurant {
            RestaurantType::UniMensa => self.unimensa_menu(date).await,
            RestaurantType::FinanzMensa => Some(remote_menu(restaurant, FINANZMENSA_URL)),
            RestaurantType::Brusko => Some(remote_menu(restaurant, BRUSKO_URL)),
            RestaurantType::Osteria => Some(remote_menu(restaurant, OSTERIA_URL)),
        }
    }

    /// Looks up a textual restaurant id. Unknown ids are logged and yield
    /// no future at all.
    pub fn load_by_id(&self, id: &str) -> Option<BoxFuture<'_, Option<Menu>>> {
        match id.parse::<RestaurantType>() {
            Ok(restaurant) => Some(Box::pin(self.load(restaurant))),
            Err(e) => {
                log::error!("No matching loader found: {}", e);
                None
            }
        }
    }

    async fn unimensa_menu(&self, date: NaiveDate) -> Option<Menu> {
        let meals = match fetch_day_meals(&self.client, &self.unimensa_url, date).await {
            Ok(meals) => meals,
            Err(e) => {
                log::error!("Loading unimensa menu failed: {:#}", e);
                return None;
            }
        };

        let menu = Menu::Parsed {
            restaurant: RestaurantType::UniMensa,
            meals,
        };

        Some(match &self.translator {
            Some(translator) => translate_menu(menu, translator.as_ref()).await,
            None => menu,
        })
    }
}

fn remote_menu(restaurant: RestaurantType, url: &str) -> Menu {
    Menu::Remote {
        restaurant,
        url: url.to_string(),
    }
}
