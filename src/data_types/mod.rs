use std::{collections::BTreeSet, fmt, str::FromStr};

use teloxide::utils::command::BotCommands;

use crate::errors::UnknownRestaurant;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RestaurantType {
    UniMensa,
    FinanzMensa,
    Osteria,
    Brusko,
}

impl RestaurantType {
    /// Fixed enumeration order, also used as the keyword tie-break order.
    pub const ALL: [RestaurantType; 4] = [
        RestaurantType::UniMensa,
        RestaurantType::FinanzMensa,
        RestaurantType::Osteria,
        RestaurantType::Brusko,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RestaurantType::UniMensa => "unimensa",
            RestaurantType::FinanzMensa => "finanzmensa",
            RestaurantType::Osteria => "osteria",
            RestaurantType::Brusko => "brusko",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RestaurantType::UniMensa => "Mensa",
            RestaurantType::FinanzMensa => "Finanzkantine",
            RestaurantType::Osteria => "Osteria",
            RestaurantType::Brusko => "Brusko",
        }
    }
}

impl fmt::Display for RestaurantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RestaurantType {
    type Err = UnknownRestaurant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RestaurantType::ALL
            .into_iter()
            .find(|r| r.id() == wanted)
            .ok_or_else(|| UnknownRestaurant(s.to_string()))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeatType {
    Pork,
    Beef,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meal {
    pub name: String,
    /// empty until filled in by the translation step
    pub name_english: String,
    pub vegan: bool,
    pub vegetarian: bool,
    pub meat_type: Option<MeatType>,
    pub allergen_codes: BTreeSet<String>,
    pub additive_codes: BTreeSet<String>,
}

/// Result of loading one restaurant: either an itemized list of meals
/// or a link to a page that can't be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Menu {
    Parsed {
        restaurant: RestaurantType,
        meals: Vec<Meal>,
    },
    Remote {
        restaurant: RestaurantType,
        url: String,
    },
}

impl Menu {
    pub fn restaurant(&self) -> RestaurantType {
        match self {
            Menu::Parsed { restaurant, .. } | Menu::Remote { restaurant, .. } => *restaurant,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuRequest {
    Restaurant(RestaurantType),
    UnknownRestaurant,
}

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Speiseplan von heute (unimensa, finanzmensa, osteria, brusko)")]
    Heute(String),
    #[command(description = "Hilfe anzeigen")]
    Help,
    #[command(hide)]
    Start,
}

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_ids_roundtrip_through_from_str() {
        for restaurant in RestaurantType::ALL {
            assert_eq!(restaurant.id().parse::<RestaurantType>(), Ok(restaurant));
        }
        assert_eq!(
            " FinanzMensa ".parse::<RestaurantType>(),
            Ok(RestaurantType::FinanzMensa)
        );
    }

    #[test]
    fn unknown_restaurant_is_rejected() {
        assert_eq!(
            "kantine".parse::<RestaurantType>(),
            Err(UnknownRestaurant("kantine".to_string()))
        );
    }

    #[test]
    fn menu_reports_its_restaurant() {
        let menu = Menu::Remote {
            restaurant: RestaurantType::Osteria,
            url: "http://example.org".to_string(),
        };
        assert_eq!(menu.restaurant(), RestaurantType::Osteria);
    }
}
