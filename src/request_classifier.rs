use regex_lite::Regex;
use static_init::dynamic;

use crate::data_types::{MenuRequest, RestaurantType};

// German and English ways of asking for food, all case-insensitive
const TRIGGER_PATTERNS: [&str; 7] = [
    r"(?i)\bwas gibt(s|'s|’s| es)\b",
    r"(?i)speiseplan",
    r"(?i)mittagessen",
    r"(?i)\bmen(u|ü|ue)",
    r"(?i)\bhunger",
    r"(?i)\bwhat('s|’s| is) for (lunch|dinner)",
    r"(?i)\blunch\b",
];

#[dynamic]
static TRIGGERS: Vec<Regex> = TRIGGER_PATTERNS
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();

// tested in this order, the first hit wins
#[dynamic]
static RESTAURANT_KEYWORDS: Vec<(RestaurantType, Regex)> = vec![
    (
        RestaurantType::UniMensa,
        // no `-` right before, so "Finanz-Mensa" is left to the next entry
        Regex::new(r"(?i)(^|[^\w-])(uni-?)?mensa\b|\buni\b").unwrap(),
    ),
    (
        RestaurantType::FinanzMensa,
        Regex::new(r"(?i)finanz-?(mensa|kantine)|\bkantine\b|\bfm\b").unwrap(),
    ),
    (
        RestaurantType::Osteria,
        Regex::new(r"(?i)osteria|\bpizza").unwrap(),
    ),
    (RestaurantType::Brusko, Regex::new(r"(?i)brusko").unwrap()),
];

/// Returns `None` for ordinary chatter. For a menu request the restaurant
/// is resolved from the same text, or reported as unknown.
pub fn classify_message(text: &str) -> Option<MenuRequest> {
    // regex-lite folds ASCII only, umlauts are lowered up front
    let text = text.to_lowercase();
    let trigger = TRIGGERS.iter().find(|re| re.is_match(&text))?;
    log::debug!("Menu request, trigger '{}'", trigger.as_str());

    Some(match detect_restaurant(&text) {
        Some(restaurant) => MenuRequest::Restaurant(restaurant),
        None => MenuRequest::UnknownRestaurant,
    })
}

pub fn detect_restaurant(text: &str) -> Option<RestaurantType> {
    let text = text.to_lowercase();
    RESTAURANT_KEYWORDS
        .iter()
        .find(|(_, re)| re.is_match(&text))
        .map(|(restaurant, _)| *restaurant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_mensa_question() {
        assert_eq!(
            classify_message("Was gibt's heute in der Mensa?"),
            Some(MenuRequest::Restaurant(RestaurantType::UniMensa))
        );
    }

    #[test]
    fn speiseplan_finanzkantine() {
        assert_eq!(
            classify_message("Speiseplan Finanzkantine"),
            Some(MenuRequest::Restaurant(RestaurantType::FinanzMensa))
        );
    }

    #[test]
    fn english_requests() {
        assert_eq!(
            classify_message("what's for lunch at brusko?"),
            Some(MenuRequest::Restaurant(RestaurantType::Brusko))
        );
        assert_eq!(
            classify_message("LUNCH MENU OSTERIA"),
            Some(MenuRequest::Restaurant(RestaurantType::Osteria))
        );
    }

    #[test]
    fn hyphenated_finanz_mensa() {
        assert_eq!(
            classify_message("Speiseplan Finanz-Mensa"),
            Some(MenuRequest::Restaurant(RestaurantType::FinanzMensa))
        );
        assert_eq!(detect_restaurant("Uni-Mensa"), Some(RestaurantType::UniMensa));
        assert_eq!(detect_restaurant("(Mensa)"), Some(RestaurantType::UniMensa));
    }

    #[test]
    fn uppercase_umlaut_trigger() {
        assert_eq!(
            classify_message("MENÜ BRUSKO"),
            Some(MenuRequest::Restaurant(RestaurantType::Brusko))
        );
        assert_eq!(
            classify_message("WAS GIBT ES ZUM MITTAGESSEN IN DER MENSA"),
            Some(MenuRequest::Restaurant(RestaurantType::UniMensa))
        );
    }

    #[test]
    fn chatter_is_ignored() {
        assert_eq!(classify_message("Guten Morgen zusammen"), None);
        assert_eq!(classify_message("Ich gehe heute in die Mensa"), None);
        assert_eq!(classify_message(""), None);
    }

    #[test]
    fn request_without_restaurant_is_unknown() {
        assert_eq!(
            classify_message("Was gibt es heute zum Mittagessen?"),
            Some(MenuRequest::UnknownRestaurant)
        );
    }

    #[test]
    fn first_restaurant_in_order_wins() {
        assert_eq!(
            detect_restaurant("mensa oder brusko oder osteria"),
            Some(RestaurantType::UniMensa)
        );
        assert_eq!(
            detect_restaurant("brusko oder osteria"),
            Some(RestaurantType::Osteria)
        );
        assert_eq!(detect_restaurant("Finanzmensa"), Some(RestaurantType::FinanzMensa));
    }
}
