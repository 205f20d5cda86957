use rand::Rng;

use crate::constants::{BEEF_ICON, CLOSING_MSG, EMOJIS, NO_MEALS_MSG, PORK_ICON, VEGGIE_ICON};
use crate::data_types::{Meal, MeatType, Menu, RestaurantType};

pub fn build_menu_msg(menu: &Menu) -> String {
    match menu {
        Menu::Remote { restaurant, url } => format!(
            "Den Speiseplan für {} gibt es leider nur hier: {}",
            restaurant.display_name(),
            url
        ),
        Menu::Parsed { restaurant, meals } => {
            let rand_emoji = EMOJIS[rand::thread_rng().gen_range(0..EMOJIS.len())];
            let mut msg = format!(
                "{} Heute in der {} {}\n\n",
                rand_emoji,
                restaurant.display_name(),
                rand_emoji
            );

            if meals.is_empty() {
                msg += NO_MEALS_MSG;
                msg += "\n";
            }
            for meal in meals {
                msg += &meal_line(meal);
            }

            msg += "\n";
            msg += CLOSING_MSG;
            msg
        }
    }
}

/// `<name> <meat icon> <veggie icon> (<english name>)`, each part only
/// when it applies.
pub fn meal_line(meal: &Meal) -> String {
    let meat_icon = match meal.meat_type {
        Some(MeatType::Pork) => format!(" {}", PORK_ICON),
        Some(MeatType::Beef) => format!(" {}", BEEF_ICON),
        None => String::new(),
    };
    let veggie_icon = if meal.vegan || meal.vegetarian {
        format!(" {}", VEGGIE_ICON)
    } else {
        String::new()
    };
    let english = if meal.name_english.is_empty() {
        String::new()
    } else {
        format!(" ({})", meal.name_english)
    };

    format!("{}{}{}{}\n", meal.name, meat_icon, veggie_icon, english)
}

fn known_restaurants() -> String {
    RestaurantType::ALL
        .iter()
        .map(|r| r.id())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn unknown_restaurant_msg() -> String {
    format!(
        "Welches Restaurant meinst du? / Which restaurant do you mean?\nIch kenne: {}",
        known_restaurants()
    )
}

pub fn help_msg() -> String {
    format!(
        "Frag mich nach dem Speiseplan, z.B. \"Was gibt's heute in der Mensa?\"\n\
        Ask me for the menu, e.g. \"What's for lunch at Brusko?\"\n\n\
        /heute <restaurant> ({})",
        known_restaurants()
    )
}
