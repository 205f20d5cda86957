pub const UNIMENSA_ID: u32 = 411;
pub const UNIMENSA_URL_BASE: &str = "http://www.studentenwerk-muenchen.de/mensa/speiseplan";

pub const FINANZMENSA_URL: &str = "http://fm-kantine.hf-catering.de/";
pub const BRUSKO_URL: &str = "http://www.brusko.de/brusko-menu.html";
pub const OSTERIA_URL: &str = "http://losteria.de/menu/pizza/";

pub const DEFAULT_TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";
pub const DEFAULT_TRANSLATE_ENGINE: &str = "nmt";
pub const DEFAULT_SOURCE_LANG: &str = "de";
pub const TARGET_LANG: &str = "en";

pub const EMOJIS: [&str; 7] = ["☀️", "🦀", "🍽️", "☕️", "🥨", "🌤️", "🥦"];
pub const PORK_ICON: &str = "🐷";
pub const BEEF_ICON: &str = "🐮";
pub const VEGGIE_ICON: &str = "🍅";

pub const NO_MEALS_MSG: &str = "Heute gibt es keine Gerichte.";
pub const CLOSING_MSG: &str = "Guten Appetit! / Enjoy your meal!";
