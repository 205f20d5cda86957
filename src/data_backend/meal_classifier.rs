use std::collections::BTreeSet;

use crate::data_types::MeatType;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DietClass {
    pub vegan: bool,
    pub vegetarian: bool,
    pub meat_type: Option<MeatType>,
}

/// Maps the page's meatless level (0 = meat, 1 = vegetarian, >=2 = vegan)
/// and one-letter meat code to diet flags. Total over all inputs.
pub fn classify(meatless_level: i32, meat_code: Option<&str>) -> DietClass {
    if meatless_level > 0 {
        return DietClass {
            vegan: meatless_level > 1,
            vegetarian: true,
            meat_type: None,
        };
    }

    let meat_type = match meat_code.map(str::trim) {
        Some("S") => Some(MeatType::Pork),
        Some("R") => Some(MeatType::Beef),
        _ => None,
    };

    DietClass {
        vegan: false,
        vegetarian: false,
        meat_type,
    }
}

/// Lenient integer read of the meatless attribute: leading sign and digits
/// are used, anything unreadable counts as 0 (meat).
pub fn parse_meatless_level(raw: Option<&str>) -> i32 {
    let raw = raw.unwrap_or_default().trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i32>().map(|n| sign * n).unwrap_or(0)
}

/// Allergen and additive attributes are comma lists; a missing or blank
/// value is an empty set and a bare scalar is a one-element set.
pub fn split_codes(raw: Option<&str>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
