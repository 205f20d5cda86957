use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use selectors::{attr::CaseSensitivity, Element};
use static_init::dynamic;

use crate::data_backend::meal_classifier::{classify, parse_meatless_level, split_codes};
use crate::data_types::Meal;
use crate::errors::MenuError;

#[dynamic]
static DESCRIPTION_SEL: Selector = Selector::parse(".js-schedule-dish-description").unwrap();

const LIST_CLASS: &str = "c-schedule__list";
const ITEM_CLASS: &str = "c-schedule__list-item";

/// Extracts the meals scheduled for `date`. A page without a section for
/// that day yields an empty list.
pub fn parse_day_meals(html_text: &str, date: NaiveDate) -> Result<Vec<Meal>, MenuError> {
    let document = Html::parse_document(html_text);

    // day headings carry a class like `heute_2017-05-04`
    let day_class = format!(".heute_{}", date.format("%Y-%m-%d"));
    let day_sel =
        Selector::parse(&day_class).map_err(|_| MenuError::InvalidSelector(day_class.clone()))?;

    // every heading for the day counts, lists shared by several headings only once
    let mut schedule_lists: Vec<ElementRef> = Vec::new();
    for day_heading in document.select(&day_sel) {
        for sibling in sibling_elements(day_heading) {
            if has_class(&sibling, LIST_CLASS)
                && !schedule_lists.iter().any(|list| list.id() == sibling.id())
            {
                schedule_lists.push(sibling);
            }
        }
    }

    if schedule_lists.is_empty() {
        log::debug!("no schedule section {} on page", day_class);
    }

    let meals = schedule_lists
        .into_iter()
        .flat_map(|list| list.children().filter_map(ElementRef::wrap))
        .filter(|el| has_class(el, ITEM_CLASS))
        .map(parse_meal)
        .collect();

    Ok(meals)
}

fn parse_meal(item: ElementRef) -> Meal {
    let attrs = item.value();
    let meatless_level = parse_meatless_level(attrs.attr("data-essen-fleischlos"));
    let diet = classify(meatless_level, attrs.attr("data-essen-typ"));

    Meal {
        name: dish_name(item),
        name_english: String::new(),
        vegan: diet.vegan,
        vegetarian: diet.vegetarian,
        meat_type: diet.meat_type,
        allergen_codes: split_codes(attrs.attr("data-essen-allergene")),
        additive_codes: split_codes(attrs.attr("data-essen-zusatz")),
    }
}

// own text nodes of all description elements, footnote markup is skipped;
// an item without a description gets an empty name
fn dish_name(item: ElementRef) -> String {
    item.select(&DESCRIPTION_SEL)
        .flat_map(|description| description.children())
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .collect::<String>()
        .trim()
        .to_string()
}

fn sibling_elements(element: ElementRef) -> Vec<ElementRef> {
    let mut siblings = Vec::new();

    let mut prev = element.prev_sibling_element();
    while let Some(sibling) = prev {
        siblings.push(sibling);
        prev = sibling.prev_sibling_element();
    }
    siblings.reverse();

    let mut next = element.next_sibling_element();
    while let Some(sibling) = next {
        siblings.push(sibling);
        next = sibling.next_sibling_element();
    }

    siblings
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element
        .value()
        .has_class(class, CaseSensitivity::CaseSensitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::MeatType;

    const PAGE: &str = r#"
<html><body>
<div class="c-schedule__item">
  <p class="c-schedule__header heute_2017-05-03">Mittwoch, 03.05.2017</p>
  <ul class="c-schedule__list">
    <li class="c-schedule__list-item" data-essen-fleischlos="0" data-essen-typ="R"
        data-essen-allergene="Gl" data-essen-zusatz="">
      <p class="js-schedule-dish-description">Gulasch</p>
    </li>
  </ul>
</div>
<div class="c-schedule__item">
  <p class="c-schedule__header heute_2017-05-04">Donnerstag, 04.05.2017</p>
  <ul class="c-schedule__list">
    <li class="c-schedule__list-item" data-essen-fleischlos="0" data-essen-typ="S"
        data-essen-allergene="Gl,Ei,Mi" data-essen-zusatz="2,3">
      <p class="js-schedule-dish-description">
        Schweineschnitzel mit Pommes <sup>Gl,Ei</sup>
      </p>
    </li>
    <li class="c-schedule__list-item" data-essen-fleischlos="1" data-essen-typ=""
        data-essen-allergene="Mi" data-essen-zusatz="5">
      <p class="js-schedule-dish-description">Käsespätzle<span class="c-footnote">*</span></p>
    </li>
    <li class="c-schedule__list-item" data-essen-fleischlos="2">
      <p class="js-schedule-dish-description">  Gemüsecurry  </p>
    </li>
    <li class="other">not a meal</li>
  </ul>
</div>
</body></html>
"#;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 5, d).unwrap()
    }

    #[test]
    fn parses_the_requested_day_only() {
        let meals = parse_day_meals(PAGE, day(4)).unwrap();
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Schweineschnitzel mit Pommes", "Käsespätzle", "Gemüsecurry"]
        );

        let yesterday = parse_day_meals(PAGE, day(3)).unwrap();
        assert_eq!(yesterday.len(), 1);
        assert_eq!(yesterday[0].meat_type, Some(MeatType::Beef));
    }

    #[test]
    fn meal_attributes_are_classified() {
        let meals = parse_day_meals(PAGE, day(4)).unwrap();

        let schnitzel = &meals[0];
        assert_eq!(schnitzel.meat_type, Some(MeatType::Pork));
        assert!(!schnitzel.vegetarian && !schnitzel.vegan);
        assert_eq!(schnitzel.allergen_codes.len(), 3);
        assert!(schnitzel.additive_codes.contains("3"));
        assert!(schnitzel.name_english.is_empty());

        let spaetzle = &meals[1];
        assert!(spaetzle.vegetarian && !spaetzle.vegan);
        assert_eq!(spaetzle.meat_type, None);
        assert_eq!(spaetzle.additive_codes.len(), 1);

        let curry = &meals[2];
        assert!(curry.vegan && curry.vegetarian);
        assert!(curry.allergen_codes.is_empty());
        assert!(curry.additive_codes.is_empty());
    }

    #[test]
    fn missing_day_is_empty_not_an_error() {
        assert_eq!(parse_day_meals(PAGE, day(5)), Ok(Vec::new()));
        assert_eq!(parse_day_meals("", day(4)), Ok(Vec::new()));
    }

    #[test]
    fn item_without_description_keeps_its_siblings() {
        let page = r#"<div><p class="heute_2017-05-04"></p>
            <ul class="c-schedule__list">
              <li class="c-schedule__list-item" data-essen-fleischlos="0" data-essen-typ="R">
                <p class="js-schedule-dish-description">Gulasch</p>
              </li>
              <li class="c-schedule__list-item" data-essen-fleischlos="2"></li>
            </ul></div>"#;
        let meals = parse_day_meals(page, day(4)).unwrap();

        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "Gulasch");
        assert_eq!(meals[0].meat_type, Some(MeatType::Beef));
        assert_eq!(meals[1].name, "");
        assert!(meals[1].vegan);
    }

    #[test]
    fn all_headings_and_descriptions_are_used() {
        let page = r#"<body>
            <div><p class="heute_2017-05-04"></p>
              <ul class="c-schedule__list">
                <li class="c-schedule__list-item">
                  <span class="js-schedule-dish-description">Pasta</span>
                  <span class="js-schedule-dish-description"> mit Pesto</span>
                </li>
              </ul></div>
            <div><p class="heute_2017-05-04"></p>
              <ul class="c-schedule__list">
                <li class="c-schedule__list-item">
                  <span class="js-schedule-dish-description">Salat</span>
                </li>
              </ul></div>
            </body>"#;
        let meals = parse_day_meals(page, day(4)).unwrap();
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, ["Pasta mit Pesto", "Salat"]);
    }

    #[test]
    fn lists_shared_by_two_headings_are_read_once() {
        let page = r#"<div>
            <p class="heute_2017-05-04"></p><p class="heute_2017-05-04"></p>
            <ul class="c-schedule__list">
              <li class="c-schedule__list-item">
                <p class="js-schedule-dish-description">Suppe</p>
              </li>
            </ul></div>"#;
        assert_eq!(parse_day_meals(page, day(4)).unwrap().len(), 1);
    }
}
