use crate::models::ParsedQuery;
use crate::search::patterns::{
    AMENITIES, AREAS, BEDROOMS, BETWEEN, BUDGET_CAP, BUDGET_KEYWORDS, CITIES, PRICE_UNIT,
    SECURITY_KEYWORD, SECURITY_LABEL, UPPER_BOUNDS,
};
use regex::Captures;
use std::collections::BTreeSet;
use tracing::debug;

/// Turn free text into structured search criteria.
///
/// Never fails: text that matches nothing yields an empty [`ParsedQuery`],
/// which ranks the whole catalog on universal signals only.
pub fn interpret(raw: &str) -> ParsedQuery {
    let text = raw.to_lowercase();

    let city = CITIES
        .iter()
        .find(|(alias, _)| text.contains(alias))
        .map(|(_, canonical)| canonical.to_string());

    let area = AREAS
        .iter()
        .find(|area| text.contains(*area))
        .map(|area| area.to_string());

    let (min_price, mut max_price) = price_bounds(&text);
    if BUDGET_KEYWORDS.iter().any(|word| text.contains(word)) {
        max_price = Some(max_price.map_or(BUDGET_CAP, |max| max.min(BUDGET_CAP)));
    }

    let bedrooms = BEDROOMS
        .captures(&text)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    let parsed = ParsedQuery {
        city,
        area,
        min_price,
        max_price,
        bedrooms,
        amenities: amenities(&text),
    };

    debug!(query = raw, ?parsed, "Interpreted query");
    parsed
}

/// "between X and Y" wins over the single-bound phrasings
fn price_bounds(text: &str) -> (Option<u64>, Option<u64>) {
    if let Some(caps) = BETWEEN.captures(text) {
        return (thousands(&caps, 1), thousands(&caps, 2));
    }

    let max = UPPER_BOUNDS.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| thousands(&caps, 1))
    });

    (None, max)
}

fn thousands(caps: &Captures<'_>, group: usize) -> Option<u64> {
    caps.get(group)?
        .as_str()
        .parse::<u64>()
        .ok()
        .map(|n| n * PRICE_UNIT)
}

fn amenities(text: &str) -> BTreeSet<String> {
    let mut found: BTreeSet<String> = AMENITIES
        .iter()
        .filter(|amenity| text.contains(*amenity))
        .map(|amenity| amenity.to_string())
        .collect();

    if text.contains(SECURITY_KEYWORD) {
        found.insert(SECURITY_LABEL.to_string());
    }

    found
}
