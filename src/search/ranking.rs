use crate::models::{Listing, ParsedQuery, ScoredResult};
use crate::search::scorer::score;
use tracing::debug;

/// Score every candidate, drop hard mismatches and order by score.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank(candidates: &[Listing], parsed: &ParsedQuery) -> Vec<ScoredResult> {
    let mut results: Vec<ScoredResult> = candidates
        .iter()
        .map(|listing| {
            let (score, reasons) = score(listing, parsed);
            ScoredResult {
                listing: listing.clone(),
                score,
                reasons,
            }
        })
        .collect();

    results.retain(|result| admits(&result.listing, parsed));
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        candidates = candidates.len(),
        admitted = results.len(),
        "Ranked listings"
    );
    results
}

/// Hard admission filter.
///
/// Bedrooms are an "at least" bound here, unlike the closeness rule used
/// for scoring.
pub fn admits(listing: &Listing, parsed: &ParsedQuery) -> bool {
    if let Some(city) = &parsed.city {
        if !listing.city.to_lowercase().contains(city.as_str()) {
            return false;
        }
    }
    if let Some(area) = &parsed.area {
        if !listing.area.to_lowercase().contains(area.as_str()) {
            return false;
        }
    }
    if parsed.max_price.is_some_and(|max| listing.price_per_night > max) {
        return false;
    }
    if parsed.min_price.is_some_and(|min| listing.price_per_night < min) {
        return false;
    }
    if parsed.bedrooms.is_some_and(|wanted| listing.bedrooms < wanted) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Host, Power};
    use crate::search::interpreter::interpret;

    fn listing(id: &str, city: &str, area: &str, price: u64, bedrooms: u32) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("{} in {}", bedrooms, area),
            city: city.to_string(),
            area: area.to_string(),
            price_per_night: price,
            bedrooms,
            sleeps: bedrooms * 2,
            amenities: vec!["WiFi".to_string()],
            power: None,
            internet_mbps: None,
            rating: None,
            host: None,
            images: vec![],
        }
    }

    fn catalog() -> Vec<Listing> {
        let mut verified = listing("abj-1", "Abuja", "Wuse 2", 35_000, 1);
        verified.host = Some(Host {
            name: None,
            verified: true,
        });
        let mut powered = listing("lag-2", "Lagos", "Lekki", 48_000, 2);
        powered.power = Some(Power {
            hours_per_day: Some(24.0),
        });
        powered.rating = Some(4.8);

        vec![
            listing("lag-1", "Lagos", "Lekki Phase 1", 55_000, 2),
            powered,
            listing("lag-3", "Lagos", "Yaba", 25_000, 1),
            verified,
            listing("ph-1", "Port Harcourt", "GRA", 30_000, 3),
        ]
    }

    fn ids(results: &[ScoredResult]) -> Vec<&str> {
        results.iter().map(|r| r.listing.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_by_universal_signals() {
        let results = rank(&catalog(), &interpret(""));

        assert_eq!(results.len(), 5);
        // lag-2: 8 + 4.8, abj-1: 7, the rest tie at 0 in catalog order
        assert_eq!(ids(&results), vec!["lag-2", "abj-1", "lag-1", "lag-3", "ph-1"]);
    }

    #[test]
    fn test_results_are_sorted_descending() {
        let results = rank(&catalog(), &interpret("lagos with wifi"));
        assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn test_over_budget_listing_is_filtered_despite_positive_score() {
        let parsed = interpret("2 bed lagos lekki under 50k");
        let listings = catalog();

        let (raw, reasons) = score(&listings[0], &parsed);
        assert!(raw > 0);
        assert!(reasons.contains(&"Price above budget".to_string()));

        let results = rank(&listings, &parsed);
        assert_eq!(ids(&results), vec!["lag-2"]);
    }

    #[test]
    fn test_bedroom_filter_is_at_least() {
        let parsed = interpret("2br");
        let results = rank(&catalog(), &parsed);

        assert_eq!(ids(&results), vec!["lag-2", "lag-1", "ph-1"]);
        // one below the request scores on closeness yet is still excluded
        let (closeness, _) = score(&catalog()[2], &parsed);
        assert_eq!(closeness, 10);
        assert!(!admits(&catalog()[2], &parsed));
    }

    #[test]
    fn test_price_range_filters_both_ends() {
        let results = rank(&catalog(), &interpret("between 28k and 50k"));
        assert_eq!(ids(&results), vec!["lag-2", "abj-1", "ph-1"]);
    }

    #[test]
    fn test_city_alias_filter() {
        let results = rank(&catalog(), &interpret("phc shortlet"));
        assert_eq!(ids(&results), vec!["ph-1"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        assert!(rank(&[], &interpret("lagos")).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(rank(&catalog(), &interpret("enugu")).is_empty());
    }
}
