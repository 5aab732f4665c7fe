use crate::models::{Listing, ParsedQuery};

pub const CITY_WEIGHT: f64 = 25.0;
pub const AREA_WEIGHT: f64 = 15.0;
pub const BEDROOM_WEIGHT: f64 = 20.0;
pub const BEDROOM_STEP: f64 = 10.0;
pub const WITHIN_BUDGET_WEIGHT: f64 = 20.0;
pub const OVER_BUDGET_PENALTY: f64 = -10.0;
pub const ABOVE_MINIMUM_WEIGHT: f64 = 5.0;
pub const AMENITY_WEIGHT: f64 = 6.0;
pub const RELIABLE_POWER_HOURS: f64 = 22.0;
pub const RELIABLE_POWER_WEIGHT: f64 = 8.0;
pub const VERIFIED_HOST_WEIGHT: f64 = 7.0;
pub const MAX_SCORE: f64 = 100.0;

/// Score a listing against parsed criteria.
///
/// Returns a score in `0..=100` and one reason per rule that fired, in rule
/// order. Over-budget listings are penalised here rather than dropped; the
/// ranking stage decides admission.
pub fn score(listing: &Listing, parsed: &ParsedQuery) -> (u8, Vec<String>) {
    let mut total: f64 = 0.0;
    let mut reasons = Vec::new();

    if let Some(city) = &parsed.city {
        if listing.city.to_lowercase().contains(city.as_str()) {
            total += CITY_WEIGHT;
            reasons.push(format!("City matches {}", listing.city));
        }
    }

    if let Some(area) = &parsed.area {
        if listing.area.to_lowercase().contains(area.as_str()) {
            total += AREA_WEIGHT;
            reasons.push(format!("Area matches {}", listing.area));
        }
    }

    if let Some(wanted) = parsed.bedrooms {
        let closeness = bedroom_closeness(listing.bedrooms, wanted);
        total += closeness;
        if closeness > 0.0 {
            reasons.push(format!("Bedrooms ~{}", wanted));
        }
    }

    if let Some(max) = parsed.max_price {
        if listing.price_per_night <= max {
            total += WITHIN_BUDGET_WEIGHT;
            reasons.push(format!("Price ≤ {}", naira(max)));
        } else {
            total += OVER_BUDGET_PENALTY;
            reasons.push("Price above budget".to_string());
        }
    }

    if let Some(min) = parsed.min_price {
        if listing.price_per_night >= min {
            total += ABOVE_MINIMUM_WEIGHT;
            reasons.push(format!("Price ≥ {}", naira(min)));
        }
    }

    let matched: Vec<&str> = parsed
        .amenities
        .iter()
        .filter(|amenity| listing.has_amenity(amenity))
        .map(String::as_str)
        .collect();
    if !matched.is_empty() {
        total += AMENITY_WEIGHT * matched.len() as f64;
        reasons.push(format!("Amenities: {}", matched.join(", ")));
    }

    if listing
        .power_hours()
        .is_some_and(|hours| hours >= RELIABLE_POWER_HOURS)
    {
        total += RELIABLE_POWER_WEIGHT;
        reasons.push("Reliable power".to_string());
    }

    if listing.is_verified() {
        total += VERIFIED_HOST_WEIGHT;
        reasons.push("Verified host".to_string());
    }

    total += listing.rating.filter(|rating| rating.is_finite()).unwrap_or(0.0);

    (total.round().clamp(0.0, MAX_SCORE) as u8, reasons)
}

/// Full weight for an exact match, losing one step per bedroom of distance
pub fn bedroom_closeness(have: u32, wanted: u32) -> f64 {
    let diff = f64::from(have.abs_diff(wanted));
    (BEDROOM_WEIGHT - diff * BEDROOM_STEP).max(0.0)
}

/// Format an amount as naira with thousands separators, e.g. `₦50,000`
pub fn naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₦{}", grouped)
}
