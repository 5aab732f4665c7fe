use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Power supply information for a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Power {
    #[serde(default)]
    pub hours_per_day: Option<f64>,
}

/// Host information for a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Host {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
}

/// Core rental listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub city: String,
    pub area: String,
    /// Nightly price in naira
    pub price_per_night: u64,
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sleeps: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub power: Option<Power>,
    #[serde(default)]
    pub internet_mbps: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub host: Option<Host>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl Listing {
    pub fn is_verified(&self) -> bool {
        self.host.as_ref().is_some_and(|host| host.verified)
    }

    pub fn power_hours(&self) -> Option<f64> {
        self.power.as_ref().and_then(|power| power.hours_per_day)
    }

    /// Case-insensitive amenity lookup
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|have| have.to_lowercase() == amenity.to_lowercase())
    }
}

/// Structured criteria extracted from a free-text query.
///
/// Every field is independent; `None` (or an empty amenity set) means the
/// query places no constraint on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub city: Option<String>,
    pub area: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: Option<u32>,
    pub amenities: BTreeSet<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A listing together with its relevance score and the reasons behind it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredResult {
    pub listing: Listing,
    pub score: u8,
    pub reasons: Vec<String>,
}
