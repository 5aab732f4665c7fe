use crate::models::Listing;
use async_trait::async_trait;

/// Common trait for all listing sources.
///
/// Implementations never fail outward: an unreadable source yields an empty
/// catalog, so callers cannot tell "no data" apart from "no listings".
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Fetch the full catalog in its stored order
    async fn all_listings(&self) -> Vec<Listing>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
