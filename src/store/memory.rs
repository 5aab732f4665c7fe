use crate::models::Listing;
use crate::store::traits::ListingStore;
use async_trait::async_trait;

/// Fixed in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    listings: Vec<Listing>,
}

impl MemoryStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn all_listings(&self) -> Vec<Listing> {
        self.listings.clone()
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
