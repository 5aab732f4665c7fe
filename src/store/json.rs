use crate::models::Listing;
use crate::store::error::StoreError;
use crate::store::traits::ListingStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Listing store backed by a JSON array on disk.
///
/// The file is re-read on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Listing>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        debug!("Read {} bytes from {}", raw.len(), self.path.display());

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[async_trait]
impl ListingStore for JsonFileStore {
    async fn all_listings(&self) -> Vec<Listing> {
        match self.load().await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Failed to load listings, serving empty catalog: {}", e);
                Vec::new()
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_listings_in_file_order() {
        let file = write_temp(
            r#"[
                {"id": "b", "title": "B", "city": "Lagos", "area": "Ikeja",
                 "price_per_night": 30000, "bedrooms": 1},
                {"id": "a", "title": "A", "city": "Abuja", "area": "Wuse",
                 "price_per_night": 45000, "bedrooms": 2,
                 "power": {"hours_per_day": 23}, "host": {"verified": true}}
            ]"#,
        );
        let store = JsonFileStore::new(file.path());

        let listings = store.all_listings().await;
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id, "b");
        assert_eq!(listings[1].id, "a");
        assert!(listings[1].is_verified());
    }

    #[tokio::test]
    async fn test_sparse_listing_does_not_drop_catalog() {
        let file = write_temp(
            r#"[
                {"id": "ok", "title": "OK", "city": "Lagos", "area": "Yaba",
                 "price_per_night": 20000, "bedrooms": 1,
                 "power": {"hours_per_day": 24}},
                {"id": "sparse", "title": "Sparse", "city": "Lagos", "area": "Lekki",
                 "price_per_night": 40000, "bedrooms": 2,
                 "power": {}, "amenities": null, "images": null}
            ]"#,
        );
        let store = JsonFileStore::new(file.path());

        let listings = store.all_listings().await;
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].power_hours(), Some(24.0));
        assert_eq!(listings[1].power_hours(), None);
        assert!(listings[1].amenities.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));

        assert!(store.all_listings().await.is_empty());
        assert!(matches!(store.load().await, Err(StoreError::Read { .. })));
    }

    #[tokio::test]
    async fn test_malformed_file_yields_empty_catalog() {
        let file = write_temp("{ not json");
        let store = JsonFileStore::new(file.path());

        assert!(store.all_listings().await.is_empty());
        assert!(matches!(store.load().await, Err(StoreError::Parse { .. })));
    }
}
