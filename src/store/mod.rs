pub mod error;
pub mod json;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::ListingStore;
