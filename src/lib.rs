//! Free-text search and ranking for a catalog of rental listings.
//!
//! - **`search`**: query interpretation, relevance scoring and ranking. Pure
//!   functions with no I/O.
//! - **`store`**: where the catalog comes from. Load failures surface as an
//!   empty catalog.
//! - **`server`**: HTTP routes wrapping the search pipeline.

pub mod config;
pub mod models;
pub mod search;
pub mod server;
pub mod store;
