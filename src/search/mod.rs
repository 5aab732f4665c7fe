//! Free-text listing search.
//!
//! Raw query text goes through [`interpret`] to become a [`ParsedQuery`],
//! then [`rank`] scores the catalog against it, drops hard mismatches and
//! orders what remains.
//!
//! [`ParsedQuery`]: crate::models::ParsedQuery

pub mod interpreter;
pub mod patterns;
pub mod ranking;
pub mod scorer;

pub use interpreter::interpret;
pub use ranking::{admits, rank};
pub use scorer::score;
