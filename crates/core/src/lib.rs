//! Yardly domain core.
//!
//! Venue model, the seeded catalog, the listing query engine and the
//! per-user favorites store. Zero internal deps so the API server and the
//! client library can both build on it.

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod listing;
pub mod types;
pub mod venue;
