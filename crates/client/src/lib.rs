//! Yardly client library.
//!
//! Typed HTTP access to the Yardly API plus the headless coordinators behind
//! the listing page and the saved-yards page: they issue requests, track
//! loading / error / success state, and leave rendering to the caller.

pub mod api;
pub mod config;
pub mod favorites;
pub mod search;
