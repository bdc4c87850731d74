//! Fuzzy restaurant recommendation for Dinewise.
//!
//! [`FuzzyRecommender`] answers a [`RecommendRequest`](dinewise_core::RecommendRequest)
//! against a shared [`Catalogue`](dinewise_core::Catalogue) in a fixed
//! sequence of stages:
//!
//! 1. flag category text that resembles a city;
//! 2. resolve the requested city to the closest catalogue city;
//! 3. resolve the requested category to up to three dataset categories;
//! 4. apply rating and review thresholds, relaxing them when nothing passes;
//! 5. require every requested attribute keyword to be true.
//!
//! The survivors are ranked by their load-time score. When nothing survives
//! the catalogue-wide top five are returned instead, with a message saying
//! so.

#![forbid(unsafe_code)]

mod engine;
pub mod filter;
mod fuzzy;
mod messages;

pub use engine::FuzzyRecommender;
pub use fuzzy::{
    CATEGORY_CUTOFF, CATEGORY_LIMIT, FuzzyMatch, SINGLE_MATCH_THRESHOLD, resolve_single,
    resolve_top, token_sort_ratio,
};
