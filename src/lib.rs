//! Facade crate for the Dinewise restaurant recommender.
//!
//! This crate re-exports the core domain types and scoring, and exposes the
//! fuzzy recommender and CSV loader behind feature flags.

#![forbid(unsafe_code)]

pub use dinewise_core::{
    Business, Catalogue, CategoryMatch, Diagnostics, NumericPass, Query, RecommendRequest,
    RecommendResponse, Recommendation, Recommender, Restaurant,
};
pub use dinewise_scorer::{ScoreWeights, ScoreWeightsError, build_catalogue};

#[cfg(feature = "recommender")]
pub use dinewise_recommender::FuzzyRecommender;

#[cfg(feature = "loader-csv")]
pub use dinewise_data::{Dataset, DatasetError, LoadSummary, load_businesses};
