//! Dataset loading for the Dinewise recommender.
//!
//! Responsibilities:
//! - Read the business CSV export and validate its header row.
//! - Turn each row into a [`Business`](dinewise_core::Business) with
//!   flattened attributes.
//! - Skip malformed rows with a warning instead of failing the load.
//!
//! Boundaries:
//! - Do not select or score restaurants (lives in `dinewise-scorer`).
//! - Do not interpret requests (lives in `dinewise-recommender`).

#![forbid(unsafe_code)]

mod error;
mod loader;

pub use error::DatasetError;
pub use loader::{Dataset, LoadSummary, REQUIRED_COLUMNS, load_businesses, read_businesses};
