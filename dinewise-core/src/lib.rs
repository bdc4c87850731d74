//! Core domain types for the Dinewise restaurant recommender.
//!
//! Businesses are loaded once, flattened and scored into a read-only
//! [`Catalogue`]. Requests arrive as free text, are sanitised into a
//! [`Query`], and a [`Recommender`] turns them into a [`RecommendResponse`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attributes;
mod business;
mod recommendation;
mod request;
mod restaurant;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attributes::{
    AttributeValue, Attributes, FlatValue, LiteralError, flatten_attributes,
    parse_attribute_cell, parse_literal,
};
pub use business::{Business, RESTAURANTS_CATEGORY, contains_ignore_case};
pub use recommendation::{
    CategoryMatch, Diagnostics, NumericPass, RECOMMENDATION_LIMIT, RecommendResponse,
    Recommendation, Recommender,
};
pub use request::{
    DEFAULT_ATTRIBUTES, DEFAULT_CATEGORY, DEFAULT_STARS, MAX_STARS, MIN_STARS, Query,
    RecommendRequest, parse_keywords,
};
pub use restaurant::{Catalogue, Restaurant, top_by_score};
