//! Load-time quality scoring for Dinewise restaurants.
//!
//! The scorer narrows a set of businesses to open restaurants, rescales the
//! star rating and review count columns to `0.0..=1.0` with min-max scaling
//! fitted on that subset, and blends them into a composite score with
//! [`ScoreWeights`]. The result is an immutable [`Catalogue`] ready to be
//! shared between requests.
//!
//! # Examples
//!
//! ```
//! use dinewise_core::Business;
//! use dinewise_scorer::{ScoreWeights, build_catalogue};
//!
//! let businesses = vec![
//!     Business::new("Slice", "Reno").with_categories("Pizza, Restaurants").with_rating(4.0, 10),
//!     Business::new("Crust", "Reno").with_categories("Pizza, Restaurants").with_rating(5.0, 30),
//! ];
//! let catalogue = build_catalogue(businesses, ScoreWeights::default())?;
//!
//! assert_eq!(catalogue.top_by_score(1)[0].business.name, "Crust");
//! # Ok::<(), dinewise_scorer::ScoreWeightsError>(())
//! ```

#![forbid(unsafe_code)]

use dinewise_core::{Business, Catalogue, Restaurant};
use log::debug;

mod error;
mod weights;

pub use error::ScoreWeightsError;
pub use weights::ScoreWeights;

/// Build the shared catalogue from loaded businesses.
///
/// Only open businesses tagged "Restaurants" are kept; their dataset order is
/// preserved.
///
/// # Errors
/// Returns [`ScoreWeightsError`] when `weights` fail validation.
pub fn build_catalogue<I>(
    businesses: I,
    weights: ScoreWeights,
) -> Result<Catalogue, ScoreWeightsError>
where
    I: IntoIterator<Item = Business>,
{
    let weights = weights.validate()?;
    let selected: Vec<Business> = businesses
        .into_iter()
        .filter(Business::is_open_restaurant)
        .collect();

    let stars: Vec<f64> = selected.iter().map(|business| business.stars).collect();
    let review_counts: Vec<f64> = selected
        .iter()
        .map(|business| f64::from(business.review_count))
        .collect();
    let stars_norm = scale_column("stars", &stars);
    let review_count_norm = scale_column("review_count", &review_counts);

    let restaurants = selected
        .into_iter()
        .zip(stars_norm)
        .zip(review_count_norm)
        .map(|((business, stars_norm), review_count_norm)| Restaurant {
            business,
            stars_norm,
            review_count_norm,
            score: weights.blend(stars_norm, review_count_norm),
        })
        .collect();
    Ok(Catalogue::new(restaurants))
}

/// Rescale `values` linearly so the smallest maps to `0.0` and the largest
/// to `1.0`.
///
/// When every value is equal there is no spread to scale and each value maps
/// to `0.0`.
///
/// # Examples
/// ```
/// use dinewise_scorer::min_max_scale;
///
/// assert_eq!(min_max_scale(&[2.0, 4.0, 3.0]), [0.0, 1.0, 0.5]);
/// assert_eq!(min_max_scale(&[7.0, 7.0]), [0.0, 0.0]);
/// ```
#[must_use]
pub fn min_max_scale(values: &[f64]) -> Vec<f64> {
    match ColumnRange::fit(values) {
        Some(range) => values.iter().map(|&value| range.scale(value)).collect(),
        None => Vec::new(),
    }
}

fn scale_column(column: &str, values: &[f64]) -> Vec<f64> {
    if let Some(range) = ColumnRange::fit(values) {
        debug!(
            "scaling {column} over {} rows in [{}, {}]",
            values.len(),
            range.min,
            range.max
        );
    }
    min_max_scale(values)
}

#[derive(Debug, Clone, Copy)]
struct ColumnRange {
    min: f64,
    max: f64,
}

impl ColumnRange {
    fn fit(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |range, &value| Self {
                min: range.min.min(value),
                max: range.max.max(value),
            },
        ))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "min-max scaling divides by the column spread"
    )]
    fn scale(self, value: f64) -> f64 {
        let spread = self.max - self.min;
        if spread <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / spread).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests;
