//! Weights blending the normalised rating and popularity columns.

use crate::ScoreWeightsError;

/// Relative weighting between star rating and review volume.
///
/// The composite score is `stars * stars_norm + review_count *
/// review_count_norm`; the defaults keep it within `0.0..=1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the normalised star rating.
    pub stars: f64,
    /// Multiplier applied to the normalised review count.
    pub review_count: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError::NotFinite`] when either weight is NaN or
    /// infinite, [`ScoreWeightsError::Negative`] when either is below zero and
    /// [`ScoreWeightsError::ZeroTotal`] when both are zero.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        if !self.stars.is_finite() || !self.review_count.is_finite() {
            return Err(ScoreWeightsError::NotFinite);
        }
        if self.stars < 0.0 || self.review_count < 0.0 {
            return Err(ScoreWeightsError::Negative);
        }
        if self.stars <= 0.0 && self.review_count <= 0.0 {
            return Err(ScoreWeightsError::ZeroTotal);
        }
        Ok(self)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score is a weighted sum"
    )]
    pub(crate) fn blend(self, stars_norm: f64, review_count_norm: f64) -> f64 {
        self.stars * stars_norm + self.review_count * review_count_norm
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            stars: 0.6,
            review_count: 0.4,
        }
    }
}
