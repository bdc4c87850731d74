//! Recommendation results and the [`Recommender`] seam.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Query, RecommendRequest};

/// Maximum number of recommendations returned for a request.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// A restaurant suggested to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City as written in the dataset.
    pub city: String,
    /// Average rating.
    pub stars: f64,
    /// Number of reviews.
    pub review_count: u32,
    /// Comma-separated category tags.
    pub categories: String,
}

/// Which numeric thresholds the candidates were filtered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NumericPass {
    /// The requested thresholds.
    Strict,
    /// Stars at 80% and reviews at 50% of the requested thresholds.
    Relaxed,
}

/// A dataset category accepted by fuzzy resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoryMatch {
    /// Category tag as it appears in the dataset.
    pub category: String,
    /// Similarity score in `0..=100`.
    pub score: u8,
}

/// How the pipeline arrived at its answer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// The sanitised query that drove filtering.
    pub effective: Query,
    /// Lowercase dataset city the requested city resolved to.
    pub matched_city: Option<String>,
    /// Categories accepted by fuzzy resolution; `None` when that step was
    /// skipped because nothing survived the city step.
    pub category_matches: Option<Vec<CategoryMatch>>,
    /// Numeric thresholds applied; `None` when that step was skipped.
    ///
    /// `Relaxed` is reported whenever the strict pass admitted nothing, even
    /// if the relaxed pass admitted nothing either.
    pub numeric_pass: Option<NumericPass>,
    /// Whether the answer is the catalogue-wide fallback.
    pub fallback: bool,
}

impl Diagnostics {
    /// Diagnostics for a query before any filtering has run.
    #[must_use]
    pub const fn new(effective: Query) -> Self {
        Self {
            effective,
            matched_city: None,
            category_matches: None,
            numeric_pass: None,
            fallback: false,
        }
    }
}

/// The outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendResponse {
    /// Up to five recommendations, best first.
    pub recommendations: Vec<Recommendation>,
    /// Explanation of how the request was relaxed, if it was.
    pub message: Option<String>,
    /// Advisory raised when the category text looks like a city.
    pub city_warning: Option<String>,
    /// Pipeline diagnostics.
    pub diagnostics: Diagnostics,
}

/// Produce restaurant recommendations for free-text requests.
///
/// Implementations hold only read-only state and may serve concurrent
/// requests.
///
/// # Examples
/// ```
/// use dinewise_core::{
///     Diagnostics, RecommendRequest, RecommendResponse, Recommender,
/// };
///
/// struct Nothing;
///
/// impl Recommender for Nothing {
///     fn recommend(&self, request: &RecommendRequest) -> RecommendResponse {
///         RecommendResponse {
///             recommendations: Vec::new(),
///             message: None,
///             city_warning: None,
///             diagnostics: Diagnostics::new(request.sanitise()),
///         }
///     }
/// }
///
/// let response = Nothing.recommend(&RecommendRequest::new("Pizza"));
/// assert!(response.recommendations.is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Recommend restaurants for `request`.
    ///
    /// Always yields a response; an empty catalogue yields an empty list.
    fn recommend(&self, request: &RecommendRequest) -> RecommendResponse;
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;

    fn relaxed_response() -> RecommendResponse {
        let request = RecommendRequest::new("Sushi Bars")
            .with_stars(4.5)
            .with_city("Santa Barbra");
        let mut diagnostics = Diagnostics::new(request.sanitise());
        diagnostics.matched_city = Some("santa barbara".to_owned());
        diagnostics.category_matches = Some(vec![CategoryMatch {
            category: "Sushi Bars".to_owned(),
            score: 100,
        }]);
        diagnostics.numeric_pass = Some(NumericPass::Relaxed);
        RecommendResponse {
            recommendations: vec![Recommendation {
                name: "Roll House".to_owned(),
                address: "2 State St".to_owned(),
                city: "Santa Barbara".to_owned(),
                stars: 4.0,
                review_count: 80,
                categories: "Sushi Bars, Restaurants".to_owned(),
            }],
            message: Some("relaxed".to_owned()),
            city_warning: None,
            diagnostics,
        }
    }

    #[rstest]
    fn responses_survive_json() {
        let response = relaxed_response();
        let encoded = match serde_json::to_value(&response) {
            Ok(encoded) => encoded,
            Err(err) => panic!("response should serialise: {err}"),
        };

        assert_eq!(
            encoded.pointer("/diagnostics/numeric_pass"),
            Some(&serde_json::json!("relaxed"))
        );
        assert_eq!(
            encoded.pointer("/diagnostics/effective/city"),
            Some(&serde_json::json!("Santa Barbra"))
        );
        assert_eq!(encoded.get("city_warning"), Some(&serde_json::Value::Null));

        match serde_json::from_value::<RecommendResponse>(encoded) {
            Ok(decoded) => assert_eq!(decoded, response),
            Err(err) => panic!("response should deserialise: {err}"),
        }
    }

    #[rstest]
    #[case(NumericPass::Strict, "\"strict\"")]
    #[case(NumericPass::Relaxed, "\"relaxed\"")]
    fn numeric_passes_use_snake_case(#[case] pass: NumericPass, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&pass).ok().as_deref(), Some(expected));
    }
}
