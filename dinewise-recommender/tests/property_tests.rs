//! Property-based tests for the recommendation pipeline.
//!
//! # Invariants tested
//!
//! - **Bounded:** at most five recommendations are returned.
//! - **Never empty:** a non-empty catalogue always yields recommendations.
//! - **Ranked:** recommendations appear in descending score order.
//! - **Sanitised:** effective thresholds are always within range.

use std::collections::HashMap;
use std::sync::Arc;

use dinewise_core::test_support::sample_businesses;
use dinewise_core::{Catalogue, RecommendRequest, Recommender};
use dinewise_recommender::FuzzyRecommender;
use dinewise_scorer::{ScoreWeights, build_catalogue};
use proptest::prelude::*;

fn sample_catalogue() -> Catalogue {
    match build_catalogue(sample_businesses(), ScoreWeights::default()) {
        Ok(catalogue) => catalogue,
        Err(err) => panic!("default weights must be valid: {err}"),
    }
}

fn request_strategy() -> impl Strategy<Value = RecommendRequest> {
    let categories = prop_oneof![
        Just("Sushi Bars".to_owned()),
        Just("Dim Sum".to_owned()),
        Just("Tucson".to_owned()),
        Just(String::new()),
        "[a-zA-Z ]{0,12}",
    ];
    let city = prop::option::of(prop_oneof![
        Just("Santa Barbara".to_owned()),
        Just("philly".to_owned()),
        Just("Tucson".to_owned()),
        "[a-zA-Z ]{0,12}",
    ]);
    let attributes = prop::option::of(prop_oneof![
        Just("GoodForKids".to_owned()),
        Just("cards, outdoor".to_owned()),
        Just("wifi".to_owned()),
        Just(" , ".to_owned()),
    ]);
    (
        -2.0_f64..8.0,
        -50_i64..1_000,
        categories,
        city,
        attributes,
    )
        .prop_map(|(stars, review_count, categories, city, attributes)| {
            RecommendRequest {
                stars,
                review_count,
                categories,
                city,
                attributes,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: responses are bounded, never empty and ranked by score.
    #[test]
    fn responses_are_bounded_and_ranked(request in request_strategy()) {
        let catalogue = Arc::new(sample_catalogue());
        let scores: HashMap<&str, f64> = catalogue
            .restaurants()
            .iter()
            .map(|restaurant| (restaurant.business.name.as_str(), restaurant.score))
            .collect();
        let recommender = FuzzyRecommender::new(Arc::clone(&catalogue));

        let response = recommender.recommend(&request);

        prop_assert!(!response.recommendations.is_empty());
        prop_assert!(response.recommendations.len() <= 5);
        let ranked: Vec<f64> = response
            .recommendations
            .iter()
            .filter_map(|recommendation| scores.get(recommendation.name.as_str()).copied())
            .collect();
        prop_assert_eq!(ranked.len(), response.recommendations.len());
        prop_assert!(ranked.windows(2).all(|pair| match pair {
            [higher, lower] => higher >= lower,
            _ => true,
        }), "recommendations are not ordered by descending score");
    }

    /// Property: effective thresholds never leave their accepted ranges.
    #[test]
    fn effective_thresholds_are_sanitised(request in request_strategy()) {
        let recommender = FuzzyRecommender::new(Arc::new(sample_catalogue()));
        let response = recommender.recommend(&request);
        let effective = &response.diagnostics.effective;

        prop_assert!((1.0..=5.0).contains(&effective.stars));
        if !(1.0..=5.0).contains(&request.stars) {
            prop_assert_eq!(effective.stars, 3.0);
        }
        if request.review_count < 0 {
            prop_assert_eq!(effective.review_count, 0);
        }
        prop_assert!(!effective.categories.is_empty());
    }
}
