//! Unit coverage for catalogue scoring.

use dinewise_core::test_support::{business, sample_businesses};
use dinewise_core::{Business, Catalogue};
use proptest::prelude::*;
use rstest::{fixture, rstest};

use crate::{ScoreWeights, ScoreWeightsError, build_catalogue, min_max_scale};

#[fixture]
fn catalogue() -> Catalogue {
    match build_catalogue(sample_businesses(), ScoreWeights::default()) {
        Ok(catalogue) => catalogue,
        Err(err) => panic!("default weights must be valid: {err}"),
    }
}

fn names(catalogue: &Catalogue) -> Vec<&str> {
    catalogue
        .restaurants()
        .iter()
        .map(|restaurant| restaurant.business.name.as_str())
        .collect()
}

#[rstest]
fn keeps_open_restaurants_in_dataset_order(catalogue: Catalogue) {
    assert_eq!(
        names(&catalogue),
        [
            "Sushi Zen",
            "Roll House",
            "Pasta Bella",
            "Golden Dim Sum",
            "Cheesesteak Co",
            "Taco Stand",
        ]
    );
    assert_eq!(
        catalogue.cities(),
        ["santa barbara", "philadelphia", "tucson"]
    );
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point scores"
)]
fn scales_against_the_restaurant_subset(catalogue: Catalogue) {
    let restaurants = catalogue.restaurants();
    let Some(taco) = restaurants.iter().find(|r| r.business.name == "Taco Stand") else {
        panic!("taco stand should be kept");
    };
    let Some(sushi) = restaurants.iter().find(|r| r.business.name == "Sushi Zen") else {
        panic!("sushi zen should be kept");
    };
    let Some(cheesesteak) = restaurants
        .iter()
        .find(|r| r.business.name == "Cheesesteak Co")
    else {
        panic!("cheesesteak should be kept");
    };

    // Stars span 2.5..=4.5 and reviews span 10..=900 once the closed and
    // non-restaurant rows are gone.
    assert_eq!(taco.stars_norm, 0.0);
    assert_eq!(taco.review_count_norm, 0.0);
    assert_eq!(sushi.stars_norm, 1.0);
    assert_eq!(cheesesteak.review_count_norm, 1.0);
    assert!((cheesesteak.stars_norm - 0.25).abs() < 1e-9);
    let expected = 0.6 + 0.4 * (190.0 / 890.0);
    assert!((sushi.score - expected).abs() < 1e-9);
}

#[rstest]
fn equal_columns_scale_to_zero() {
    let businesses = vec![
        business("One", "Reno", "Restaurants", 4.0, 10, ""),
        business("Two", "Reno", "Restaurants", 4.0, 10, ""),
    ];
    let catalogue = match build_catalogue(businesses, ScoreWeights::default()) {
        Ok(catalogue) => catalogue,
        Err(err) => panic!("default weights must be valid: {err}"),
    };

    for restaurant in catalogue.restaurants() {
        assert_eq!(restaurant.stars_norm, 0.0);
        assert_eq!(restaurant.review_count_norm, 0.0);
        assert_eq!(restaurant.score, 0.0);
    }
}

#[rstest]
fn empty_input_builds_an_empty_catalogue() {
    let catalogue = build_catalogue(Vec::<Business>::new(), ScoreWeights::default());
    assert!(matches!(catalogue, Ok(ref built) if built.is_empty()));
}

#[rstest]
#[case(ScoreWeights { stars: f64::NAN, review_count: 0.4 }, ScoreWeightsError::NotFinite)]
#[case(ScoreWeights { stars: 0.6, review_count: f64::INFINITY }, ScoreWeightsError::NotFinite)]
#[case(ScoreWeights { stars: -0.1, review_count: 0.4 }, ScoreWeightsError::Negative)]
#[case(ScoreWeights { stars: 0.0, review_count: 0.0 }, ScoreWeightsError::ZeroTotal)]
fn rejects_invalid_weights(#[case] weights: ScoreWeights, #[case] expected: ScoreWeightsError) {
    assert_eq!(
        build_catalogue(sample_businesses(), weights),
        Err(expected)
    );
}

#[rstest]
fn scale_of_empty_column_is_empty() {
    assert!(min_max_scale(&[]).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn scaled_values_stay_in_unit_range(values in prop::collection::vec(-1.0e6_f64..1.0e6, 1..40)) {
        let scaled = min_max_scale(&values);
        prop_assert_eq!(scaled.len(), values.len());
        for value in scaled {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn default_scores_stay_in_unit_range(
        ratings in prop::collection::vec((1.0_f64..=5.0, 0_u32..5_000), 1..30)
    ) {
        let businesses = ratings.into_iter().enumerate().map(|(index, (stars, reviews))| {
            business(&format!("Place {index}"), "Reno", "Restaurants", stars, reviews, "")
        });
        let catalogue = build_catalogue(businesses, ScoreWeights::default());
        prop_assert!(catalogue.is_ok());
        if let Ok(built) = catalogue {
            for restaurant in built.restaurants() {
                prop_assert!((0.0..=1.0 + 1e-12).contains(&restaurant.score));
            }
        }
    }
}
