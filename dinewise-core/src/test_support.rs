//! Fixtures shared by unit and behaviour tests across the workspace.

use crate::{Attributes, Business, Catalogue, Restaurant, parse_attribute_cell};

/// Build a business with the fields the pipeline reads.
///
/// `attributes` is a literal-encoded mapping as found in the dataset; an
/// unparseable cell yields no attributes.
#[must_use]
pub fn business(
    name: &str,
    city: &str,
    categories: &str,
    stars: f64,
    review_count: u32,
    attributes: &str,
) -> Business {
    Business::new(name, city)
        .with_address("100 State St")
        .with_categories(categories)
        .with_rating(stars, review_count)
        .with_attributes(parse_attribute_cell(attributes).unwrap_or_else(|_| Attributes::new()))
}

/// Wrap a business in a restaurant with a fixed score.
#[must_use]
pub fn restaurant(business: Business, score: f64) -> Restaurant {
    Restaurant {
        business,
        stars_norm: 0.0,
        review_count_norm: 0.0,
        score,
    }
}

/// Businesses spread over three cities, all open restaurants unless noted.
///
/// | name             | city          | stars | reviews | notes                 |
/// |------------------|---------------|-------|---------|-----------------------|
/// | Sushi Zen        | Santa Barbara | 4.5   | 200     | kids, cards, outdoor  |
/// | Roll House       | Santa Barbara | 4.0   | 80      | kids, cards           |
/// | Pasta Bella      | Santa Barbara | 3.5   | 40      | kids, cards, outdoor  |
/// | Golden Dim Sum   | Philadelphia  | 4.0   | 500     | kids, cards, outdoor  |
/// | Cheesesteak Co   | Philadelphia  | 3.0   | 900     | cards                 |
/// | Closed Sushi     | Philadelphia  | 5.0   | 999     | closed                |
/// | Taco Stand       | Tucson        | 2.5   | 10      | kids, cards, outdoor  |
/// | Corner Bakery    | Tucson        | 4.5   | 300     | not a restaurant      |
#[must_use]
pub fn sample_businesses() -> Vec<Business> {
    const ALL: &str =
        "{'GoodForKids': 'True', 'BusinessAcceptsCreditCards': 'True', 'OutdoorSeating': 'True'}";
    const NO_OUTDOOR: &str =
        "{'GoodForKids': 'True', 'BusinessAcceptsCreditCards': 'True', 'OutdoorSeating': 'False'}";
    const CARDS_ONLY: &str = "{'BusinessAcceptsCreditCards': 'True', 'GoodForKids': 'False'}";

    vec![
        business(
            "Sushi Zen",
            "Santa Barbara",
            "Sushi Bars, Japanese, Restaurants",
            4.5,
            200,
            ALL,
        ),
        business(
            "Roll House",
            "Santa Barbara",
            "Sushi Bars, Restaurants",
            4.0,
            80,
            NO_OUTDOOR,
        ),
        business(
            "Pasta Bella",
            "Santa Barbara",
            "Italian, Restaurants",
            3.5,
            40,
            ALL,
        ),
        business(
            "Golden Dim Sum",
            "Philadelphia",
            "Dim Sum, Chinese, Restaurants",
            4.0,
            500,
            ALL,
        ),
        business(
            "Cheesesteak Co",
            "Philadelphia",
            "Cheesesteaks, Sandwiches, Restaurants",
            3.0,
            900,
            CARDS_ONLY,
        ),
        business(
            "Closed Sushi",
            "Philadelphia",
            "Sushi Bars, Restaurants",
            5.0,
            999,
            ALL,
        )
        .with_open(false),
        business("Taco Stand", "Tucson", "Mexican, Restaurants", 2.5, 10, ALL),
        business(
            "Corner Bakery",
            "Tucson",
            "Bakeries, Coffee & Tea",
            4.5,
            300,
            ALL,
        ),
    ]
}

/// Catalogue of the given businesses with scores descending in input order.
///
/// Useful when a test needs a predictable ranking without running the
/// scorer.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "halving keeps fixture scores distinct")]
pub fn catalogue_in_rank_order(businesses: Vec<Business>) -> Catalogue {
    let mut score = 1.0;
    let restaurants = businesses
        .into_iter()
        .map(|business| {
            let scored = restaurant(business, score);
            score /= 2.0;
            scored
        })
        .collect();
    Catalogue::new(restaurants)
}
