//! The scored working set of restaurants.

use std::collections::HashSet;

use crate::{Business, Recommendation};

/// An open restaurant annotated with its load-time quality score.
///
/// The derived fields are computed once when the catalogue is built and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// The underlying business record.
    pub business: Business,
    /// Star rating rescaled to `0.0..=1.0` across the catalogue.
    pub stars_norm: f64,
    /// Review count rescaled to `0.0..=1.0` across the catalogue.
    pub review_count_norm: f64,
    /// Weighted composite of the normalised columns.
    pub score: f64,
}

impl Restaurant {
    /// Project the caller-facing fields of this restaurant.
    #[must_use]
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            name: self.business.name.clone(),
            address: self.business.address.clone(),
            city: self.business.city.clone(),
            stars: self.business.stars,
            review_count: self.business.review_count,
            categories: self.business.categories.clone(),
        }
    }
}

/// Read-only working dataset shared by every request.
///
/// Besides the restaurants themselves the catalogue keeps the distinct
/// lowercase city names, in order of first appearance, which serve as the
/// city vocabulary for fuzzy resolution.
///
/// # Examples
/// ```
/// use dinewise_core::{Business, Catalogue, Restaurant};
///
/// let restaurant = |name: &str, city: &str, score: f64| Restaurant {
///     business: Business::new(name, city).with_categories("Restaurants"),
///     stars_norm: 0.0,
///     review_count_norm: 0.0,
///     score,
/// };
/// let catalogue = Catalogue::new(vec![
///     restaurant("A", "Tampa", 0.2),
///     restaurant("B", "Reno", 0.9),
///     restaurant("C", "TAMPA", 0.5),
/// ]);
///
/// assert_eq!(catalogue.cities(), ["tampa", "reno"]);
/// let top: Vec<_> = catalogue.top_by_score(2).iter().map(|r| r.business.name.as_str()).collect();
/// assert_eq!(top, ["B", "C"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    restaurants: Vec<Restaurant>,
    cities: Vec<String>,
}

impl Catalogue {
    /// Build a catalogue from scored restaurants, keeping their order.
    #[must_use]
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        let mut seen = HashSet::new();
        let cities = restaurants
            .iter()
            .map(|restaurant| restaurant.business.city.to_lowercase())
            .filter(|city| seen.insert(city.clone()))
            .collect();
        Self {
            restaurants,
            cities,
        }
    }

    /// All restaurants in dataset order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Distinct lowercase city names in order of first appearance.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Number of restaurants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Report whether the catalogue holds no restaurants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// The `limit` highest-scoring restaurants of the whole catalogue.
    #[must_use]
    pub fn top_by_score(&self, limit: usize) -> Vec<&Restaurant> {
        top_by_score(&self.restaurants, limit)
    }
}

/// Rank restaurants by descending score and keep the first `limit`.
///
/// The sort is stable, so equal scores keep their incoming order.
pub fn top_by_score<'a, I>(restaurants: I, limit: usize) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let mut ranked: Vec<&Restaurant> = restaurants.into_iter().collect();
    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
    ranked.truncate(limit);
    ranked
}
