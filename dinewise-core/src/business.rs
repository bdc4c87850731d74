//! Business records as loaded from the dataset.

use crate::Attributes;

/// Category tag that marks a business as a restaurant.
pub const RESTAURANTS_CATEGORY: &str = "Restaurants";

/// A single business row, immutable once loaded.
///
/// # Examples
/// ```
/// use dinewise_core::Business;
///
/// let business = Business::new("Joe's Pizza", "New York")
///     .with_categories("Pizza, Restaurants")
///     .with_rating(4.5, 120);
///
/// assert!(business.is_open_restaurant());
/// assert_eq!(
///     business.category_tokens().collect::<Vec<_>>(),
///     ["Pizza", "Restaurants"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    /// Display name.
    pub name: String,
    /// Street address; may be empty.
    pub address: String,
    /// City name as written in the dataset.
    pub city: String,
    /// Average rating in `1.0..=5.0`.
    pub stars: f64,
    /// Number of reviews.
    pub review_count: u32,
    /// Comma-separated category tags.
    pub categories: String,
    /// Whether the business is currently trading.
    pub is_open: bool,
    /// Flattened attribute mapping.
    pub attributes: Attributes,
}

impl Business {
    /// Construct an open business with no categories, rating or attributes.
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            city: city.into(),
            stars: 0.0,
            review_count: 0,
            categories: String::new(),
            is_open: true,
            attributes: Attributes::new(),
        }
    }

    /// Set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the comma-separated category text.
    #[must_use]
    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = categories.into();
        self
    }

    /// Set the star rating and review count.
    #[must_use]
    pub const fn with_rating(mut self, stars: f64, review_count: u32) -> Self {
        self.stars = stars;
        self.review_count = review_count;
        self
    }

    /// Set whether the business is open.
    #[must_use]
    pub const fn with_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Replace the attribute mapping.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Report whether this business belongs in the working restaurant set:
    /// open, and tagged "Restaurants" in any letter case.
    #[must_use]
    pub fn is_open_restaurant(&self) -> bool {
        self.is_open && contains_ignore_case(&self.categories, RESTAURANTS_CATEGORY)
    }

    /// Iterate over trimmed, non-empty category tags in written order.
    pub fn category_tokens(&self) -> impl Iterator<Item = &str> {
        self.categories
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Case-insensitive substring test.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pizza, Restaurants", true, true)]
    #[case("pizza, restaurants", true, true)]
    #[case("Pizza, Restaurants", false, false)]
    #[case("Bakeries, Coffee & Tea", true, false)]
    fn restaurant_selection(
        #[case] categories: &str,
        #[case] open: bool,
        #[case] expected: bool,
    ) {
        let business = Business::new("Example", "Reno")
            .with_categories(categories)
            .with_open(open);
        assert_eq!(business.is_open_restaurant(), expected);
    }

    #[rstest]
    fn category_tokens_skip_blanks() {
        let business = Business::new("Example", "Reno").with_categories(" Sushi Bars,, Japanese ,");
        assert_eq!(
            business.category_tokens().collect::<Vec<_>>(),
            ["Sushi Bars", "Japanese"]
        );
    }
}
