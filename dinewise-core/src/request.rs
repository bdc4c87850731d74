//! Recommendation request parameters and their sanitisation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category used when the caller leaves the category empty.
pub const DEFAULT_CATEGORY: &str = "Restaurants";
/// Attribute keywords used when the caller leaves attributes empty.
pub const DEFAULT_ATTRIBUTES: &str = "GoodForKids,BusinessAcceptsCreditCards,OutdoorSeating";
/// Star threshold used when the caller's value is out of range.
pub const DEFAULT_STARS: f64 = 3.0;
/// Smallest accepted star threshold.
pub const MIN_STARS: f64 = 1.0;
/// Largest accepted star threshold.
pub const MAX_STARS: f64 = 5.0;

/// Caller-supplied soft constraints for one recommendation.
///
/// Values are taken as given; [`RecommendRequest::sanitise`] derives the
/// thresholds actually used for filtering.
///
/// # Examples
/// ```
/// use dinewise_core::RecommendRequest;
///
/// let request = RecommendRequest::new("Pizza")
///     .with_stars(7.5)
///     .with_review_count(-3)
///     .with_city("New York");
/// let query = request.sanitise();
///
/// assert_eq!(query.stars, 3.0);
/// assert_eq!(query.review_count, 0);
/// assert_eq!(query.city.as_deref(), Some("New York"));
/// assert_eq!(query.keywords.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendRequest {
    /// Minimum star rating.
    pub stars: f64,
    /// Minimum number of reviews; negative values are treated as zero.
    pub review_count: i64,
    /// Free-text category, e.g. "Sushi Bars".
    pub categories: String,
    /// Optional free-text city.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<String>,
    /// Optional comma-separated attribute keywords.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Option<String>,
}

impl RecommendRequest {
    /// Create a request for `categories` with default thresholds.
    pub fn new(categories: impl Into<String>) -> Self {
        Self {
            stars: DEFAULT_STARS,
            review_count: 0,
            categories: categories.into(),
            city: None,
            attributes: None,
        }
    }

    /// Set the minimum star rating.
    #[must_use]
    pub const fn with_stars(mut self, stars: f64) -> Self {
        self.stars = stars;
        self
    }

    /// Set the minimum review count.
    #[must_use]
    pub const fn with_review_count(mut self, review_count: i64) -> Self {
        self.review_count = review_count;
        self
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the attribute keywords.
    #[must_use]
    pub fn with_attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Derive the effective query.
    ///
    /// - an empty category becomes [`DEFAULT_CATEGORY`];
    /// - stars outside [`MIN_STARS`]`..=`[`MAX_STARS`], or not finite, become
    ///   [`DEFAULT_STARS`];
    /// - a negative review count becomes `0`;
    /// - missing or empty attributes become [`DEFAULT_ATTRIBUTES`];
    /// - an empty city is dropped.
    ///
    /// Whitespace-only text is not empty and is kept verbatim.
    #[must_use]
    pub fn sanitise(&self) -> Query {
        let categories = non_empty(Some(&self.categories))
            .unwrap_or(DEFAULT_CATEGORY)
            .to_owned();
        let stars = if (MIN_STARS..=MAX_STARS).contains(&self.stars) {
            self.stars
        } else {
            DEFAULT_STARS
        };
        let review_count = u32::try_from(self.review_count.max(0)).unwrap_or(u32::MAX);
        let attributes = non_empty(self.attributes.as_deref())
            .unwrap_or(DEFAULT_ATTRIBUTES)
            .to_owned();
        let keywords = parse_keywords(&attributes);
        let city = non_empty(self.city.as_deref()).map(str::to_owned);

        Query {
            stars,
            review_count,
            categories,
            city,
            attributes,
            keywords,
        }
    }
}

/// Sanitised request used by the filtering pipeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    /// Effective minimum star rating, always within `1.0..=5.0`.
    pub stars: f64,
    /// Effective minimum review count.
    pub review_count: u32,
    /// Category text, never empty.
    pub categories: String,
    /// City text as supplied, when not empty.
    pub city: Option<String>,
    /// Attribute keyword text, never empty.
    pub attributes: String,
    /// Lowercase, trimmed, non-empty attribute keywords.
    pub keywords: Vec<String>,
}

/// Split comma-separated attribute text into lowercase keywords.
///
/// # Examples
/// ```
/// use dinewise_core::parse_keywords;
///
/// assert_eq!(parse_keywords(" WiFi, ,GoodForKids "), ["wifi", "goodforkids"]);
/// ```
#[must_use]
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.is_empty())
}
