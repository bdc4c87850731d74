//! Human-readable status text attached to recommendation responses.

use dinewise_core::Query;

const ANY_CITY: &str = "Any City";

/// Advisory raised when the category text resembles a city name.
pub(crate) fn city_warning(categories: &str) -> String {
    format!(
        "Warning: '{categories}' appears to be a city, not a category. \
         Consider specifying a category (e.g., Sushi Bars, Italian, Dim Sum)."
    )
}

/// Explanation for answering with the catalogue-wide top restaurants.
pub(crate) fn fallback(query: &Query) -> String {
    format!(
        "No restaurants found for '{}' in '{}' with {:.1}+ stars, {}+ reviews, and '{}'. \
         Showing top restaurants.",
        query.categories,
        query.city.as_deref().unwrap_or(ANY_CITY),
        query.stars,
        query.review_count,
        query.attributes,
    )
}

/// Explanation for answering from a different city than the one requested.
pub(crate) fn resolved_elsewhere(city: &str, matched_city: &str, categories: &str) -> String {
    format!(
        "No restaurants in '{city}', but found matches in '{matched_city}' for '{categories}'."
    )
}

/// Explanation for answering without a close category match.
pub(crate) fn no_category_match(categories: &str) -> String {
    format!(
        "No close match for category '{categories}', showing restaurants with similar categories."
    )
}
