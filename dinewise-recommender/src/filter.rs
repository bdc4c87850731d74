//! Constraint filter stages applied to the catalogue for one request.
//!
//! Each stage narrows the candidates left by the previous one. The stages
//! borrow restaurants from the shared catalogue and never copy them.

use std::collections::HashSet;

use dinewise_core::{Catalogue, CategoryMatch, NumericPass, RESTAURANTS_CATEGORY, Restaurant};

use crate::fuzzy::{
    CATEGORY_CUTOFF, CATEGORY_LIMIT, SINGLE_MATCH_THRESHOLD, resolve_single, resolve_top,
};

/// Candidates surviving a filter stage, in catalogue order.
pub type Candidates<'a> = Vec<&'a Restaurant>;

/// Report whether the category text is close to one of the catalogue's
/// cities.
#[must_use]
pub fn category_looks_like_city(catalogue: &Catalogue, categories: &str) -> bool {
    resolve_single(&categories.to_lowercase(), catalogue.cities())
        .is_some_and(|found| found.score >= SINGLE_MATCH_THRESHOLD)
}

/// Restrict candidates to the catalogue city closest to `city`.
///
/// Returns the surviving candidates and the lowercase city they belong to.
/// When no catalogue city is close enough nothing survives and no city is
/// reported.
#[must_use]
pub fn filter_by_city<'a>(
    catalogue: &'a Catalogue,
    city: &str,
) -> (Candidates<'a>, Option<String>) {
    let Some(found) = resolve_single(&city.to_lowercase(), catalogue.cities())
        .filter(|found| found.score >= SINGLE_MATCH_THRESHOLD)
    else {
        return (Vec::new(), None);
    };
    let matched = found.candidate.to_owned();
    let survivors = catalogue
        .restaurants()
        .iter()
        .filter(|restaurant| restaurant.business.city.to_lowercase() == matched)
        .collect();
    (survivors, Some(matched))
}

/// Distinct category tags across the candidates, in order of first
/// appearance.
#[must_use]
pub fn category_vocabulary<'a>(candidates: &[&'a Restaurant]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .copied()
        .flat_map(|restaurant| restaurant.business.category_tokens())
        .filter(|token| seen.insert(*token))
        .collect()
}

/// Keep candidates tagged with a category close to `categories`.
///
/// Up to three dataset categories are accepted. When none is close enough
/// the filter falls back to the "Restaurants" tag. Matching is
/// case-insensitive substring containment against the candidate's category
/// text.
#[must_use]
pub fn filter_by_category<'a>(
    candidates: &[&'a Restaurant],
    categories: &str,
) -> (Candidates<'a>, Vec<CategoryMatch>) {
    let vocabulary = category_vocabulary(candidates);
    let matches: Vec<CategoryMatch> =
        resolve_top(categories, &vocabulary, CATEGORY_CUTOFF, CATEGORY_LIMIT)
            .into_iter()
            .map(|found| CategoryMatch {
                category: found.candidate.to_owned(),
                score: found.score,
            })
            .collect();

    let needles: Vec<String> = if matches.is_empty() {
        vec![RESTAURANTS_CATEGORY.to_lowercase()]
    } else {
        matches
            .iter()
            .map(|found| found.category.to_lowercase())
            .collect()
    };
    let survivors = candidates
        .iter()
        .copied()
        .filter(|restaurant| {
            let text = restaurant.business.categories.to_lowercase();
            needles.iter().any(|needle| text.contains(needle.as_str()))
        })
        .collect();
    (survivors, matches)
}

/// Apply the rating and review thresholds, relaxing them when nothing
/// passes.
///
/// The relaxed pass admits stars of at least 80% and reviews of at least
/// 50% of the requested values, evaluated against the same `candidates`.
#[must_use]
pub fn filter_by_thresholds<'a>(
    candidates: &[&'a Restaurant],
    stars: f64,
    review_count: u32,
) -> (Candidates<'a>, NumericPass) {
    let strict = passing(candidates, stars, f64::from(review_count));
    if !strict.is_empty() {
        return (strict, NumericPass::Strict);
    }
    let (relaxed_stars, relaxed_reviews) = relaxed(stars, review_count);
    (
        passing(candidates, relaxed_stars, relaxed_reviews),
        NumericPass::Relaxed,
    )
}

#[expect(
    clippy::float_arithmetic,
    reason = "relaxed thresholds are fractions of the requested ones"
)]
fn relaxed(stars: f64, review_count: u32) -> (f64, f64) {
    (stars * 0.8, f64::from(review_count) * 0.5)
}

fn passing<'a>(candidates: &[&'a Restaurant], stars: f64, review_count: f64) -> Candidates<'a> {
    candidates
        .iter()
        .copied()
        .filter(|restaurant| {
            restaurant.business.stars >= stars
                && f64::from(restaurant.business.review_count) >= review_count
        })
        .collect()
}

/// Keep candidates where every keyword names at least one attribute that is
/// boolean `true`.
///
/// Keywords must already be lowercase. An empty keyword list keeps every
/// candidate.
#[must_use]
pub fn filter_by_attributes<'a>(
    candidates: &[&'a Restaurant],
    keywords: &[String],
) -> Candidates<'a> {
    candidates
        .iter()
        .copied()
        .filter(|restaurant| {
            keywords
                .iter()
                .all(|keyword| restaurant.business.attributes.has_true_key_containing(keyword))
        })
        .collect()
}
