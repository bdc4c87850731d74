//! The recommendation pipeline over a shared catalogue.

use std::sync::Arc;

use dinewise_core::{
    Catalogue, CategoryMatch, Diagnostics, NumericPass, Query, RECOMMENDATION_LIMIT,
    RecommendRequest, RecommendResponse, Recommender, Restaurant, top_by_score,
};
use log::debug;

use crate::filter::{
    Candidates, category_looks_like_city, filter_by_attributes, filter_by_category,
    filter_by_city, filter_by_thresholds,
};
use crate::messages;

/// [`Recommender`] that resolves free-text cities and categories with fuzzy
/// matching and relaxes numeric thresholds when nothing qualifies.
///
/// The catalogue is shared read-only, so one recommender can serve
/// concurrent requests from several threads.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use dinewise_core::{Business, RecommendRequest, Recommender};
/// use dinewise_recommender::FuzzyRecommender;
/// use dinewise_scorer::{ScoreWeights, build_catalogue};
///
/// let businesses = vec![
///     Business::new("Slice", "Reno")
///         .with_categories("Pizza, Restaurants")
///         .with_rating(4.0, 10),
///     Business::new("Roll", "Reno")
///         .with_categories("Sushi Bars, Restaurants")
///         .with_rating(4.5, 30),
/// ];
/// let catalogue = build_catalogue(businesses, ScoreWeights::default())?;
/// let recommender = FuzzyRecommender::new(Arc::new(catalogue));
///
/// let request = RecommendRequest::new("pizza").with_city("reno").with_attributes("");
/// let response = recommender.recommend(&request);
/// // Empty attributes mean the default amenities, which neither place lists,
/// // so the answer falls back to the best overall.
/// assert!(response.diagnostics.fallback);
/// assert_eq!(response.recommendations[0].name, "Roll");
/// # Ok::<(), dinewise_scorer::ScoreWeightsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyRecommender {
    catalogue: Arc<Catalogue>,
}

impl FuzzyRecommender {
    /// Create a recommender over a shared catalogue.
    #[must_use]
    pub const fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    /// The catalogue this recommender draws from.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    fn run<'a>(&'a self, query: &Query) -> Run<'a> {
        let catalogue = self.catalogue();
        let mut run = Run::default();

        run.candidates = match query.city.as_deref() {
            Some(city) => {
                let (kept, matched) = filter_by_city(catalogue, city);
                run.matched_city = matched;
                kept
            }
            None => catalogue.restaurants().iter().collect(),
        };
        debug!(
            "city stage kept {} restaurants (matched city: {:?})",
            run.candidates.len(),
            run.matched_city
        );

        if run.candidates.is_empty() {
            return run;
        }
        let (kept, matches) = filter_by_category(&run.candidates, &query.categories);
        debug!(
            "category stage kept {} restaurants for {} matched categories",
            kept.len(),
            matches.len()
        );
        run.candidates = kept;
        run.category_matches = Some(matches);

        if run.candidates.is_empty() {
            return run;
        }
        let (kept, pass) = filter_by_thresholds(&run.candidates, query.stars, query.review_count);
        debug!("{pass:?} threshold stage kept {} restaurants", kept.len());
        run.candidates = kept;
        run.numeric_pass = Some(pass);

        if run.candidates.is_empty() || query.keywords.is_empty() {
            return run;
        }
        run.candidates = filter_by_attributes(&run.candidates, &query.keywords);
        debug!("attribute stage kept {} restaurants", run.candidates.len());
        run
    }
}

/// Intermediate state of one pass through the filter stages.
#[derive(Debug, Default)]
struct Run<'a> {
    candidates: Candidates<'a>,
    matched_city: Option<String>,
    category_matches: Option<Vec<CategoryMatch>>,
    numeric_pass: Option<NumericPass>,
}

impl Run<'_> {
    fn status_message(&self, query: &Query, fallback: bool) -> Option<String> {
        if fallback {
            return Some(messages::fallback(query));
        }
        if let (Some(city), Some(matched)) = (query.city.as_deref(), self.matched_city.as_deref())
            && city != matched
        {
            return Some(messages::resolved_elsewhere(
                city,
                matched,
                &query.categories,
            ));
        }
        self.category_matches
            .as_ref()
            .is_some_and(Vec::is_empty)
            .then(|| messages::no_category_match(&query.categories))
    }
}

impl Recommender for FuzzyRecommender {
    fn recommend(&self, request: &RecommendRequest) -> RecommendResponse {
        let query = request.sanitise();
        let city_warning = category_looks_like_city(self.catalogue(), &query.categories)
            .then(|| messages::city_warning(&query.categories));

        let run = self.run(&query);
        let mut ranked: Vec<&Restaurant> =
            top_by_score(run.candidates.iter().copied(), RECOMMENDATION_LIMIT);
        let fallback = ranked.is_empty();
        if fallback {
            debug!("no restaurant satisfied the request; using the overall top");
            ranked = self.catalogue().top_by_score(RECOMMENDATION_LIMIT);
        }
        let message = run.status_message(&query, fallback);

        RecommendResponse {
            recommendations: ranked
                .into_iter()
                .map(Restaurant::to_recommendation)
                .collect(),
            message,
            city_warning,
            diagnostics: Diagnostics {
                matched_city: run.matched_city,
                category_matches: run.category_matches,
                numeric_pass: run.numeric_pass,
                fallback,
                effective: query,
            },
        }
    }
}
