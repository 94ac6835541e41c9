//! Signal-based place recommender for SeyGo.
//!
//! [`SignalRecommender`] implements [`Recommender`] as a four-stage pipeline:
//!
//! 1. **Filter** candidates by search radius, then by taxonomy selection.
//! 2. **Score** every survivor on five signals: TF-IDF content similarity,
//!    keyword match, taxonomy match, popularity and proximity.
//! 3. **Combine** the signals with weights resolved for the call, so signals
//!    without input do not dilute the others.
//! 4. **Rank** by final score, keep the top entries and round for display.
//!
//! The recommender holds only its validated weights, so one instance can be
//! shared across threads.
//!
//! # Examples
//!
//! ```
//! use seygo_core::{PlaceFeature, PlaceRecord, Recommender, UserPreferences};
//! use seygo_scorer::SignalRecommender;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let places = vec![
//!     PlaceFeature::try_from(
//!         PlaceRecord::new("hikkaduwa", "Hikkaduwa Beach", 6.139, 80.101)
//!             .with_category("beach")
//!             .with_tags(["surf"])
//!             .with_rating(4.6, 7_400),
//!     )?,
//!     PlaceFeature::try_from(
//!         PlaceRecord::new("galle", "Galle Fort", 6.026, 80.217)
//!             .with_category("historic site")
//!             .with_rating(4.8, 21_000),
//!     )?,
//! ];
//! let preferences = UserPreferences::new().with_keyword("beach");
//!
//! let results = SignalRecommender::default().recommend(&places, &preferences)?;
//! assert_eq!(results.first().map(|hit| hit.place.id.as_str()), Some("hikkaduwa"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use log::debug;
use seygo_core::{
    ComponentScores, PlaceFeature, RecommendError, Recommender, ScoredPlace, UserPreferences,
};

mod content;
mod error;
mod filter;
mod normalise;
mod rank;
mod signals;
mod weights;

pub use content::{content_scores, cosine_similarities, place_document, terms};
pub use error::WeightsError;
pub use filter::{Candidate, TaxonomySelection, filter_candidates, matching_taxonomy, within_radius};
pub use normalise::min_max;
pub use rank::{DISTANCE_DECIMALS, Ranked, SCORE_DECIMALS, rank, round_to};
pub use signals::{
    KEYWORD_CATEGORY_BONUS, KEYWORD_DESCRIPTION_BONUS, KEYWORD_NAME_BONUS, KEYWORD_TAG_BONUS,
    TAXONOMY_CATEGORY_BONUS, TAXONOMY_GROUP_BONUS, distance_scores, keyword_scores,
    popularity_scores, taxonomy_scores,
};
pub use weights::{ActiveWeights, Signal, SignalWeights};

/// Recommender combining content, keyword, taxonomy, popularity and distance
/// signals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalRecommender {
    weights: SignalWeights,
}

impl SignalRecommender {
    /// Build a recommender with custom base weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a weight is negative or not finite.
    pub fn new(weights: SignalWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Base weights applied before per-call resolution.
    #[must_use]
    pub const fn weights(&self) -> SignalWeights {
        self.weights
    }
}

impl Recommender for SignalRecommender {
    fn recommend(
        &self,
        places: &[PlaceFeature],
        preferences: &UserPreferences,
    ) -> Result<Vec<ScoredPlace>, RecommendError> {
        if places.is_empty() {
            return Ok(Vec::new());
        }
        preferences.validate()?;
        for place in places {
            place.validate()?;
        }

        let selection = TaxonomySelection::from_preferences(preferences);
        let candidates = filter_candidates(places, preferences, &selection);
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let features: Vec<&PlaceFeature> =
            candidates.iter().map(|candidate| candidate.place).collect();
        let contents = content_scores(preferences.preference_tags(), &features);
        let keywords = keyword_scores(preferences.search_keyword(), &features);
        let taxonomies = taxonomy_scores(&selection, &features);
        let popularities = popularity_scores(&features);
        let distances = distance_scores(&candidates);

        let active = self.weights.resolve(preferences);
        debug!("scoring {} candidates with weights {active}", candidates.len());

        let ranked: Vec<Ranked<'_>> = candidates
            .into_iter()
            .zip(contents)
            .zip(keywords)
            .zip(taxonomies)
            .zip(popularities)
            .zip(distances)
            .map(
                |(((((candidate, content), keyword), taxonomy), popularity), distance)| {
                    let components = ComponentScores {
                        content,
                        keyword,
                        taxonomy,
                        popularity,
                        distance,
                    };
                    Ranked {
                        candidate,
                        components,
                        final_score: active.combine(&components),
                    }
                },
            )
            .collect();
        Ok(rank(ranked, preferences.top_n()))
    }
}

#[cfg(test)]
mod tests;
