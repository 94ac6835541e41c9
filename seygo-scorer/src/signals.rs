//! Keyword, taxonomy, popularity and distance signals.
//!
//! Each function scores every candidate in order and returns one value per
//! candidate in `0.0..=1.0`. Keyword and taxonomy scores are absolute;
//! popularity and distance are relative to the candidate set.

use seygo_core::PlaceFeature;

use crate::filter::{Candidate, TaxonomySelection};
use crate::normalise::min_max;

/// Bonus for a keyword equal to the place category.
pub const KEYWORD_CATEGORY_BONUS: f64 = 1.0;
/// Bonus for a keyword equal to one of the place tags.
pub const KEYWORD_TAG_BONUS: f64 = 0.7;
/// Bonus for a keyword contained in the place name.
pub const KEYWORD_NAME_BONUS: f64 = 0.4;
/// Bonus for a keyword contained in the place description.
pub const KEYWORD_DESCRIPTION_BONUS: f64 = 0.2;

/// Bonus for a place in the selected taxonomy group.
pub const TAXONOMY_GROUP_BONUS: f64 = 0.6;
/// Bonus for a place in one of the selected taxonomy categories.
pub const TAXONOMY_CATEGORY_BONUS: f64 = 1.0;

/// Score how strongly `keyword` matches each place.
///
/// Matching is case-insensitive. Bonuses accumulate and the total is capped
/// at `1.0`. A missing or blank keyword scores zero everywhere.
#[must_use]
pub fn keyword_scores(keyword: Option<&str>, places: &[&PlaceFeature]) -> Vec<f64> {
    let Some(needle) = keyword
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
    else {
        return vec![0.0; places.len()];
    };
    places
        .iter()
        .map(|place| keyword_score(&needle, place))
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "keyword bonuses accumulate")]
fn keyword_score(needle: &str, place: &PlaceFeature) -> f64 {
    let mut score = 0.0;
    if place.category.to_lowercase() == needle {
        score += KEYWORD_CATEGORY_BONUS;
    }
    if place.tags.iter().any(|tag| tag.to_lowercase() == needle) {
        score += KEYWORD_TAG_BONUS;
    }
    if place.name.to_lowercase().contains(needle) {
        score += KEYWORD_NAME_BONUS;
    }
    if place
        .description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(needle))
    {
        score += KEYWORD_DESCRIPTION_BONUS;
    }
    score.min(1.0)
}

/// Score how well each place matches the taxonomy selection.
///
/// An empty selection scores zero everywhere.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "taxonomy bonuses accumulate")]
pub fn taxonomy_scores(selection: &TaxonomySelection, places: &[&PlaceFeature]) -> Vec<f64> {
    places
        .iter()
        .map(|place| {
            let mut score = 0.0;
            if selection.matches_group(place) {
                score += TAXONOMY_GROUP_BONUS;
            }
            if selection.matches_category(place) {
                score += TAXONOMY_CATEGORY_BONUS;
            }
            f64::min(score, 1.0)
        })
        .collect()
}

/// Score places by rating weighted with the logarithm of review volume.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "popularity multiplies rating by log review count"
)]
pub fn popularity_scores(places: &[&PlaceFeature]) -> Vec<f64> {
    let raw: Vec<f64> = places
        .iter()
        .map(|place| place.avg_rating * f64::from(place.review_count).ln_1p())
        .collect();
    min_max(&raw)
}

/// Score candidates by proximity, nearer is better.
///
/// Candidates without a distance (no user location) score zero everywhere.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "proximity is 1 / (1 + km)")]
pub fn distance_scores(candidates: &[Candidate<'_>]) -> Vec<f64> {
    let raw: Option<Vec<f64>> = candidates
        .iter()
        .map(|candidate| {
            candidate
                .distance_km
                .map(|distance_km| 1.0 / (1.0 + distance_km))
        })
        .collect();
    raw.map_or_else(|| vec![0.0; candidates.len()], |values| min_max(&values))
}
