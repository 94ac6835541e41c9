//! Ordering, truncation and rounding of scored candidates.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use seygo_core::{ComponentScores, ScoredPlace};

use crate::filter::Candidate;

/// Decimal places kept on scores.
pub const SCORE_DECIMALS: i32 = 4;
/// Decimal places kept on distances.
pub const DISTANCE_DECIMALS: i32 = 2;

/// A candidate with unrounded scores, ready for ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    /// Candidate and its distance.
    pub candidate: Candidate<'a>,
    /// Component scores.
    pub components: ComponentScores,
    /// Combined score.
    pub final_score: f64,
}

/// Round `value` to `decimals` places, half away from zero.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "rounding scales by a power of ten")]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Order by final score descending and keep at most `top_n` entries.
///
/// The sort is stable, so equal scores keep their input order.
#[must_use]
pub fn rank(mut ranked: Vec<Ranked<'_>>, top_n: NonZeroUsize) -> Vec<ScoredPlace> {
    ranked.sort_by(|left, right| {
        right
            .final_score
            .partial_cmp(&left.final_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(top_n.get());
    ranked.into_iter().map(into_scored_place).collect()
}

fn into_scored_place(ranked: Ranked<'_>) -> ScoredPlace {
    let components = ranked.components;
    ScoredPlace {
        place: ranked.candidate.place.clone(),
        distance_km: ranked
            .candidate
            .distance_km
            .map(|distance_km| round_to(distance_km, DISTANCE_DECIMALS)),
        final_score: round_to(ranked.final_score, SCORE_DECIMALS),
        components: ComponentScores {
            content: round_to(components.content, SCORE_DECIMALS),
            keyword: round_to(components.keyword, SCORE_DECIMALS),
            taxonomy: round_to(components.taxonomy, SCORE_DECIMALS),
            popularity: round_to(components.popularity, SCORE_DECIMALS),
            distance: round_to(components.distance, SCORE_DECIMALS),
        },
    }
}
