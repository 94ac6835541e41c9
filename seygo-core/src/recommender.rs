//! Rank places for a user's preferences.
//!
//! The `Recommender` trait turns a candidate set of
//! [`PlaceFeature`](crate::PlaceFeature) values into an ordered list of
//! [`ScoredPlace`](crate::ScoredPlace) results.

use thiserror::Error;

use crate::{PlaceFeature, PlaceFeatureError, PreferencesError, ScoredPlace, UserPreferences};

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The preferences failed validation.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferencesError),
    /// A candidate place failed validation.
    #[error("invalid place: {0}")]
    InvalidPlace(#[from] PlaceFeatureError),
}

/// Produce a ranked, explainable recommendation list.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and stateless across
/// calls: identical inputs yield identical output. An empty candidate set
/// yields an empty list rather than an error.
///
/// Implementations must:
/// - Return at most `preferences.top_n()` results.
/// - Order results by `final_score` descending, keeping input order on ties.
/// - Keep every score finite and within `0.0..=1.0`.
///
/// # Examples
///
/// ```rust
/// use seygo_core::{PlaceFeature, RecommendError, Recommender, ScoredPlace, UserPreferences};
///
/// struct NothingRecommender;
///
/// impl Recommender for NothingRecommender {
///     fn recommend(
///         &self,
///         _places: &[PlaceFeature],
///         _preferences: &UserPreferences,
///     ) -> Result<Vec<ScoredPlace>, RecommendError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let results = NothingRecommender
///     .recommend(&[], &UserPreferences::new())
///     .expect("empty input is fine");
/// assert!(results.is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Rank `places` for `preferences`.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the preferences or a place fail
    /// validation.
    fn recommend(
        &self,
        places: &[PlaceFeature],
        preferences: &UserPreferences,
    ) -> Result<Vec<ScoredPlace>, RecommendError>;
}
