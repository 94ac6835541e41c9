//! Core domain types for the SeyGo recommendation engine.
//!
//! The crate defines the values flowing through a recommendation call:
//! candidate places ([`PlaceFeature`]), the caller's preferences
//! ([`UserPreferences`]) and the explainable output ([`ScoredPlace`]). It also
//! hosts the fixed place taxonomy with its keyword classifier and the
//! [`Recommender`] trait implemented by scoring engines.
//!
//! Constructors and conversions validate their inputs so that engines can rely
//! on finite coordinates and ratings.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod place;
pub mod preferences;
pub mod recommender;
pub mod scored;
pub mod taxonomy;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distance::{EARTH_MEAN_RADIUS_KM, haversine_km, is_valid_coordinate};
pub use place::{PlaceFeature, PlaceFeatureError, PlaceRecord};
pub use preferences::{
    DEFAULT_RADIUS_KM, DEFAULT_TOP_N, PreferencesError, RecommendationRequest, UserPreferences,
};
pub use recommender::{RecommendError, Recommender};
pub use scored::{ComponentScores, ScoredPlace};
pub use taxonomy::{
    FALLBACK_ASSIGNMENT, PLACE_TAXONOMY, TaxonomyAssignment, TaxonomyGroup, all_categories,
    classify, group_for_category, groups, normalise_category_name,
};
