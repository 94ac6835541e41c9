//! Facade crate for the SeyGo recommendation engine.
//!
//! This crate re-exports the core domain types together with the default
//! signal-based recommender.

#![forbid(unsafe_code)]

pub use seygo_core::{
    ComponentScores, PlaceFeature, PlaceFeatureError, PlaceRecord, PreferencesError,
    RecommendError, RecommendationRequest, Recommender, ScoredPlace, TaxonomyAssignment,
    TaxonomyGroup, UserPreferences, classify,
};

pub use seygo_scorer::{Signal, SignalRecommender, SignalWeights, WeightsError};
