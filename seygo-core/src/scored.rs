//! Explainable recommendation output.

use crate::PlaceFeature;

/// Per-signal scores for one candidate, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentScores {
    /// TF-IDF similarity between the user's tags and the place text.
    #[cfg_attr(feature = "serde", serde(rename = "content_score"))]
    pub content: f64,
    /// Match strength of the search keyword.
    #[cfg_attr(feature = "serde", serde(rename = "keyword_score"))]
    pub keyword: f64,
    /// Match strength against the selected taxonomy.
    #[cfg_attr(feature = "serde", serde(rename = "taxonomy_score"))]
    pub taxonomy: f64,
    /// Rating weighted by review volume, relative to the candidate set.
    #[cfg_attr(feature = "serde", serde(rename = "popularity_score"))]
    pub popularity: f64,
    /// Proximity to the user, relative to the candidate set.
    #[cfg_attr(feature = "serde", serde(rename = "distance_score"))]
    pub distance: f64,
}

/// A ranked place with its final score and the scores behind it.
///
/// Serialises flat: place attributes, `distance_km`, `final_score` and the
/// five `*_score` fields side by side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPlace {
    /// The recommended place.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub place: PlaceFeature,
    /// Distance from the user in kilometres, rounded to two decimals.
    /// Absent when no user location was supplied.
    pub distance_km: Option<f64>,
    /// Weighted combination of [`ScoredPlace::components`], rounded to four
    /// decimals.
    pub final_score: f64,
    /// Component scores rounded to four decimals.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub components: ComponentScores,
}
