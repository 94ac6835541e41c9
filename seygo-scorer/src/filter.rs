//! Candidate selection ahead of scoring.
//!
//! Places outside the search radius are dropped first, then places matching
//! neither the selected categories nor the selected group.

use std::collections::HashSet;

use log::debug;
use seygo_core::{PlaceFeature, UserPreferences, haversine_km, normalise_category_name};

/// A place that survived filtering, with its distance from the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// The place under consideration.
    pub place: &'a PlaceFeature,
    /// Great-circle distance from the user in kilometres, when located.
    pub distance_km: Option<f64>,
}

/// Lower-cased taxonomy selection used for case-insensitive matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaxonomySelection {
    categories: HashSet<String>,
    group: Option<String>,
}

impl TaxonomySelection {
    /// Build the selection from `preferences`.
    ///
    /// Category names are resolved through
    /// [`normalise_category_name`] before lower-casing.
    #[must_use]
    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        let categories = preferences
            .selected_categories()
            .iter()
            .map(|category| normalise_category_name(category).to_lowercase())
            .collect();
        let group = preferences
            .selected_group()
            .map(|group| group.trim().to_lowercase());
        Self { categories, group }
    }

    /// Report whether nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.group.is_none()
    }

    /// Report whether the place's taxonomy category was selected.
    #[must_use]
    pub fn matches_category(&self, place: &PlaceFeature) -> bool {
        !self.categories.is_empty()
            && self
                .categories
                .contains(&place.taxonomy_category.to_lowercase())
    }

    /// Report whether the place's taxonomy group was selected.
    #[must_use]
    pub fn matches_group(&self, place: &PlaceFeature) -> bool {
        self.group
            .as_deref()
            .is_some_and(|group| place.taxonomy_group.to_lowercase() == group)
    }
}

/// Keep the places within the user's search radius.
///
/// Without a user location every place is kept and no distance is recorded.
#[must_use]
pub fn within_radius<'a>(
    places: &'a [PlaceFeature],
    preferences: &UserPreferences,
) -> Vec<Candidate<'a>> {
    let Some(origin) = preferences.location() else {
        return places
            .iter()
            .map(|place| Candidate {
                place,
                distance_km: None,
            })
            .collect();
    };
    let radius_km = preferences.radius_km();
    places
        .iter()
        .filter_map(|place| {
            let distance_km = haversine_km(origin, place.location());
            (distance_km <= radius_km).then_some(Candidate {
                place,
                distance_km: Some(distance_km),
            })
        })
        .collect()
}

/// Keep the candidates matching a selected category or the selected group.
///
/// An empty selection keeps every candidate.
#[must_use]
pub fn matching_taxonomy<'a>(
    candidates: Vec<Candidate<'a>>,
    selection: &TaxonomySelection,
) -> Vec<Candidate<'a>> {
    if selection.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|candidate| {
            selection.matches_category(candidate.place) || selection.matches_group(candidate.place)
        })
        .collect()
}

/// Run both filters in order, stopping early once nothing is left.
#[must_use]
pub fn filter_candidates<'a>(
    places: &'a [PlaceFeature],
    preferences: &UserPreferences,
    selection: &TaxonomySelection,
) -> Vec<Candidate<'a>> {
    let nearby = within_radius(places, preferences);
    debug!(
        "{} of {} places within the search radius",
        nearby.len(),
        places.len()
    );
    if nearby.is_empty() {
        return nearby;
    }
    let total = nearby.len();
    let matching = matching_taxonomy(nearby, selection);
    debug!(
        "{} of {total} candidates match the taxonomy selection",
        matching.len()
    );
    matching
}
