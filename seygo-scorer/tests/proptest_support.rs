//! Proptest strategies for recommender property tests.
//!
//! Generated places sit around Sri Lanka's south-west coast with valid
//! coordinates and ratings, so every input passes validation and the
//! properties exercise scoring rather than error paths.

use proptest::prelude::*;
use seygo_core::{PlaceFeature, PlaceRecord, UserPreferences};

const CATEGORIES: &[&str] = &[
    "beach",
    "museum",
    "market",
    "waterfall",
    "temple",
    "cafe",
    "historic site",
    "national park",
];

const TAGS: &[&str] = &[
    "surf", "history", "coffee", "hiking", "unesco", "wildlife", "food", "sunset",
];

fn word(pool: &'static [&'static str]) -> impl Strategy<Value = &'static str> {
    proptest::sample::select(pool)
}

/// Strategy for a single valid place with a placeholder identifier.
fn place_strategy() -> impl Strategy<Value = PlaceRecord> {
    (
        5.9_f64..7.1_f64,
        79.8_f64..81.0_f64,
        word(CATEGORIES),
        proptest::collection::vec(word(TAGS), 0..4),
        0.0_f64..=5.0_f64,
        0_u32..50_000_u32,
        proptest::option::of(word(TAGS)),
    )
        .prop_map(
            |(latitude, longitude, category, tags, rating, reviews, description)| {
                let record = PlaceRecord::new("", "Generated place", latitude, longitude)
                    .with_category(category)
                    .with_tags(tags)
                    .with_rating(rating, reviews);
                match description {
                    Some(text) => record.with_description(format!("Known for {text}")),
                    None => record,
                }
            },
        )
}

/// Strategy for a catalogue of `min_count..=max_count` places with unique ids.
pub fn place_set_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<PlaceFeature>> {
    proptest::collection::vec(place_strategy(), min_count..=max_count).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                PlaceFeature::try_from(PlaceRecord {
                    id: format!("place-{index}"),
                    name: format!("Generated place {index}"),
                    ..record
                })
                .ok()
            })
            .collect()
    })
}

/// Strategy for preferences that request any combination of signals.
pub fn preferences_strategy() -> impl Strategy<Value = UserPreferences> {
    (
        proptest::collection::vec(word(TAGS), 0..3),
        proptest::option::of(word(CATEGORIES)),
        proptest::option::of(prop_oneof![
            Just("Beaches"),
            Just("Museums"),
            Just("Cafes"),
        ]),
        proptest::option::of((5.9_f64..7.1_f64, 79.8_f64..81.0_f64)),
        1.0_f64..300.0_f64,
        1_usize..30_usize,
    )
        .prop_map(|(tags, keyword, category, location, radius_km, top_n)| {
            let mut preferences = UserPreferences::new()
                .with_preference_tags(tags)
                .with_radius_km(radius_km)
                .with_top_n(top_n);
            if let Some(value) = keyword {
                preferences = preferences.with_keyword(value);
            }
            if let Some(value) = category {
                preferences = preferences.with_categories([value]);
            }
            if let Some((latitude, longitude)) = location {
                preferences = preferences.with_location(latitude, longitude);
            }
            preferences
        })
}
