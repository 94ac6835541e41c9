//! Unit coverage for the signal recommender and its stages.

use rstest::{fixture, rstest};
use seygo_core::test_support::{place, place_from, southern_coast};
use seygo_core::{
    ComponentScores, PlaceFeature, PlaceRecord, PreferencesError, RecommendError, Recommender,
    UserPreferences,
};

use crate::{
    Signal, SignalRecommender, SignalWeights, TaxonomySelection, WeightsError, content_scores,
    cosine_similarities, distance_scores, filter_candidates, keyword_scores, min_max,
    place_document, popularity_scores, round_to, taxonomy_scores, terms, within_radius,
};

const TOLERANCE: f64 = 1e-9;

#[fixture]
fn coast() -> Vec<PlaceFeature> {
    southern_coast()
}

fn refs(places: &[PlaceFeature]) -> Vec<&PlaceFeature> {
    places.iter().collect()
}

fn ids(results: &[seygo_core::ScoredPlace]) -> Vec<&str> {
    results.iter().map(|hit| hit.place.id.as_str()).collect()
}

#[expect(clippy::float_arithmetic, reason = "tests compare floats")]
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case(&[2.0, 4.0, 3.0], &[0.0, 1.0, 0.5])]
#[case(&[5.0, 5.0, 5.0], &[0.0, 0.0, 0.0])]
#[case(&[9.0], &[0.0])]
#[case(&[], &[])]
fn min_max_rescales_into_unit_range(#[case] values: &[f64], #[case] expected: &[f64]) {
    let normalised = min_max(values);
    assert_eq!(normalised.len(), expected.len());
    for (actual, wanted) in normalised.into_iter().zip(expected.iter().copied()) {
        assert_close(actual, wanted);
    }
}

#[rstest]
fn terms_include_unigrams_then_bigrams() {
    assert_eq!(
        terms("sunset surf spot"),
        vec!["sunset", "surf", "spot", "sunset surf", "surf spot"]
    );
}

#[rstest]
fn terms_drop_single_character_tokens() {
    assert_eq!(terms("a big, cat!"), vec!["big", "cat", "big cat"]);
}

#[rstest]
fn place_document_joins_category_tags_and_description(coast: Vec<PlaceFeature>) {
    let hikkaduwa = coast.get(2).expect("hikkaduwa fixture");
    assert_eq!(
        place_document(hikkaduwa),
        "beach surf coral snorkeling reef beach known for surf breaks"
    );
}

#[rstest]
fn content_scores_are_zero_without_preference_tags(coast: Vec<PlaceFeature>) {
    let scores = content_scores(&[], &refs(&coast));
    assert!(scores.iter().all(|&score| score == 0.0));
    assert_eq!(scores.len(), coast.len());
}

#[rstest]
fn content_scores_favour_matching_places(coast: Vec<PlaceFeature>) {
    let tags = vec!["surf".to_owned(), "coral".to_owned()];
    let scores = content_scores(&tags, &refs(&coast));

    let hikkaduwa = scores.get(2).copied().expect("hikkaduwa score");
    let unawatuna = scores.get(4).copied().expect("unawatuna score");
    let museum = scores.first().copied().expect("museum score");
    assert_close(hikkaduwa, 1.0);
    assert!(unawatuna > 0.0 && unawatuna < hikkaduwa);
    assert_close(museum, 0.0);
}

#[rstest]
fn cosine_similarities_match_smoothed_tf_idf() {
    // Corpus of four documents: "surf", "beach surf", "museum", "surf surf".
    // idf(surf) = ln(5/4) + 1; every other term has idf ln(5/2) + 1.
    let mixed = place_from(
        PlaceRecord::new("mixed", "Mixed", 6.0, 80.0)
            .with_category("beach")
            .with_tags(["surf"]),
    );
    let museum =
        place_from(PlaceRecord::new("museum", "Museum", 6.0, 80.0).with_category("museum"));
    let repeated = place_from(
        PlaceRecord::new("repeated", "Repeated", 6.0, 80.0)
            .with_category("surf")
            .with_tags(["surf"]),
    );
    let tags = vec!["Surf".to_owned()];

    let similarities = cosine_similarities(&tags, &[&mixed, &museum, &repeated]);
    let expected = [0.411_377_911_333_793_9, 0.0, 0.787_222_976_104_04];
    assert_eq!(similarities.len(), expected.len());
    for (actual, wanted) in similarities.into_iter().zip(expected) {
        assert_close(actual, wanted);
    }
}

#[rstest]
fn cosine_similarities_are_zero_without_preference_tags(coast: Vec<PlaceFeature>) {
    let similarities = cosine_similarities(&[], &refs(&coast));
    assert_eq!(similarities, vec![0.0; coast.len()]);
}

#[rstest]
#[case(Some("beach"), 1.0)]
#[case(Some("BEACH"), 1.0)]
#[case(Some("snorkel"), 0.0)]
#[case(Some("snorkeling"), 0.7)]
#[case(Some("palm"), 0.4)]
#[case(Some("lagoon"), 0.2)]
#[case(Some("bay"), 1.0)]
#[case(Some("  "), 0.0)]
#[case(None, 0.0)]
fn keyword_bonuses_accumulate_and_cap(#[case] keyword: Option<&str>, #[case] expected: f64) {
    let cove = place_from(
        PlaceRecord::new("cove", "Palm Bay", 6.0, 80.2)
            .with_category("beach")
            .with_tags(["snorkeling", "bay"])
            .with_description("Sheltered lagoon with a wide bay"),
    );
    let scores = keyword_scores(keyword, &[&cove]);
    assert_eq!(scores.len(), 1);
    assert_close(scores.first().copied().unwrap_or(f64::NAN), expected);
}

#[rstest]
#[case(&["beaches"], None, 1.0)]
#[case(&[], Some("nature & outdoor"), 0.6)]
#[case(&["Beaches"], Some("Nature & Outdoor"), 1.0)]
#[case(&["Museums"], None, 0.0)]
fn taxonomy_scores_reward_selected_category_and_group(
    #[case] categories: &[&str],
    #[case] group: Option<&str>,
    #[case] expected: f64,
) {
    let beach = place("beach", "Unawatuna", "beach", 6.009, 80.249);
    let mut preferences = UserPreferences::new().with_categories(categories.iter().copied());
    if let Some(name) = group {
        preferences = preferences.with_group(name);
    }
    let selection = TaxonomySelection::from_preferences(&preferences);

    let scores = taxonomy_scores(&selection, &[&beach]);

    assert_close(scores.first().copied().unwrap_or(f64::NAN), expected);
}

#[rstest]
fn empty_selection_scores_zero(coast: Vec<PlaceFeature>) {
    let selection = TaxonomySelection::from_preferences(&UserPreferences::new());
    assert!(selection.is_empty());
    let scores = taxonomy_scores(&selection, &refs(&coast));
    assert!(scores.iter().all(|&score| score == 0.0));
}

#[rstest]
fn popularity_rewards_rating_and_review_volume(coast: Vec<PlaceFeature>) {
    let scores = popularity_scores(&refs(&coast));
    // Galle Fort has the best rating and the most reviews; the cafe the fewest.
    assert_close(scores.get(3).copied().expect("galle score"), 1.0);
    assert_close(scores.get(5).copied().expect("cafe score"), 0.0);
}

#[rstest]
fn popularity_is_zero_without_reviews() {
    let first = place_from(PlaceRecord::new("a", "A", 6.0, 80.0).with_rating(4.0, 0));
    let second = place_from(PlaceRecord::new("b", "B", 6.1, 80.1).with_rating(2.0, 0));
    let scores = popularity_scores(&[&first, &second]);
    assert_eq!(scores, vec![0.0, 0.0]);
}

#[rstest]
fn distance_scores_need_a_location(coast: Vec<PlaceFeature>) {
    let candidates = within_radius(&coast, &UserPreferences::new());
    assert_eq!(candidates.len(), coast.len());
    assert!(candidates.iter().all(|candidate| candidate.distance_km.is_none()));
    let scores = distance_scores(&candidates);
    assert!(scores.iter().all(|&score| score == 0.0));
}

#[rstest]
fn distance_scores_prefer_nearby_places(coast: Vec<PlaceFeature>) {
    let preferences = UserPreferences::new()
        .with_location(6.93, 79.85)
        .with_radius_km(500.0);
    let candidates = within_radius(&coast, &preferences);
    let scores = distance_scores(&candidates);
    // Pettah Market is closest to central Colombo; Mirissa is furthest.
    assert_close(scores.get(1).copied().expect("pettah score"), 1.0);
    assert_close(scores.get(5).copied().expect("mirissa score"), 0.0);
}

#[rstest]
#[case(50.0, 0)]
#[case(150.0, 1)]
fn radius_filter_uses_great_circle_distance(#[case] radius_km: f64, #[case] expected: usize) {
    let places = vec![place("east", "One Degree East", "park", 0.0, 1.0)];
    let preferences = UserPreferences::new()
        .with_location(0.0, 0.0)
        .with_radius_km(radius_km);
    let selection = TaxonomySelection::from_preferences(&preferences);
    assert_eq!(
        filter_candidates(&places, &preferences, &selection).len(),
        expected
    );
}

#[rstest]
#[case::just_outside(111.1948, 0)]
#[case::just_inside(111.1950, 1)]
fn radius_boundary_follows_a_6371_km_sphere(#[case] radius_km: f64, #[case] expected: usize) {
    let places = vec![place("east", "One Degree East", "park", 0.0, 1.0)];
    let preferences = UserPreferences::new()
        .with_location(0.0, 0.0)
        .with_radius_km(radius_km);
    assert_eq!(within_radius(&places, &preferences).len(), expected);
}

#[rstest]
fn reported_distance_rounds_from_a_6371_km_sphere() {
    let places = vec![place("north", "Northern Cape", "viewpoint", 0.364, 0.0)];
    let preferences = UserPreferences::new()
        .with_location(0.0, 0.0)
        .with_radius_km(50.0);
    let results = SignalRecommender::default()
        .recommend(&places, &preferences)
        .expect("recommend");
    let distance = results
        .first()
        .and_then(|hit| hit.distance_km)
        .expect("distance when located");
    assert_close(distance, 40.47);
}

#[rstest]
fn group_filter_is_case_insensitive(coast: Vec<PlaceFeature>) {
    let preferences = UserPreferences::new().with_group("nature & OUTDOOR");
    let selection = TaxonomySelection::from_preferences(&preferences);
    let kept: Vec<&str> = filter_candidates(&coast, &preferences, &selection)
        .iter()
        .map(|candidate| candidate.place.id.as_str())
        .collect();
    assert_eq!(kept, vec!["hikkaduwa-beach", "unawatuna-beach"]);
}

#[rstest]
fn category_or_group_match_keeps_a_place(coast: Vec<PlaceFeature>) {
    let preferences = UserPreferences::new()
        .with_categories([" cafes "])
        .with_group("Cultural & Heritage");
    let selection = TaxonomySelection::from_preferences(&preferences);
    let kept: Vec<&str> = filter_candidates(&coast, &preferences, &selection)
        .iter()
        .map(|candidate| candidate.place.id.as_str())
        .collect();
    assert_eq!(kept, vec!["colombo-museum", "galle-fort", "mirissa-cafe"]);
}

#[rstest]
fn default_weights_match_documented_values() {
    let weights = SignalWeights::default();
    assert_close(weights.get(Signal::Content), 0.35);
    assert_close(weights.get(Signal::Keyword), 0.25);
    assert_close(weights.get(Signal::Taxonomy), 0.35);
    assert_close(weights.get(Signal::Popularity), 0.20);
    assert_close(weights.get(Signal::Distance), 0.20);
}

#[rstest]
#[case(Signal::Keyword, -0.1, WeightsError::Negative { signal: Signal::Keyword, value: -0.1 })]
#[case(Signal::Distance, f64::INFINITY, WeightsError::NonFinite { signal: Signal::Distance, value: f64::INFINITY })]
fn invalid_weights_are_rejected(
    #[case] signal: Signal,
    #[case] value: f64,
    #[case] expected: WeightsError,
) {
    let weights = SignalWeights::default().with(signal, value);
    assert_eq!(weights.validate(), Err(expected));
    assert_eq!(SignalRecommender::new(weights), Err(expected));
}

#[rstest]
fn nan_weight_is_reported_as_non_finite() {
    let weights = SignalWeights::default().with(Signal::Content, f64::NAN);
    assert!(matches!(
        weights.validate(),
        Err(WeightsError::NonFinite {
            signal: Signal::Content,
            ..
        })
    ));
}

#[rstest]
fn resolution_keeps_only_popularity_without_inputs() {
    let active = SignalWeights::default().resolve(&UserPreferences::new());
    for signal in Signal::ALL {
        assert_eq!(active.is_active(signal), signal == Signal::Popularity);
    }
    assert_close(active.total(), 0.20);
}

#[rstest]
fn resolution_activates_each_supplied_input() {
    let preferences = UserPreferences::new()
        .with_preference_tags(["surf"])
        .with_keyword("beach")
        .with_group("Nature & Outdoor")
        .with_location(6.0, 80.0);
    let active = SignalWeights::default().resolve(&preferences);
    assert!(Signal::ALL.into_iter().all(|signal| active.is_active(signal)));
    assert_close(active.total(), 1.35);
}

#[rstest]
fn combine_divides_by_active_total() {
    let preferences = UserPreferences::new().with_preference_tags(["surf"]);
    let active = SignalWeights::default().resolve(&preferences);
    let components = ComponentScores {
        content: 1.0,
        keyword: 1.0,
        ..ComponentScores::default()
    };
    // Keyword is inactive, so only content counts: 0.35 / (0.35 + 0.20).
    assert_close(active.combine(&components), 0.35 / 0.55);
}

#[rstest]
fn combine_with_no_active_weight_is_zero() {
    let active = SignalWeights::ZERO.resolve(&UserPreferences::new());
    let components = ComponentScores {
        popularity: 1.0,
        ..ComponentScores::default()
    };
    assert_close(active.total(), 0.0);
    assert_close(active.combine(&components), 0.0);
}

#[rstest]
#[case(0.123_456, 4, 0.1235)]
#[case(12.346, 2, 12.35)]
#[case(0.000_04, 4, 0.0)]
fn round_to_keeps_requested_decimals(
    #[case] value: f64,
    #[case] decimals: i32,
    #[case] expected: f64,
) {
    assert_close(round_to(value, decimals), expected);
}

#[rstest]
fn empty_input_yields_empty_output() {
    let results = SignalRecommender::default()
        .recommend(&[], &UserPreferences::new().with_keyword("beach"))
        .expect("empty input is valid");
    assert!(results.is_empty());
}

#[rstest]
fn results_are_sorted_and_capped(coast: Vec<PlaceFeature>) {
    let preferences = UserPreferences::new()
        .with_preference_tags(["surf", "beach"])
        .with_top_n(3);
    let results = SignalRecommender::default()
        .recommend(&coast, &preferences)
        .expect("recommend");
    assert_eq!(results.len(), 3);
    assert!(
        results
            .windows(2)
            .all(|pair| matches!(pair, [first, second] if first.final_score >= second.final_score))
    );
    let top_two: Vec<&str> = ids(&results).into_iter().take(2).collect();
    assert!(top_two.contains(&"hikkaduwa-beach"));
    assert!(top_two.contains(&"unawatuna-beach"));
}

#[rstest]
fn ties_keep_input_order() {
    let places = vec![
        place("first", "First", "park", 6.0, 80.0),
        place("second", "Second", "park", 6.1, 80.1),
        place("third", "Third", "park", 6.2, 80.2),
    ];
    let results = SignalRecommender::default()
        .recommend(&places, &UserPreferences::new())
        .expect("recommend");
    assert_eq!(ids(&results), vec!["first", "second", "third"]);
    assert!(results.iter().all(|hit| hit.final_score == 0.0));
}

#[rstest]
fn selected_category_passes_and_scores_full_taxonomy(coast: Vec<PlaceFeature>) {
    let preferences = UserPreferences::new().with_categories(["Beaches"]);
    let results = SignalRecommender::default()
        .recommend(&coast, &preferences)
        .expect("recommend");
    assert_eq!(results.len(), 2);
    for hit in &results {
        assert_eq!(hit.place.taxonomy_category, "Beaches");
        assert_close(hit.components.taxonomy, 1.0);
    }
}

#[rstest]
fn distances_are_reported_only_with_a_location(coast: Vec<PlaceFeature>) {
    let recommender = SignalRecommender::default();
    let unlocated = recommender
        .recommend(&coast, &UserPreferences::new())
        .expect("recommend");
    assert!(unlocated.iter().all(|hit| hit.distance_km.is_none()));
    assert!(unlocated.iter().all(|hit| hit.components.distance == 0.0));

    let located = recommender
        .recommend(
            &coast,
            &UserPreferences::new()
                .with_location(6.03, 80.22)
                .with_radius_km(30.0),
        )
        .expect("recommend");
    let kept = ids(&located);
    assert!(kept.contains(&"galle-fort"));
    assert!(!kept.contains(&"colombo-museum"));
    for hit in &located {
        let distance = hit.distance_km.expect("distance when located");
        assert!(distance <= 30.0);
        assert_close(round_to(distance, 2), distance);
    }
}

#[rstest]
fn scores_are_rounded_to_four_decimals(coast: Vec<PlaceFeature>) {
    let preferences = UserPreferences::new()
        .with_preference_tags(["history", "unesco"])
        .with_keyword("fort")
        .with_location(6.5, 80.0)
        .with_radius_km(200.0);
    let results = SignalRecommender::default()
        .recommend(&coast, &preferences)
        .expect("recommend");
    for hit in &results {
        for signal in Signal::ALL {
            let score = signal.score(&hit.components);
            assert_close(round_to(score, 4), score);
            assert!((0.0..=1.0).contains(&score));
        }
        assert_close(round_to(hit.final_score, 4), hit.final_score);
    }
}

#[rstest]
fn invalid_radius_is_rejected(coast: Vec<PlaceFeature>) {
    let err = SignalRecommender::default()
        .recommend(&coast, &UserPreferences::new().with_radius_km(0.0))
        .expect_err("zero radius");
    assert_eq!(
        err,
        RecommendError::InvalidPreferences(PreferencesError::InvalidRadius { radius_km: 0.0 })
    );
}

#[rstest]
fn invalid_place_is_rejected(mut coast: Vec<PlaceFeature>) {
    if let Some(first) = coast.first_mut() {
        first.avg_rating = -1.0;
    }
    let err = SignalRecommender::default()
        .recommend(&coast, &UserPreferences::new())
        .expect_err("negative rating");
    assert!(matches!(err, RecommendError::InvalidPlace(_)));
}
