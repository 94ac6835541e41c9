//! TF-IDF content similarity between preference tags and place text.
//!
//! Documents are tokenised into runs of two or more word characters and
//! expanded into unigrams and bigrams. Terms are weighted by raw count times
//! the smoothed inverse document frequency `ln((1 + n) / (1 + df)) + 1`, where
//! `n` counts the user document together with every place document. Vectors
//! are L2-normalised so the dot product is the cosine similarity.

use std::collections::BTreeMap;

use seygo_core::PlaceFeature;

use crate::normalise::min_max;

type TermCounts = BTreeMap<String, f64>;

/// Lower-cased text describing a place: category, tags, then description.
#[must_use]
pub fn place_document(place: &PlaceFeature) -> String {
    let mut parts = Vec::with_capacity(place.tags.len() + 2);
    parts.push(place.category.as_str());
    parts.extend(place.tags.iter().map(String::as_str));
    if let Some(description) = place.description.as_deref() {
        parts.push(description);
    }
    parts.join(" ").to_lowercase()
}

/// Split lower-cased text into unigram and bigram terms.
///
/// Tokens are maximal runs of alphanumeric characters or underscores with at
/// least two characters; shorter runs are discarded before bigrams form.
#[must_use]
pub fn terms(text: &str) -> Vec<String> {
    let tokens: Vec<&str> = text
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().nth(1).is_some())
        .collect();
    let bigrams = tokens
        .windows(2)
        .filter_map(|pair| match pair {
            [first, second] => Some(format!("{first} {second}")),
            _ => None,
        });
    tokens
        .iter()
        .map(|&token| token.to_owned())
        .chain(bigrams)
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "term frequencies are counted")]
fn count_terms(text: &str) -> TermCounts {
    let mut counts = TermCounts::new();
    for term in terms(text) {
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    counts
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "inverse document frequency uses the smoothed logarithmic form"
)]
fn inverse_document_frequencies(documents: &[TermCounts]) -> BTreeMap<&str, f64> {
    let mut frequencies: BTreeMap<&str, usize> = BTreeMap::new();
    for document in documents {
        for term in document.keys() {
            *frequencies.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    let total = documents.len() as f64;
    frequencies
        .into_iter()
        .map(|(term, frequency)| {
            let document_count = frequency as f64;
            (term, ((1.0 + total) / (1.0 + document_count)).ln() + 1.0)
        })
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "vectors are weighted and scaled")]
fn weighted_unit_vector(counts: &TermCounts, idf: &BTreeMap<&str, f64>) -> TermCounts {
    let weighted: TermCounts = counts
        .iter()
        .map(|(term, count)| {
            let weight = idf.get(term.as_str()).copied().unwrap_or(1.0);
            (term.clone(), count * weight)
        })
        .collect();
    let norm = weighted.values().map(|value| value * value).sum::<f64>().sqrt();
    if norm == 0.0 {
        return TermCounts::new();
    }
    weighted
        .into_iter()
        .map(|(term, value)| (term, value / norm))
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "cosine similarity is a dot product")]
fn dot(left: &TermCounts, right: &TermCounts) -> f64 {
    left.iter()
        .filter_map(|(term, value)| right.get(term).map(|other| value * other))
        .sum()
}

/// Cosine similarity between the preference tags and each place document.
///
/// Values are raw similarities in `0.0..=1.0`, in place order. An empty tag
/// list yields zeros.
#[must_use]
pub fn cosine_similarities(preference_tags: &[String], places: &[&PlaceFeature]) -> Vec<f64> {
    if preference_tags.is_empty() {
        return vec![0.0; places.len()];
    }
    let user_document = preference_tags.join(" ").to_lowercase();
    let documents: Vec<TermCounts> = std::iter::once(user_document)
        .chain(places.iter().map(|place| place_document(place)))
        .map(|text| count_terms(&text))
        .collect();
    let idf = inverse_document_frequencies(&documents);
    let mut vectors = documents
        .iter()
        .map(|counts| weighted_unit_vector(counts, &idf));
    let user_vector = vectors.next().unwrap_or_default();
    vectors.map(|vector| dot(&user_vector, &vector)).collect()
}

/// Score each place against the preference tags.
///
/// Returns min-max normalised [`cosine_similarities`] in place order, or
/// zeros when `preference_tags` is empty.
#[must_use]
pub fn content_scores(preference_tags: &[String], places: &[&PlaceFeature]) -> Vec<f64> {
    min_max(&cosine_similarities(preference_tags, places))
}
