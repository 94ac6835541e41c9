//! Base signal weights and their per-call resolution.
//!
//! [`SignalWeights`] holds the configured base weight of each signal.
//! [`SignalWeights::resolve`] turns it into the [`ActiveWeights`] of one call
//! by zeroing every signal whose triggering input is absent, and
//! [`ActiveWeights::combine`] blends component scores into a final score.

use std::fmt;

use seygo_core::{ComponentScores, UserPreferences};

use crate::WeightsError;

/// The five relevance signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// TF-IDF similarity with the preference tags.
    Content,
    /// Search keyword match.
    Keyword,
    /// Taxonomy category or group match.
    Taxonomy,
    /// Rating weighted by review volume.
    Popularity,
    /// Proximity to the user.
    Distance,
}

impl Signal {
    /// Every signal in combination order.
    pub const ALL: [Self; 5] = [
        Self::Content,
        Self::Keyword,
        Self::Taxonomy,
        Self::Popularity,
        Self::Distance,
    ];

    /// Lower-case signal name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Keyword => "keyword",
            Self::Taxonomy => "taxonomy",
            Self::Popularity => "popularity",
            Self::Distance => "distance",
        }
    }

    /// Return the score this signal contributed to `components`.
    #[must_use]
    pub const fn score(self, components: &ComponentScores) -> f64 {
        match self {
            Self::Content => components.content,
            Self::Keyword => components.keyword,
            Self::Taxonomy => components.taxonomy,
            Self::Popularity => components.popularity,
            Self::Distance => components.distance,
        }
    }

    /// Report whether `preferences` supply the input this signal needs.
    ///
    /// Popularity needs no user input and is always triggered.
    #[must_use]
    pub fn is_triggered(self, preferences: &UserPreferences) -> bool {
        match self {
            Self::Content => !preferences.preference_tags().is_empty(),
            Self::Keyword => preferences.search_keyword().is_some(),
            Self::Taxonomy => preferences.has_taxonomy_selection(),
            Self::Popularity => true,
            Self::Distance => preferences.location().is_some(),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configured base weight of each signal.
///
/// # Examples
/// ```
/// use seygo_scorer::{Signal, SignalWeights};
///
/// let weights = SignalWeights::default().with(Signal::Distance, 0.5);
/// assert_eq!(weights.get(Signal::Distance), 0.5);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWeights {
    /// Weight of the content signal.
    pub content: f64,
    /// Weight of the keyword signal.
    pub keyword: f64,
    /// Weight of the taxonomy signal.
    pub taxonomy: f64,
    /// Weight of the popularity signal.
    pub popularity: f64,
    /// Weight of the distance signal.
    pub distance: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            content: 0.35,
            keyword: 0.25,
            taxonomy: 0.35,
            popularity: 0.20,
            distance: 0.20,
        }
    }
}

impl SignalWeights {
    /// Weights with every signal set to zero.
    pub const ZERO: Self = Self {
        content: 0.0,
        keyword: 0.0,
        taxonomy: 0.0,
        popularity: 0.0,
        distance: 0.0,
    };

    /// Return the weight of `signal`.
    #[must_use]
    pub const fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Content => self.content,
            Signal::Keyword => self.keyword,
            Signal::Taxonomy => self.taxonomy,
            Signal::Popularity => self.popularity,
            Signal::Distance => self.distance,
        }
    }

    /// Replace the weight of `signal`.
    #[must_use]
    pub const fn with(mut self, signal: Signal, weight: f64) -> Self {
        match signal {
            Signal::Content => self.content = weight,
            Signal::Keyword => self.keyword = weight,
            Signal::Taxonomy => self.taxonomy = weight,
            Signal::Popularity => self.popularity = weight,
            Signal::Distance => self.distance = weight,
        }
        self
    }

    /// Validate the weights and return a copy.
    ///
    /// An all-zero configuration is accepted; it ranks every candidate at
    /// zero and keeps input order.
    ///
    /// # Errors
    /// Returns [`WeightsError`] naming the first weight that is not finite or
    /// is negative.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for signal in Signal::ALL {
            let value = self.get(signal);
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { signal, value });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { signal, value });
            }
        }
        Ok(self)
    }

    /// Resolve the weights active for one call.
    ///
    /// Signals whose input is absent from `preferences` get a zero weight.
    #[must_use]
    pub fn resolve(&self, preferences: &UserPreferences) -> ActiveWeights {
        let weights = Signal::ALL
            .into_iter()
            .filter(|signal| !signal.is_triggered(preferences))
            .fold(*self, |weights, signal| weights.with(signal, 0.0));
        ActiveWeights { weights }
    }
}

/// Weights in effect for a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveWeights {
    weights: SignalWeights,
}

impl ActiveWeights {
    /// Return the active weight of `signal`.
    #[must_use]
    pub const fn get(&self, signal: Signal) -> f64 {
        self.weights.get(signal)
    }

    /// Report whether `signal` contributes to the final score.
    #[must_use]
    pub fn is_active(&self, signal: Signal) -> bool {
        self.get(signal) > 0.0
    }

    /// Sum of the active weights.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "weights are summed")]
    pub fn total(&self) -> f64 {
        Signal::ALL.into_iter().map(|signal| self.get(signal)).sum()
    }

    /// Blend component scores into a final score in `0.0..=1.0`.
    ///
    /// The weighted sum is divided by [`ActiveWeights::total`], or by `1.0`
    /// when no weight is active.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the final score is a weighted average"
    )]
    pub fn combine(&self, components: &ComponentScores) -> f64 {
        let total = self.total();
        let divisor = if total == 0.0 { 1.0 } else { total };
        let weighted: f64 = Signal::ALL
            .into_iter()
            .map(|signal| self.get(signal) * signal.score(components))
            .sum();
        sanitise(weighted / divisor)
    }
}

impl fmt::Display for ActiveWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for signal in Signal::ALL {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{signal}={}", self.get(signal))?;
        }
        Ok(())
    }
}

/// Clamp a score into `0.0..=1.0`, mapping non-finite values to zero.
pub(crate) const fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
