//! Caller preferences for a single recommendation call.
//!
//! [`UserPreferences`] is the validated, engine-facing form. Selector strings
//! are trimmed on the way in and blank values count as absent, so engines can
//! treat `Some(..)` and non-empty lists as "signal requested".
//! [`RecommendationRequest`] mirrors the wire shape accepted by callers and
//! converts into preferences with [`TryFrom`].

use std::num::NonZeroUsize;

use geo::Coord;
use log::warn;
use thiserror::Error;

use crate::is_valid_coordinate;

/// Search radius applied when callers do not supply one.
pub const DEFAULT_RADIUS_KM: f64 = 15.0;

/// Result cap applied when callers do not supply one.
pub const DEFAULT_TOP_N: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(top_n) => top_n,
    None => NonZeroUsize::MIN,
};

/// Errors raised when preferences are unusable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PreferencesError {
    /// Only one of latitude and longitude was supplied.
    #[error("latitude and longitude must be supplied together")]
    PartialLocation,
    /// The user location was not finite or out of range.
    #[error("user location ({latitude}, {longitude}) is invalid")]
    InvalidLocation {
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },
    /// The radius was not a finite positive number.
    #[error("radius must be a finite positive number of kilometres, got {radius_km}")]
    InvalidRadius {
        /// Supplied radius.
        radius_km: f64,
    },
}

/// Preferences steering one recommendation call.
///
/// # Examples
/// ```
/// use seygo_core::UserPreferences;
///
/// let preferences = UserPreferences::new()
///     .with_preference_tags(["surf", "beach"])
///     .with_location(6.01, 80.24)
///     .with_radius_km(25.0)
///     .with_keyword("  Surf ");
/// assert_eq!(preferences.search_keyword(), Some("Surf"));
/// assert!(preferences.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    preference_tags: Vec<String>,
    selected_categories: Vec<String>,
    selected_group: Option<String>,
    location: Option<Coord<f64>>,
    search_keyword: Option<String>,
    radius_km: f64,
    top_n: NonZeroUsize,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preference_tags: Vec::new(),
            selected_categories: Vec::new(),
            selected_group: None,
            location: None,
            search_keyword: None,
            radius_km: DEFAULT_RADIUS_KM,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl UserPreferences {
    /// Preferences with no signals requested and default radius and cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free-text preference tags.
    #[must_use]
    pub fn with_preference_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preference_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the selected taxonomy categories. Blank entries are dropped.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_categories = categories
            .into_iter()
            .filter_map(|category| non_blank(category.into()))
            .collect();
        self
    }

    /// Select a taxonomy group. A blank name clears the selection.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.selected_group = non_blank(group.into());
        self
    }

    /// Set the user location in degrees.
    #[must_use]
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(Coord {
            x: longitude,
            y: latitude,
        });
        self
    }

    /// Set the search keyword. A blank keyword clears it.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.search_keyword = non_blank(keyword.into());
        self
    }

    /// Set the search radius in kilometres.
    #[must_use]
    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Set the result cap. Zero is raised to one.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = NonZeroUsize::new(top_n).unwrap_or(NonZeroUsize::MIN);
        self
    }

    /// Free-text tags describing what the user likes.
    #[must_use]
    pub fn preference_tags(&self) -> &[String] {
        &self.preference_tags
    }

    /// Selected taxonomy category names as supplied (trimmed).
    #[must_use]
    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    /// Selected taxonomy group, if any.
    #[must_use]
    pub fn selected_group(&self) -> Option<&str> {
        self.selected_group.as_deref()
    }

    /// User location with `x = longitude`, if supplied.
    #[must_use]
    pub const fn location(&self) -> Option<Coord<f64>> {
        self.location
    }

    /// Search keyword, if any.
    #[must_use]
    pub fn search_keyword(&self) -> Option<&str> {
        self.search_keyword.as_deref()
    }

    /// Search radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Maximum number of results.
    #[must_use]
    pub const fn top_n(&self) -> NonZeroUsize {
        self.top_n
    }

    /// Report whether any taxonomy category or group was selected.
    #[must_use]
    pub fn has_taxonomy_selection(&self) -> bool {
        !self.selected_categories.is_empty() || self.selected_group.is_some()
    }

    /// Check the location and radius.
    ///
    /// # Errors
    /// Returns [`PreferencesError`] when the location is invalid or the radius
    /// is not a finite positive number.
    pub fn validate(&self) -> Result<(), PreferencesError> {
        if let Some(location) = self.location
            && !is_valid_coordinate(location.y, location.x)
        {
            return Err(PreferencesError::InvalidLocation {
                latitude: location.y,
                longitude: location.x,
            });
        }
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(PreferencesError::InvalidRadius {
                radius_km: self.radius_km,
            });
        }
        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}

const fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "the default cap is a small constant"
)]
const fn default_top_n() -> i64 {
    DEFAULT_TOP_N.get() as i64
}

/// Wire form of a recommendation request.
///
/// Optional fields default to "not requested"; `radius_km` defaults to
/// [`DEFAULT_RADIUS_KM`] and `top_n` to [`DEFAULT_TOP_N`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationRequest {
    /// Free-text tags describing what the user likes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preference_tags: Vec<String>,
    /// Taxonomy categories to restrict to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected_categories: Vec<String>,
    /// Taxonomy group to restrict to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected_group: Option<String>,
    /// User latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    /// User longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
    /// Free-text search keyword.
    #[cfg_attr(feature = "serde", serde(default))]
    pub search_keyword: Option<String>,
    /// Search radius in kilometres.
    #[cfg_attr(feature = "serde", serde(default = "default_radius_km"))]
    pub radius_km: f64,
    /// Maximum number of results; values below one are raised to one.
    #[cfg_attr(feature = "serde", serde(default = "default_top_n"))]
    pub top_n: i64,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            preference_tags: Vec::new(),
            selected_categories: Vec::new(),
            selected_group: None,
            latitude: None,
            longitude: None,
            search_keyword: None,
            radius_km: default_radius_km(),
            top_n: default_top_n(),
        }
    }
}

impl TryFrom<RecommendationRequest> for UserPreferences {
    type Error = PreferencesError;

    fn try_from(request: RecommendationRequest) -> Result<Self, Self::Error> {
        let top_n = if request.top_n < 1 {
            warn!("top_n {} is below one; clamping to 1", request.top_n);
            1
        } else {
            usize::try_from(request.top_n).unwrap_or(usize::MAX)
        };

        let mut preferences = Self::new()
            .with_preference_tags(request.preference_tags)
            .with_categories(request.selected_categories)
            .with_radius_km(request.radius_km)
            .with_top_n(top_n);
        if let Some(group) = request.selected_group {
            preferences = preferences.with_group(group);
        }
        if let Some(keyword) = request.search_keyword {
            preferences = preferences.with_keyword(keyword);
        }
        preferences = match (request.latitude, request.longitude) {
            (Some(latitude), Some(longitude)) => preferences.with_location(latitude, longitude),
            (None, None) => preferences,
            _ => return Err(PreferencesError::PartialLocation),
        };

        preferences.validate()?;
        Ok(preferences)
    }
}
