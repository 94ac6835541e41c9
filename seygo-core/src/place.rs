//! Candidate places and the raw records they are built from.

use geo::Coord;
use thiserror::Error;

use crate::{is_valid_coordinate, taxonomy::classify};

/// A place eligible for recommendation.
///
/// Values are normally produced from a [`PlaceRecord`] so that coordinates,
/// ratings and taxonomy fields are validated and populated.
///
/// # Examples
/// ```
/// use seygo_core::{PlaceFeature, PlaceRecord};
///
/// # fn main() -> Result<(), seygo_core::PlaceFeatureError> {
/// let record = PlaceRecord::new("p1", "Mirissa Beach", 5.94, 80.45)
///     .with_category("beach")
///     .with_rating(4.7, 812);
/// let place = PlaceFeature::try_from(record)?;
/// assert_eq!(place.taxonomy_category, "Beaches");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceFeature {
    /// Identifier, unique within one recommendation call.
    #[cfg_attr(feature = "serde", serde(alias = "place_id"))]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text primary category.
    pub category: String,
    /// Free-text labels in their original order.
    pub tags: Vec<String>,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Average rating, never negative.
    pub avg_rating: f64,
    /// Number of reviews behind [`PlaceFeature::avg_rating`].
    pub review_count: u32,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Taxonomy category assigned by the classifier.
    pub taxonomy_category: String,
    /// Taxonomy group owning [`PlaceFeature::taxonomy_category`].
    pub taxonomy_group: String,
}

/// Errors returned when validating a [`PlaceFeature`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaceFeatureError {
    /// The identifier was empty or whitespace.
    #[error("place id must not be blank")]
    MissingId,
    /// Coordinates were not finite or fell outside the valid range.
    #[error("place {id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        /// Identifier of the offending place.
        id: String,
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },
    /// The rating was not finite or was negative.
    #[error("place {id} has invalid average rating {rating}")]
    InvalidRating {
        /// Identifier of the offending place.
        id: String,
        /// Supplied rating.
        rating: f64,
    },
}

impl PlaceFeature {
    /// Return the place position as a `geo` coordinate (`x = longitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Check the invariants engines rely on.
    ///
    /// # Errors
    /// Returns [`PlaceFeatureError`] for a blank id, invalid coordinates or a
    /// negative or non-finite rating.
    pub fn validate(&self) -> Result<(), PlaceFeatureError> {
        if self.id.trim().is_empty() {
            return Err(PlaceFeatureError::MissingId);
        }
        if !is_valid_coordinate(self.latitude, self.longitude) {
            return Err(PlaceFeatureError::InvalidCoordinates {
                id: self.id.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !self.avg_rating.is_finite() || self.avg_rating < 0.0 {
            return Err(PlaceFeatureError::InvalidRating {
                id: self.id.clone(),
                rating: self.avg_rating,
            });
        }
        Ok(())
    }
}

/// A place row as supplied by an external source.
///
/// Taxonomy fields are optional; missing ones are inferred with
/// [`classify`](crate::classify) during conversion into a [`PlaceFeature`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceRecord {
    /// Identifier of the place.
    #[cfg_attr(feature = "serde", serde(alias = "place_id"))]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text primary category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Free-text labels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Average rating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_rating: f64,
    /// Number of reviews.
    #[cfg_attr(feature = "serde", serde(default))]
    pub review_count: u32,
    /// Optional description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Pre-assigned taxonomy category, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub taxonomy_category: Option<String>,
    /// Pre-assigned taxonomy group, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub taxonomy_group: Option<String>,
}

impl PlaceRecord {
    /// Start a record with the mandatory fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            ..Self::default()
        }
    }

    /// Set the free-text category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Replace the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the average rating and review count.
    #[must_use]
    pub fn with_rating(mut self, avg_rating: f64, review_count: u32) -> Self {
        self.avg_rating = avg_rating;
        self.review_count = review_count;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pin the taxonomy instead of inferring it.
    #[must_use]
    pub fn with_taxonomy(mut self, category: impl Into<String>, group: impl Into<String>) -> Self {
        self.taxonomy_category = Some(category.into());
        self.taxonomy_group = Some(group.into());
        self
    }
}

impl TryFrom<PlaceRecord> for PlaceFeature {
    type Error = PlaceFeatureError;

    fn try_from(record: PlaceRecord) -> Result<Self, Self::Error> {
        let pinned = record
            .taxonomy_category
            .filter(|category| !category.trim().is_empty())
            .zip(
                record
                    .taxonomy_group
                    .filter(|group| !group.trim().is_empty()),
            );
        let (taxonomy_category, taxonomy_group) = match pinned {
            Some(pair) => pair,
            None => {
                let inferred = classify(
                    &record.name,
                    &record.category,
                    &record.tags,
                    record.description.as_deref(),
                );
                (inferred.category.to_owned(), inferred.group.to_owned())
            }
        };
        let place = Self {
            id: record.id,
            name: record.name,
            category: record.category,
            tags: record.tags,
            latitude: record.latitude,
            longitude: record.longitude,
            avg_rating: record.avg_rating,
            review_count: record.review_count,
            description: record.description,
            taxonomy_category,
            taxonomy_group,
        };
        place.validate()?;
        Ok(place)
    }
}
