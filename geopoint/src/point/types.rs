//! Point type definitions.

use std::fmt;

use super::euclidean;

/// Valid longitude range in decimal degrees.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Valid latitude range in decimal degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Error returned when point validation fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointError {
    /// Id is missing or empty.
    #[error("Point id must be a non-empty string")]
    EmptyId,
    /// Longitude is outside the valid range (-180 to 180).
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),
    /// Latitude is outside the valid range (-90 to 90).
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),
}

/// A validated geographic point with identity and optional metadata.
///
/// Every `Point` satisfies the coordinate range constraints; construction
/// rejects anything else, and the fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: String,
    lon: f64,
    lat: f64,
    name: Option<String>,
    tag: Option<String>,
}

impl Point {
    /// Creates a validated point.
    ///
    /// `name` and `tag` are optional metadata; empty strings are stored as
    /// absent so no code path can observe `Some("")`.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::EmptyId`] for an empty id,
    /// [`PointError::InvalidLongitude`] or [`PointError::InvalidLatitude`]
    /// for out-of-range coordinates.
    pub fn new(
        id: impl Into<String>,
        lon: f64,
        lat: f64,
        name: Option<String>,
        tag: Option<String>,
    ) -> Result<Self, PointError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PointError::EmptyId);
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(PointError::InvalidLongitude(lon));
        }
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(PointError::InvalidLatitude(lat));
        }

        Ok(Self {
            id,
            lon,
            lat,
            name: normalize(name),
            tag: normalize(tag),
        })
    }

    /// Identifier (e.g., "sensor-17").
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Human-readable label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Category tag (e.g., "poi", "sensor", "gate"), if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns the coordinates as a `(lon, lat)` pair.
    pub fn to_tuple(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// Distance to another point.
    ///
    /// TODO(units): delegates to [`euclidean`] on the raw lon/lat values,
    /// so the result is in degree-space units rather than meters;
    /// [`super::haversine_m`] is the geodesic variant. Downstream
    /// consumers depend on the planar result, so the delegation stays
    /// until they migrate.
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean(self.lon, self.lat, other.lon, other.lat)
    }

    /// Whether this point is tagged as a point of interest.
    ///
    /// The tag is whitespace-trimmed and compared case-insensitively, so
    /// `"POI"` and `" Poi "` qualify. An untagged point is never a POI.
    /// Note that [`crate::pointset::PointSet::filter_by_tag`] matches
    /// exactly instead.
    pub fn is_poi(&self) -> bool {
        self.tag
            .as_deref()
            .unwrap_or("")
            .trim()
            .eq_ignore_ascii_case("poi")
    }
}

impl fmt::Display for Point {
    /// Diagnostic form showing all fields. Not a serialization format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point(id={:?}, lon={}, lat={}, name={:?}, tag={:?})",
            self.id, self.lon, self.lat, self.name, self.tag
        )
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
