//! Row-to-point conversion.
//!
//! Bulk loaders hand each tabular row to [`Point::from_row`] as a
//! header-keyed string mapping. Failures are classified so a loader can
//! tell tolerable per-row data problems from structural ones.

use std::collections::HashMap;

use super::{Point, PointError};

/// Error returned when a tabular row cannot be converted into a [`Point`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    /// A required column is absent from the row.
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    /// A numeric column holds a value that does not parse as a float.
    #[error("Invalid numeric value '{value}' for column '{column}'")]
    InvalidNumber {
        column: &'static str,
        value: String,
    },
    /// The converted values failed point validation.
    #[error(transparent)]
    Point(#[from] PointError),
}

impl RowError {
    /// Whether a bulk loader may drop the offending row and continue.
    ///
    /// Malformed numbers and out-of-range coordinates are per-row data
    /// problems. A missing required column or an empty id means the input
    /// itself is malformed, and the load must abort.
    pub fn is_skippable(&self) -> bool {
        match self {
            RowError::InvalidNumber { .. } => true,
            RowError::Point(PointError::InvalidLongitude(_))
            | RowError::Point(PointError::InvalidLatitude(_)) => true,
            RowError::MissingColumn(_) | RowError::Point(PointError::EmptyId) => false,
        }
    }
}

impl Point {
    /// Creates a point from a header-keyed row mapping.
    ///
    /// Requires `id`, `lon`, and `lat` keys. `name` and `tag` are read via
    /// optional lookup, with empty values treated as absent. Delegates to
    /// [`Point::new`], so all constructor validation applies.
    pub fn from_row(row: &HashMap<String, String>) -> Result<Self, RowError> {
        let id = row.get("id").ok_or(RowError::MissingColumn("id"))?;
        let lon = parse_coord(row, "lon")?;
        let lat = parse_coord(row, "lat")?;
        let name = row.get("name").cloned();
        let tag = row.get("tag").cloned();

        Ok(Point::new(id.clone(), lon, lat, name, tag)?)
    }
}

fn parse_coord(row: &HashMap<String, String>, column: &'static str) -> Result<f64, RowError> {
    let raw = row.get(column).ok_or(RowError::MissingColumn(column))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RowError::InvalidNumber {
            column,
            value: raw.clone(),
        })
}
