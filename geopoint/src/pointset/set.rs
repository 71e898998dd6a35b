//! Point collection with aggregate spatial queries.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::parser::{CsvError, CsvParser};
use crate::point::Point;

/// Error type for loading a point set from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Point table not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse point table: {0}")]
    Csv(#[from] CsvError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned when a query needs at least one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Cannot compute a bounding box over an empty point set")]
pub struct EmptyPointSet;

/// Axis-aligned bounding box in lon/lat space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// West edge.
    pub min_lon: f64,
    /// South edge.
    pub min_lat: f64,
    /// East edge.
    pub max_lon: f64,
    /// North edge.
    pub max_lat: f64,
}

impl BoundingBox {
    /// Returns the box as `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_lon, self.min_lat, self.max_lon, self.max_lat)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

/// Ordered, owning collection of validated points.
///
/// Insertion order matches source row order. Ids are not deduplicated.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wraps an already-validated sequence of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Loads a point set from a comma-delimited table on disk.
    ///
    /// The first line of the file names the columns; see
    /// [`CsvParser`](super::CsvParser) for the format. Rows with malformed
    /// numbers or out-of-range coordinates are skipped with a warning;
    /// structural problems (missing required columns, empty ids) abort
    /// the load. The file handle is released on every exit path.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a point set from a reader, with the same skip semantics as
    /// [`PointSet::from_csv`].
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, LoadError> {
        let mut points = Vec::new();
        for result in CsvParser::parse(reader) {
            match result {
                Ok(point) => points.push(point),
                Err(e) if e.is_skippable() => {
                    tracing::warn!("Skipping row: {}", e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(count = points.len(), "Loaded point set");

        Ok(Self::new(points))
    }

    /// Returns the number of points held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Smallest axis-aligned lon/lat rectangle containing every point.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPointSet`] when the set is empty, since min/max over
    /// nothing has no defined value.
    pub fn bbox(&self) -> Result<BoundingBox, EmptyPointSet> {
        let first = self.points.first().ok_or(EmptyPointSet)?;
        let mut bbox = BoundingBox {
            min_lon: first.lon(),
            min_lat: first.lat(),
            max_lon: first.lon(),
            max_lat: first.lat(),
        };

        for point in &self.points[1..] {
            bbox.min_lon = bbox.min_lon.min(point.lon());
            bbox.min_lat = bbox.min_lat.min(point.lat());
            bbox.max_lon = bbox.max_lon.max(point.lon());
            bbox.max_lat = bbox.max_lat.max(point.lat());
        }

        Ok(bbox)
    }

    /// Returns a new set holding the points whose tag equals `tag`.
    ///
    /// Matching is exact and case-sensitive, unlike [`Point::is_poi`];
    /// untagged points never match. Relative order is preserved, and the
    /// result owns its points.
    pub fn filter_by_tag(&self, tag: &str) -> PointSet {
        PointSet::new(
            self.points
                .iter()
                .filter(|p| p.tag() == Some(tag))
                .cloned()
                .collect(),
        )
    }

    /// Returns the number of points tagged as a point of interest, per
    /// [`Point::is_poi`].
    pub fn poi_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_poi()).count()
    }
}
