//! Point collections and aggregate spatial queries.
//!
//! A [`PointSet`] is built either from an in-memory sequence or by bulk
//! loading a comma-delimited table, keeping only the rows that validate.
//! It answers simple aggregate queries: size, bounding box, tag filters,
//! and POI counting.
//!
//! # Example
//!
//! ```ignore
//! use geopoint::pointset::PointSet;
//!
//! let set = PointSet::from_csv("points.csv")?;
//! println!("{} points in {}", set.len(), set.bbox()?);
//! ```

mod parser;
mod set;

pub use parser::{CsvError, CsvParser};
pub use set::{BoundingBox, EmptyPointSet, LoadError, PointSet};
