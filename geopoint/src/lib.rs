//! GeoPoint - geographic point modeling and aggregate spatial queries.
//!
//! This library models validated geographic points loaded from tabular
//! input and derives simple aggregates over a collection of them: counts,
//! bounding boxes, and tag-based filters. Everything is single-threaded,
//! synchronous, and in-memory.
//!
//! # Example
//!
//! ```
//! use geopoint::pointset::PointSet;
//!
//! let set = PointSet::from_reader("id,lon,lat,tag\na,121.0,14.6,poi\n".as_bytes())?;
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.poi_count(), 1);
//! # Ok::<(), geopoint::pointset::LoadError>(())
//! ```

pub mod logging;
pub mod point;
pub mod pointset;

/// Version of the geopoint library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
