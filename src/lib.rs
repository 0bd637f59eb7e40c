//! # mapsketch
//!
//! Small helpers for composing interactive web-map views in memory: fit a
//! zoom level to latitude/longitude bounds, outline the bounds on a hybrid
//! imagery basemap (optionally with a coordinate grid), and drop one
//! color-coded circle marker per row of a labeled point table.
//!
//! The crate builds [`MapView`] values (a center, an integer zoom level and
//! an ordered stack of layers) and leaves rendering entirely to whichever
//! widget consumes them. Every public type serializes with `serde`.

pub mod compose;
pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod style;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, TileCoord},
    map::MapView,
    zoom::{degree_span_to_zoom, zoom_for_bounds},
};

pub use crate::layers::{
    tile::{hybrid_basemap, FeatureGroup, TileLayer},
    vector::{CircleMarker, LineStyle, PointStyle, Polyline},
    Layer,
};

pub use crate::compose::{BoundsMapBuilder, GroupedPinMapBuilder};

pub use crate::data::{PointRow, PointTable};

pub use crate::style::{distinct_colors, Color, DISTINCT_COLORS};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    #[error("requested {requested} distinct colors but only {max} are available")]
    OutOfRange { requested: usize, max: usize },

    #[error("column `{0}` is not present in every row of the point table")]
    MissingColumn(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

/// Error type alias for convenience
pub type Error = MapError;
