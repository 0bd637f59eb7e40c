//! Prelude module for common mapsketch types
//!
//! Re-exports the most commonly used types and functions for easy importing
//! with `use mapsketch::prelude::*;`

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

pub use crate::compose::{BoundsMapBuilder, GroupedPinMapBuilder, DEFAULT_GROUP_COLUMN};

pub use crate::data::{PointRow, PointTable};

pub use crate::style::{distinct_colors, Color, DISTINCT_COLORS};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
