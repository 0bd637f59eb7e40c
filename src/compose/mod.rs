//! The two map composers: bounding-box views and grouped-pin views.

pub mod bounds;
pub mod pins;

pub use bounds::BoundsMapBuilder;
pub use pins::{GroupedPinMapBuilder, DEFAULT_GROUP_COLUMN};
