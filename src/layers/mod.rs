pub mod tile;
pub mod vector;

use serde::{Deserialize, Serialize};

use tile::{FeatureGroup, TileLayer};
use vector::{CircleMarker, Polyline};

/// The closed set of layer kinds a [`crate::MapView`] can carry.
///
/// The composition surface is fixed, so a plain enum replaces dynamic
/// dispatch: consumers match on the kind they know how to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Layer {
    Tile(TileLayer),
    Group(FeatureGroup),
    Polyline(Polyline),
    CircleMarker(CircleMarker),
}

impl Layer {
    pub fn as_tile(&self) -> Option<&TileLayer> {
        match self {
            Layer::Tile(layer) => Some(layer),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&FeatureGroup> {
        match self {
            Layer::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Layer::Polyline(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_circle_marker(&self) -> Option<&CircleMarker> {
        match self {
            Layer::CircleMarker(marker) => Some(marker),
            _ => None,
        }
    }
}

impl From<TileLayer> for Layer {
    fn from(layer: TileLayer) -> Self {
        Layer::Tile(layer)
    }
}

impl From<FeatureGroup> for Layer {
    fn from(group: FeatureGroup) -> Self {
        Layer::Group(group)
    }
}

impl From<Polyline> for Layer {
    fn from(line: Polyline) -> Self {
        Layer::Polyline(line)
    }
}

impl From<CircleMarker> for Layer {
    fn from(marker: CircleMarker) -> Self {
        Layer::CircleMarker(marker)
    }
}
