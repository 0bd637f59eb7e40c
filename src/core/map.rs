use crate::{
    core::geo::LatLng,
    layers::{
        vector::{CircleMarker, Polyline},
        Layer,
    },
};
use serde::{Deserialize, Serialize};

/// An in-memory, composable map view.
///
/// A view is a center, an integer zoom level and an ordered stack of
/// layers. It carries no rendering state of its own: consumers walk the
/// layer stack and draw it with whatever widget they have. Layers are drawn
/// in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    center: LatLng,
    zoom: i32,
    layers: Vec<Layer>,
    coordinate_popup: bool,
}

impl MapView {
    /// Creates an empty view centered on `center` at `zoom`.
    pub fn new(center: LatLng, zoom: i32) -> Self {
        Self {
            center,
            zoom,
            layers: Vec::new(),
            coordinate_popup: false,
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    /// Re-centers the view without touching the layer stack.
    pub fn set_view(&mut self, center: LatLng, zoom: i32) {
        self.center = center;
        self.zoom = zoom;
    }

    /// Appends a layer to the top of the stack.
    pub fn add_layer(&mut self, layer: impl Into<Layer>) {
        self.layers.push(layer.into());
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Whether a click-to-reveal coordinate popup is attached to the view.
    pub fn has_coordinate_popup(&self) -> bool {
        self.coordinate_popup
    }

    /// Attaches a click-to-reveal coordinate popup behavior.
    pub fn enable_coordinate_popup(&mut self) {
        self.coordinate_popup = true;
    }

    /// Depth-first walk over the layer stack, descending into groups.
    pub fn walk_layers(&self) -> impl Iterator<Item = &Layer> {
        let mut flat = Vec::new();
        let mut stack: Vec<&Layer> = self.layers.iter().rev().collect();
        while let Some(layer) = stack.pop() {
            flat.push(layer);
            if let Layer::Group(group) = layer {
                stack.extend(group.children().iter().rev());
            }
        }
        flat.into_iter()
    }

    /// All polylines in the view, including those nested in groups.
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.walk_layers().filter_map(Layer::as_polyline)
    }

    /// All circle markers in the view, including those nested in groups.
    pub fn circle_markers(&self) -> impl Iterator<Item = &CircleMarker> {
        self.walk_layers().filter_map(Layer::as_circle_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::tile::{FeatureGroup, TileLayer};

    #[test]
    fn test_map_view_creation() {
        let map = MapView::new(LatLng::new(37.7749, -122.4194), 12);
        assert_eq!(map.zoom(), 12);
        assert_eq!(map.layer_count(), 0);
        assert!(!map.has_coordinate_popup());
    }

    #[test]
    fn test_set_view_keeps_layers() {
        let mut map = MapView::new(LatLng::default(), 0);
        map.add_layer(TileLayer::esri_world_imagery());
        map.set_view(LatLng::new(51.5074, -0.1278), 10);

        assert_eq!(map.zoom(), 10);
        assert_eq!(map.layer_count(), 1);
    }

    #[test]
    fn test_walk_layers_descends_into_groups() {
        let mut group = FeatureGroup::new("base", false);
        group.add_child(TileLayer::esri_world_imagery());
        group.add_child(TileLayer::stamen_toner_labels());

        let mut map = MapView::new(LatLng::default(), 3);
        map.add_layer(group);
        map.add_layer(Polyline::new(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 1.0),
        ]));

        assert_eq!(map.layer_count(), 2);
        // group + 2 tiles + polyline
        assert_eq!(map.walk_layers().count(), 4);
        assert_eq!(map.polylines().count(), 1);
        assert_eq!(map.circle_markers().count(), 0);
    }
}
