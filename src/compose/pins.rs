//! Grouped-pin map composition.

use crate::{
    core::{map::MapView, zoom::degree_span_to_zoom},
    data::PointTable,
    layers::{tile::hybrid_basemap, vector::CircleMarker},
    style::distinct_colors,
    Result,
};
use log::debug;

/// Grouping column consulted when the caller does not name one.
pub const DEFAULT_GROUP_COLUMN: &str = "LandUse";

const PIN_RADIUS: f32 = 5.0;

/// Builds a map view with one circle marker per table row, colored by the
/// row's categorical label.
///
/// Labels are collected in first-seen order and zipped against the distinct
/// palette, so the first label encountered always gets palette entry 0, the
/// second entry 1, and so on. More distinct labels than palette entries
/// fails with [`crate::MapError::OutOfRange`].
///
/// By default a fresh view with the hybrid basemap is created, centered on
/// the mean position and zoomed to fit the latitude extent; pass an
/// existing view to [`onto`](Self::onto) to append markers to it instead,
/// composing several grouped layers on one map.
pub struct GroupedPinMapBuilder<'a> {
    table: &'a PointTable,
    group_column: String,
    base: Option<MapView>,
}

impl<'a> GroupedPinMapBuilder<'a> {
    pub fn new(table: &'a PointTable) -> Self {
        Self {
            table,
            group_column: DEFAULT_GROUP_COLUMN.to_string(),
            base: None,
        }
    }

    /// Name of the property used for grouping.
    pub fn group_column(mut self, column: impl Into<String>) -> Self {
        self.group_column = column.into();
        self
    }

    /// Draw onto an existing view instead of creating a fresh basemap.
    pub fn onto(mut self, map: MapView) -> Self {
        self.base = Some(map);
        self
    }

    pub fn build(self) -> Result<MapView> {
        // Label every row before any map is touched; a bad column or an
        // exhausted palette aborts the whole call.
        let mut labels: Vec<String> = Vec::new();
        let mut assignments: Vec<usize> = Vec::with_capacity(self.table.len());
        for row in self.table.rows() {
            let label = row.label(&self.group_column)?;
            let index = match labels.iter().position(|known| *known == label) {
                Some(index) => index,
                None => {
                    labels.push(label);
                    labels.len() - 1
                }
            };
            assignments.push(index);
        }
        let palette = distinct_colors(labels.len())?;

        let center = self.table.mean_position();
        let (lat_min, lat_max) = self.table.latitude_range();
        let zoom = degree_span_to_zoom(lat_min, lat_max, 0.0);
        debug!(
            "grouped pins: {} rows, {} groups, center ({:.4}, {:.4}), zoom {}",
            self.table.len(),
            labels.len(),
            center.lat,
            center.lng,
            zoom
        );

        let mut map = match self.base {
            Some(map) => map,
            None => {
                let mut map = MapView::new(center, zoom);
                map.add_layer(hybrid_basemap());
                map
            }
        };

        for (row, &index) in self.table.rows().iter().zip(&assignments) {
            map.add_layer(
                CircleMarker::new(row.position())
                    .with_radius(PIN_RADIUS)
                    .with_popup(labels[index].clone())
                    .with_color(palette[index]),
            );
        }

        map.enable_coordinate_popup();
        Ok(map)
    }
}
