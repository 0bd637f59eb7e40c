//! Bounding-box map composition.

use crate::{
    core::{geo::LatLng, map::MapView, zoom::zoom_for_bounds},
    layers::{tile::hybrid_basemap, vector::Polyline},
    style::Color,
    MapError, Result,
};
use log::debug;

/// Fit margin for the bounding rectangle. Negative: the effective extent is
/// halved, so the viewport overzooms by roughly one level and the rectangle
/// fills more of it. Empirical, uncapped.
const FIT_MARGIN: f64 = -0.5;

/// Caller-invisible zoom adjustment applied after the per-axis minimum.
const ZOOM_BIAS: i32 = 0;

const GRID_OPACITY: f32 = 0.3;
const OUTLINE_OPACITY: f32 = 0.8;

/// Builds a map view outlining a latitude/longitude bounding box on the
/// hybrid basemap, optionally overlaid with a coordinate grid.
///
/// Latitude and longitude bounds are required; [`build`](Self::build) fails
/// with [`MapError::MissingArgument`] before any map object is constructed
/// when either is absent. Bounds may be given in either order and are not
/// range-checked.
#[derive(Debug, Clone, Default)]
pub struct BoundsMapBuilder {
    latitude: Option<(f64, f64)>,
    longitude: Option<(f64, f64)>,
    resolution: Option<(f64, f64)>,
}

impl BoundsMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latitude bounds as `(min, max)`.
    pub fn latitude(mut self, bounds: (f64, f64)) -> Self {
        self.latitude = Some(bounds);
        self
    }

    /// Longitude bounds as `(min, max)`.
    pub fn longitude(mut self, bounds: (f64, f64)) -> Self {
        self.longitude = Some(bounds);
        self
    }

    /// Grid line spacing as `(lat_step, lon_step)` degrees. Without it no
    /// grid is drawn. Steps are taken by absolute value and sampling starts
    /// at the minimum corner of the bounds.
    pub fn resolution(mut self, steps: (f64, f64)) -> Self {
        self.resolution = Some(steps);
        self
    }

    pub fn build(self) -> Result<MapView> {
        let latitude = self.latitude.ok_or(MapError::MissingArgument("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(MapError::MissingArgument("longitude"))?;

        let zoom = zoom_for_bounds(latitude, longitude, FIT_MARGIN, ZOOM_BIAS);
        let center = LatLng::new(midpoint(latitude), midpoint(longitude));
        debug!(
            "bounds map: center ({:.4}, {:.4}), zoom {}",
            center.lat, center.lng, zoom
        );

        let mut map = MapView::new(center, zoom);
        map.add_layer(hybrid_basemap());

        if let Some((lat_step, lon_step)) = self.resolution {
            for lng in arange(longitude.0, longitude.1, lon_step.abs()) {
                map.add_layer(
                    Polyline::new(vec![
                        LatLng::new(latitude.0, lng),
                        LatLng::new(latitude.1, lng),
                    ])
                    .with_color(Color::WHITE)
                    .with_opacity(GRID_OPACITY),
                );
            }
            for lat in arange(latitude.0, latitude.1, lat_step.abs()) {
                map.add_layer(
                    Polyline::new(vec![
                        LatLng::new(lat, longitude.0),
                        LatLng::new(lat, longitude.1),
                    ])
                    .with_color(Color::WHITE)
                    .with_opacity(GRID_OPACITY),
                );
            }
        }

        map.add_layer(
            Polyline::new(vec![
                LatLng::new(latitude.0, longitude.0),
                LatLng::new(latitude.0, longitude.1),
                LatLng::new(latitude.1, longitude.1),
                LatLng::new(latitude.1, longitude.0),
                LatLng::new(latitude.0, longitude.0),
            ])
            .with_color(Color::RED)
            .with_opacity(OUTLINE_OPACITY),
        );

        map.enable_coordinate_popup();
        Ok(map)
    }
}

fn midpoint(bounds: (f64, f64)) -> f64 {
    (bounds.0 + bounds.1) / 2.0
}

/// Half-open fixed-step sampling of `[start, stop)`, index-multiplied so
/// roundoff does not accumulate.
fn arange(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && stop > start {
        ((stop - start) / step).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |i| start + i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arange_half_open() {
        let samples: Vec<f64> = arange(7.0, 8.0, 0.25).collect();
        assert_eq!(samples, vec![7.0, 7.25, 7.5, 7.75]);
    }

    #[test]
    fn test_arange_degenerate() {
        assert_eq!(arange(1.0, 1.0, 0.5).count(), 0);
        assert_eq!(arange(2.0, 1.0, 0.5).count(), 0);
        assert_eq!(arange(0.0, 1.0, 0.0).count(), 0);
    }

    #[test]
    fn test_missing_bounds() {
        let err = BoundsMapBuilder::new()
            .longitude((30.0, 32.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, MapError::MissingArgument("latitude")));

        let err = BoundsMapBuilder::new()
            .latitude((7.0, 8.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, MapError::MissingArgument("longitude")));
    }
}
