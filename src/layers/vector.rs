use crate::{
    core::geo::{LatLng, LatLngBounds},
    style::Color,
};
use serde::{Deserialize, Serialize};

/// Style for point features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Fill color
    pub fill_color: Color,
    /// Border color
    pub stroke_color: Color,
    /// Border width
    pub stroke_width: f32,
    /// Point radius
    pub radius: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            fill_color: Color::RED,
            stroke_color: Color::WHITE,
            stroke_width: 2.0,
            radius: 5.0,
            opacity: 1.0,
        }
    }
}

/// Style for line features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width
    pub width: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0, 0, 255),
            width: 2.0,
            opacity: 1.0,
        }
    }
}

/// A line string drawn over the basemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<LatLng>,
    style: LineStyle,
}

impl Polyline {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self {
            points,
            style: LineStyle::default(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.style.width = width;
        self
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// True when the line ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }

    /// Get the bounding box of this feature
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.points)
    }
}

/// A fixed-radius circular marker with an optional popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    position: LatLng,
    popup: Option<String>,
    style: PointStyle,
}

impl CircleMarker {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            popup: None,
            style: PointStyle::default(),
        }
    }

    pub fn with_popup(mut self, text: impl Into<String>) -> Self {
        self.popup = Some(text.into());
        self
    }

    /// Colors both fill and stroke, the way a flat categorical pin is drawn.
    pub fn with_color(mut self, color: Color) -> Self {
        self.style.fill_color = color;
        self.style.stroke_color = color;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.style.radius = radius;
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    pub fn style(&self) -> &PointStyle {
        &self.style
    }

    pub fn bounds(&self) -> LatLngBounds {
        LatLngBounds::new(self.position, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_bounds() {
        let line = Polyline::new(vec![
            LatLng::new(40.0, -74.0),
            LatLng::new(41.0, -73.0),
            LatLng::new(40.5, -73.5),
        ]);

        let bounds = line.bounds().unwrap();
        assert_eq!(bounds.south_west.lat, 40.0);
        assert_eq!(bounds.north_east.lat, 41.0);
        assert_eq!(bounds.south_west.lng, -74.0);
        assert_eq!(bounds.north_east.lng, -73.0);

        assert!(Polyline::new(Vec::new()).bounds().is_none());
    }

    #[test]
    fn test_polyline_closure() {
        let open = Polyline::new(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]);
        assert!(!open.is_closed());

        let closed = Polyline::new(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(0.0, 0.0),
        ]);
        assert!(closed.is_closed());
    }

    #[test]
    fn test_circle_marker_builder() {
        let marker = CircleMarker::new(LatLng::new(40.7128, -74.0060))
            .with_radius(5.0)
            .with_popup("Residential")
            .with_color(Color::rgb(0x1C, 0xE6, 0xFF));

        assert_eq!(marker.popup(), Some("Residential"));
        assert_eq!(marker.style().radius, 5.0);
        assert_eq!(marker.style().fill_color, marker.style().stroke_color);
        assert_eq!(marker.bounds().center(), marker.position());
    }
}
