//! Tile layers and feature groups.
//!
//! A [`TileLayer`] is a URL template plus the bookkeeping a slippy-map
//! widget needs to fetch imagery: attribution, subdomain rotation, zoom
//! range and opacity. Nothing here performs network I/O; fetching is the
//! consuming widget's job.

use crate::{core::geo::TileCoord, layers::Layer};
use serde::{Deserialize, Serialize};

const ESRI_WORLD_IMAGERY_URL: &str = "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

const STAMEN_TONER_LABELS_URL: &str =
    "https://stamen-tiles-{s}.a.ssl.fastly.net/toner-labels/{z}/{x}/{y}{r}.png";

const STAMEN_TONER_LINES_URL: &str =
    "https://stamen-tiles-{s}.a.ssl.fastly.net/toner-lines/{z}/{x}/{y}{r}.png";

const ESRI_ATTRIBUTION: &str = "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, \
     USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, \
     IGN, IGP, UPR-EGP, and the GIS User Community";

const STAMEN_ATTRIBUTION: &str = "Map tiles by <a href=\"http://stamen.com\">\
     Stamen Design</a>, <a href=\"http://creativecommons.org/licenses/by/3.0\">\
     CC BY 3.0</a> &mdash; Map data &copy; <a href=\"https://www.openstreetmap.org/copyright\">\
     OpenStreetMap</a> contributors";

/// A basemap or overlay layer backed by a slippy-map tile server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    name: String,
    url_template: String,
    attribution: String,
    subdomains: Vec<String>,
    min_zoom: u8,
    max_zoom: u8,
    opacity: f32,
}

impl TileLayer {
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            attribution: attribution.into(),
            subdomains: Vec::new(),
            min_zoom: 0,
            max_zoom: 18,
            opacity: 1.0,
        }
    }

    /// Subdomains substituted for `{s}` in the URL template.
    pub fn with_subdomains(mut self, subdomains: &[&str]) -> Self {
        self.subdomains = subdomains.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// ESRI World Imagery basemap. Note the `{y}/{x}` path order of the
    /// ArcGIS tile scheme.
    pub fn esri_world_imagery() -> Self {
        Self::new("ESRI World Imagery", ESRI_WORLD_IMAGERY_URL, ESRI_ATTRIBUTION)
    }

    /// Stamen toner place-name labels overlay.
    pub fn stamen_toner_labels() -> Self {
        Self::new("Stamen Toner Labels", STAMEN_TONER_LABELS_URL, STAMEN_ATTRIBUTION)
            .with_subdomains(&["a", "b", "c", "d"])
            .with_zoom_range(0, 20)
    }

    /// Stamen toner road/boundary lines overlay, drawn translucent so the
    /// imagery beneath stays readable.
    pub fn stamen_toner_lines() -> Self {
        Self::new("Stamen Toner Lines", STAMEN_TONER_LINES_URL, STAMEN_ATTRIBUTION)
            .with_subdomains(&["a", "b", "c", "d"])
            .with_zoom_range(0, 20)
            .with_opacity(0.4)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Build the fetch URL for `coord`.
    ///
    /// `{s}` rotates through the configured subdomains by `(x + y) % n`,
    /// `{r}` (retina suffix) resolves to the empty string.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
            self.subdomains[idx].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
            .replace("{r}", "")
    }
}

/// A named collection of layers toggled as one unit.
///
/// `overlay` distinguishes base imagery (false) from overlays (true) in a
/// widget's layer control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureGroup {
    name: String,
    overlay: bool,
    children: Vec<Layer>,
}

impl FeatureGroup {
    pub fn new(name: impl Into<String>, overlay: bool) -> Self {
        Self {
            name: name.into(),
            overlay,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: impl Into<Layer>) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_overlay(&self) -> bool {
        self.overlay
    }

    pub fn children(&self) -> &[Layer] {
        &self.children
    }
}

/// The hybrid basemap both composers start from: ESRI imagery with Stamen
/// toner labels and lines stacked on top, grouped under a single non-overlay
/// entry.
pub fn hybrid_basemap() -> FeatureGroup {
    let mut group = FeatureGroup::new("ESRI World Imagery", false);
    group.add_child(TileLayer::esri_world_imagery());
    group.add_child(TileLayer::stamen_toner_labels());
    group.add_child(TileLayer::stamen_toner_lines());
    group
}
