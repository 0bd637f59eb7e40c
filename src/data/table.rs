//! Labeled point data consumed by the grouped-pin composer.

use crate::prelude::HashMap;
use crate::{MapError, Result};
use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One located record with a free-form property bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointRow {
    pub latitude: f64,
    pub longitude: f64,
    properties: HashMap<String, Value>,
}

impl PointRow {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            properties: HashMap::default(),
        }
    }

    /// Add a property to this row
    pub fn with_property<V: Into<Value>>(mut self, key: impl Into<String>, value: V) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get a property value
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// The row's categorical label under `column`.
    ///
    /// String values are used verbatim; anything else falls back to its
    /// compact JSON rendering.
    pub fn label(&self, column: &str) -> Result<String> {
        match self.properties.get(column) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(MapError::MissingColumn(column.to_string())),
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// An ordered collection of [`PointRow`]s.
///
/// Reductions are not guarded: an empty table yields NaN means and extremes
/// rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointTable {
    rows: Vec<PointRow>,
}

impl PointTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: PointRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[PointRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean latitude/longitude over all rows.
    pub fn mean_position(&self) -> LatLng {
        let n = self.rows.len() as f64;
        let (lat_sum, lng_sum) = self
            .rows
            .iter()
            .fold((0.0, 0.0), |(lat, lng), row| {
                (lat + row.latitude, lng + row.longitude)
            });
        LatLng::new(lat_sum / n, lng_sum / n)
    }

    /// Minimum and maximum latitude over all rows; `(NaN, NaN)` when empty.
    pub fn latitude_range(&self) -> (f64, f64) {
        self.rows.iter().fold((f64::NAN, f64::NAN), |(min, max), row| {
            (min.min(row.latitude), max.max(row.latitude))
        })
    }

    /// Unique labels under `column` in first-seen order.
    pub fn labels(&self, column: &str) -> Result<Vec<String>> {
        let mut labels: Vec<String> = Vec::new();
        for row in &self.rows {
            let label = row.label(column)?;
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        Ok(labels)
    }
}

impl FromIterator<PointRow> for PointTable {
    fn from_iter<I: IntoIterator<Item = PointRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<PointRow> for PointTable {
    fn extend<I: IntoIterator<Item = PointRow>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PointTable {
        [
            PointRow::new(10.0, 20.0).with_property("LandUse", "Urban"),
            PointRow::new(11.0, 22.0).with_property("LandUse", "Forest"),
            PointRow::new(12.0, 24.0).with_property("LandUse", "Urban"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_mean_position() {
        let table = sample();
        assert_eq!(table.mean_position(), LatLng::new(11.0, 22.0));
    }

    #[test]
    fn test_latitude_range() {
        let table = sample();
        assert_eq!(table.latitude_range(), (10.0, 12.0));
    }

    #[test]
    fn test_empty_table_reductions_are_nan() {
        let table = PointTable::new();
        assert!(table.mean_position().lat.is_nan());
        let (min, max) = table.latitude_range();
        assert!(min.is_nan() && max.is_nan());
    }

    #[test]
    fn test_labels_first_seen_order() {
        let table = sample();
        assert_eq!(table.labels("LandUse").unwrap(), vec!["Urban", "Forest"]);
    }

    #[test]
    fn test_missing_column() {
        let table = sample();
        let err = table.labels("Crop").unwrap_err();
        assert!(matches!(err, MapError::MissingColumn(ref c) if c == "Crop"));
    }

    #[test]
    fn test_non_string_labels_render_as_json() {
        let row = PointRow::new(0.0, 0.0).with_property("Zone", 7);
        assert_eq!(row.label("Zone").unwrap(), "7");
    }
}
