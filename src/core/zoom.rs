//! Viewport-fitting zoom estimation.
//!
//! Under slippy-map tiling the full 360° longitude range is visible at zoom
//! 0 and every zoom step halves the visible span, so the level that fits a
//! span of `d` degrees is `log2(360 / d)`.

/// Zoom level used when the requested extent has zero span.
pub const DEGENERATE_SPAN_ZOOM: i32 = 18;

/// Full longitude range, in degrees, visible at zoom level 0.
const FULL_SPAN_DEGREES: f64 = 360.0;

/// Estimates the zoom level that fits the extent between `low` and `high`
/// on one geographic axis.
///
/// The order of `low` and `high` does not matter; only the absolute span is
/// used. `margin` is a dimensionless multiplier on the span (`-0.5` halves
/// the effective extent, overzooming by roughly one level). The result is
/// truncated toward zero, not rounded; callers depend on the exact value,
/// so the truncation is part of the contract. A zero span yields
/// [`DEGENERATE_SPAN_ZOOM`].
///
/// Inputs are not validated: non-finite values fall through the saturating
/// cast and spans wider than 360° truncate to zero (or below).
pub fn degree_span_to_zoom(low: f64, high: f64, margin: f64) -> i32 {
    let degrees = (high - low).abs() * (1.0 + margin);
    if degrees == 0.0 {
        DEGENERATE_SPAN_ZOOM
    } else {
        (FULL_SPAN_DEGREES / degrees).log2() as i32
    }
}

/// Estimates the zoom level that fits both a latitude and a longitude
/// bounds pair, applying the shared `margin` on each axis and adding `bias`
/// to each axis result before taking the minimum.
///
/// Taking the minimum is the conservative choice: both axes stay fully
/// visible without clipping.
pub fn zoom_for_bounds(
    latitude: (f64, f64),
    longitude: (f64, f64),
    margin: f64,
    bias: i32,
) -> i32 {
    let lat_zoom = degree_span_to_zoom(latitude.0, latitude.1, margin) + bias;
    let lon_zoom = degree_span_to_zoom(longitude.0, longitude.1, margin) + bias;
    lat_zoom.min(lon_zoom)
}
