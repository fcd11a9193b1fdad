//! Shared constants for map layout geometry
//!
//! This module centralizes the unit factors and magic numbers used
//! throughout the layout calculations.

// =============================================================================
// Unit Factors (units per inch)
// =============================================================================

/// Meters per inch. Also used for the `meter` and `degrees` entries.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Centimeters per inch
pub const CENTIMETERS_PER_INCH: f64 = 2.54;

/// Millimeters per inch
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Kilometers per inch
pub const KILOMETERS_PER_INCH: f64 = 2.54e-5;

/// Feet per inch
pub const FEET_PER_INCH: f64 = 1.0 / 12.0;

/// Statute miles per inch
pub const MILES_PER_INCH: f64 = 1.0 / 63360.0;

/// Nautical miles per inch
pub const NAUTICAL_MILES_PER_INCH: f64 = 1.0 / 72913.386;

/// Pixel density assumed when no display device is known
pub const DEFAULT_PPI: u32 = 72;

/// Convert inches to meters
#[inline]
pub fn inch_to_m(inch: f64) -> f64 {
    inch * METERS_PER_INCH
}

/// Convert meters to inches
#[inline]
pub fn m_to_inch(m: f64) -> f64 {
    m / METERS_PER_INCH
}

// =============================================================================
// Projection
// =============================================================================

/// Projection name reported for unprojected (XY) locations
pub const UNPROJECTED: &str = "xy";

// =============================================================================
// Interactive Zoom
// =============================================================================

/// Smallest accepted ratio between a new scale and the previous one
pub const ZOOM_MIN_RATIO: f64 = 0.2;

/// Largest accepted ratio between a new scale and the previous one
pub const ZOOM_MAX_RATIO: f64 = 10.0;

// =============================================================================
// Item Size Estimation
// =============================================================================

/// Extra length reserved for the labels drawn at a scale bar's ends
pub const SCALEBAR_LABEL_ALLOWANCE: f64 = 1.1;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f64 = 0.5;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

// =============================================================================
// Page
// =============================================================================

/// Slack allowed when checking that an item sits inside the margins
pub const PRINTABLE_TOLERANCE_IN: f64 = 1e-6;
