//! Table-driven linear unit conversion
//!
//! Every unit carries a factor expressed in "units per inch", so converting
//! between any two of them is a division followed by a multiplication:
//! `value / factor[from] * factor[to]`.
//!
//! The map family is scaled to paper inches through the same table, which
//! means `meters` here are real meters and the map scale is applied by the
//! caller. `degrees` share the meter factor; this is an approximation, not
//! an angular conversion.

use crate::constants::*;
use crate::types::{LayoutError, Result};
use std::fmt;
use std::str::FromStr;

/// Which catalogue a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    /// Units offered for page measurements
    Page,
    /// Units offered for ground distances
    Map,
    /// Device pixels
    Device,
    /// Aliases used internally and by projection info (`meter`, `degrees`...)
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Inch,
    Point,
    Centimeter,
    Millimeter,
    Meters,
    Kilometers,
    Feet,
    Miles,
    NauticalMiles,
    Pixel,
    Meter,
    NautMiles,
    Degrees,
}

impl Unit {
    pub const ALL: [Unit; 13] = [
        Unit::Inch,
        Unit::Point,
        Unit::Centimeter,
        Unit::Millimeter,
        Unit::Meters,
        Unit::Kilometers,
        Unit::Feet,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Pixel,
        Unit::Meter,
        Unit::NautMiles,
        Unit::Degrees,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Unit::Inch => "inch",
            Unit::Point => "point",
            Unit::Centimeter => "centimeter",
            Unit::Millimeter => "millimeter",
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Feet => "feet",
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nautical miles",
            Unit::Pixel => "pixel",
            Unit::Meter => "meter",
            Unit::NautMiles => "nautmiles",
            Unit::Degrees => "degrees",
        }
    }

    pub fn family(self) -> UnitFamily {
        match self {
            Unit::Inch | Unit::Point | Unit::Centimeter | Unit::Millimeter => UnitFamily::Page,
            Unit::Meters | Unit::Kilometers | Unit::Feet | Unit::Miles | Unit::NauticalMiles => {
                UnitFamily::Map
            }
            Unit::Pixel => UnitFamily::Device,
            Unit::Meter | Unit::NautMiles | Unit::Degrees => UnitFamily::Other,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| LayoutError::UnknownUnit(s.to_string()))
    }
}

/// Converter between page, map and device units.
///
/// Only the `pixel` factor depends on the display, so one instance is built
/// per device and shared read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    pixels_per_inch: f64,
}

impl Default for UnitConversion {
    fn default() -> Self {
        Self::new(DEFAULT_PPI)
    }
}

impl UnitConversion {
    /// A zero density falls back to [`DEFAULT_PPI`] so every factor stays positive.
    pub fn new(pixels_per_inch: u32) -> Self {
        let ppi = if pixels_per_inch == 0 {
            DEFAULT_PPI
        } else {
            pixels_per_inch
        };
        Self {
            pixels_per_inch: f64::from(ppi),
        }
    }

    /// Build from a device's (horizontal, vertical) pixel density.
    ///
    /// Only the horizontal density is used.
    pub fn from_device_ppi(ppi: (u32, u32)) -> Self {
        Self::new(ppi.0)
    }

    pub fn pixels_per_inch(&self) -> f64 {
        self.pixels_per_inch
    }

    /// Units per inch
    pub fn factor(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Inch => 1.0,
            Unit::Point => POINTS_PER_INCH,
            Unit::Centimeter => CENTIMETERS_PER_INCH,
            Unit::Millimeter => MILLIMETERS_PER_INCH,
            Unit::Meters | Unit::Meter | Unit::Degrees => METERS_PER_INCH,
            Unit::Kilometers => KILOMETERS_PER_INCH,
            Unit::Feet => FEET_PER_INCH,
            Unit::Miles => MILES_PER_INCH,
            Unit::NauticalMiles | Unit::NautMiles => NAUTICAL_MILES_PER_INCH,
            Unit::Pixel => self.pixels_per_inch,
        }
    }

    /// Sorted names of the page units
    pub fn page_units(&self) -> Vec<&'static str> {
        names_of(|unit| unit.family() == UnitFamily::Page)
    }

    /// Sorted names of the map units
    pub fn map_units(&self) -> Vec<&'static str> {
        names_of(|unit| unit.family() == UnitFamily::Map)
    }

    /// Sorted names of every unit in the table
    pub fn all_units(&self) -> Vec<&'static str> {
        names_of(|_| true)
    }

    /// Convert between typed units
    pub fn convert_units(&self, value: f64, from: Unit, to: Unit) -> f64 {
        value / self.factor(from) * self.factor(to)
    }

    /// Convert `value` between two units given by name
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64> {
        let from: Unit = from.parse()?;
        let to: Unit = to.parse()?;
        Ok(self.convert_units(value, from, to))
    }

    /// Convert a measurement typed by the user.
    ///
    /// Units are checked before the number so an unknown unit is reported
    /// even when the text is also malformed.
    pub fn convert_text(&self, text: &str, from: &str, to: &str) -> Result<f64> {
        let from: Unit = from.parse()?;
        let to: Unit = to.parse()?;
        let value = parse_number(text)?;
        Ok(self.convert_units(value, from, to))
    }
}

/// Parse a measurement, rejecting anything that is not a finite float
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LayoutError::InvalidNumber(text.to_string())),
    }
}

fn names_of(filter: impl Fn(Unit) -> bool) -> Vec<&'static str> {
    let mut names: Vec<_> = Unit::ALL
        .into_iter()
        .filter(|unit| filter(*unit))
        .map(Unit::name)
        .collect();
    names.sort_unstable();
    names
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Unit;
    use serde::{Deserialize, Serialize};

    impl Serialize for Unit {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Unit {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}
