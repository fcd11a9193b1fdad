//! Geographic regions and the textual output of region commands
//!
//! The region query command prints one `key=value` pair per line. Only the
//! four bounds are used; resolution, row and column entries are skipped.

use crate::types::{LayoutError, MapPoint, Result};
use std::collections::BTreeMap;

/// A geographic bounding box in map units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Region {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Parse `n=`, `s=`, `e=`, `w=` lines as printed by the region query
    pub fn parse(text: &str) -> Result<Self> {
        let values = parse_key_values(text, '=');
        let bound = |key: &str| -> Result<f64> {
            let raw = values
                .get(key)
                .ok_or_else(|| LayoutError::Parse(format!("Region is missing '{}'", key)))?;
            raw.parse::<f64>()
                .map_err(|_| LayoutError::Parse(format!("Invalid value for '{}': {}", key, raw)))
        };

        Ok(Region::new(bound("n")?, bound("s")?, bound("e")?, bound("w")?))
    }

    /// East-west extent, whatever the axis direction
    pub fn width(&self) -> f64 {
        (self.east - self.west).abs()
    }

    /// North-south extent, whatever the axis direction
    pub fn height(&self) -> f64 {
        (self.north - self.south).abs()
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.west + self.east) / 2.0,
            (self.north + self.south) / 2.0,
        )
    }

    /// True when the region cannot back a map frame
    pub fn is_empty(&self) -> bool {
        let width = self.width();
        let height = self.height();
        !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0
    }

    pub fn contains(&self, point: MapPoint) -> bool {
        let (w, e) = (self.west.min(self.east), self.west.max(self.east));
        let (s, n) = (self.south.min(self.north), self.south.max(self.north));
        (w..=e).contains(&point.easting) && (s..=n).contains(&point.northing)
    }
}

/// Where a region query takes its extent from
#[derive(Debug, Clone, PartialEq)]
pub enum RegionQuery {
    /// Extent of a raster map
    Raster(String),
    /// Extent of a vector map
    Vector(String),
    /// A named saved region
    Saved(String),
    /// The currently active region
    Current,
}

impl RegionQuery {
    /// Arguments for the region command printing the extent in shell style
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["-gu".to_string()];
        match self {
            RegionQuery::Raster(name) => args.push(format!("raster={}", name)),
            RegionQuery::Vector(name) => args.push(format!("vector={}", name)),
            RegionQuery::Saved(name) => args.push(format!("region={}", name)),
            RegionQuery::Current => {}
        }
        args
    }
}

/// A computed region handed to the region-set command
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRequest {
    pub region: Region,
    /// Raster whose cells the new region is aligned to
    pub align: Option<String>,
}

impl RegionRequest {
    pub fn new(region: Region, align: Option<String>) -> Self {
        Self { region, align }
    }

    pub fn to_args(&self) -> Vec<String> {
        let r = &self.region;
        let mut args = vec![
            format!("n={}", r.north),
            format!("s={}", r.south),
            format!("e={}", r.east),
            format!("w={}", r.west),
        ];
        if let Some(raster) = &self.align {
            args.push(format!("raster={}", raster));
        }
        args
    }
}

/// Split `key<sep>value` lines into a map.
///
/// Keys and values are trimmed; lines without the separator are ignored.
pub(crate) fn parse_key_values(text: &str, sep: char) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once(sep))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_values_skip_noise() {
        let values = parse_key_values("a=1\n\njunk\n b = 2 \n=3\n", '=');
        assert_eq!(values.len(), 2);
        assert_eq!(values["a"], "1");
        assert_eq!(values["b"], "2");
    }

    #[test]
    fn test_query_args() {
        assert_eq!(
            RegionQuery::Raster("elevation".into()).args(),
            vec!["-gu", "raster=elevation"]
        );
        assert_eq!(RegionQuery::Current.args(), vec!["-gu"]);
    }

    #[test]
    fn test_request_args_with_alignment() {
        let request = RegionRequest::new(
            Region::new(101.0, -1.0, 250.5, 10.0),
            Some("landuse".into()),
        );
        assert_eq!(
            request.to_args(),
            vec!["n=101", "s=-1", "e=250.5", "w=10", "raster=landuse"]
        );
    }
}
