use crate::constants::UNPROJECTED;
use crate::region::parse_key_values;
use crate::types::{LayoutError, Result};
use crate::units::Unit;

/// Projection type and map-unit scaling of the current location
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionInfo {
    /// Projection short name, `xy` when unprojected
    pub proj: String,
    /// Name of the map units (`meters`, `feet`, `degrees`...)
    pub units: String,
    /// Meters per map unit
    pub meters: f64,
}

impl Default for ProjectionInfo {
    fn default() -> Self {
        Self {
            proj: UNPROJECTED.to_string(),
            units: String::new(),
            meters: 1.0,
        }
    }
}

impl ProjectionInfo {
    /// Parse the `key : value` listing of the projection command.
    ///
    /// Banner lines (`-PROJ_INFO----`) and anything without a colon are
    /// skipped. A listing without a `proj` entry describes an unprojected
    /// location.
    pub fn parse(text: &str) -> Result<Self> {
        let values = parse_key_values(text, ':');

        let proj = values
            .get("proj")
            .cloned()
            .unwrap_or_else(|| UNPROJECTED.to_string());
        let units = values.get("units").cloned().unwrap_or_default();
        let meters = match values.get("meters") {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|m| m.is_finite() && *m > 0.0)
                .ok_or_else(|| LayoutError::Parse(format!("Invalid meters value: {}", raw)))?,
            None => 1.0,
        };

        Ok(Self {
            proj,
            units,
            meters,
        })
    }

    pub fn is_unprojected(&self) -> bool {
        self.proj == UNPROJECTED
    }

    /// Map unit named by the listing, if the unit table knows it.
    ///
    /// The projection command capitalises unit names (`Meters`, `Feet`).
    pub fn map_unit(&self) -> Option<Unit> {
        self.units.trim().to_lowercase().parse().ok()
    }

    /// `meters_per_unit`, or `None` when it cannot scale a length
    pub fn usable_meters_per_unit(&self) -> Option<f64> {
        let meters = self.meters_per_unit();
        (meters.is_finite() && meters > 0.0).then_some(meters)
    }

    /// Factor applied to map-unit lengths before treating them as meters
    pub fn meters_per_unit(&self) -> f64 {
        if self.is_unprojected() {
            1.0
        } else {
            self.meters
        }
    }
}
