use crate::constants::DEFAULT_PPI;
use crate::types::*;
use crate::units::{Unit, UnitConversion, UnitFamily};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Designer configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DesignerConfig {
    // Display
    pub ppi: u32,

    // Units offered by default
    pub page_unit: Unit,
    pub map_unit: Unit,

    // Page
    pub page: PageSetup,
    /// Rectangle used for a new map frame, in inches
    pub default_frame: Rect,

    /// Command prepended to every GIS command (e.g. `["grass", "--exec"]`)
    pub gis_command_prefix: Vec<String>,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            ppi: DEFAULT_PPI,
            page_unit: Unit::Inch,
            map_unit: Unit::Meters,
            page: PageSetup::default(),
            default_frame: Rect::new(1.0, 1.0, 6.0, 6.0),
            gis_command_prefix: Vec::new(),
        }
    }
}

impl DesignerConfig {
    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: Self = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.ppi == 0 {
            return Err(LayoutError::Config("ppi must be positive".to_string()));
        }

        if self.page_unit.family() != UnitFamily::Page {
            return Err(LayoutError::Config(format!(
                "{} is not a page unit",
                self.page_unit
            )));
        }
        if self.map_unit.family() != UnitFamily::Map {
            return Err(LayoutError::Config(format!(
                "{} is not a map unit",
                self.map_unit
            )));
        }

        if self.default_frame.normalized().is_degenerate() {
            return Err(LayoutError::Config(
                "Default map frame has no area".to_string(),
            ));
        }
        let printable = self.page.printable_rect();
        if printable.width <= 0.0 || printable.height <= 0.0 {
            return Err(LayoutError::Config(
                "Page margins leave no printable area".to_string(),
            ));
        }
        if !self.page.fits(&self.default_frame) {
            return Err(LayoutError::Config(
                "Default map frame extends past the page margins".to_string(),
            ));
        }

        Ok(())
    }

    pub fn unit_conversion(&self) -> UnitConversion {
        UnitConversion::new(self.ppi)
    }
}
