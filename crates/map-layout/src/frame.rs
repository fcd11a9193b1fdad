use crate::layout::{
    Fit, auto_adjust, frame_scale, map_to_paper, paper_to_map, region_from_fixed_scale,
};
use crate::projection::ProjectionInfo;
use crate::region::{Region, RegionQuery, RegionRequest};
use crate::types::*;
use crate::units::UnitConversion;

/// Map whose extent a frame follows
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapSource {
    Raster(String),
    Vector(String),
}

impl MapSource {
    pub fn name(&self) -> &str {
        match self {
            MapSource::Raster(name) | MapSource::Vector(name) => name,
        }
    }
}

/// How a map frame obtains its region and scale
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleType {
    /// Fit to the extent of a raster or vector map
    Auto(MapSource),
    /// Fit to a named saved region
    SavedRegion(String),
    /// Fit to the currently active region
    CurrentRegion,
    /// Keep `MapFrame::scale` and `MapFrame::center`, derive the region
    FixedScale,
}

/// Frame border
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub enabled: bool,
    /// Line width in points
    pub width_pt: f64,
    pub color: String,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            enabled: true,
            width_pt: 1.0,
            color: "black".to_string(),
        }
    }
}

/// A map frame placed on the page.
///
/// Text anchoring, scale bar sizing and coordinate conversion all read the
/// frame's rectangle, scale and region, so those are only updated together
/// once a complete result has been computed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapFrame {
    /// Frame rectangle in inches
    pub rect: Rect,
    pub scale_type: ScaleType,
    pub scale: Option<Scale>,
    /// Center of the shown region in map units
    pub center: Option<MapPoint>,
    /// Region currently shown by the frame
    pub region: Option<Region>,
    pub border: Border,
}

impl MapFrame {
    pub fn new(rect: Rect, scale_type: ScaleType) -> Self {
        Self {
            rect: rect.normalized(),
            scale_type,
            scale: None,
            center: None,
            region: None,
            border: Border::default(),
        }
    }

    /// Region query to run before fitting, if the scale type needs one
    pub fn region_query(&self) -> Option<RegionQuery> {
        match &self.scale_type {
            ScaleType::Auto(MapSource::Raster(name)) => Some(RegionQuery::Raster(name.clone())),
            ScaleType::Auto(MapSource::Vector(name)) => Some(RegionQuery::Vector(name.clone())),
            ScaleType::SavedRegion(name) => Some(RegionQuery::Saved(name.clone())),
            ScaleType::CurrentRegion => Some(RegionQuery::Current),
            ScaleType::FixedScale => None,
        }
    }

    /// Validate the frame before fitting or writing it out
    pub fn validate(&self) -> Result<()> {
        if self.rect.is_degenerate() {
            return Err(LayoutError::Config("Map frame has no area".to_string()));
        }

        match &self.scale_type {
            ScaleType::Auto(source) if source.name().trim().is_empty() => {
                Err(LayoutError::MissingGeography("No map selected".to_string()))
            }
            ScaleType::SavedRegion(name) if name.trim().is_empty() => {
                Err(LayoutError::MissingGeography("No region selected".to_string()))
            }
            ScaleType::FixedScale if self.scale.is_none() => Err(LayoutError::MissingGeography(
                "Fixed scale requires a scale".to_string(),
            )),
            ScaleType::FixedScale if self.center.is_none() => Err(LayoutError::MissingGeography(
                "Fixed scale requires a center point".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Fit the frame to `region` and adopt the result
    pub fn fit_to_region(
        &mut self,
        region: Region,
        projection: &ProjectionInfo,
        conv: &UnitConversion,
    ) -> Result<Fit> {
        let fit = auto_adjust(&self.rect, &region, projection, conv).ok_or_else(|| {
            LayoutError::MissingGeography("Region is empty or frame has no area".to_string())
        })?;
        self.apply_fit(fit, region);
        Ok(fit)
    }

    pub fn apply_fit(&mut self, fit: Fit, region: Region) {
        self.rect = fit.rect;
        self.scale = Some(fit.scale);
        self.center = Some(fit.center);
        self.region = Some(region);
    }

    /// Switch to a fixed scale around `center`; the region is derived later
    pub fn set_fixed_scale(&mut self, scale: Scale, center: MapPoint) {
        self.scale_type = ScaleType::FixedScale;
        self.scale = Some(scale);
        self.center = Some(center);
    }

    /// Derive the region for a fixed-scale frame and adopt it.
    ///
    /// The returned request is meant for the region-set command, aligned to
    /// `align` when a raster is on the page.
    pub fn apply_fixed_scale(
        &mut self,
        align: Option<String>,
        projection: &ProjectionInfo,
        conv: &UnitConversion,
    ) -> Result<RegionRequest> {
        let (scale, center) = match (self.scale, self.center) {
            (Some(scale), Some(center)) => (scale, center),
            _ => {
                return Err(LayoutError::MissingGeography(
                    "Fixed scale requires a scale and a center point".to_string(),
                ));
            }
        };
        let region = region_from_fixed_scale(&self.rect, scale, center, projection, conv)
            .ok_or_else(|| LayoutError::Config("Map frame has no area".to_string()))?;

        self.region = Some(region);
        Ok(RegionRequest::new(region, align))
    }

    /// Scale the frame is drawn at, falling back to its rectangle and region.
    ///
    /// The fallback measures the region in map units, so it is converted to
    /// ground meters with the projection before use.
    pub fn current_scale(&self, projection: &ProjectionInfo) -> Option<Scale> {
        self.scale.or_else(|| {
            let region = self.region.as_ref()?;
            let to_m = projection.usable_meters_per_unit()?;
            Scale::new(frame_scale(&self.rect, region)?.value() / to_m)
        })
    }

    pub fn paper_to_map(&self, point: PaperPoint) -> Option<MapPoint> {
        self.region
            .as_ref()
            .and_then(|region| paper_to_map(&self.rect, region, point))
    }

    pub fn map_to_paper(&self, point: MapPoint) -> Option<PaperPoint> {
        self.region
            .as_ref()
            .and_then(|region| map_to_paper(&self.rect, region, point))
    }
}
