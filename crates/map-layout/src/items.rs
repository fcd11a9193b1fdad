//! Page items
//!
//! Each item kind has its own fixed set of fields. The page owns the items
//! and keeps the ones that depend on the map frame (scale bars, anchored
//! text) in sync after the frame changes.

use crate::constants::{
    HELVETICA_CHAR_WIDTH_RATIO, LINE_HEIGHT_RATIO, POINTS_PER_INCH, SCALEBAR_LABEL_ALLOWANCE,
};
use crate::frame::MapFrame;
use crate::layout::bbox_after_rotation;
use crate::projection::ProjectionInfo;
use crate::region::RegionRequest;
use crate::types::*;
use crate::units::{Unit, UnitConversion};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    MapFrame,
    Raster,
    Vector,
    Legend,
    Scalebar,
    Text,
    MapInfo,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorLayer {
    pub name: String,
    /// Label shown in the legend
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorItem {
    /// Drawing order, first layer at the bottom
    pub layers: Vec<VectorLayer>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegendItem {
    pub rect: Rect,
    pub title: String,
    pub columns: u32,
    pub font_size_pt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalebarStyle {
    #[default]
    Fancy,
    Simple,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalebarItem {
    /// Position and estimated size in inches
    pub rect: Rect,
    /// Ground length shown by the bar
    pub length: f64,
    /// Unit of `length`, `None` for the projection's map units
    pub units_length: Option<Unit>,
    /// Bar height
    pub height: f64,
    pub units_height: Unit,
    pub segments: u32,
    pub style: ScalebarStyle,
}

impl ScalebarItem {
    /// Size of the drawn bar in inches, as (length, height).
    ///
    /// Map units the unit table does not know are treated as meters. The
    /// length is padded for the labels at either end.
    pub fn estimate_size(
        &self,
        conv: &UnitConversion,
        scale: Scale,
        projection: &ProjectionInfo,
    ) -> (f64, f64) {
        let length_unit = self
            .units_length
            .or_else(|| projection.map_unit())
            .unwrap_or(Unit::Meters);

        let ground_in = conv.convert_units(self.length, length_unit, Unit::Inch);
        let length = ground_in * scale.value() * SCALEBAR_LABEL_ALLOWANCE;
        let height = conv.convert_units(self.height, self.units_height, Unit::Inch);
        (length, height)
    }

    /// Re-estimate the rectangle, keeping its top-left corner
    pub fn resize(&mut self, conv: &UnitConversion, scale: Scale, projection: &ProjectionInfo) {
        let (width, height) = self.estimate_size(conv, scale, projection);
        self.rect.width = width;
        self.rect.height = height;
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextItem {
    pub text: String,
    /// Top-left corner in inches
    pub position: PaperPoint,
    pub font_size_pt: f64,
    /// Counter-clockwise rotation in degrees
    pub rotation_deg: f64,
    /// Map position the text is pinned to, if any
    pub anchor: Option<MapPoint>,
}

impl TextItem {
    /// Approximate size in inches, including rotation
    pub fn estimated_size(&self) -> (f64, f64) {
        let lines = self.text.lines().count().max(1);
        let longest = self
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let font_in = self.font_size_pt / POINTS_PER_INCH;
        let width = longest as f64 * font_in * HELVETICA_CHAR_WIDTH_RATIO;
        let height = lines as f64 * font_in * LINE_HEIGHT_RATIO;
        bbox_after_rotation(width, height, self.rotation_deg)
    }

    pub fn rect(&self) -> Rect {
        let (width, height) = self.estimated_size();
        Rect::new(self.position.x, self.position.y, width, height)
    }

    /// Pin the text to the map point under its current paper position
    pub fn anchor_on_map(&mut self, frame: &MapFrame) -> Result<MapPoint> {
        let anchor = frame.paper_to_map(self.position).ok_or_else(|| {
            LayoutError::MissingGeography("Map frame has no region".to_string())
        })?;
        self.anchor = Some(anchor);
        Ok(anchor)
    }

    /// Move the text onto a map point and pin it there
    pub fn place_at_map(&mut self, frame: &MapFrame, point: MapPoint) -> Result<PaperPoint> {
        let position = frame.map_to_paper(point).ok_or_else(|| {
            LayoutError::MissingGeography("Map frame has no region".to_string())
        })?;
        self.position = position;
        self.anchor = Some(point);
        Ok(position)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapInfoItem {
    pub rect: Rect,
    pub font_size_pt: f64,
}

/// One item on the page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    MapFrame(MapFrame),
    Raster(RasterItem),
    Vector(VectorItem),
    Legend(LegendItem),
    Scalebar(ScalebarItem),
    Text(TextItem),
    MapInfo(MapInfoItem),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::MapFrame(_) => ItemKind::MapFrame,
            Item::Raster(_) => ItemKind::Raster,
            Item::Vector(_) => ItemKind::Vector,
            Item::Legend(_) => ItemKind::Legend,
            Item::Scalebar(_) => ItemKind::Scalebar,
            Item::Text(_) => ItemKind::Text,
            Item::MapInfo(_) => ItemKind::MapInfo,
        }
    }

    /// Paper rectangle; raster and vector layers are drawn inside the map frame
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Item::MapFrame(frame) => Some(frame.rect),
            Item::Legend(legend) => Some(legend.rect),
            Item::Scalebar(scalebar) => Some(scalebar.rect),
            Item::Text(text) => Some(text.rect()),
            Item::MapInfo(info) => Some(info.rect),
            Item::Raster(_) | Item::Vector(_) => None,
        }
    }
}

/// The page being designed and everything placed on it
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub setup: PageSetup,
    items: BTreeMap<ItemId, Item>,
    next_id: u32,
}

impl Page {
    pub fn new(setup: PageSetup) -> Self {
        Self {
            setup,
            items: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, item: Item) -> ItemId {
        self.next_id += 1;
        let id = ItemId(self.next_id);
        self.items.insert(id, item);
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// First item of the given kind
    pub fn find_by_kind(&self, kind: ItemKind) -> Option<ItemId> {
        self.items()
            .find(|(_, item)| item.kind() == kind)
            .map(|(id, _)| id)
    }

    pub fn map_frame(&self) -> Option<&MapFrame> {
        self.items.values().find_map(|item| match item {
            Item::MapFrame(frame) => Some(frame),
            _ => None,
        })
    }

    pub fn map_frame_mut(&mut self) -> Option<&mut MapFrame> {
        self.items.values_mut().find_map(|item| match item {
            Item::MapFrame(frame) => Some(frame),
            _ => None,
        })
    }

    /// Name of the raster drawn in the map frame
    pub fn raster_name(&self) -> Option<&str> {
        self.items.values().find_map(|item| match item {
            Item::Raster(raster) => Some(raster.name.as_str()),
            _ => None,
        })
    }

    /// Derive the fixed-scale region of the map frame, aligned to the raster
    pub fn fixed_scale_request(
        &mut self,
        projection: &ProjectionInfo,
        conv: &UnitConversion,
    ) -> Result<RegionRequest> {
        let align = self.raster_name().map(str::to_string);
        let frame = self
            .map_frame_mut()
            .ok_or_else(|| LayoutError::MissingGeography("No map frame on the page".to_string()))?;
        frame.apply_fixed_scale(align, projection, conv)
    }

    /// Bring frame-dependent items up to date after the map frame changed.
    ///
    /// Scale bars are re-estimated from the frame's scale and pinned text
    /// follows its map anchor.
    pub fn refresh_from_frame(&mut self, conv: &UnitConversion, projection: &ProjectionInfo) {
        let Some(frame) = self.map_frame().cloned() else {
            return;
        };
        let scale = frame.current_scale(projection);

        for item in self.items.values_mut() {
            match item {
                Item::Scalebar(scalebar) => {
                    if let Some(scale) = scale {
                        scalebar.resize(conv, scale, projection);
                    }
                }
                Item::Text(text) => {
                    if let Some(position) = text.anchor.and_then(|a| frame.map_to_paper(a)) {
                        text.position = position;
                    }
                }
                _ => {}
            }
        }
    }
}
