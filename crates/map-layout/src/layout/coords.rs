//! Paper <-> map coordinate conversion
//!
//! The frame's top-left corner shows the region's west/north corner. Regions
//! may run in either direction along each axis, so every offset is multiplied
//! by the direction from the corner edge toward the opposite edge.

use crate::constants::{inch_to_m, m_to_inch};
use crate::region::Region;
use crate::types::{MapPoint, PaperPoint, Rect, Scale};

/// +1 when coordinates grow from `corner` toward `opposite`, -1 otherwise
pub fn axis_direction(corner: f64, opposite: f64) -> f64 {
    if opposite > corner { 1.0 } else { -1.0 }
}

/// Scale a frame shows its region at.
///
/// The east-west and north-south scales are computed separately and
/// averaged, so a frame that does not exactly match the region's aspect
/// ratio still maps consistently.
pub fn frame_scale(frame: &Rect, region: &Region) -> Option<Scale> {
    let frame = frame.normalized();
    if region.is_empty() || frame.is_degenerate() {
        return None;
    }
    let x_scale = inch_to_m(frame.width) / region.width();
    let y_scale = inch_to_m(frame.height) / region.height();
    Scale::new((x_scale + y_scale) / 2.0)
}

/// Mapping between one frame and its region
struct FrameMapping {
    origin: PaperPoint,
    corner: MapPoint,
    dir_x: f64,
    dir_y: f64,
    scale: f64,
}

impl FrameMapping {
    fn new(frame: &Rect, region: &Region) -> Option<Self> {
        let scale = frame_scale(frame, region)?;
        let frame = frame.normalized();
        Some(Self {
            origin: PaperPoint::new(frame.x, frame.y),
            corner: MapPoint::new(region.west, region.north),
            dir_x: axis_direction(region.west, region.east),
            dir_y: axis_direction(region.north, region.south),
            scale: scale.value(),
        })
    }
}

/// Geographic position of a paper point.
///
/// The result is truncated toward zero to whole map units; `map_to_paper`
/// does not truncate.
pub fn paper_to_map(frame: &Rect, region: &Region, point: PaperPoint) -> Option<MapPoint> {
    let m = FrameMapping::new(frame, region)?;
    let easting = m.corner.easting + m.dir_x * inch_to_m(point.x - m.origin.x) / m.scale;
    let northing = m.corner.northing + m.dir_y * inch_to_m(point.y - m.origin.y) / m.scale;
    Some(MapPoint::new(easting.trunc(), northing.trunc()))
}

/// Paper position, in inches from the page origin, of a map point
pub fn map_to_paper(frame: &Rect, region: &Region, point: MapPoint) -> Option<PaperPoint> {
    let m = FrameMapping::new(frame, region)?;
    let x = m.origin.x + m_to_inch(m.dir_x * (point.easting - m.corner.easting) * m.scale);
    let y = m.origin.y + m_to_inch(m.dir_y * (point.northing - m.corner.northing) * m.scale);
    Some(PaperPoint::new(x, y))
}
