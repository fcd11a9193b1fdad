use crate::projection::ProjectionInfo;
use crate::region::Region;
use crate::types::{MapPoint, Rect, Scale};
use crate::units::{Unit, UnitConversion};

/// Region shown by a frame of fixed scale centered on `center`.
///
/// Bounds are rounded outward to whole map units so the region always
/// contains the requested extent. Returns `None` for a frame without area
/// or a projection whose meters-per-unit is not positive.
pub fn region_from_fixed_scale(
    frame: &Rect,
    scale: Scale,
    center: MapPoint,
    projection: &ProjectionInfo,
    conv: &UnitConversion,
) -> Option<Region> {
    let frame = frame.normalized();
    if frame.is_degenerate() || !center.easting.is_finite() || !center.northing.is_finite() {
        return None;
    }

    let from_m = projection.usable_meters_per_unit()?;
    let half_extent = |half_inch: f64| {
        conv.convert_units(half_inch, Unit::Inch, Unit::Meter) / from_m / scale.value()
    };
    let half_w = half_extent(frame.width / 2.0);
    let half_h = half_extent(frame.height / 2.0);

    Some(Region::new(
        (center.northing + half_h).ceil(),
        (center.northing - half_h).floor(),
        (center.easting + half_w).ceil(),
        (center.easting - half_w).floor(),
    ))
}
