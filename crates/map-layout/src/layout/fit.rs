//! Auto-adjust: fitting a frame rectangle to a region
//!
//! The region is measured in paper inches at scale 1, the largest uniform
//! scale that keeps it inside the target is chosen, and the target is then
//! shrunk along its slack axis so it takes the region's aspect ratio.

use crate::projection::ProjectionInfo;
use crate::region::Region;
use crate::types::{MapPoint, Rect, Scale};
use crate::units::{Unit, UnitConversion};

/// Result of fitting a map frame to a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Paper length per ground length
    pub scale: Scale,
    /// Center of the region in map units
    pub center: MapPoint,
    /// Frame rectangle with the region's aspect ratio, in inches
    pub rect: Rect,
}

/// Fit `target` to the aspect ratio of `region`.
///
/// Returns `None` when the region is empty, the target has no area or the
/// projection's meters-per-unit is not positive; the caller reports that as
/// "no map selected".
///
/// # Arguments
/// * `target` - Rectangle the user dragged, or the previous frame, in inches
/// * `region` - Geographic extent to show
/// * `projection` - Supplies the meters-per-unit factor for projected locations
/// * `conv` - Unit table used for the meter to inch conversion
pub fn auto_adjust(
    target: &Rect,
    region: &Region,
    projection: &ProjectionInfo,
    conv: &UnitConversion,
) -> Option<Fit> {
    if region.is_empty() {
        return None;
    }
    let target = target.normalized();
    if target.is_degenerate() {
        return None;
    }

    let to_m = projection.usable_meters_per_unit()?;
    let map_w = conv.convert_units(region.width() * to_m, Unit::Meter, Unit::Inch);
    let map_h = conv.convert_units(region.height() * to_m, Unit::Meter, Unit::Inch);

    let scale = Scale::new((target.width / map_w).min(target.height / map_h))?;
    let map_ratio = map_w / map_h;

    let rect = if target.aspect_ratio() > map_ratio {
        // Width has slack: keep the height and center horizontally
        let width = target.height * map_ratio;
        Rect::new(
            target.x - (width - target.width) / 2.0,
            target.y,
            width,
            target.height,
        )
    } else {
        // Height has slack: keep the width and center vertically
        let height = target.width / map_ratio;
        Rect::new(
            target.x,
            target.y - (height - target.height) / 2.0,
            target.width,
            height,
        )
    };

    Some(Fit {
        scale,
        center: region.center(),
        rect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projected_units_scale_down() {
        // Same numbers in feet cover less ground, so the scale grows
        let region = Region::new(1000.0, 0.0, 1000.0, 0.0);
        let target = Rect::new(0.0, 0.0, 4.0, 4.0);
        let conv = UnitConversion::default();

        let meters = ProjectionInfo {
            proj: "utm".into(),
            units: "meters".into(),
            meters: 1.0,
        };
        let feet = ProjectionInfo {
            proj: "lcc".into(),
            units: "feet".into(),
            meters: 0.3048,
        };

        let in_meters = auto_adjust(&target, &region, &meters, &conv).unwrap();
        let in_feet = auto_adjust(&target, &region, &feet, &conv).unwrap();
        let ratio = in_feet.scale.value() / in_meters.scale.value();
        assert!((ratio - 1.0 / 0.3048).abs() < 1e-9);
    }

    #[test]
    fn test_negative_drag_is_normalized() {
        let region = Region::new(100.0, 0.0, 100.0, 0.0);
        let dragged = Rect::new(4.0, 4.0, -4.0, -2.0);
        let fit = auto_adjust(
            &dragged,
            &region,
            &ProjectionInfo::default(),
            &UnitConversion::default(),
        )
        .unwrap();

        assert!((fit.rect.x - 1.0).abs() < 1e-9);
        assert!((fit.rect.y - 2.0).abs() < 1e-9);
        assert!((fit.rect.width - 2.0).abs() < 1e-9);
        assert!((fit.rect.height - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_meters_per_unit() {
        let projection = ProjectionInfo {
            proj: "utm".into(),
            units: "meters".into(),
            meters: 0.0,
        };
        let fit = auto_adjust(
            &Rect::new(0.0, 0.0, 4.0, 4.0),
            &Region::new(100.0, 0.0, 100.0, 0.0),
            &projection,
            &UnitConversion::default(),
        );
        assert!(fit.is_none());
    }
}
