/// Width and height of the axis-aligned box around a `width` x `height`
/// rectangle rotated by `angle_degrees`.
pub fn bbox_after_rotation(width: f64, height: f64, angle_degrees: f64) -> (f64, f64) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    (
        (width * cos).abs() + (height * sin).abs(),
        (width * sin).abs() + (height * cos).abs(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_swaps() {
        let (w, h) = bbox_after_rotation(4.0, 1.0, 90.0);
        assert!((w - 1.0).abs() < 1e-12);
        assert!((h - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_diagonal() {
        let (w, h) = bbox_after_rotation(1.0, 1.0, 45.0);
        assert!((w - 2f64.sqrt()).abs() < 1e-12);
        assert!((h - 2f64.sqrt()).abs() < 1e-12);
    }
}
