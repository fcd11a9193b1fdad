use map_layout::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_page_units_sorted() {
    let conv = UnitConversion::default();
    assert_eq!(
        conv.page_units(),
        vec!["centimeter", "inch", "millimeter", "point"]
    );
}

#[test]
fn test_map_units_sorted() {
    let conv = UnitConversion::default();
    assert_eq!(
        conv.map_units(),
        vec!["feet", "kilometers", "meters", "miles", "nautical miles"]
    );
}

#[test]
fn test_all_units_is_union() {
    let conv = UnitConversion::new(96);
    let all = conv.all_units();
    assert_eq!(all.len(), 13);
    for name in conv.page_units().into_iter().chain(conv.map_units()) {
        assert!(all.contains(&name), "{} missing", name);
    }
    for name in ["pixel", "meter", "nautmiles", "degrees"] {
        assert!(all.contains(&name), "{} missing", name);
    }
    let mut sorted = all.clone();
    sorted.sort();
    assert_eq!(all, sorted);
}

#[test]
fn test_meter_to_centimeter() {
    let conv = UnitConversion::new(96);
    assert!(approx(conv.convert(1.0, "meter", "centimeter").unwrap(), 100.0));
}

#[test]
fn test_point_to_inch() {
    let conv = UnitConversion::new(96);
    assert_eq!(conv.convert(72.0, "point", "inch").unwrap(), 1.0);
}

#[test]
fn test_pixel_uses_device_density() {
    let conv = UnitConversion::from_device_ppi((96, 100));
    assert!(approx(conv.convert(1.0, "inch", "pixel").unwrap(), 96.0));
    assert!(approx(conv.convert(48.0, "pixel", "inch").unwrap(), 0.5));

    let default = UnitConversion::default();
    assert!(approx(default.convert(1.0, "inch", "pixel").unwrap(), 72.0));
}

#[test]
fn test_degrees_match_meters() {
    let conv = UnitConversion::default();
    assert_eq!(
        conv.convert(1234.5, "degrees", "inch").unwrap(),
        conv.convert(1234.5, "meter", "inch").unwrap()
    );
}

#[test]
fn test_identity_and_round_trip() {
    let conv = UnitConversion::new(110);
    let values = [0.001, 1.0, 37.25, 1.0e6];

    for a in Unit::ALL {
        for v in values {
            assert!(approx(conv.convert_units(v, a, a), v));
        }
        for b in Unit::ALL {
            for v in values {
                let there = conv.convert_units(v, a, b);
                let back = conv.convert_units(there, b, a);
                assert!(approx(back, v), "{} -> {} -> {}: {} != {}", a, b, a, back, v);
            }
        }
    }
}

#[test]
fn test_unknown_unit() {
    let conv = UnitConversion::default();
    match conv.convert(1.0, "furlong", "inch") {
        Err(LayoutError::UnknownUnit(name)) => assert_eq!(name, "furlong"),
        other => panic!("Expected UnknownUnit, got {:?}", other),
    }
    assert!(matches!(
        conv.convert(1.0, "inch", "Inch"),
        Err(LayoutError::UnknownUnit(_))
    ));
}

#[test]
fn test_convert_text() {
    let conv = UnitConversion::default();
    assert!(approx(
        conv.convert_text(" 25.4 ", "millimeter", "inch").unwrap(),
        1.0
    ));

    match conv.convert_text("12 cm", "centimeter", "inch") {
        Err(LayoutError::InvalidNumber(text)) => assert_eq!(text, "12 cm"),
        other => panic!("Expected InvalidNumber, got {:?}", other),
    }
    assert!(matches!(
        conv.convert_text("abc", "parsec", "inch"),
        Err(LayoutError::UnknownUnit(_))
    ));
}

#[test]
fn test_scale_denominator() {
    let scale = Scale::from_denominator(25000.0).unwrap();
    assert!(approx(scale.denominator(), 25000.0));
    assert!(Scale::new(0.0).is_none());
    assert!(Scale::new(-1.0).is_none());
    assert!(Scale::new(f64::NAN).is_none());
}

#[test]
fn test_scale_ground_distance() {
    let conv = UnitConversion::default();
    // 1:24000 means one inch on paper is 2000 feet on the ground
    let scale = Scale::from_denominator(24000.0).unwrap();
    let feet = scale.ground_distance(&conv, 1.0, Unit::Inch, Unit::Feet);
    assert!(approx(feet, 2000.0));

    let inches = scale.paper_distance(&conv, 2000.0, Unit::Feet, Unit::Inch);
    assert!(approx(inches, 1.0));
}

#[test]
fn test_zoom_policy() {
    let scale = Scale::new(0.001).unwrap();
    assert!(scale.accepts_zoom_to(Scale::new(0.002).unwrap()));
    assert!(scale.accepts_zoom_to(Scale::new(0.0003).unwrap()));
    assert!(!scale.accepts_zoom_to(Scale::new(0.0001).unwrap()));
    assert!(!scale.accepts_zoom_to(Scale::new(0.02).unwrap()));
}
