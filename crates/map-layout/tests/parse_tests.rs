use map_layout::*;

const REGION_OUTPUT: &str = "projection=1
zone=17
n=228500
s=215000
w=630000
e=645000
nsres=10
ewres=10
rows=1350
cols=1500
cells=2025000
";

const PROJ_OUTPUT: &str = "-PROJ_INFO-------------------------------------------------
name       : Lambert Conformal Conic
proj       : lcc
datum      : nad83
ellps      : grs80
lat_1      : 36.16666666666666
lat_2      : 34.33333333333334
-PROJ_EPSG-------------------------------------------------
epsg       : 3358
-PROJ_UNITS------------------------------------------------
unit       : Meter
units      : Meters
meters     : 1
";

#[test]
fn test_parse_region() {
    let region = Region::parse(REGION_OUTPUT).unwrap();
    assert_eq!(region, Region::new(228_500.0, 215_000.0, 645_000.0, 630_000.0));
    assert_eq!(region.width(), 15_000.0);
    assert_eq!(region.height(), 13_500.0);
    assert!(!region.is_empty());
}

#[test]
fn test_parse_region_missing_bound() {
    match Region::parse("n=10\ns=0\ne=10\n") {
        Err(LayoutError::Parse(msg)) => assert!(msg.contains("'w'")),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_region_bad_number() {
    assert!(matches!(
        Region::parse("n=ten\ns=0\ne=10\nw=0\n"),
        Err(LayoutError::Parse(_))
    ));
}

#[test]
fn test_parse_projection() {
    let info = ProjectionInfo::parse(PROJ_OUTPUT).unwrap();
    assert_eq!(info.proj, "lcc");
    assert_eq!(info.units, "Meters");
    assert_eq!(info.meters, 1.0);
    assert!(!info.is_unprojected());
}

#[test]
fn test_parse_projection_feet() {
    let info = ProjectionInfo::parse("proj : tmerc\nunits : feet\nmeters : 0.3048006096\n").unwrap();
    assert_eq!(info.meters_per_unit(), 0.3048006096);
}

#[test]
fn test_parse_unprojected() {
    let info = ProjectionInfo::parse("XY location (unprojected)\n").unwrap();
    assert!(info.is_unprojected());
    assert_eq!(info.meters_per_unit(), 1.0);
    assert_eq!(info, ProjectionInfo::default());
}

#[test]
fn test_region_contains_flipped() {
    let region = Region::new(0.0, 100.0, 0.0, 100.0);
    assert!(region.contains(MapPoint::new(50.0, 50.0)));
    assert!(!region.contains(MapPoint::new(150.0, 50.0)));
    assert_eq!(region.center(), MapPoint::new(50.0, 50.0));
}
