use map_layout::*;

#[test]
fn test_default_config_is_valid() {
    let config = DesignerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.unit_conversion().pixels_per_inch(), 72.0);
}

#[test]
fn test_validation_zero_ppi() {
    let config = DesignerConfig {
        ppi: 0,
        ..Default::default()
    };
    match config.validate() {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("ppi")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_unit_families() {
    let mut config = DesignerConfig::default();

    config.page_unit = Unit::Feet;
    assert!(config.validate().is_err());

    config.page_unit = Unit::Millimeter;
    config.map_unit = Unit::Point;
    assert!(config.validate().is_err());

    config.map_unit = Unit::NauticalMiles;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_page_area() {
    let mut config = DesignerConfig::default();
    config.page.margins = PageMargins::uniform(5.0);
    assert!(config.validate().is_err());

    let mut config = DesignerConfig::default();
    config.default_frame = Rect::new(1.0, 1.0, 0.0, 0.0);
    assert!(config.validate().is_err());
}

#[test]
fn test_default_frame_inside_margins() {
    let mut config = DesignerConfig::default();
    config.page = PageSetup {
        paper: PaperSize::Letter,
        orientation: Orientation::Portrait,
        margins: PageMargins::uniform(0.5),
    };

    // Printable area runs from 0.5 to 8.0 across
    config.default_frame = Rect::new(0.5, 0.5, 7.5, 6.0);
    assert!(config.validate().is_ok());

    config.default_frame = Rect::new(1.0, 0.5, 7.5, 6.0);
    match config.validate() {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("margins")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    // A frame dragged up and to the left is checked by the area it covers
    config.default_frame = Rect::new(8.0, 6.5, -7.5, -6.0);
    assert!(config.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_config() {
    use tempfile::NamedTempFile;

    let config = DesignerConfig {
        ppi: 96,
        page_unit: Unit::Centimeter,
        map_unit: Unit::Kilometers,
        page: PageSetup {
            paper: PaperSize::Custom {
                width_in: 12.0,
                height_in: 8.0,
            },
            orientation: Orientation::Landscape,
            margins: PageMargins::uniform(0.25),
        },
        default_frame: Rect::new(0.5, 0.5, 5.0, 4.0),
        gis_command_prefix: vec!["grass".into(), "--exec".into()],
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    config.save(path).await.unwrap();
    let loaded = DesignerConfig::load(path).await.unwrap();

    assert_eq!(loaded, config);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "ppi": 110, "map_unit": "feet" }"#)
        .await
        .unwrap();

    let loaded = DesignerConfig::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.ppi, 110);
    assert_eq!(loaded.map_unit, Unit::Feet);
    assert_eq!(loaded.page_unit, Unit::Inch);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_unknown_unit() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "map_unit": "furlongs" }"#)
        .await
        .unwrap();

    match DesignerConfig::load(temp_file.path()).await {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("furlongs")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
