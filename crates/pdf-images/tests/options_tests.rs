use pdf_images::*;

#[test]
fn test_default_options() {
    let options = DocumentOptions::default();
    assert_eq!(options.page_size, PaperSize::A4);
    assert_eq!(options.default_orientation, OrientationChoice::Auto);
    assert_eq!(options.margins, Margins::uniform(10.0));
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_negative_margin() {
    let mut options = DocumentOptions::default();
    options.margins.top_mm = -2.0;

    match options.validate() {
        Err(BuildError::Config(msg)) => {
            assert!(msg.contains("top margin"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_non_finite_margin() {
    let mut options = DocumentOptions::default();
    options.margins.right_mm = f32::NAN;
    assert!(options.validate().is_err());

    options.margins.right_mm = f32::INFINITY;
    assert!(options.validate().is_err());

    // Zero and very large margins are allowed, layout clamps them
    options.margins = Margins::uniform(0.0);
    assert!(options.validate().is_ok());
    options.margins = Margins::uniform(1000.0);
    assert!(options.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = DocumentOptions {
        page_size: PaperSize::Letter,
        default_orientation: OrientationChoice::Landscape,
        margins: Margins {
            left_mm: 1.0,
            right_mm: 2.0,
            top_mm: 3.0,
            bottom_mm: 4.5,
        },
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = DocumentOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "page_size": "Letter" }"#)
        .await
        .unwrap();

    let loaded = DocumentOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.page_size, PaperSize::Letter);
    assert_eq!(loaded.margins, Margins::default());
    assert_eq!(loaded.default_orientation, OrientationChoice::Auto);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), "not json").await.unwrap();

    match DocumentOptions::load(temp_file.path()).await {
        Err(BuildError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_unknown_page_size_falls_back_to_a4() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(
        temp_file.path(),
        r#"{ "page_size": "B5", "default_orientation": "Portrait" }"#,
    )
    .await
    .unwrap();

    let loaded = DocumentOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.page_size, PaperSize::A4);
    assert_eq!(loaded.default_orientation, OrientationChoice::Portrait);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_page_size_is_case_insensitive() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "page_size": "letter" }"#)
        .await
        .unwrap();

    let loaded = DocumentOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.page_size, PaperSize::Letter);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_margins() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "margins": { "left_mm": 5.0 } }"#)
        .await
        .unwrap();

    let loaded = DocumentOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.margins.left_mm, 5.0);
    assert_eq!(loaded.margins.right_mm, 10.0);
    assert_eq!(loaded.margins.top_mm, 10.0);
    assert_eq!(loaded.margins.bottom_mm, 10.0);
}
