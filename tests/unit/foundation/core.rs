use super::*;

#[test]
fn tile_rows_validation() {
    assert_eq!(TileRows::new(10).unwrap().get(), 10);
    assert_eq!(TileRows::new(30).unwrap().get(), 30);
    assert!(TileRows::new(9).is_err());
    assert!(TileRows::new(31).is_err());
    assert_eq!(TileRows::default().get(), Tuning::DEFAULT_ROWS);
}

#[test]
fn tile_rows_clamped_saturates() {
    assert_eq!(TileRows::clamped(0).get(), Tuning::MIN_ROWS);
    assert_eq!(TileRows::clamped(17).get(), 17);
    assert_eq!(TileRows::clamped(500).get(), Tuning::MAX_ROWS);
}

#[test]
fn tile_rows_serde_validates() {
    let rows: TileRows = serde_json::from_str("12").unwrap();
    assert_eq!(rows.get(), 12);
    assert!(serde_json::from_str::<TileRows>("3").is_err());
    assert_eq!(serde_json::to_string(&rows).unwrap(), "12");
}

#[test]
fn markers_are_distinct() {
    assert_ne!(Tuning::MARKER_FILL, Tuning::MARKER_SHADE);
    assert_eq!(Tuning::FRAME_COUNT, Tuning::SPRITE_COUNT);
}
