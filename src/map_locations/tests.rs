use crate::map_locations::models::{Coordinate, PoolKind};
use crate::map_locations::pool::CoordinatePool;
use crate::pools::errors::PoolError;
use std::io::Write;
use std::path::Path;

#[test]
fn test_parse_land_pairs_array() {
    let pool = CoordinatePool::parse("[[48.85, 2.35], [-33.86, 151.2]]", PoolKind::Land).unwrap();

    assert_eq!(pool.len(), 2);
    assert_eq!(pool.as_slice()[1], Coordinate::new(-33.86, 151.2));
    assert_eq!(pool.kind(), PoolKind::Land);
}

#[test]
fn test_parse_road_objects_array() {
    let raw = r#"[
        {"lat": 35.68, "lng": 139.69},
        {"lat": 40.71, "lon": -74.0}
    ]"#;

    let pool = CoordinatePool::parse(raw, PoolKind::Road).unwrap();

    assert_eq!(
        pool.as_slice(),
        &[Coordinate::new(35.68, 139.69), Coordinate::new(40.71, -74.0)]
    );
}

#[test]
fn test_parse_ndjson_skips_blank_lines() {
    let raw = "{\"lat\": 1.0, \"lng\": 2.0}\n\n[3.0, 4.0]\n";

    let pool = CoordinatePool::parse(raw, PoolKind::Road).unwrap();

    assert_eq!(
        pool.as_slice(),
        &[Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]
    );
}

#[test]
fn test_single_pair_line_is_one_entry() {
    let pool = CoordinatePool::parse("[10.0, 20.0]", PoolKind::Land).unwrap();

    assert_eq!(pool.as_slice(), &[Coordinate::new(10.0, 20.0)]);
}

#[test]
fn test_empty_inputs_are_rejected() {
    assert!(matches!(
        CoordinatePool::parse("", PoolKind::Land),
        Err(PoolError::Empty)
    ));
    assert!(matches!(
        CoordinatePool::parse("[]", PoolKind::Land),
        Err(PoolError::Empty)
    ));
    assert!(matches!(
        CoordinatePool::new(PoolKind::Road, vec![]),
        Err(PoolError::Empty)
    ));
}

#[test]
fn test_non_numeric_entry_reports_its_line() {
    let raw = "[1.0, 2.0]\n{\"lat\": \"north\", \"lng\": 2.0}\n";

    let err = CoordinatePool::parse(raw, PoolKind::Land).unwrap_err();

    assert!(matches!(err, PoolError::Malformed { position: 2, .. }));
}

#[test]
fn test_stray_value_in_array_reports_its_index() {
    let raw = "[\n    [1.0, 2.0],\n    {\"lat\": 3.0, \"lng\": 4.0},\n    42\n]\n";

    let err = CoordinatePool::parse(raw, PoolKind::Land).unwrap_err();

    assert!(matches!(err, PoolError::Malformed { position: 3, .. }));
}

#[test]
fn test_out_of_range_entry_is_rejected() {
    let err = CoordinatePool::parse("[[0.0, 0.0], [91.0, 0.0]]", PoolKind::Land).unwrap_err();
    assert!(matches!(err, PoolError::OutOfRange { position: 2, .. }));

    let err = CoordinatePool::parse("[[0.0, -180.5]]", PoolKind::Land).unwrap_err();
    assert!(matches!(err, PoolError::OutOfRange { position: 1, .. }));
}

#[test]
fn test_boundary_values_are_accepted() {
    let pool =
        CoordinatePool::parse("[[90.0, 180.0], [-90.0, -180.0]]", PoolKind::Land).unwrap();

    assert_eq!(pool.len(), 2);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{\"lat\": 51.5, \"lng\": -0.12}}").unwrap();
    writeln!(file, "{{\"lat\": 55.75, \"lng\": 37.61}}").unwrap();

    let pool = CoordinatePool::load(file.path(), PoolKind::Road).unwrap();

    assert_eq!(pool.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let err = CoordinatePool::load(Path::new("no/such/file.ndjson"), PoolKind::Road).unwrap_err();

    assert!(matches!(err, PoolError::Io { .. }));
}

#[test]
fn test_search_radius_depends_on_kind() {
    assert!(PoolKind::Road.search_radius_m() < PoolKind::Land.search_radius_m());
}
