//! Tests for JSON snapshot document parsing

use super::test_snapshot_document;
use crate::app::services::dataset_loader::parse_snapshot_document;
use crate::app::services::field_normalizer::Normalizer;

#[test]
fn test_document_mixed_canonical_and_raw_records() {
    let normalizer = Normalizer::default();
    let collections = parse_snapshot_document(test_snapshot_document(), &normalizer).unwrap();

    assert_eq!(collections.crossings.len(), 2);
    assert_eq!(collections.crossings[0].milepost, 8.5);
    assert_eq!(collections.crossings[1].milepost, 10.1);
    // Canonical and raw shapes normalize to the same field layout
    assert_eq!(collections.crossings[0].state.as_deref(), Some("IA"));
    assert_eq!(collections.crossings[1].state.as_deref(), Some("IA"));

    assert_eq!(collections.sidings.len(), 1);
    assert_eq!(collections.sidings[0].name, "HOLLIDAY SIDING");

    assert_eq!(collections.track_segments.len(), 1);
    assert_eq!(collections.track_segments[0].length_feet, Some(4200.0));
}

#[test]
fn test_document_hints() {
    let normalizer = Normalizer::default();
    let collections = parse_snapshot_document(test_snapshot_document(), &normalizer).unwrap();

    assert_eq!(collections.hints.states, vec!["IA"]);
    assert_eq!(collections.hints.subdivisions, vec!["Kansas City Sub"]);
    // "yards" held track records, not name strings, so no yard hints
    assert!(collections.hints.yards.is_empty());
}

#[test]
fn test_document_yards_as_name_strings() {
    let normalizer = Normalizer::default();
    let doc = r#"{
        "yards": ["KANSAS CITY YARD", "ST LOUIS YARD"],
        "tracklengths": [
            {"YARD": "KANSAS CITY YARD", "TRACK": "101", "LENGTH": "4200"}
        ]
    }"#;
    let collections = parse_snapshot_document(doc, &normalizer).unwrap();

    assert_eq!(
        collections.hints.yards,
        vec!["KANSAS CITY YARD", "ST LOUIS YARD"]
    );
    assert_eq!(collections.track_segments.len(), 1);
}

#[test]
fn test_document_numeric_and_null_scalars() {
    let normalizer = Normalizer::default();
    let doc = r#"{
        "crossings": [
            {"MP": 12.7, "COMMON_NAME": null, "DOT": 79789}
        ]
    }"#;
    let collections = parse_snapshot_document(doc, &normalizer).unwrap();

    let crossing = &collections.crossings[0];
    assert_eq!(crossing.milepost, 12.7);
    // Null flattens to empty, which resolves to the placeholder
    assert_eq!(crossing.common_name, "UNKNOWN");
    assert_eq!(crossing.identifier, "79789");
}

#[test]
fn test_document_drops_malformed_rows_not_batch() {
    let normalizer = Normalizer::default();
    let doc = r#"{
        "crossings": [
            {"MP": "8.5", "COMMON_NAME": "GOOD"},
            {"COMMON_NAME": "NO POSITION"},
            "not even an object"
        ]
    }"#;
    let collections = parse_snapshot_document(doc, &normalizer).unwrap();

    assert_eq!(collections.crossings.len(), 1);
    assert_eq!(collections.stats.records_dropped, 1);
}

#[test]
fn test_document_missing_keys_yield_empty_collections() {
    let normalizer = Normalizer::default();
    let collections = parse_snapshot_document("{}", &normalizer).unwrap();

    assert!(collections.crossings.is_empty());
    assert!(collections.sidings.is_empty());
    assert!(collections.track_segments.is_empty());
    assert!(collections.hints.states.is_empty());
}

#[test]
fn test_document_rejects_non_object_root() {
    let normalizer = Normalizer::default();
    assert!(parse_snapshot_document("[1, 2, 3]", &normalizer).is_err());
    assert!(parse_snapshot_document("not json at all", &normalizer).is_err());
}
