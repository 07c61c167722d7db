//! Tests for alias table resolution and TOML loading

use crate::app::models::RawRecord;
use crate::app::services::field_normalizer::AliasTable;

#[test]
fn test_resolve_takes_first_present_alias() {
    let table = AliasTable::default();
    let record = RawRecord::from_pairs(0, [("MILEPOST", "9.9"), ("MP", "8.5")]);

    // "MP" precedes "MILEPOST" in the default ordering
    assert_eq!(table.resolve(&record, &table.milepost), Some("8.5"));
}

#[test]
fn test_resolve_is_case_sensitive() {
    let table = AliasTable::default();
    let record = RawRecord::from_pairs(0, [("mp", "8.5")]);
    assert_eq!(table.resolve(&record, &table.milepost), None);

    let lower = RawRecord::from_pairs(0, [("milepost", "8.5")]);
    assert_eq!(table.resolve(&lower, &table.milepost), Some("8.5"));
}

#[test]
fn test_resolve_present_but_empty_wins_over_later_alias() {
    let table = AliasTable::default();
    // The first matching alias is taken even when its value is empty; the
    // later spelling never gets consulted
    let record = RawRecord::from_pairs(0, [("COMMON_NAME", ""), ("NAME", "KANSAS AVE")]);
    assert_eq!(table.resolve(&record, &table.common_name), Some(""));
}

#[test]
fn test_default_table_leads_with_canonical_spellings() {
    let table = AliasTable::default();
    assert_eq!(table.milepost[0], "MP");
    assert_eq!(table.common_name[0], "COMMON_NAME");
    assert_eq!(table.start_milepost[0], "MP_START");
    assert_eq!(table.yard[0], "YARD");
}

#[test]
fn test_from_toml_str_replaces_listed_fields() {
    let toml = r#"
        milepost = ["POSITION", "MP"]
        yard = ["FACILITY"]
    "#;
    let table = AliasTable::from_toml_str(toml).unwrap();

    assert_eq!(table.milepost, vec!["POSITION", "MP"]);
    assert_eq!(table.yard, vec!["FACILITY"]);
    // Unlisted fields keep their defaults via serde(default)
    assert_eq!(table.state[0], "STATE");
}

#[test]
fn test_from_toml_str_rejects_malformed_input() {
    assert!(AliasTable::from_toml_str("milepost = 5").is_err());
}

#[test]
fn test_toml_round_trip() {
    let table = AliasTable::default();
    let serialized = toml::to_string(&table).unwrap();
    let restored = AliasTable::from_toml_str(&serialized).unwrap();
    assert_eq!(table, restored);
}
