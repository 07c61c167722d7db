//! Tests for decode statistics accumulation

use crate::app::services::tabular_decoder::{DecodeStats, decode};

#[test]
fn test_stats_counts_for_clean_payload() {
    let result = decode("MP,NAME\n8.5,A\n10.1,B\n");
    assert_eq!(result.stats.rows_seen, 2);
    assert_eq!(result.stats.records_decoded, 2);
    assert_eq!(result.stats.short_rows, 0);
    assert_eq!(result.stats.long_rows, 0);
    assert!(!result.stats.has_ragged_rows());
}

#[test]
fn test_stats_counts_ragged_rows() {
    let result = decode("MP,NAME,ROAD\n8.5\n10.1,B,Road,EXTRA\n");
    assert_eq!(result.stats.short_rows, 1);
    assert_eq!(result.stats.long_rows, 1);
    assert_eq!(result.stats.records_decoded, 2);
}

#[test]
fn test_stats_merge() {
    let mut total = DecodeStats::default();
    let first = decode("MP\n1.0\n2.0\n").stats;
    let second = decode("MP,NAME\n3.0\n").stats;

    total.merge(&first);
    total.merge(&second);

    assert_eq!(total.rows_seen, 3);
    assert_eq!(total.records_decoded, 3);
    assert_eq!(total.short_rows, 1);
}
