//! Core decode implementation
//!
//! Splits a payload into lines, scans each line with a double-quote-aware
//! field scanner, and zips data rows against the header row by position.

use tracing::debug;

use super::stats::{DecodeResult, DecodeStats};
use crate::app::models::RawRecord;

/// Decode a delimited-text payload into ordered raw records.
///
/// The first non-blank line is the header row; headers are trimmed. Data
/// rows shorter than the header list pad missing trailing fields with empty
/// strings; fields beyond the header count are dropped. Records come out in
/// file order, never reordered or deduplicated.
pub fn decode(text: &str) -> DecodeResult {
    let mut stats = DecodeStats::default();
    let mut records = Vec::new();

    // Any of \n, \r\n, \r terminates a line; the empty fragments a \r\n
    // pair produces are discarded with the rest of the blank lines.
    let mut lines = text
        .split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty());

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => split_fields(header_line)
            .into_iter()
            .map(|field| field.trim().to_string())
            .collect(),
        None => {
            debug!("Decoded payload contained no non-blank lines");
            return DecodeResult {
                headers: Vec::new(),
                records,
                stats,
            };
        }
    };

    for line in lines {
        let fields = split_fields(line);
        stats.rows_seen += 1;

        if fields.len() < headers.len() {
            stats.short_rows += 1;
        } else if fields.len() > headers.len() {
            stats.long_rows += 1;
        }

        let mut record = RawRecord::new(records.len());
        for (index, header) in headers.iter().enumerate() {
            let value = fields.get(index).map(String::as_str).unwrap_or("");
            record.insert(header.clone(), value);
        }

        records.push(record);
        stats.records_decoded += 1;
    }

    debug!(
        "Decoded {} records against {} headers ({} short, {} long rows)",
        stats.records_decoded,
        headers.len(),
        stats.short_rows,
        stats.long_rows
    );

    DecodeResult {
        headers,
        records,
        stats,
    }
}

/// Split a single line into fields, honoring double-quoted sections.
///
/// A quote toggles the in-quotes state; a doubled quote inside a quoted
/// section is a literal quote; a comma inside quotes is not a separator.
/// An unterminated quote is implicitly closed at end of line rather than
/// treated as an error.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // Escaped literal quote
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
