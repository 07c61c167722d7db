//! Per-kind normalization of raw records
//!
//! Normalization is pure and total except for the one mandatory rule: a
//! crossing without a parseable milepost cannot participate in ordering and
//! is rejected. Sidings and track segments survive missing positions; they
//! just lose their derived length.

use tracing::debug;

use super::aliases::AliasTable;
use super::field_parsers::{optional_text, parse_milepost, text_or};
use super::stats::NormalizeStats;
use crate::app::models::{Crossing, LocatedEntity, RawRecord, RecordKind, Siding, TrackSegment};
use crate::constants::{
    FEET_PER_MILE, MISSING_IDENTIFIER, UNKNOWN_CROSSING_NAME, UNKNOWN_SIDING_NAME,
    UNKNOWN_TRACK_LABEL,
};

/// Maps raw records onto canonical entities through an alias table
#[derive(Debug, Clone)]
pub struct Normalizer {
    aliases: AliasTable,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(AliasTable::default())
    }
}

impl Normalizer {
    /// Create a normalizer with the given alias table
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// The alias table this normalizer resolves against
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Normalize one raw record as the given kind.
    ///
    /// Returns `None` only for a crossing without a usable milepost; sidings
    /// and track segments always normalize to something renderable.
    pub fn normalize(&self, raw: &RawRecord, kind: RecordKind) -> Option<LocatedEntity> {
        match kind {
            RecordKind::Crossing => self.normalize_crossing(raw).map(LocatedEntity::Crossing),
            RecordKind::Siding => Some(LocatedEntity::Siding(self.normalize_siding(raw))),
            RecordKind::TrackSegment => {
                Some(LocatedEntity::TrackSegment(self.normalize_track(raw)))
            }
        }
    }

    /// Normalize a crossing record; position is mandatory
    pub fn normalize_crossing(&self, raw: &RawRecord) -> Option<Crossing> {
        let aliases = &self.aliases;
        let milepost = aliases
            .resolve(raw, &aliases.milepost)
            .and_then(parse_milepost)?;

        Some(Crossing {
            milepost,
            common_name: text_or(
                aliases.resolve(raw, &aliases.common_name),
                UNKNOWN_CROSSING_NAME,
            ),
            road_name: text_or(aliases.resolve(raw, &aliases.road_name), ""),
            protection: text_or(aliases.resolve(raw, &aliases.protection), ""),
            identifier: text_or(aliases.resolve(raw, &aliases.identifier), MISSING_IDENTIFIER),
            state: optional_text(aliases.resolve(raw, &aliases.state)),
            subdivision: optional_text(aliases.resolve(raw, &aliases.subdivision)),
        })
    }

    /// Normalize a siding record; unusable endpoints drop the derived length
    pub fn normalize_siding(&self, raw: &RawRecord) -> Siding {
        let aliases = &self.aliases;

        Siding {
            name: text_or(
                aliases.resolve(raw, &aliases.siding_name),
                UNKNOWN_SIDING_NAME,
            ),
            start_milepost: aliases
                .resolve(raw, &aliases.start_milepost)
                .and_then(parse_milepost),
            end_milepost: aliases
                .resolve(raw, &aliases.end_milepost)
                .and_then(parse_milepost),
            state: optional_text(aliases.resolve(raw, &aliases.state)),
            subdivision: optional_text(aliases.resolve(raw, &aliases.subdivision)),
        }
    }

    /// Normalize a yard track record.
    ///
    /// An explicit length field wins; otherwise the length derives from a
    /// start/end milepost pair when both endpoints parse.
    pub fn normalize_track(&self, raw: &RawRecord) -> TrackSegment {
        let aliases = &self.aliases;

        let explicit_length = aliases
            .resolve(raw, &aliases.length)
            .and_then(parse_milepost)
            .filter(|length| *length >= 0.0);

        let derived_length = match (
            aliases
                .resolve(raw, &aliases.start_milepost)
                .and_then(parse_milepost),
            aliases
                .resolve(raw, &aliases.end_milepost)
                .and_then(parse_milepost),
        ) {
            (Some(start), Some(end)) => Some((end - start).abs() * FEET_PER_MILE),
            _ => None,
        };

        TrackSegment {
            yard: text_or(aliases.resolve(raw, &aliases.yard), ""),
            track_label: text_or(
                aliases.resolve(raw, &aliases.track_label),
                UNKNOWN_TRACK_LABEL,
            ),
            length_feet: explicit_length.or(derived_length),
            state: optional_text(aliases.resolve(raw, &aliases.state)),
        }
    }

    /// Normalize a batch of crossing records, counting rejects
    pub fn normalize_crossings(&self, records: &[RawRecord]) -> (Vec<Crossing>, NormalizeStats) {
        let mut stats = NormalizeStats::default();
        let mut crossings = Vec::with_capacity(records.len());

        for record in records {
            stats.records_seen += 1;
            match self.normalize_crossing(record) {
                Some(crossing) => {
                    crossings.push(crossing);
                    stats.records_accepted += 1;
                }
                None => {
                    stats.records_dropped += 1;
                    debug!("Dropped crossing row {}: no usable milepost", record.row);
                }
            }
        }

        (crossings, stats)
    }

    /// Normalize a batch of siding records, counting missing lengths
    pub fn normalize_sidings(&self, records: &[RawRecord]) -> (Vec<Siding>, NormalizeStats) {
        let mut stats = NormalizeStats::default();
        let mut sidings = Vec::with_capacity(records.len());

        for record in records {
            stats.records_seen += 1;
            let siding = self.normalize_siding(record);
            if siding.length_feet().is_none() {
                stats.lengths_missing += 1;
            }
            sidings.push(siding);
            stats.records_accepted += 1;
        }

        (sidings, stats)
    }

    /// Normalize a batch of yard track records, counting missing lengths
    pub fn normalize_tracks(&self, records: &[RawRecord]) -> (Vec<TrackSegment>, NormalizeStats) {
        let mut stats = NormalizeStats::default();
        let mut tracks = Vec::with_capacity(records.len());

        for record in records {
            stats.records_seen += 1;
            let track = self.normalize_track(record);
            if track.length_feet.is_none() {
                stats.lengths_missing += 1;
            }
            tracks.push(track);
            stats.records_accepted += 1;
        }

        (tracks, stats)
    }
}
