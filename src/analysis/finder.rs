// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale search by note content.
//!
//! Brute-force over every catalog scale at every root: keep the scales
//! whose pitch-class set contains the whole query, ranked by how few extra
//! notes they add.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, ScaleType};
use crate::music::note::{note_name, pitch_class_of, PitchClass};

/// A scale containing the queried pitch classes
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMatch<'a> {
    pub scale_type: &'a ScaleType,
    /// Root pitch class 0-11
    pub root: PitchClass,
    pub root_name: &'static str,
    pub scale_notes: Vec<&'static str>,
    pub scale_pitch_classes: BTreeSet<PitchClass>,
    /// Scale tones beyond the queried set
    pub extra_notes: usize,
    /// Names of the scale tones that were queried
    pub matched_notes: Vec<&'static str>,
}

/// Find all (scale type, root) pairs whose pitch-class set is a superset of
/// the query. An empty query returns no matches.
///
/// Results are ranked by extra-note count, then scale name; ties keep
/// catalog-then-root order.
pub fn find_scales_containing<'a>(
    query: &BTreeSet<PitchClass>,
    catalog: &'a Catalog,
    prefer_sharps: bool,
) -> Vec<ScaleMatch<'a>> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();

    for scale_type in &catalog.scale_types {
        for root in 0..12u8 {
            let mut scale_pitch_classes = BTreeSet::new();
            let mut scale_notes = Vec::with_capacity(scale_type.intervals.len());

            for &interval in &scale_type.intervals {
                let pc = (root + interval) % 12;
                scale_pitch_classes.insert(pc);
                scale_notes.push(note_name(pc, prefer_sharps));
            }

            if !query.iter().all(|pc| scale_pitch_classes.contains(pc)) {
                continue;
            }

            let matched_notes = scale_notes
                .iter()
                .copied()
                .filter(|note| {
                    pitch_class_of(note)
                        .map(|pc| query.contains(&pc))
                        .unwrap_or(false)
                })
                .collect();

            matches.push(ScaleMatch {
                scale_type,
                root,
                root_name: note_name(root, prefer_sharps),
                extra_notes: scale_pitch_classes.len() - query.len(),
                scale_notes,
                scale_pitch_classes,
                matched_notes,
            });
        }
    }

    matches.sort_by(|a, b| {
        a.extra_notes
            .cmp(&b.extra_notes)
            .then_with(|| a.scale_type.name.cmp(&b.scale_type.name))
    });

    matches
}
