// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Triads shared across a set of scales.
//!
//! Chords are keyed by (pitch class, quality) so enharmonic spellings of
//! the same triad collapse into one entry.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::ScaleType;
use crate::music::note::{note_name, scale_notes, PitchClass};
use crate::music::triad::{calculate_triads, triad_abbreviation, TriadQuality};

/// A scale instance chosen for comparison
#[derive(Debug, Clone)]
pub struct SelectedScale {
    /// Root pitch class 0-11
    pub root: PitchClass,
    pub scale_type: ScaleType,
}

impl SelectedScale {
    pub fn new(root: PitchClass, scale_type: ScaleType) -> Self {
        SelectedScale { root, scale_type }
    }

    /// Display name like "C Major"
    pub fn display_name(&self, prefer_sharps: bool) -> String {
        format!("{} {}", note_name(self.root, prefer_sharps), self.scale_type.name)
    }
}

/// A triad occurring in one or more of the selected scales
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonChord {
    /// Root note name as first spelled
    pub root: &'static str,
    pub root_pitch_class: PitchClass,
    pub quality: TriadQuality,
    /// Abbreviated symbol, e.g. "C", "Dm", "F#°"
    pub symbol: String,
    /// How many of the selected scales contain this chord
    pub count: usize,
    /// Sorted display names of the containing scales
    pub scale_names: Vec<String>,
}

struct ChordEntry {
    root: &'static str,
    symbol: String,
    scale_names: BTreeSet<String>,
}

/// Find triads shared across the selected scales.
///
/// With two or more scales selected, only chords present in at least two
/// of them are returned; a single selected scale reports all of its
/// triads. Results are ranked by scale count, then root pitch class.
pub fn find_common_chords(scales: &[SelectedScale], prefer_sharps: bool) -> Vec<CommonChord> {
    if scales.is_empty() {
        return Vec::new();
    }

    let mut chord_map: BTreeMap<(PitchClass, TriadQuality), ChordEntry> = BTreeMap::new();

    for scale in scales {
        let notes = scale_notes(scale.root, &scale.scale_type.intervals, prefer_sharps);
        let triads = calculate_triads(&notes, &scale.scale_type.intervals);
        let scale_name = scale.display_name(prefer_sharps);

        for triad in &triads {
            let root_pc = (scale.root + scale.scale_type.intervals[triad.degree]) % 12;
            chord_map
                .entry((root_pc, triad.quality))
                .or_insert_with(|| ChordEntry {
                    root: triad.root,
                    symbol: triad_abbreviation(triad.root, triad.quality),
                    scale_names: BTreeSet::new(),
                })
                .scale_names
                .insert(scale_name.clone());
        }
    }

    let mut common: Vec<CommonChord> = chord_map
        .into_iter()
        .filter_map(|((root_pc, quality), entry)| {
            let count = entry.scale_names.len();
            if scales.len() == 1 || count >= 2 {
                Some(CommonChord {
                    root: entry.root,
                    root_pitch_class: root_pc,
                    quality,
                    symbol: entry.symbol,
                    count,
                    scale_names: entry.scale_names.into_iter().collect(),
                })
            } else {
                None
            }
        })
        .collect();

    common.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.root_pitch_class.cmp(&b.root_pitch_class))
    });

    common
}

/// Breakdown of how widely the common chords are shared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonChordStats {
    pub total: usize,
    /// Present in every selected scale
    pub universal: usize,
    /// Present in two or more, but not all
    pub shared: usize,
    /// Present in only one scale
    pub unique: usize,
}

pub fn common_chord_stats(chords: &[CommonChord], total_scales: usize) -> CommonChordStats {
    CommonChordStats {
        total: chords.len(),
        universal: chords.iter().filter(|c| c.count == total_scales).count(),
        shared: chords
            .iter()
            .filter(|c| c.count >= 2 && c.count < total_scales)
            .count(),
        unique: chords.iter().filter(|c| c.count == 1).count(),
    }
}
