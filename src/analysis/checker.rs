// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord-scale containment checks.
//!
//! A chord fits a scale when every chord pitch class is a member of the
//! scale's pitch-class set. Pure set containment, no ordering sensitivity.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::music::note::{Interval, PitchClass};

/// A scale the user has selected, by display name and root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleSelection {
    pub scale: String,
    pub root: PitchClass,
}

/// Pitch classes of a scale built on `root`
pub fn scale_pitch_classes(root: PitchClass, intervals: &[Interval]) -> BTreeSet<PitchClass> {
    intervals
        .iter()
        .map(|&interval| (root + interval) % 12)
        .collect()
}

/// True iff every chord pitch class lies inside the scale
pub fn chord_fits_in_scale(
    chord: &BTreeSet<PitchClass>,
    root: PitchClass,
    intervals: &[Interval],
) -> bool {
    let scale = scale_pitch_classes(root, intervals);
    chord.iter().all(|pc| scale.contains(pc))
}

/// True iff the chord fits at least one of the selected scales.
///
/// An empty selection applies no filter and returns true. Selections naming
/// a scale the catalog does not know are skipped.
pub fn chord_fits_in_any_scale(
    chord: &BTreeSet<PitchClass>,
    selections: &[ScaleSelection],
    catalog: &Catalog,
) -> bool {
    if selections.is_empty() {
        return true;
    }

    selections.iter().any(|selection| {
        catalog
            .by_name(&selection.scale)
            .is_some_and(|scale| chord_fits_in_scale(chord, selection.root, &scale.intervals))
    })
}

/// True iff the chord fits every selected scale.
///
/// An empty selection applies no filter and returns true. A selection naming
/// an unknown scale fails the whole check.
pub fn chord_fits_in_all_scales(
    chord: &BTreeSet<PitchClass>,
    selections: &[ScaleSelection],
    catalog: &Catalog,
) -> bool {
    if selections.is_empty() {
        return true;
    }

    selections.iter().all(|selection| {
        match catalog.by_name(&selection.scale) {
            Some(scale) => chord_fits_in_scale(chord, selection.root, &scale.intervals),
            None => false,
        }
    })
}
