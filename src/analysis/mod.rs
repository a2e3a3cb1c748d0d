// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonic analysis over the scale catalog.
//!
//! Everything here takes the catalog (or a selection from it) plus some
//! user input and answers a question about it: which scales hold these
//! notes, which chords fit, what are the near relatives of a scale.

pub mod characteristics;
pub mod checker;
pub mod chord_types;
pub mod common_chords;
pub mod finder;
pub mod relatives;

pub use characteristics::analyze_scale_characteristics;
pub use checker::{
    chord_fits_in_all_scales, chord_fits_in_any_scale, chord_fits_in_scale, ScaleSelection,
};
pub use chord_types::{
    find_scales_by_chord_types, parse_chord_types, ChordTypeMatch, ParsedChordTypes,
};
pub use common_chords::{find_common_chords, CommonChord, SelectedScale};
pub use finder::{find_scales_containing, ScaleMatch};
pub use relatives::{find_relative_scales, find_second_degree_relatives, RelativeScale};
