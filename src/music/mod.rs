// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives.
//!
//! This module provides pitch-class arithmetic, chord symbol parsing,
//! scale-degree triads, and playback pattern realization.

pub mod chord;
pub mod note;
pub mod pattern;
pub mod triad;

pub use chord::{parse_chord, parse_chords, Chord, ChordQuality, ParsedChords};
pub use note::{
    assign_octaves, note_name, parse_notes, pitch_class_of, scale_notes, Interval, ParsedNotes,
    PitchClass, NOTE_NAMES_FLAT, NOTE_NAMES_SHARP,
};
pub use pattern::{generate_note_sequence, PatternNote, ScalePattern};
pub use triad::{calculate_triads, Triad, TriadQuality};
