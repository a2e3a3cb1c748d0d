// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class arithmetic and note naming.
//!
//! Notes are identified by their pitch class (0-11); the spelled name is a
//! display concern chosen by an accidental preference. Conversion is total
//! for every string matching `[A-G]` plus an optional accidental.

use std::collections::BTreeSet;

use crate::error::MusicError;

/// Pitch class type (0-11)
pub type PitchClass = u8;

/// Semitones above a scale's root (0-11)
pub type Interval = u8;

/// Note names using sharps
pub const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Note names using flats
pub const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Get the note name for a pitch class
pub fn note_name(pitch_class: PitchClass, prefer_sharps: bool) -> &'static str {
    let names = if prefer_sharps {
        &NOTE_NAMES_SHARP
    } else {
        &NOTE_NAMES_FLAT
    };
    names[(pitch_class % 12) as usize]
}

/// Parse a note name into its pitch class.
///
/// Accepts a letter A-G (either case) plus an optional accidental
/// (`#`, `b`, `♯`, `♭`). Enharmonic edge spellings like `E#` and `Cb`
/// wrap arithmetically.
pub fn pitch_class_of(note: &str) -> Result<PitchClass, MusicError> {
    let trimmed = note.trim();
    let mut chars = trimmed.chars();

    let letter = chars
        .next()
        .ok_or_else(|| MusicError::InvalidNote(note.to_string()))?;

    let base: i8 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(MusicError::InvalidNote(note.to_string())),
    };

    let offset: i8 = match chars.next() {
        None => 0,
        Some('#') | Some('♯') => 1,
        Some('b') | Some('♭') => -1,
        Some(_) => return Err(MusicError::InvalidNote(note.to_string())),
    };

    if chars.next().is_some() {
        return Err(MusicError::InvalidNote(note.to_string()));
    }

    Ok((base + offset).rem_euclid(12) as PitchClass)
}

/// Normalize a note token to its canonical spelling (uppercase letter,
/// ASCII accidental), without changing its pitch class.
pub fn normalize_note_name(note: &str) -> Result<String, MusicError> {
    let trimmed = note.trim();
    pitch_class_of(trimmed)?;

    let mut chars = trimmed.chars();
    let letter = chars.next().unwrap().to_ascii_uppercase();
    let accidental = match chars.next() {
        Some('#') | Some('♯') => "#",
        Some('b') | Some('♭') => "b",
        _ => "",
    };
    Ok(format!("{}{}", letter, accidental))
}

/// Calculate the notes in a scale given a root and intervals
pub fn scale_notes(
    root: PitchClass,
    intervals: &[Interval],
    prefer_sharps: bool,
) -> Vec<&'static str> {
    intervals
        .iter()
        .map(|&interval| note_name((root + interval) % 12, prefer_sharps))
        .collect()
}

/// Result of parsing a free-form note list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedNotes {
    /// Successfully parsed notes, in input order, canonically spelled
    pub notes: Vec<String>,
    /// Combined pitch classes of all parsed notes
    pub pitch_classes: BTreeSet<PitchClass>,
    /// Per-token error messages for tokens that failed to parse
    pub errors: Vec<String>,
}

/// Parse a whitespace/comma separated note list.
///
/// Trailing octave digits on a token (e.g. `C4`) are accepted and ignored.
/// Invalid tokens are reported in `errors`; valid tokens are still returned.
pub fn parse_notes(input: &str) -> ParsedNotes {
    let mut result = ParsedNotes::default();

    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        // Strip octave noise
        let bare = token.trim_end_matches(|c: char| c.is_ascii_digit());

        match pitch_class_of(bare) {
            Ok(pc) => {
                result.notes.push(normalize_note_name(bare).unwrap_or_else(|_| bare.to_string()));
                result.pitch_classes.insert(pc);
            }
            Err(_) => result.errors.push(format!("Invalid note: \"{}\"", token)),
        }
    }

    result
}

/// Assign octaves to a sequence of note names by walking it in order and
/// bumping the running octave whenever the pitch class drops below the
/// previous one (chromatic wraparound).
///
/// Only correct for input already in ascending scale order starting near the
/// root; descending or non-monotonic sequences are a precondition violation.
pub fn assign_octaves(notes: &[&str], base_octave: i8) -> Result<Vec<(String, i8)>, MusicError> {
    let mut assigned = Vec::with_capacity(notes.len());
    let mut octave = base_octave;
    let mut previous: Option<PitchClass> = None;

    for &note in notes {
        let pc = pitch_class_of(note)?;
        if let Some(prev) = previous {
            if pc < prev {
                octave += 1;
            }
        }
        previous = Some(pc);
        assigned.push((note.to_string(), octave));
    }

    Ok(assigned)
}
