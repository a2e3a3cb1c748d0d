// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale playback patterns.
//!
//! Patterns are step-number sequences handed to the external audio engine:
//! 1-7 select scale degrees, 8 is the octave-up tonic, 0 is silence. The
//! engine itself lives outside this crate; we only produce note names with
//! octave offsets.

use std::fmt;

/// Available playback patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePattern {
    Ascending,
    Descending,
    Alternating,
    Ladder,
}

impl ScalePattern {
    /// All patterns, in display order
    pub const ALL: [ScalePattern; 4] = [
        ScalePattern::Ascending,
        ScalePattern::Descending,
        ScalePattern::Alternating,
        ScalePattern::Ladder,
    ];

    /// The step-number sequence for this pattern
    pub fn steps(self) -> &'static [u8] {
        match self {
            ScalePattern::Ascending => &[1, 2, 3, 4, 5, 6, 7, 8],
            ScalePattern::Descending => &[8, 7, 6, 5, 4, 3, 2, 1],
            ScalePattern::Alternating => &[1, 2, 3, 4, 5, 6, 7, 8, 7, 6, 5, 4, 3, 2, 1],
            ScalePattern::Ladder => &[
                1, 2, 3, 2, 3, 4, 5, 4, 5, 6, 7, 6, 7, 8, 7, 6, 7, 6, 5, 4, 5, 4, 3, 2, 3, 2, 1,
            ],
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ScalePattern::Ascending => "Ascending",
            ScalePattern::Descending => "Descending",
            ScalePattern::Alternating => "Alternating",
            ScalePattern::Ladder => "Ladder",
        }
    }

    /// Parse a pattern id
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ascending" => Some(ScalePattern::Ascending),
            "descending" => Some(ScalePattern::Descending),
            "alternating" => Some(ScalePattern::Alternating),
            "ladder" => Some(ScalePattern::Ladder),
            _ => None,
        }
    }
}

impl fmt::Display for ScalePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One step of a realized pattern: a note with an octave offset, or silence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNote {
    /// `None` is a rest
    pub note: Option<String>,
    /// Octaves above the base octave
    pub octave_offset: i8,
}

/// Realize a pattern against a scale's notes (root through leading tone).
///
/// Degree numbers beyond the scale length (e.g. step 7 against a pentatonic)
/// become rests.
pub fn generate_note_sequence(notes: &[&str], pattern: ScalePattern) -> Vec<PatternNote> {
    pattern
        .steps()
        .iter()
        .map(|&step| match step {
            0 => PatternNote {
                note: None,
                octave_offset: 0,
            },
            8 => PatternNote {
                note: notes.first().map(|n| n.to_string()),
                octave_offset: 1,
            },
            degree => PatternNote {
                note: notes.get(degree as usize - 1).map(|n| n.to_string()),
                octave_offset: 0,
            },
        })
        .collect()
}
