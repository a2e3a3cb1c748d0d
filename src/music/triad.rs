// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale-degree triads.
//!
//! Builds the triad on every degree of a scale (degree, degree+2, degree+4),
//! classifies it by its stacked intervals, and computes which chord
//! extensions the surrounding scale tones make available.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::music::note::Interval;

/// Quality of a scale-degree triad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
}

impl TriadQuality {
    /// Classify by the semitone pattern (root-to-third, third-to-fifth).
    ///
    /// Unrecognized patterns fall back to major; some catalog scales have
    /// degree spacings outside the six standard shapes and still get a
    /// nominal triad.
    pub fn from_interval_pair(root_to_third: u8, third_to_fifth: u8) -> Self {
        match (root_to_third, third_to_fifth) {
            (4, 3) => TriadQuality::Major,
            (3, 4) => TriadQuality::Minor,
            (3, 3) => TriadQuality::Diminished,
            (4, 4) => TriadQuality::Augmented,
            (2, 5) => TriadQuality::Sus2,
            (5, 2) => TriadQuality::Sus4,
            _ => TriadQuality::Major, // nominal fallback
        }
    }

    /// Abbreviated chord suffix ("", "m", "°", "+", "sus2", "sus4")
    pub fn suffix(self) -> &'static str {
        match self {
            TriadQuality::Major => "",
            TriadQuality::Minor => "m",
            TriadQuality::Diminished => "°",
            TriadQuality::Augmented => "+",
            TriadQuality::Sus2 => "sus2",
            TriadQuality::Sus4 => "sus4",
        }
    }

    /// Full name suffix (" major", " minor", ...)
    pub fn name_suffix(self) -> &'static str {
        match self {
            TriadQuality::Major => " major",
            TriadQuality::Minor => " minor",
            TriadQuality::Diminished => " diminished",
            TriadQuality::Augmented => " augmented",
            TriadQuality::Sus2 => " sus2",
            TriadQuality::Sus4 => " sus4",
        }
    }

    /// Display name with initial capital
    pub fn display_name(self) -> &'static str {
        match self {
            TriadQuality::Major => "Major",
            TriadQuality::Minor => "Minor",
            TriadQuality::Diminished => "Diminished",
            TriadQuality::Augmented => "Augmented",
            TriadQuality::Sus2 => "Sus2",
            TriadQuality::Sus4 => "Sus4",
        }
    }

    /// Format a base roman numeral for this quality
    pub fn format_roman(self, base: &str) -> String {
        match self {
            TriadQuality::Major => base.to_string(),
            TriadQuality::Minor => base.to_lowercase(),
            TriadQuality::Diminished => format!("{}°", base.to_lowercase()),
            TriadQuality::Augmented => format!("{}+", base),
            TriadQuality::Sus2 => format!("{}sus2", base),
            TriadQuality::Sus4 => format!("{}sus4", base),
        }
    }
}

impl fmt::Display for TriadQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

const BASE_ROMAN_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// A triad built on a scale degree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triad {
    /// 0-based scale degree (0 = tonic)
    pub degree: usize,
    /// Root note name
    pub root: &'static str,
    pub quality: TriadQuality,
    /// The three constituent note names
    pub notes: [&'static str; 3],
    /// e.g. "I", "ii", "vii°"
    pub roman_numeral: String,
    /// Available extensions from the surrounding scale tones
    pub extensions: Vec<&'static str>,
}

/// Full name of a triad, e.g. "C major"
pub fn triad_name(root: &str, quality: TriadQuality) -> String {
    format!("{}{}", root, quality.name_suffix())
}

/// Abbreviated name of a triad, e.g. "Cm", "F#°"
pub fn triad_abbreviation(root: &str, quality: TriadQuality) -> String {
    format!("{}{}", root, quality.suffix())
}

fn roman_numeral(degree: usize, quality: TriadQuality) -> String {
    let base = BASE_ROMAN_NUMERALS.get(degree).copied().unwrap_or("?");
    quality.format_roman(base)
}

/// Compute the extensions available to a triad from the scale it sits in.
///
/// Intervals are measured from the triad's own root, not the scale's root.
/// `actual_fifth` is the triad's fifth in semitones (6 dim, 7 perfect, 8 aug).
fn calculate_extensions(
    root_interval: Interval,
    actual_fifth: u8,
    scale_intervals: &[Interval],
) -> Vec<&'static str> {
    let mut extensions = Vec::new();

    let available: Vec<u8> = scale_intervals
        .iter()
        .map(|&interval| (interval + 12 - root_interval) % 12)
        .collect();

    let has_natural_fifth = actual_fifth == 7;
    let has_dim_fifth = actual_fifth == 6;
    let has_aug_fifth = actual_fifth == 8;
    let scale_has_aug_fifth = available.contains(&8);
    let scale_has_sixth = available.contains(&9);
    let scale_has_minor_seventh = available.contains(&10);
    let scale_has_major_seventh = available.contains(&11);

    if has_dim_fifth && scale_has_aug_fifth {
        extensions.push("alt5");
    }
    if has_natural_fifth && scale_has_aug_fifth {
        extensions.push("#5");
    }
    if scale_has_sixth && !has_aug_fifth {
        extensions.push("6");
    }
    if scale_has_major_seventh {
        extensions.push("maj7");
    } else if scale_has_minor_seventh {
        extensions.push("7");
    }

    extensions
}

/// Expand `alt5` into concrete `#5`/`b5` choices for display.
///
/// A diminished triad already carries its flat fifth, so only `#5` is shown
/// for it.
pub fn display_extensions(quality: TriadQuality, extensions: &[&'static str]) -> Vec<&'static str> {
    let mut display = Vec::new();
    for &extension in extensions {
        if extension == "alt5" {
            display.push("#5");
            if quality != TriadQuality::Diminished {
                display.push("b5");
            }
        } else {
            display.push(extension);
        }
    }
    display
}

/// Calculate the triad on every degree of a scale.
///
/// `scale_notes` and `intervals` must be parallel sequences. For scales with
/// more than 7 notes the third/fifth indices wrap past the octave; the
/// wrapped interval is lifted by an octave before the semitone distances are
/// reduced mod 12.
pub fn calculate_triads(scale_notes: &[&'static str], intervals: &[Interval]) -> Vec<Triad> {
    let len = scale_notes.len().min(intervals.len());
    let mut triads = Vec::with_capacity(len);

    for degree in 0..len {
        let third_index = (degree + 2) % len;
        let fifth_index = (degree + 4) % len;

        let root_interval = i32::from(intervals[degree]);
        let mut third_interval = i32::from(intervals[third_index]);
        let mut fifth_interval = i32::from(intervals[fifth_index]);

        // Octave lift for wrapped degrees (scales with more than 7 notes)
        if degree + 2 >= len {
            third_interval += 12;
        }
        if degree + 4 >= len {
            fifth_interval += 12;
            if degree + 2 < len && fifth_interval < third_interval {
                fifth_interval += 12;
            }
        }

        let root_to_third = (third_interval - root_interval).rem_euclid(12) as u8;
        let third_to_fifth = (fifth_interval - third_interval).rem_euclid(12) as u8;

        let quality = TriadQuality::from_interval_pair(root_to_third, third_to_fifth);
        let actual_fifth = root_to_third + third_to_fifth;
        let extensions =
            calculate_extensions(intervals[degree], actual_fifth, intervals);

        triads.push(Triad {
            degree,
            root: scale_notes[degree],
            quality,
            notes: [
                scale_notes[degree],
                scale_notes[third_index],
                scale_notes[fifth_index],
            ],
            roman_numeral: roman_numeral(degree, quality),
            extensions,
        });
    }

    triads
}

/// Roman numeral label for a raw interval above the root (scale-degree
/// header display, e.g. 6 → "#IV")
pub fn interval_roman_numeral(interval: Interval) -> &'static str {
    match interval % 12 {
        0 => "I",
        1 => "bII",
        2 => "II",
        3 => "bIII",
        4 => "III",
        5 => "IV",
        6 => "#IV",
        7 => "V",
        8 => "#V",
        9 => "VI",
        10 => "bVII",
        11 => "VII",
        _ => unreachable!(),
    }
}
