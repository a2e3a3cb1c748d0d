// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord symbol parsing.
//!
//! Parses symbols like `C`, `Am7`, `F#maj7`, `Bbdim7` or `Dm7/G` into
//! pitch-class sets against a fixed quality table. The table is data the
//! rest of the engine depends on; keep it stable.

use std::collections::BTreeSet;

use crate::error::MusicError;
use crate::music::note::{normalize_note_name, pitch_class_of, PitchClass};

/// A chord quality: intervals from the root plus a display suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordQuality {
    pub intervals: &'static [u8],
    pub display_suffix: &'static str,
}

/// Look up a chord quality by its normalized key.
///
/// Triads, sevenths and sixths; 16 entries total.
pub fn chord_quality(key: &str) -> Option<ChordQuality> {
    let (intervals, display_suffix): (&'static [u8], &'static str) = match key {
        // Triads
        "" => (&[0, 4, 7], ""),
        "m" => (&[0, 3, 7], "m"),
        "dim" => (&[0, 3, 6], "dim"),
        "aug" => (&[0, 4, 8], "aug"),
        "sus2" => (&[0, 2, 7], "sus2"),
        "sus4" => (&[0, 5, 7], "sus4"),

        // 7th chords
        "maj7" => (&[0, 4, 7, 11], "maj7"),
        "m7" => (&[0, 3, 7, 10], "m7"),
        "dim7" => (&[0, 3, 6, 9], "dim7"),
        "7" => (&[0, 4, 7, 10], "7"),
        "mmaj7" => (&[0, 3, 7, 11], "mmaj7"),
        "m7b5" => (&[0, 3, 6, 10], "ø7"),
        "aug7" => (&[0, 4, 8, 10], "aug7"),
        "7sus4" => (&[0, 5, 7, 10], "7sus4"),

        // 6th chords
        "6" => (&[0, 4, 7, 9], "6"),
        "m6" => (&[0, 3, 7, 9], "m6"),

        _ => return None,
    };
    Some(ChordQuality {
        intervals,
        display_suffix,
    })
}

/// Normalize common quality aliases to table keys.
///
/// Applied after lowercasing, so `Min7` arrives here as `min7`.
fn normalize_quality(quality: &str) -> &str {
    match quality {
        "min" | "minor" | "-" | "mi" => "m",
        "maj" | "major" => "",
        "diminished" | "°" => "dim",
        "augmented" | "+" => "aug",
        "dominant" | "dom" => "7",
        "Δ" | "δ" => "maj7",
        "ø" => "m7b5",
        other => other,
    }
}

/// A parsed chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    /// Canonically spelled root (e.g. "C#", "Bb")
    pub root: String,
    pub root_pitch_class: PitchClass,
    /// Quality key into the quality table ("major" for the empty key)
    pub quality: String,
    /// Pitch classes of all chord tones, bass included
    pub pitch_classes: BTreeSet<PitchClass>,
    /// Canonical display form, e.g. "Cmaj7" or "Dm7/G"
    pub display_name: String,
    /// Bass note for slash chords
    pub bass: Option<String>,
    pub bass_pitch_class: Option<PitchClass>,
}

/// Result of parsing a chord list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedChords {
    pub chords: Vec<Chord>,
    pub errors: Vec<String>,
    /// Union of pitch classes across all parsed chords
    pub pitch_classes: BTreeSet<PitchClass>,
}

/// Split a slash chord into its chord part and bass note, when the suffix
/// after the final `/` is a valid note. Otherwise the whole symbol is left
/// for the chord parser to reject.
fn split_slash_bass(symbol: &str) -> (&str, Option<(String, PitchClass)>) {
    if let Some(idx) = symbol.rfind('/') {
        let bass_part = symbol[idx + 1..].trim();
        if let (Ok(pc), Ok(name)) = (pitch_class_of(bass_part), normalize_note_name(bass_part)) {
            return (symbol[..idx].trim(), Some((name, pc)));
        }
    }
    (symbol, None)
}

/// Parse a single chord symbol.
///
/// Grammar: root letter A-G, optional accidental (`#`, `b`, `♯`, `♭`),
/// optional quality, optional `/bass`.
pub fn parse_chord(symbol: &str) -> Result<Chord, MusicError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(MusicError::UnparsableChord(symbol.to_string()));
    }

    let (chord_part, bass) = split_slash_bass(trimmed);

    let mut chars = chord_part.char_indices();
    let letter = match chars.next() {
        Some((_, c)) if matches!(c.to_ascii_uppercase(), 'A'..='G') => c.to_ascii_uppercase(),
        _ => return Err(MusicError::UnparsableChord(symbol.to_string())),
    };

    let (accidental, rest_start) = match chars.next() {
        Some((i, c @ ('#' | '♯'))) => ("#", i + c.len_utf8()),
        Some((i, c @ ('b' | '♭'))) => ("b", i + c.len_utf8()),
        Some((i, _)) => ("", i),
        None => ("", chord_part.len()),
    };

    let root = format!("{}{}", letter, accidental);
    let root_pitch_class = pitch_class_of(&root)?;

    let quality_str = chord_part[rest_start..].trim().to_lowercase();
    let quality_key = normalize_quality(&quality_str).to_string();

    let quality = chord_quality(&quality_key)
        .ok_or_else(|| MusicError::UnparsableChord(symbol.to_string()))?;

    let mut pitch_classes: BTreeSet<PitchClass> = quality
        .intervals
        .iter()
        .map(|&interval| (root_pitch_class + interval) % 12)
        .collect();

    // The bass is folded in even when it duplicates a chord tone
    if let Some((_, bass_pc)) = &bass {
        pitch_classes.insert(*bass_pc);
    }

    let display_name = match &bass {
        Some((bass_name, _)) => format!("{}{}/{}", root, quality.display_suffix, bass_name),
        None => format!("{}{}", root, quality.display_suffix),
    };

    Ok(Chord {
        root,
        root_pitch_class,
        quality: if quality_key.is_empty() {
            "major".to_string()
        } else {
            quality_key
        },
        pitch_classes,
        display_name,
        bass: bass.as_ref().map(|(name, _)| name.clone()),
        bass_pitch_class: bass.map(|(_, pc)| pc),
    })
}

/// Parse a whitespace/comma separated list of chord symbols.
///
/// Invalid tokens become error strings; valid tokens are still returned.
pub fn parse_chords(input: &str) -> ParsedChords {
    let mut result = ParsedChords::default();

    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match parse_chord(token) {
            Ok(chord) => {
                result.pitch_classes.extend(chord.pitch_classes.iter().copied());
                result.chords.push(chord);
            }
            Err(_) => result.errors.push(format!("Invalid chord: \"{}\"", token)),
        }
    }

    result
}

/// Human-readable list of supported chord families, for help output
pub fn supported_chord_types() -> Vec<&'static str> {
    vec![
        "Major triads: C, D, E, etc.",
        "Minor triads: Cm, Dm, Em, etc.",
        "Diminished: Cdim, Ddim, etc.",
        "Augmented: Caug, Daug, etc.",
        "Suspended: Csus2, Dsus4, etc.",
        "Major 7th: Cmaj7, Dmaj7, etc.",
        "Minor 7th: Cm7, Dm7, etc.",
        "Dominant 7th: C7, D7, etc.",
        "Diminished 7th: Cdim7, Ddim7, etc.",
        "Half-diminished: Cm7b5, Dm7b5, etc.",
        "Major 6th: C6, D6, etc.",
        "Minor 6th: Cm6, Dm6, etc.",
        "Minor major 7th: Cmmaj7, Dmmaj7, etc.",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(chord: &Chord) -> Vec<u8> {
        chord.pitch_classes.iter().copied().collect()
    }

    #[test]
    fn test_parse_major_triad() {
        let chord = parse_chord("C").unwrap();
        assert_eq!(chord.root, "C");
        assert_eq!(chord.quality, "major");
        assert_eq!(pcs(&chord), vec![0, 4, 7]);
        assert_eq!(chord.display_name, "C");
    }

    #[test]
    fn test_parse_cmaj7() {
        let chord = parse_chord("Cmaj7").unwrap();
        assert_eq!(pcs(&chord), vec![0, 4, 7, 11]);
        assert_eq!(chord.display_name, "Cmaj7");
    }

    #[test]
    fn test_parse_minor_with_accidental() {
        let chord = parse_chord("F#m7").unwrap();
        assert_eq!(chord.root, "F#");
        assert_eq!(chord.root_pitch_class, 6);
        assert_eq!(chord.quality, "m7");
        assert_eq!(pcs(&chord), vec![1, 4, 6, 9]);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_chord("Cmin7").unwrap(), parse_chord("Cm7").unwrap());
        assert_eq!(parse_chord("Cmaj").unwrap(), parse_chord("C").unwrap());
        assert_eq!(parse_chord("C°").unwrap().quality, "dim");
        assert_eq!(parse_chord("C+").unwrap().quality, "aug");
        assert_eq!(parse_chord("Cø").unwrap().quality, "m7b5");
    }

    #[test]
    fn test_parse_slash_chord() {
        let chord = parse_chord("C/E").unwrap();
        assert_eq!(chord.bass.as_deref(), Some("E"));
        assert_eq!(chord.bass_pitch_class, Some(4));
        assert_eq!(pcs(&chord), vec![0, 4, 7]);
        assert_eq!(chord.display_name, "C/E");
    }

    #[test]
    fn test_parse_slash_chord_adds_outside_bass() {
        let chord = parse_chord("Dm7/G").unwrap();
        assert_eq!(pcs(&chord), vec![0, 2, 5, 7, 9]);
        assert_eq!(chord.display_name, "Dm7/G");
    }

    #[test]
    fn test_parse_half_diminished_display() {
        let chord = parse_chord("Bm7b5").unwrap();
        assert_eq!(chord.display_name, "Bø7");
        assert_eq!(pcs(&chord), vec![2, 5, 9, 11]);
    }

    #[test]
    fn test_parse_invalid_chords() {
        assert!(parse_chord("H").is_err());
        assert!(parse_chord("Cx9").is_err());
        assert!(parse_chord("").is_err());
        assert!(parse_chord("C/X").is_err());
    }

    #[test]
    fn test_parse_chords_partial_success() {
        let result = parse_chords("C Am XYZ G7");
        assert_eq!(result.chords.len(), 3);
        assert_eq!(result.errors, vec!["Invalid chord: \"XYZ\""]);
        // C(0,4,7) + Am(9,0,4) + G7(7,11,2,5)
        assert_eq!(
            result.pitch_classes.iter().copied().collect::<Vec<_>>(),
            vec![0, 2, 4, 5, 7, 9, 11]
        );
    }

    #[test]
    fn test_parse_chords_comma_separated() {
        let result = parse_chords("C, Am, F, G");
        assert_eq!(result.chords.len(), 4);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_quality_table_sizes() {
        for key in [
            "", "m", "dim", "aug", "sus2", "sus4", "maj7", "m7", "dim7", "7", "mmaj7", "m7b5",
            "aug7", "7sus4", "6", "m6",
        ] {
            let quality = chord_quality(key).unwrap();
            assert!(quality.intervals.len() == 3 || quality.intervals.len() == 4);
            assert_eq!(quality.intervals[0], 0);
        }
        assert!(chord_quality("9").is_none());
    }
}
