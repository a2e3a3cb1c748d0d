// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale search by triad variety.
//!
//! Finds catalog scales whose diatonic triads include every requested
//! quality, e.g. "which scales contain both diminished and augmented
//! triads?".

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Catalog, ScaleType};
use crate::music::note::{note_name, scale_notes, PitchClass};
use crate::music::triad::{calculate_triads, TriadQuality};

/// Requested triad qualities parsed from user input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedChordTypes {
    pub types: BTreeSet<TriadQuality>,
    pub errors: Vec<String>,
}

fn quality_alias(token: &str) -> Option<TriadQuality> {
    match token {
        "major" | "maj" => Some(TriadQuality::Major),
        "minor" | "min" | "m" => Some(TriadQuality::Minor),
        "diminished" | "dim" => Some(TriadQuality::Diminished),
        "augmented" | "aug" => Some(TriadQuality::Augmented),
        "sus2" => Some(TriadQuality::Sus2),
        "sus4" => Some(TriadQuality::Sus4),
        _ => None,
    }
}

/// Parse a chord type list like "major minor dim" or "maj, min, aug".
///
/// Tokens are matched case-insensitively against the quality aliases;
/// unrecognized tokens are reported without aborting the parse.
pub fn parse_chord_types(input: &str) -> ParsedChordTypes {
    let mut parsed = ParsedChordTypes::default();

    for token in input
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        match quality_alias(token) {
            Some(quality) => {
                parsed.types.insert(quality);
            }
            None => parsed.errors.push(format!("Unknown chord type: \"{}\"", token)),
        }
    }

    parsed
}

/// A scale whose diatonic triads cover all requested qualities
#[derive(Debug, Clone, PartialEq)]
pub struct ChordTypeMatch<'a> {
    pub scale_type: &'a ScaleType,
    /// Root pitch class 0-11
    pub root: PitchClass,
    pub root_name: &'static str,
    pub scale_notes: Vec<&'static str>,
    /// Count of each triad quality occurring in the scale
    pub triads_found: BTreeMap<TriadQuality, usize>,
    pub matched_types: BTreeSet<TriadQuality>,
}

/// Find all (scale type, root) pairs whose diatonic triads include every
/// requested quality. An empty request returns no matches.
///
/// Results are ranked by triad variety (more distinct qualities first),
/// then scale name.
pub fn find_scales_by_chord_types<'a>(
    requested: &BTreeSet<TriadQuality>,
    catalog: &'a Catalog,
    prefer_sharps: bool,
) -> Vec<ChordTypeMatch<'a>> {
    if requested.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();

    for scale_type in &catalog.scale_types {
        for root in 0..12u8 {
            let notes = scale_notes(root, &scale_type.intervals, prefer_sharps);
            let triads = calculate_triads(&notes, &scale_type.intervals);

            let mut triads_found: BTreeMap<TriadQuality, usize> = BTreeMap::new();
            for triad in &triads {
                *triads_found.entry(triad.quality).or_insert(0) += 1;
            }

            if !requested.iter().all(|q| triads_found.contains_key(q)) {
                continue;
            }

            matches.push(ChordTypeMatch {
                scale_type,
                root,
                root_name: note_name(root, prefer_sharps),
                scale_notes: notes,
                matched_types: triads_found.keys().copied().collect(),
                triads_found,
            });
        }
    }

    matches.sort_by(|a, b| {
        b.triads_found
            .len()
            .cmp(&a.triads_found.len())
            .then_with(|| a.scale_type.name.cmp(&b.scale_type.name))
    });

    matches
}

/// Supported chord type spellings, for help output
pub fn supported_chord_type_list() -> Vec<&'static str> {
    vec![
        "major (or maj)",
        "minor (or min, m)",
        "diminished (or dim)",
        "augmented (or aug)",
        "sus2",
        "sus4",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            scale_types: vec![
                ScaleType::new("major", "Major", "major-modes", vec![0, 2, 4, 5, 7, 9, 11]),
                ScaleType::new(
                    "harmonic-minor",
                    "Harmonic Minor",
                    "harmonic-minor-modes",
                    vec![0, 2, 3, 5, 7, 8, 11],
                ),
                ScaleType::new(
                    "whole-tone",
                    "Whole Tone",
                    "symmetrical",
                    vec![0, 2, 4, 6, 8, 10],
                ),
            ],
        }
    }

    #[test]
    fn test_parse_aliases_and_errors() {
        let parsed = parse_chord_types("maj, MIN dim bogus");
        assert!(parsed.types.contains(&TriadQuality::Major));
        assert!(parsed.types.contains(&TriadQuality::Minor));
        assert!(parsed.types.contains(&TriadQuality::Diminished));
        assert_eq!(parsed.errors, vec!["Unknown chord type: \"bogus\""]);
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_chord_types("   ");
        assert!(parsed.types.is_empty());
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn test_empty_request_returns_nothing() {
        assert!(find_scales_by_chord_types(&BTreeSet::new(), &catalog(), true).is_empty());
    }

    #[test]
    fn test_augmented_only_in_harmonic_minor() {
        let requested: BTreeSet<_> = [TriadQuality::Augmented].into_iter().collect();
        let catalog = catalog();
        let matches = find_scales_by_chord_types(&requested, &catalog, true);
        assert!(!matches.is_empty());
        // The major scale has no augmented triad
        assert!(matches.iter().all(|m| m.scale_type.id != "major"));
        assert!(matches.iter().any(|m| m.scale_type.id == "harmonic-minor"));
    }

    #[test]
    fn test_major_scale_triad_census() {
        let requested: BTreeSet<_> =
            [TriadQuality::Major, TriadQuality::Minor, TriadQuality::Diminished]
                .into_iter()
                .collect();
        let catalog = catalog();
        let matches = find_scales_by_chord_types(&requested, &catalog, true);
        let c_major = matches
            .iter()
            .find(|m| m.scale_type.id == "major" && m.root == 0)
            .unwrap();
        assert_eq!(c_major.triads_found[&TriadQuality::Major], 3);
        assert_eq!(c_major.triads_found[&TriadQuality::Minor], 3);
        assert_eq!(c_major.triads_found[&TriadQuality::Diminished], 1);
    }

    #[test]
    fn test_variety_ranks_first() {
        let requested: BTreeSet<_> = [TriadQuality::Major].into_iter().collect();
        let catalog = catalog();
        let matches = find_scales_by_chord_types(&requested, &catalog, true);
        // Harmonic minor has four distinct qualities, so it outranks major
        let first_hm = matches
            .iter()
            .position(|m| m.scale_type.id == "harmonic-minor")
            .unwrap();
        let first_major = matches
            .iter()
            .position(|m| m.scale_type.id == "major")
            .unwrap();
        assert!(first_hm < first_major);
    }
}
