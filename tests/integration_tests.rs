// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for TONALITY
//!
//! These tests verify that multiple components work together correctly,
//! exercising the public API against the bundled scale catalog.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tonality::analysis::{
    chord_fits_in_all_scales, chord_fits_in_any_scale, find_common_chords, find_relative_scales,
    find_scales_by_chord_types, find_scales_containing, find_second_degree_relatives,
    parse_chord_types, ScaleSelection, SelectedScale,
};
use tonality::catalog::{
    intervals_to_steps, resolve_modal_relationships, steps_to_intervals, sync_catalog, Catalog,
    GeneratedPatterns,
};
use tonality::music::{calculate_triads, parse_chords, parse_notes, scale_notes, TriadQuality};

fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("scales.json")
}

fn bundled_catalog() -> Catalog {
    Catalog::load(bundled_catalog_path()).expect("bundled catalog should load")
}

/// Test that the bundled catalog loads and passes validation
#[test]
fn test_bundled_catalog_loads() {
    let catalog = bundled_catalog();
    assert_eq!(catalog.len(), 15);
    assert!(catalog.get("major").is_some());
    assert!(catalog.get("chromatic").is_some());
    assert!(catalog.validate().is_ok());
}

/// Test that every bundled scale survives the intervals/steps round trip
#[test]
fn test_bundled_catalog_steps_round_trip() {
    let catalog = bundled_catalog();
    for scale in &catalog.scale_types {
        let steps = intervals_to_steps(&scale.intervals);
        assert_eq!(steps, scale.steps, "steps mismatch for {}", scale.id);
        assert_eq!(steps.iter().sum::<u8>(), 12, "steps sum for {}", scale.id);
        assert_eq!(
            steps_to_intervals(&steps),
            scale.intervals,
            "round trip for {}",
            scale.id
        );
    }
}

/// Test modal relationship resolution over the bundled catalog
#[test]
fn test_modal_resolution_over_bundled_catalog() {
    let mut catalog = bundled_catalog();
    let summary = resolve_modal_relationships(&mut catalog);

    // Dorian is mode 2 of the major scale, the first parent in catalog order
    let dorian = catalog.get("dorian").unwrap();
    let mode_of = dorian.mode_of.as_ref().unwrap();
    assert_eq!(mode_of.id, "major");
    assert_eq!(mode_of.step, 2);

    // The major scale lists all six of its modes
    let major = catalog.get("major").unwrap();
    assert_eq!(major.inversions.len(), 6);
    assert_eq!(major.inversions[&6], "natural-minor");

    // Phrygian dominant is mode 5 of harmonic minor
    let phryg_dom = catalog.get("phrygian-dominant").unwrap();
    let mode_of = phryg_dom.mode_of.as_ref().unwrap();
    assert_eq!(mode_of.id, "harmonic-minor");
    assert_eq!(mode_of.step, 5);

    // Minor pentatonic is mode 5 of major pentatonic
    let minor_pent = catalog.get("minor-pentatonic").unwrap();
    let mode_of = minor_pent.mode_of.as_ref().unwrap();
    assert_eq!(mode_of.id, "major-pentatonic");
    assert_eq!(mode_of.step, 5);

    // Blues, whole tone and chromatic have no modal partners in the catalog
    assert!(summary.independent >= 3);
    assert!(catalog.get("blues").unwrap().mode_of.is_none());
    assert!(catalog.get("chromatic").unwrap().inversions.is_empty());
}

/// Test the generate-then-sync maintenance flow
#[test]
fn test_generate_and_sync_flow() {
    let mut catalog = bundled_catalog();
    let generated = GeneratedPatterns::generate(12);
    assert_eq!(generated.combinations.len(), 21);

    // Nine bundled scales live in the 1/2-step universe: the seven major
    // modes, melodic minor, and whole tone
    let added = sync_catalog(&mut catalog, &generated.combinations);
    assert_eq!(added.len(), 12);
    assert_eq!(catalog.len(), 27);
    assert!(catalog.validate().is_ok());

    // Syncing again adds nothing
    let added_again = sync_catalog(&mut catalog, &generated.combinations);
    assert!(added_again.is_empty());
    assert_eq!(catalog.len(), 27);
}

/// Test catalog save and reload through a temporary file
#[test]
fn test_catalog_round_trip() {
    let mut catalog = bundled_catalog();
    resolve_modal_relationships(&mut catalog);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scales.json");
    catalog.save(&path).expect("save");

    let reloaded = Catalog::load(&path).expect("reload");
    assert_eq!(reloaded, catalog);
}

/// Test the chord parse to scale check pipeline
#[test]
fn test_chord_parse_to_scale_check() {
    let catalog = bundled_catalog();
    let parsed = parse_chords("Cmaj7 Dm7 G7");
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.chords.len(), 3);

    let in_c_major = [ScaleSelection {
        scale: "Major".to_string(),
        root: 0,
    }];

    for chord in &parsed.chords {
        assert!(
            chord_fits_in_all_scales(&chord.pitch_classes, &in_c_major, &catalog),
            "{} should fit C major",
            chord.display_name
        );
    }

    // E major does not fit C major, but fits at least one selected scale
    // when A harmonic minor joins the selection
    let e_major = parse_chords("E").chords.remove(0);
    assert!(!chord_fits_in_any_scale(
        &e_major.pitch_classes,
        &in_c_major,
        &catalog
    ));

    let wider = [
        ScaleSelection {
            scale: "Major".to_string(),
            root: 0,
        },
        ScaleSelection {
            scale: "Harmonic Minor".to_string(),
            root: 9,
        },
    ];
    assert!(chord_fits_in_any_scale(
        &e_major.pitch_classes,
        &wider,
        &catalog
    ));
}

/// Test the note-entry to scale-finder pipeline
#[test]
fn test_note_entry_to_scale_finder() {
    let catalog = bundled_catalog();
    let parsed = parse_notes("C E G B");
    assert!(parsed.errors.is_empty());

    let matches = find_scales_containing(&parsed.pitch_classes, &catalog, true);
    assert!(!matches.is_empty());

    // Tighter scales rank ahead of the chromatic catch-all
    assert!(matches[0].extra_notes <= matches.last().unwrap().extra_notes);

    let c_major = matches
        .iter()
        .find(|m| m.scale_type.id == "major" && m.root == 0)
        .expect("C major contains Cmaj7");
    assert_eq!(c_major.extra_notes, 3);
    assert_eq!(c_major.matched_notes, vec!["C", "E", "G", "B"]);
}

/// Test the chord-type search over the bundled catalog
#[test]
fn test_chord_type_search() {
    let catalog = bundled_catalog();
    let parsed = parse_chord_types("aug dim");
    assert!(parsed.errors.is_empty());

    let matches = find_scales_by_chord_types(&parsed.types, &catalog, true);
    assert!(!matches.is_empty());
    // Both qualities coexist in harmonic and melodic minor, never in the
    // plain major modes
    assert!(matches.iter().any(|m| m.scale_type.id == "harmonic-minor"));
    assert!(matches.iter().all(|m| m.scale_type.id != "major"));
    for m in &matches {
        assert!(m.matched_types.contains(&TriadQuality::Augmented));
        assert!(m.matched_types.contains(&TriadQuality::Diminished));
    }
}

/// Test relative-scale discovery from natural minor
#[test]
fn test_relative_scales_of_natural_minor() {
    let catalog = bundled_catalog();
    let base = catalog.get("natural-minor").unwrap();

    let relatives = find_relative_scales(base, &catalog.scale_types);
    let ids: Vec<&str> = relatives.iter().map(|r| r.scale.id.as_str()).collect();
    assert!(ids.contains(&"phrygian"));
    assert!(ids.contains(&"dorian"));
    assert!(ids.contains(&"harmonic-minor"));

    // Melodic minor is two alterations away
    let second = find_second_degree_relatives(base, &catalog.scale_types);
    let second_ids: Vec<&str> = second.iter().map(|r| r.scale.id.as_str()).collect();
    assert!(second_ids.contains(&"melodic-minor"));
    assert!(!second_ids.contains(&"harmonic-minor"));
    for relative in &second {
        assert_eq!(relative.modifications.len(), 2);
    }
}

/// Test triad calculation against catalog scales and the common-chord
/// comparison built on it
#[test]
fn test_triads_and_common_chords() {
    let catalog = bundled_catalog();
    let major = catalog.get("major").unwrap();

    let notes = scale_notes(7, &major.intervals, true);
    let triads = calculate_triads(&notes, &major.intervals);
    assert_eq!(triads.len(), 7);
    assert_eq!(triads[0].root, "G");
    assert_eq!(triads[0].quality, TriadQuality::Major);
    assert_eq!(triads[6].roman_numeral, "vii°");

    let scales = [
        SelectedScale::new(0, major.clone()),
        SelectedScale::new(7, major.clone()),
    ];
    let common = find_common_chords(&scales, true);
    assert!(!common.is_empty());
    // C, Em, G and Am are diatonic in both key signatures
    let symbols: BTreeSet<&str> = common.iter().map(|c| c.symbol.as_str()).collect();
    assert_eq!(
        symbols,
        ["C", "Em", "G", "Am"].into_iter().collect::<BTreeSet<_>>()
    );
}
