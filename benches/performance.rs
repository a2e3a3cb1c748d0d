// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for TONALITY
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Chord symbol parsing throughput
//! - Triad calculation
//! - Catalog-wide scale search
//! - Step-pattern enumeration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeSet;

use tonality::analysis::{find_scales_by_chord_types, find_scales_containing};
use tonality::catalog::{enumerate_step_patterns, Catalog, ScaleType};
use tonality::music::{calculate_triads, parse_chords, parse_notes, scale_notes, TriadQuality};

fn test_catalog() -> Catalog {
    Catalog {
        scale_types: vec![
            ScaleType::new("major", "Major", "major-modes", vec![0, 2, 4, 5, 7, 9, 11]),
            ScaleType::new("dorian", "Dorian", "major-modes", vec![0, 2, 3, 5, 7, 9, 10]),
            ScaleType::new("phrygian", "Phrygian", "major-modes", vec![0, 1, 3, 5, 7, 8, 10]),
            ScaleType::new("lydian", "Lydian", "major-modes", vec![0, 2, 4, 6, 7, 9, 11]),
            ScaleType::new("mixolydian", "Mixolydian", "major-modes", vec![0, 2, 4, 5, 7, 9, 10]),
            ScaleType::new("natural-minor", "Natural Minor", "major-modes", vec![0, 2, 3, 5, 7, 8, 10]),
            ScaleType::new("locrian", "Locrian", "major-modes", vec![0, 1, 3, 5, 6, 8, 10]),
            ScaleType::new("harmonic-minor", "Harmonic Minor", "harmonic-minor-modes", vec![0, 2, 3, 5, 7, 8, 11]),
            ScaleType::new("melodic-minor", "Melodic Minor", "melodic-minor-modes", vec![0, 2, 3, 5, 7, 9, 11]),
            ScaleType::new("major-pentatonic", "Major Pentatonic", "pentatonic", vec![0, 2, 4, 7, 9]),
            ScaleType::new("minor-pentatonic", "Minor Pentatonic", "pentatonic", vec![0, 3, 5, 7, 10]),
            ScaleType::new("blues", "Blues", "pentatonic", vec![0, 3, 5, 6, 7, 10]),
            ScaleType::new("whole-tone", "Whole Tone", "symmetrical", vec![0, 2, 4, 6, 8, 10]),
            ScaleType::new("chromatic", "Chromatic", "symmetrical", (0..12).collect()),
        ],
    }
}

/// Benchmark chord symbol parsing
fn bench_chord_parsing(c: &mut Criterion) {
    let progressions = [
        "Cmaj7",
        "Cmaj7 Am7 Dm7 G7",
        "Cmaj7 Am7 Dm7 G7 Em7b5 A7 Dm7 G7sus4 C6/G F#dim7 Bb/D Gm7",
    ];

    let mut group = c.benchmark_group("chord_parsing");

    for input in progressions.iter() {
        let count = input.split_whitespace().count();
        group.bench_with_input(BenchmarkId::new("parse", count), input, |b, input| {
            b.iter(|| parse_chords(black_box(input)))
        });
    }

    group.finish();
}

/// Benchmark triad calculation over one scale
fn bench_triad_calculation(c: &mut Criterion) {
    let catalog = test_catalog();
    let major = catalog.get("major").unwrap();
    let notes = scale_notes(0, &major.intervals, true);

    c.bench_function("calculate_triads", |b| {
        b.iter(|| calculate_triads(black_box(&notes), black_box(&major.intervals)))
    });
}

/// Benchmark the catalog-wide note-set search
fn bench_scale_finder(c: &mut Criterion) {
    let catalog = test_catalog();

    let mut group = c.benchmark_group("scale_finder");

    for input in ["C E G", "C E G B D", "C D E F G A B"].iter() {
        let query = parse_notes(input).pitch_classes;
        group.bench_with_input(
            BenchmarkId::new("find", query.len()),
            &query,
            |b, query| b.iter(|| find_scales_containing(black_box(query), &catalog, true)),
        );
    }

    group.finish();
}

/// Benchmark the catalog-wide triad-type search
fn bench_chord_type_search(c: &mut Criterion) {
    let catalog = test_catalog();
    let requested: BTreeSet<TriadQuality> =
        [TriadQuality::Major, TriadQuality::Minor, TriadQuality::Diminished]
            .into_iter()
            .collect();

    c.bench_function("chord_type_search", |b| {
        b.iter(|| find_scales_by_chord_types(black_box(&requested), &catalog, true))
    });
}

/// Benchmark step-pattern enumeration
fn bench_pattern_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_enumeration");

    for target in [8u8, 12, 16].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(target), target, |b, &target| {
            b.iter(|| enumerate_step_patterns(black_box(target)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_chord_parsing,
    bench_triad_calculation,
    bench_scale_finder,
    bench_chord_type_search,
    bench_pattern_enumeration,
);

criterion_main!(benches);
