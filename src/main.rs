// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::Result;
use std::env;

use tonality::analysis::{
    analyze_scale_characteristics, find_scales_by_chord_types, find_scales_containing,
    parse_chord_types,
};
use tonality::catalog::{resolve_modal_relationships, sync_catalog, Catalog, GeneratedPatterns};
use tonality::music::{parse_chords, parse_notes};

fn print_usage() {
    println!("TONALITY - Scale and Chord Analysis Engine");
    println!();
    println!("Usage: tonality [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --generate                    List all 1/2-step patterns summing to 12");
    println!("  --sync <CATALOG>              Add missing generated scales to a catalog file");
    println!("  --modes <CATALOG>             Resolve modal relationships in a catalog file");
    println!("  --validate <CATALOG>          Check a catalog file for structural problems");
    println!("  --find <CATALOG> <NOTES>      Find scales containing the given notes");
    println!("  --chords <CATALOG> <TYPES>    Find scales containing the given triad types");
    println!("  --parse <CHORDS>              Parse chord symbols and show pitch classes");
    println!("  --help                        Show this help message");
}

fn run_generate() {
    let generated = GeneratedPatterns::generate(12);
    println!(
        "Generated {} valid combinations",
        generated.metadata.total_combinations
    );
    println!();
    println!("First 5 combinations:");
    for (idx, combo) in generated.combinations.iter().take(5).enumerate() {
        let sum: u8 = combo.iter().sum();
        let joined: Vec<String> = combo.iter().map(|s| s.to_string()).collect();
        println!("{}. [{}] = {}", idx + 1, joined.join(", "), sum);
    }
}

fn run_sync(path: &str) -> Result<()> {
    let mut catalog = Catalog::load(path)?;
    println!("Loaded {} existing scales", catalog.len());

    let generated = GeneratedPatterns::generate(12);
    let added = sync_catalog(&mut catalog, &generated.combinations);

    if added.is_empty() {
        println!("All scales are already in the catalog!");
        return Ok(());
    }

    for name in &added {
        println!("  + Added: {}", name);
    }

    catalog.save(path)?;
    println!();
    println!("Added {} new scales to catalog", added.len());
    println!("Total scales in catalog: {}", catalog.len());
    println!("Updated: {}", path);
    Ok(())
}

fn run_modes(path: &str) -> Result<()> {
    let mut catalog = Catalog::load(path)?;
    println!("Analyzing modal relationships...");
    println!();

    let summary = resolve_modal_relationships(&mut catalog);

    println!("--- Summary ---");
    println!();
    println!("Scales with modes (parent scales): {}", summary.parents);
    for scale in catalog.scale_types.iter().filter(|s| !s.inversions.is_empty()) {
        println!("  - {}: {} mode(s)", scale.name, scale.inversions.len());
    }

    println!();
    println!("Scales that are modes of others: {}", summary.modes);
    for scale in &catalog.scale_types {
        if let Some(mode_of) = &scale.mode_of {
            let parent = catalog
                .get(&mode_of.id)
                .map(|p| p.name.as_str())
                .unwrap_or(mode_of.id.as_str());
            println!("  - {} (mode {} of {})", scale.name, mode_of.step, parent);
        }
    }

    println!();
    println!(
        "Independent scales (no modal relationships): {}",
        summary.independent
    );
    for scale in &catalog.scale_types {
        if scale.mode_of.is_none() && scale.inversions.is_empty() {
            println!("  - {}", scale.name);
        }
    }

    catalog.save(path)?;
    println!();
    println!("Updated catalog with modal relationships");
    println!("File: {}", path);
    Ok(())
}

fn run_validate(path: &str) -> Result<()> {
    let catalog = Catalog::load(path)?;
    catalog.validate()?;
    println!("{} scales, no problems found", catalog.len());
    Ok(())
}

fn run_find(path: &str, input: &str) -> Result<()> {
    let catalog = Catalog::load(path)?;
    let parsed = parse_notes(input);
    for error in &parsed.errors {
        eprintln!("Warning: {}", error);
    }

    let matches = find_scales_containing(&parsed.pitch_classes, &catalog, true);
    println!(
        "{} scales contain [{}]:",
        matches.len(),
        parsed.notes.join(", ")
    );
    for m in &matches {
        let tags = analyze_scale_characteristics(&m.scale_type.intervals);
        let suffix = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        println!(
            "  {} {} (+{} extra): {}{}",
            m.root_name,
            m.scale_type.name,
            m.extra_notes,
            m.scale_notes.join(" "),
            suffix
        );
    }
    Ok(())
}

fn run_chord_types(path: &str, input: &str) -> Result<()> {
    let catalog = Catalog::load(path)?;
    let parsed = parse_chord_types(input);
    for error in &parsed.errors {
        eprintln!("Warning: {}", error);
    }

    let matches = find_scales_by_chord_types(&parsed.types, &catalog, true);
    println!("{} matching scales:", matches.len());
    for m in &matches {
        let census: Vec<String> = m
            .triads_found
            .iter()
            .map(|(quality, count)| format!("{}x {}", count, quality))
            .collect();
        println!(
            "  {} {}: {}",
            m.root_name,
            m.scale_type.name,
            census.join(", ")
        );
    }
    Ok(())
}

fn run_parse(input: &str) {
    let parsed = parse_chords(input);
    for error in &parsed.errors {
        eprintln!("Warning: {}", error);
    }
    for chord in &parsed.chords {
        let classes: Vec<String> = chord
            .pitch_classes
            .iter()
            .map(|pc| pc.to_string())
            .collect();
        println!("  {} -> [{}]", chord.display_name, classes.join(", "));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("TONALITY - Scale and Chord Analysis Engine");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--generate" => {
            run_generate();
        }
        "--sync" => {
            if args.len() < 3 {
                eprintln!("Error: --sync requires a catalog file path");
                std::process::exit(1);
            }
            run_sync(&args[2])?;
        }
        "--modes" => {
            if args.len() < 3 {
                eprintln!("Error: --modes requires a catalog file path");
                std::process::exit(1);
            }
            run_modes(&args[2])?;
        }
        "--validate" => {
            if args.len() < 3 {
                eprintln!("Error: --validate requires a catalog file path");
                std::process::exit(1);
            }
            run_validate(&args[2])?;
        }
        "--find" => {
            if args.len() < 4 {
                eprintln!("Error: --find requires a catalog file path and a note list");
                eprintln!("Example: tonality --find data/scales.json \"C E G\"");
                std::process::exit(1);
            }
            run_find(&args[2], &args[3])?;
        }
        "--chords" => {
            if args.len() < 4 {
                eprintln!("Error: --chords requires a catalog file path and a type list");
                eprintln!("Example: tonality --chords data/scales.json \"major minor dim\"");
                std::process::exit(1);
            }
            run_chord_types(&args[2], &args[3])?;
        }
        "--parse" => {
            if args.len() < 3 {
                eprintln!("Error: --parse requires a chord list");
                eprintln!("Example: tonality --parse \"Cmaj7 Dm7 G7\"");
                std::process::exit(1);
            }
            run_parse(&args[2]);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
