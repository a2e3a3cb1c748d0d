// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Relative scale search.
//!
//! A first-degree relative is a catalog scale reached by moving exactly one
//! non-root degree of the base scale by a semitone while keeping the
//! interval sequence strictly ascending. Second-degree relatives are two
//! such alterations away.

use std::collections::HashSet;

use crate::catalog::ScaleType;
use crate::music::note::Interval;

/// Direction of a semitone alteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alteration {
    Up,
    Down,
}

impl Alteration {
    pub fn as_str(self) -> &'static str {
        match self {
            Alteration::Up => "up",
            Alteration::Down => "down",
        }
    }
}

/// One altered degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modification {
    /// 1-based degree for display
    pub degree: u8,
    pub original_interval: Interval,
    pub new_interval: Interval,
    pub direction: Alteration,
}

/// A catalog scale reachable from the base scale by alteration
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeScale<'a> {
    pub scale: &'a ScaleType,
    /// The single altered degree (for second-degree results, the final hop)
    pub modified_degree: u8,
    pub direction: Alteration,
    pub original_interval: Interval,
    pub new_interval: Interval,
    /// For second-degree relatives: both alterations measured against the
    /// base scale. Empty for first-degree relatives.
    pub modifications: Vec<Modification>,
}

fn positional_key(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Check that position `i` of `intervals` still sits strictly between its
/// neighbors (or below the octave at the end)
fn stays_ascending(intervals: &[Interval], i: usize) -> bool {
    let above_prev = intervals[i] > intervals[i - 1];
    let below_next = i == intervals.len() - 1 || intervals[i] < intervals[i + 1];
    above_prev && below_next
}

/// Find all first-degree relatives of `current` in the catalog.
///
/// The catalog match is positional (degree identity matters), and the match
/// must be a different scale than the base.
pub fn find_relative_scales<'a>(
    current: &ScaleType,
    all_scales: &'a [ScaleType],
) -> Vec<RelativeScale<'a>> {
    let mut relatives = Vec::new();
    let intervals = &current.intervals;

    for i in 1..intervals.len() {
        let original = intervals[i];

        for direction in [Alteration::Up, Alteration::Down] {
            let new_interval = match direction {
                Alteration::Up if original < 11 => original + 1,
                Alteration::Down if original > 1 => original - 1,
                _ => continue,
            };

            let mut modified = intervals.clone();
            modified[i] = new_interval;
            if !stays_ascending(&modified, i) {
                continue;
            }

            let matching = all_scales
                .iter()
                .find(|scale| scale.intervals == modified && scale.id != current.id);

            if let Some(scale) = matching {
                relatives.push(RelativeScale {
                    scale,
                    modified_degree: (i + 1) as u8,
                    direction,
                    original_interval: original,
                    new_interval,
                    modifications: Vec::new(),
                });
            }
        }
    }

    relatives
}

/// All per-degree differences between two positionally comparable interval
/// sequences (root excluded)
fn find_all_differences(original: &[Interval], new: &[Interval]) -> Vec<Modification> {
    let mut differences = Vec::new();
    let len = original.len().min(new.len());

    for i in 1..len {
        if original[i] != new[i] {
            differences.push(Modification {
                degree: (i + 1) as u8,
                original_interval: original[i],
                new_interval: new[i],
                direction: if new[i] > original[i] {
                    Alteration::Up
                } else {
                    Alteration::Down
                },
            });
        }
    }

    differences
}

/// Find second-degree relatives: relatives of relatives, excluding the base
/// scale and every first-degree relative, deduplicated by interval shape.
///
/// A two-hop path can land one degree away from the base (the second hop
/// undoing part of the first), so candidates are kept only when the
/// difference against the base is exactly two degrees.
pub fn find_second_degree_relatives<'a>(
    current: &ScaleType,
    all_scales: &'a [ScaleType],
) -> Vec<RelativeScale<'a>> {
    let first_degree = find_relative_scales(current, all_scales);

    let mut excluded: HashSet<String> = HashSet::new();
    excluded.insert(positional_key(&current.intervals));
    for relative in &first_degree {
        excluded.insert(positional_key(&relative.scale.intervals));
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut second_degree = Vec::new();

    for first in &first_degree {
        for second in find_relative_scales(first.scale, all_scales) {
            let key = positional_key(&second.scale.intervals);
            if excluded.contains(&key) || seen.contains(&key) {
                continue;
            }

            let modifications = find_all_differences(&current.intervals, &second.scale.intervals);
            if modifications.len() != 2 {
                continue;
            }

            seen.insert(key);
            second_degree.push(RelativeScale {
                modifications,
                ..second
            });
        }
    }

    second_degree
}
