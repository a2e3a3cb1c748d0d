// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval-content tags for a scale.
//!
//! Produces short descriptive tags (minor/major, alt/dim/aug/nat, maj7/7th/6)
//! from a scale's interval set, suitable for compact catalog listings.

use crate::music::note::Interval;

/// Tag a scale by its interval content.
///
/// At most one tag per category is emitted, in third/fifth/seventh order.
/// When a category is ambiguous (both thirds, or both sevenths) it stays
/// untagged, except for the fifth, where multiple candidates tag as "alt".
pub fn analyze_scale_characteristics(intervals: &[Interval]) -> Vec<&'static str> {
    let mut tags = Vec::new();

    let has = |semitones: Interval| intervals.contains(&semitones);

    // Third
    match (has(3), has(4)) {
        (true, true) => {}
        (true, false) => tags.push("minor"),
        (false, true) => tags.push("major"),
        (false, false) => {}
    }

    // Fifth
    let fifth_count = [has(6), has(7), has(8)].iter().filter(|&&b| b).count();
    if fifth_count > 1 {
        tags.push("alt");
    } else if has(6) {
        tags.push("dim");
    } else if has(8) {
        tags.push("aug");
    } else if has(7) {
        tags.push("nat");
    }

    // Seventh, falling back to the sixth
    match (has(10), has(11)) {
        (true, true) => {}
        (false, true) => tags.push("maj7"),
        (true, false) => tags.push("7th"),
        (false, false) => {
            if has(9) {
                tags.push("6");
            }
        }
    }

    tags
}
