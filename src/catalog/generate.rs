// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Combinatorial scale generation.
//!
//! Enumerates every step composition of the octave drawn from {1,2} with no
//! two consecutive semitone steps. This universe seeds the catalog: any
//! enumerated pattern with no positional match gets appended as an unnamed
//! scale. Catalog entries outside the universe (larger steps, e.g. harmonic
//! minor's augmented second) stay untouched.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{steps_to_intervals, Catalog, ScaleType};

/// Enumerate all step patterns from {1,2} summing to `target` with no two
/// consecutive 1-steps.
///
/// Depth-first with an explicit stack rather than recursion, so larger
/// targets cannot overflow; visit order matches trying a 2-step before a
/// 1-step at every branch. For target 12 the count is 21.
pub fn enumerate_step_patterns(target: u8) -> Vec<Vec<u8>> {
    let mut results = Vec::new();
    let mut stack: Vec<(Vec<u8>, u8, bool)> = vec![(Vec::new(), 0, false)];

    while let Some((pattern, sum, last_was_one)) = stack.pop() {
        if sum == target {
            results.push(pattern);
            continue;
        }

        // Pushed second so the 2-step branch is explored first
        if !last_was_one && sum + 1 <= target {
            let mut next = pattern.clone();
            next.push(1);
            stack.push((next, sum + 1, true));
        }
        if sum + 2 <= target {
            let mut next = pattern.clone();
            next.push(2);
            stack.push((next, sum + 2, false));
        }
    }

    results
}

/// Metadata block of a generated-patterns document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMetadata {
    pub target_sum: u8,
    pub rules: Vec<String>,
    pub total_combinations: usize,
}

/// Document written by the generator and consumed by the sync tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPatterns {
    pub metadata: GeneratedMetadata,
    pub combinations: Vec<Vec<u8>>,
}

impl GeneratedPatterns {
    /// Run the generator for `target` and wrap the results
    pub fn generate(target: u8) -> Self {
        let combinations = enumerate_step_patterns(target);
        GeneratedPatterns {
            metadata: GeneratedMetadata {
                target_sum: target,
                rules: vec![
                    "No two or more 1's in a row".to_string(),
                    format!("Total sum equals exactly {}", target),
                ],
                total_combinations: combinations.len(),
            },
            combinations,
        }
    }
}

/// Append any enumerated pattern missing from the catalog as an unnamed
/// scale. Returns the ids of the scales added.
pub fn sync_catalog(catalog: &mut Catalog, patterns: &[Vec<u8>]) -> Vec<String> {
    let mut added = Vec::new();

    for pattern in patterns {
        let intervals = steps_to_intervals(pattern);
        if catalog.find_by_intervals(&intervals).is_some() {
            continue;
        }

        let id = format!(
            "scale-{}",
            intervals
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("-")
        );
        let name = format!("Unknown Scale {}", added.len() + 1);

        info!(%id, steps = ?pattern, "adding generated scale");

        let mut scale = ScaleType::new(&id, &name, "unknown", intervals);
        scale.steps = pattern.clone();
        catalog.scale_types.push(scale);
        added.push(id);
    }

    added
}
