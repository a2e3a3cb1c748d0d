// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Modal relationship resolution.
//!
//! For every catalog scale, finds the other catalog scales reachable by
//! cyclically rotating its step pattern and records the parent/mode edges.
//! Iteration is strictly in catalog order: when a scale is a rotation of
//! more than one parent, the earliest enumerated parent wins the `modeOf`
//! slot. All relationship state is reset first, so re-running the resolver
//! on an already annotated catalog reproduces it exactly.

use tracing::debug;

use super::{rotate_steps, steps_to_intervals, Catalog, ModeOf};

/// Counts reported after resolution, mirroring the offline tool's summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalSummary {
    /// Scales with at least one recorded inversion (parent scales)
    pub parents: usize,
    /// Scales recorded as a mode of another scale
    pub modes: usize,
    /// Scales with no modal relationships at all
    pub independent: usize,
}

/// Compute the complete mode/parent graph for a catalog.
///
/// Records `A.inversions[k+1] = B.id` whenever rotating A's steps by `k`
/// lands on B's intervals, and `B.modeOf = {A, k+1}` if B has no parent yet.
/// Scales whose rotations match nothing in the catalog keep `modeOf = None`
/// and empty `inversions`; that is valid, not an error.
pub fn resolve_modal_relationships(catalog: &mut Catalog) -> ModalSummary {
    catalog.normalize();

    for scale in &mut catalog.scale_types {
        scale.mode_of = None;
        scale.inversions.clear();
    }

    // Snapshot the structural fields so relationship edges can be written
    // while scanning
    let ids: Vec<String> = catalog.scale_types.iter().map(|s| s.id.clone()).collect();
    let names: Vec<String> = catalog.scale_types.iter().map(|s| s.name.clone()).collect();
    let steps: Vec<Vec<u8>> = catalog.scale_types.iter().map(|s| s.steps.clone()).collect();
    let intervals: Vec<Vec<u8>> = catalog
        .scale_types
        .iter()
        .map(|s| s.intervals.clone())
        .collect();

    let count = catalog.scale_types.len();
    for i in 0..count {
        for rotation in 1..steps[i].len() {
            let rotated = steps_to_intervals(&rotate_steps(&steps[i], rotation));
            let step = (rotation + 1) as u8;

            for j in 0..count {
                if i == j || intervals[j] != rotated {
                    continue;
                }

                if catalog.scale_types[j].mode_of.is_none() {
                    catalog.scale_types[j].mode_of = Some(ModeOf {
                        id: ids[i].clone(),
                        step,
                    });
                }
                catalog.scale_types[i]
                    .inversions
                    .insert(step, ids[j].clone());

                debug!(
                    mode = %names[j],
                    parent = %names[i],
                    step,
                    "modal relationship found"
                );
            }
        }
    }

    summarize(catalog)
}

fn summarize(catalog: &Catalog) -> ModalSummary {
    let mut summary = ModalSummary::default();
    for scale in &catalog.scale_types {
        if !scale.inversions.is_empty() {
            summary.parents += 1;
        }
        if scale.mode_of.is_some() {
            summary.modes += 1;
        }
        if scale.mode_of.is_none() && scale.inversions.is_empty() {
            summary.independent += 1;
        }
    }
    summary
}
