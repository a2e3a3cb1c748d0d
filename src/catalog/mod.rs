// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale catalog data model.
//!
//! The catalog is a JSON document of scale-type records, produced offline by
//! the tools in `catalog::generate` and `catalog::modes` and loaded
//! read-only at runtime. Intervals and steps are two views of the same
//! cyclic structure; `validate` enforces that they agree.

pub mod generate;
pub mod modes;

pub use generate::{enumerate_step_patterns, sync_catalog, GeneratedPatterns};
pub use modes::{resolve_modal_relationships, ModalSummary};

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::MusicError;
use crate::music::note::{Interval, PitchClass};

/// Modal relationship: this scale begins at `step` (1-based degree) of the
/// parent scale `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOf {
    pub id: String,
    pub step: u8,
}

/// A scale type record from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleType {
    pub id: String,
    pub name: String,
    pub family: String,
    /// Semitones above the root, strictly ascending, first element 0
    pub intervals: Vec<Interval>,
    /// Step sizes between consecutive degrees, wrapping to the octave;
    /// derived from `intervals` when absent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    /// Canonical parent scale, when this scale is a rotation of another
    #[serde(default)]
    pub mode_of: Option<ModeOf>,
    /// 1-based rotation step to the id of the scale found there
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inversions: BTreeMap<u8, String>,
}

impl ScaleType {
    /// Create a record with steps derived from intervals
    pub fn new(id: &str, name: &str, family: &str, intervals: Vec<Interval>) -> Self {
        let steps = intervals_to_steps(&intervals);
        Self {
            id: id.to_string(),
            name: name.to_string(),
            family: family.to_string(),
            intervals,
            steps,
            alternative_names: Vec::new(),
            mode_of: None,
            inversions: BTreeMap::new(),
        }
    }

    /// Number of notes in the scale
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Fill in `steps` from `intervals` when missing
    pub fn ensure_steps(&mut self) {
        if self.steps.is_empty() {
            self.steps = intervals_to_steps(&self.intervals);
        }
    }

    /// Canonical interval signature: ascending, deduplicated, comma-joined.
    /// Used to recognize the same pitch-class shape regardless of framing.
    pub fn interval_key(&self) -> String {
        interval_key(&self.intervals)
    }

    /// Pitch classes of this scale built on `root`
    pub fn pitch_classes(&self, root: PitchClass) -> BTreeSet<PitchClass> {
        self.intervals
            .iter()
            .map(|&interval| (root + interval) % 12)
            .collect()
    }

    /// Check the structural invariants of this record
    pub fn validate(&self) -> Result<(), MusicError> {
        let fail = |reason: String| MusicError::MalformedCatalogEntry {
            id: self.id.clone(),
            reason,
        };

        if self.intervals.is_empty() {
            return Err(fail("intervals must not be empty".to_string()));
        }
        if self.intervals[0] != 0 {
            return Err(fail("first interval must be 0".to_string()));
        }
        for pair in self.intervals.windows(2) {
            if pair[1] <= pair[0] {
                return Err(fail(format!(
                    "intervals must be strictly ascending, found {} after {}",
                    pair[1], pair[0]
                )));
            }
        }
        if let Some(&last) = self.intervals.last() {
            if last > 11 {
                return Err(fail(format!("interval {} out of range", last)));
            }
        }
        if !self.steps.is_empty() {
            if self.steps != intervals_to_steps(&self.intervals) {
                return Err(fail("steps are inconsistent with intervals".to_string()));
            }
            let sum: u32 = self.steps.iter().map(|&s| u32::from(s)).sum();
            if sum != 12 {
                return Err(fail(format!("steps sum to {}, expected 12", sum)));
            }
        }
        Ok(())
    }
}

/// The scale catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub scale_types: Vec<ScaleType>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;
        Self::from_json(&contents)
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        catalog.validate().context("Catalog validation failed")?;
        Ok(catalog)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")
    }

    /// Save the catalog to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write catalog file: {:?}", path.as_ref()))
    }

    /// Number of scale types in the catalog
    pub fn len(&self) -> usize {
        self.scale_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scale_types.is_empty()
    }

    /// Check unique ids and per-entry invariants
    pub fn validate(&self) -> Result<(), MusicError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for scale in &self.scale_types {
            if !seen.insert(&scale.id) {
                return Err(MusicError::MalformedCatalogEntry {
                    id: scale.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
            scale.validate()?;
        }
        Ok(())
    }

    /// Derive missing step patterns
    pub fn normalize(&mut self) {
        for scale in &mut self.scale_types {
            scale.ensure_steps();
        }
    }

    /// Look up a scale by id
    pub fn get(&self, id: &str) -> Option<&ScaleType> {
        self.scale_types.iter().find(|scale| scale.id == id)
    }

    /// Look up a scale by display name
    pub fn by_name(&self, name: &str) -> Option<&ScaleType> {
        self.scale_types.iter().find(|scale| scale.name == name)
    }

    /// Find a scale whose intervals match positionally
    pub fn find_by_intervals(&self, intervals: &[Interval]) -> Option<&ScaleType> {
        self.scale_types
            .iter()
            .find(|scale| scale.intervals == intervals)
    }

    /// Build lookup indices over the catalog
    pub fn index(&self) -> CatalogIndex<'_> {
        let mut by_id = HashMap::new();
        let mut by_interval_key = HashMap::new();
        for scale in &self.scale_types {
            by_id.insert(scale.id.as_str(), scale);
            // First writer wins, preserving catalog order for shapes that
            // appear more than once
            by_interval_key
                .entry(scale.interval_key())
                .or_insert(scale);
        }
        CatalogIndex {
            by_id,
            by_interval_key,
        }
    }
}

/// Derived lookup indices for a catalog
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    by_id: HashMap<&'a str, &'a ScaleType>,
    by_interval_key: HashMap<String, &'a ScaleType>,
}

impl<'a> CatalogIndex<'a> {
    pub fn by_id(&self, id: &str) -> Option<&'a ScaleType> {
        self.by_id.get(id).copied()
    }

    /// Look up by canonical interval signature
    pub fn by_intervals(&self, intervals: &[Interval]) -> Option<&'a ScaleType> {
        self.by_interval_key.get(&interval_key(intervals)).copied()
    }
}

/// Canonical (sorted, deduplicated) interval signature
pub fn interval_key(intervals: &[Interval]) -> String {
    let sorted: BTreeSet<Interval> = intervals.iter().copied().collect();
    sorted
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Convert intervals to the step pattern between consecutive degrees,
/// closing the cycle back to the octave
pub fn intervals_to_steps(intervals: &[Interval]) -> Vec<u8> {
    let mut steps: Vec<u8> = intervals
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect();
    if let Some(&last) = intervals.last() {
        steps.push(12 - last);
    }
    steps
}

/// Convert a step pattern back to intervals (first interval 0; the final
/// step closes the octave and produces no interval)
pub fn steps_to_intervals(steps: &[u8]) -> Vec<Interval> {
    let mut intervals = vec![0];
    let mut current = 0;
    for &step in steps.iter().take(steps.len().saturating_sub(1)) {
        current += step;
        intervals.push(current);
    }
    intervals
}

/// Cyclic left-rotation of a step pattern; rotation 0 is the scale itself
pub fn rotate_steps(steps: &[u8], rotation: usize) -> Vec<u8> {
    if steps.is_empty() {
        return Vec::new();
    }
    let split = rotation % steps.len();
    let mut rotated = Vec::with_capacity(steps.len());
    rotated.extend_from_slice(&steps[split..]);
    rotated.extend_from_slice(&steps[..split]);
    rotated
}
