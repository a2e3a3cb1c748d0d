// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the music theory engine.

use thiserror::Error;

/// Errors produced by parsing and catalog lookups.
///
/// List-oriented parsers (`parse_notes`, `parse_chords`) do not return this
/// type directly; they accumulate per-token messages and keep going, so a
/// partially invalid query still yields partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MusicError {
    /// A note token did not match `[A-G]` plus an optional accidental
    #[error("invalid note: \"{0}\"")]
    InvalidNote(String),

    /// A chord symbol's root or quality was not recognized
    #[error("invalid chord: \"{0}\"")]
    UnparsableChord(String),

    /// A catalog entry violated a structural invariant
    #[error("malformed catalog entry \"{id}\": {reason}")]
    MalformedCatalogEntry { id: String, reason: String },
}
