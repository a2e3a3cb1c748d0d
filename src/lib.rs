// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tonality - a twelve-tone scale and chord analysis engine.
//!
//! The crate is organized in three layers:
//!
//! - [`music`] holds the primitives: pitch-class arithmetic, note
//!   spelling, chord symbol parsing, scale-degree triads, and playback
//!   pattern realization.
//! - [`catalog`] is the scale-type catalog: the JSON document format,
//!   modal relationship resolution, and the step-pattern generator that
//!   seeds it.
//! - [`analysis`] answers questions against the catalog: which scales
//!   contain a set of notes or chords, which scales are close relatives
//!   of another, which triads a group of scales shares.

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod music;

pub use error::MusicError;
