//! # Pulse - a check-in note analyzer for team leads
//!
//! Pulse turns free-text weekly check-in notes into structured data: short
//! observations, commitments with a due window, blocker relationships and a
//! five-point mood rating. Extraction runs through a language-model API when
//! a key is configured and falls back to a deterministic rule-based pass when
//! it isn't (or when the call fails). A fuzzy identity resolver links local
//! member names to users in an external task tracker so their open work items
//! can be pulled alongside the notes.
//!
//! ## Quick Start
//!
//! ```bash
//! # Analyze a note (works offline, no API key needed)
//! pulse analyze "Bugün release branch'i hazırladım." --member "Furkan Yılmaz"
//!
//! # Match a member against the tracker's user list
//! pulse resolve --member "Oğuzhan Aslan"
//!
//! # Show a member's open tracker tasks
//! pulse tasks --member "Oğuzhan Aslan"
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and API-key lookup
//! - [`error`]: Error types and result aliases
//! - [`extract`]: Text-to-entities extraction (LLM + rule-based fallback)
//! - [`lexicon`]: Keyword tables for the fallback path
//! - [`model`]: Data models (bundle, tags, mood scale)
//! - [`resolver`]: Fuzzy identity matching against tracker users
//! - [`tracker`]: Task tracker GraphQL client
//! - [`validation`]: Host-boundary input validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.pulse.yml` files and environment-based API keys.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `PulseError` enum and `Result<T>` type alias.
pub mod error;

/// Text-to-entities extraction.
///
/// LLM-backed primary path with a deterministic rule-based fallback.
pub mod extract;

/// Keyword tables driving the fallback extraction path.
pub mod lexicon;

/// Data models shared across extraction and the CLI.
///
/// Includes `ExtractionBundle`, `Tag`, `DueType`, and `Mood`.
pub mod model;

/// Fuzzy identity matching against the tracker's user list.
pub mod resolver;

/// Task tracker GraphQL client.
pub mod tracker;

pub mod logging;

/// Host-boundary input validation.
///
/// Rejects too-short notes before extraction runs.
pub mod validation;
