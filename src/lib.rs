// SPDX-License-Identifier: PMPL-1.0-or-later

//! Wordforge: streaming wordlist and credential-candidate generation.
//!
//! A run is a single lazy pipeline:
//! 1. **Source**: embedded list, dictionaries/stdin, a crunch-style pattern,
//!    brute force over a charset, or the numeric smart list.
//! 2. **Mutation**: case variants, reversal, repetition and leetspeak,
//!    multiplied by prefixes and suffixes.
//! 3. **Filter**: length bounds, content policies, global uniqueness and a
//!    hard limit.
//!
//! Every stage is an iterator that only does work when pulled.

pub mod config;
pub mod error;
pub mod filter;
pub mod leet;
pub mod mutate;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod types;

pub use config::{ConfigLayer, GenerationConfig, Settings, SourceSpec};
pub use error::{GenerationError, Result};
pub use pipeline::{run, Pipeline};
