// SPDX-License-Identifier: PMPL-1.0-or-later

//! Base candidate sources
//!
//! Selection precedence: an explicit pattern, then a combinatorial
//! generator when character classes are requested without dictionaries,
//! then dictionaries, then the embedded list.

pub mod brute;
pub mod pattern;
pub mod reader;
pub mod smart;
pub mod static_list;

pub use brute::BruteForce;
pub use pattern::PatternExpander;
pub use reader::{DictionaryReader, STDIN_MARKER};
pub use smart::smart_numbers;
pub use static_list::{static_words, STATIC_WORDS};

use crate::config::SourceSpec;
use crate::types::{Candidate, CharsetSpec, Pattern};
use std::fmt;
use std::path::PathBuf;

/// Upper length bound for brute force when none is given explicitly
pub const DEFAULT_BRUTE_FORCE_MAX: usize = 4;

/// Boxed lazy candidate stream passed between stages
pub type Candidates = Box<dyn Iterator<Item = Candidate>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Static,
    Dictionaries(Vec<PathBuf>),
    Pattern(Pattern),
    BruteForce(CharsetSpec),
    SmartNumbers { current_year: i32 },
}

impl WordSource {
    pub fn select(spec: &SourceSpec, current_year: i32) -> Self {
        if let Some(pattern) = &spec.pattern {
            return WordSource::Pattern(Pattern::parse(pattern));
        }

        if spec.wants_generator() && spec.dictionaries.is_empty() {
            let charset = spec
                .charset
                .clone()
                .unwrap_or_else(|| spec.classes.charset());
            let explicit_min = spec.min_length.filter(|min| *min > 0);
            let charset = CharsetSpec::new(&charset, 0, 0);

            if charset.is_digits_only() && explicit_min.is_none() {
                return WordSource::SmartNumbers { current_year };
            }

            let min_length = explicit_min.unwrap_or(1);
            let max_length = spec
                .max_length
                .unwrap_or_else(|| min_length.max(DEFAULT_BRUTE_FORCE_MAX));
            return WordSource::BruteForce(CharsetSpec {
                min_length,
                max_length,
                ..charset
            });
        }

        if !spec.dictionaries.is_empty() {
            return WordSource::Dictionaries(spec.dictionaries.clone());
        }

        WordSource::Static
    }

    /// Start a fresh lazy stream. Calling again restarts from the beginning.
    pub fn produce(&self) -> Candidates {
        match self {
            WordSource::Static => Box::new(static_words()),
            WordSource::Dictionaries(paths) => Box::new(DictionaryReader::new(paths.clone())),
            WordSource::Pattern(pattern) => Box::new(PatternExpander::new(pattern)),
            WordSource::BruteForce(spec) => Box::new(BruteForce::new(spec)),
            WordSource::SmartNumbers { current_year } => Box::new(smart_numbers(*current_year)),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Static => write!(f, "embedded list ({} words)", STATIC_WORDS.len()),
            WordSource::Dictionaries(paths) => {
                let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(f, "dictionaries [{}]", names.join(", "))
            }
            WordSource::Pattern(pattern) => {
                let total = PatternExpander::new(pattern)
                    .total()
                    .map_or_else(|| "overflow".to_string(), |n| n.to_string());
                write!(f, "pattern ({} slots, {} candidates)", pattern.slots().len(), total)
            }
            WordSource::BruteForce(spec) => write!(
                f,
                "brute force ({} chars, length {}..={})",
                spec.charset.len(),
                spec.min_length,
                spec.max_length
            ),
            WordSource::SmartNumbers { current_year } => {
                write!(f, "numeric smart list (years to {})", current_year + smart::FUTURE_YEARS)
            }
        }
    }
}
