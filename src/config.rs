// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration: defaults, an optional config file and explicit overrides.
//!
//! Both the config file and the command line produce a [`ConfigLayer`] in
//! which every field is optional. Layers are merged field by field with
//! explicit > file > default precedence into an immutable [`Settings`].

use crate::error::{GenerationError, Result};
use crate::types::CharClasses;
use serde::Deserialize;
use serde_json;
use serde_yaml;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MIN_LENGTH: usize = 0;
pub const DEFAULT_MAX_LENGTH: usize = 999;

/// Mutation toggles, affixes and filter policies for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub lowercase: bool,
    pub uppercase: bool,
    pub capitalize: bool,
    pub inverse_case: bool,
    pub leet: bool,
    pub reverse: bool,
    pub repeat: bool,
    pub sandwich: bool,
    pub smart_numbers: bool,
    pub smart_symbols: bool,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub min_length: usize,
    pub max_length: usize,
    /// Hard cap on emitted candidates, 0 = unlimited
    pub limit: usize,
    pub require_numbers: bool,
    pub require_symbols: bool,
    pub require_upper: bool,
    pub require_lowercase: bool,
    /// Clock input for year-based smart lists
    pub current_year: i32,
}

impl GenerationConfig {
    /// Defaults with every toggle off
    pub fn for_year(current_year: i32) -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            capitalize: false,
            inverse_case: false,
            leet: false,
            reverse: false,
            repeat: false,
            sandwich: false,
            smart_numbers: false,
            smart_symbols: false,
            prefixes: Vec::new(),
            suffixes: Vec::new(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            limit: 0,
            require_numbers: false,
            require_symbols: false,
            require_upper: false,
            require_lowercase: false,
            current_year,
        }
    }

    pub fn has_content_policy(&self) -> bool {
        self.require_numbers || self.require_symbols || self.require_upper || self.require_lowercase
    }
}

/// Where base candidates come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSpec {
    /// Dictionary paths; `-` reads stdin
    pub dictionaries: Vec<PathBuf>,
    pub pattern: Option<String>,
    pub classes: CharClasses,
    pub charset: Option<String>,
    /// Length bounds given explicitly (file or command line), not defaulted
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl SourceSpec {
    pub fn wants_generator(&self) -> bool {
        self.classes.any() || self.charset.is_some()
    }
}

/// Fully merged settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: SourceSpec,
    pub generation: GenerationConfig,
}

/// One layer of optional settings, deserialized from a config file or built
/// from command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(alias = "dicts")]
    pub dict: Option<Vec<PathBuf>>,
    pub pattern: Option<String>,
    pub generate: Option<CharClasses>,
    pub charset: Option<String>,

    pub lower: Option<bool>,
    pub upper: Option<bool>,
    pub capitalize: Option<bool>,
    pub inverse: Option<bool>,
    pub leet: Option<bool>,
    pub reverse: Option<bool>,
    pub repeat: Option<bool>,
    pub sandwich: Option<bool>,
    pub numbers: Option<bool>,
    pub symbols: Option<bool>,
    #[serde(alias = "prefixes")]
    pub prefix: Option<Vec<String>>,
    #[serde(alias = "suffixes")]
    pub suffix: Option<Vec<String>>,

    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub limit: Option<usize>,
    pub require_numbers: Option<bool>,
    pub require_symbols: Option<bool>,
    pub require_upper: Option<bool>,
    #[serde(alias = "require_lower")]
    pub require_lowercase: Option<bool>,
}

impl ConfigLayer {
    /// Load a layer from a YAML or JSON file, chosen by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GenerationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |message: String| GenerationError::ConfigParse {
            path: path.to_path_buf(),
            message,
        };
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => {
                // An empty YAML document is a valid, empty layer.
                if content.trim().is_empty() {
                    return Ok(Self::default());
                }
                serde_yaml::from_str(&content).map_err(|err| parse_error(err.to_string()))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|err| parse_error(err.to_string()))
            }
            _ => Err(GenerationError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Field-wise merge: values set in `self` win over `lower`
    pub fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            dict: non_empty(self.dict).or(lower.dict),
            pattern: self.pattern.or(lower.pattern),
            generate: self.generate.or(lower.generate),
            charset: self.charset.or(lower.charset),
            lower: self.lower.or(lower.lower),
            upper: self.upper.or(lower.upper),
            capitalize: self.capitalize.or(lower.capitalize),
            inverse: self.inverse.or(lower.inverse),
            leet: self.leet.or(lower.leet),
            reverse: self.reverse.or(lower.reverse),
            repeat: self.repeat.or(lower.repeat),
            sandwich: self.sandwich.or(lower.sandwich),
            numbers: self.numbers.or(lower.numbers),
            symbols: self.symbols.or(lower.symbols),
            prefix: non_empty(self.prefix).or(lower.prefix),
            suffix: non_empty(self.suffix).or(lower.suffix),
            min_length: self.min_length.or(lower.min_length),
            max_length: self.max_length.or(lower.max_length),
            limit: self.limit.or(lower.limit),
            require_numbers: self.require_numbers.or(lower.require_numbers),
            require_symbols: self.require_symbols.or(lower.require_symbols),
            require_upper: self.require_upper.or(lower.require_upper),
            require_lowercase: self.require_lowercase.or(lower.require_lowercase),
        }
    }

    /// Resolve remaining gaps with defaults and validate the result
    pub fn resolve(self, current_year: i32) -> Result<Settings> {
        let min_length = self.min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        let max_length = self.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        if min_length > max_length {
            return Err(GenerationError::InvertedLengthRange {
                min: min_length,
                max: max_length,
            });
        }
        if matches!(self.charset.as_deref(), Some("")) {
            return Err(GenerationError::EmptyCharset);
        }

        let source = SourceSpec {
            dictionaries: self.dict.unwrap_or_default(),
            pattern: self.pattern,
            classes: self.generate.unwrap_or_default(),
            charset: self.charset,
            min_length: self.min_length,
            max_length: self.max_length,
        };

        let generation = GenerationConfig {
            lowercase: self.lower.unwrap_or(false),
            uppercase: self.upper.unwrap_or(false),
            capitalize: self.capitalize.unwrap_or(false),
            inverse_case: self.inverse.unwrap_or(false),
            leet: self.leet.unwrap_or(false),
            reverse: self.reverse.unwrap_or(false),
            repeat: self.repeat.unwrap_or(false),
            sandwich: self.sandwich.unwrap_or(false),
            smart_numbers: self.numbers.unwrap_or(false),
            smart_symbols: self.symbols.unwrap_or(false),
            prefixes: self.prefix.unwrap_or_default(),
            suffixes: self.suffix.unwrap_or_default(),
            min_length,
            max_length,
            limit: self.limit.unwrap_or(0),
            require_numbers: self.require_numbers.unwrap_or(false),
            require_symbols: self.require_symbols.unwrap_or(false),
            require_upper: self.require_upper.unwrap_or(false),
            require_lowercase: self.require_lowercase.unwrap_or(false),
            current_year,
        };

        Ok(Settings { source, generation })
    }
}

fn non_empty<T>(list: Option<Vec<T>>) -> Option<Vec<T>> {
    list.filter(|items| !items.is_empty())
}

/// Merge explicit overrides over an optional config file over defaults
pub fn merge(
    file: Option<&Path>,
    explicit: ConfigLayer,
    current_year: i32,
) -> Result<Settings> {
    let file_layer = match file {
        Some(path) => ConfigLayer::load(path)?,
        None => ConfigLayer::default(),
    };
    explicit.over(file_layer).resolve(current_year)
}
