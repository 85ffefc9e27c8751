// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions shared by every pipeline stage
//!
//! Candidates are plain strings. Character classes, charset specs and
//! patterns describe the combinatorial sources.

use serde::{Deserialize, Serialize};

/// One generated password guess. Identity is its exact content.
pub type Candidate = String;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation in code point order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Symbolic character classes used by patterns, generators and policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Digits,
    Lower,
    Upper,
    Symbols,
}

impl CharClass {
    /// Classes in charset concatenation order
    pub fn all() -> [CharClass; 4] {
        [
            CharClass::Digits,
            CharClass::Lower,
            CharClass::Upper,
            CharClass::Symbols,
        ]
    }

    pub fn charset(&self) -> &'static str {
        match self {
            CharClass::Digits => DIGITS,
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Symbols => PUNCTUATION,
        }
    }

    pub fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Digits => c.is_ascii_digit(),
            CharClass::Lower => c.is_lowercase(),
            CharClass::Upper => c.is_uppercase(),
            CharClass::Symbols => c.is_ascii_punctuation(),
        }
    }

    /// Map a pattern placeholder to its class (`@` `,` `%` `^`)
    pub fn from_placeholder(c: char) -> Option<Self> {
        match c {
            '@' => Some(CharClass::Lower),
            ',' => Some(CharClass::Upper),
            '%' => Some(CharClass::Digits),
            '^' => Some(CharClass::Symbols),
            _ => None,
        }
    }
}

/// Character classes requested for combinatorial generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClasses {
    #[serde(default)]
    pub digits: bool,
    #[serde(default)]
    pub lower: bool,
    #[serde(default)]
    pub upper: bool,
    #[serde(default)]
    pub symbols: bool,
}

impl CharClasses {
    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Digits => self.digits,
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn any(&self) -> bool {
        self.digits || self.lower || self.upper || self.symbols
    }

    pub fn is_digits_only(&self) -> bool {
        self.digits && !self.lower && !self.upper && !self.symbols
    }

    /// Concatenated charset of every requested class
    pub fn charset(&self) -> String {
        CharClass::all()
            .iter()
            .filter(|class| self.contains(**class))
            .map(|class| class.charset())
            .collect()
    }
}

/// Brute-force alphabet plus an inclusive length range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetSpec {
    pub charset: Vec<char>,
    pub min_length: usize,
    pub max_length: usize,
}

impl CharsetSpec {
    /// Build a charset spec, dropping repeated charset characters (first occurrence wins)
    pub fn new(charset: &str, min_length: usize, max_length: usize) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(charset.len());
        for c in charset.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Self {
            charset: chars,
            min_length,
            max_length,
        }
    }

    pub fn is_digits_only(&self) -> bool {
        !self.charset.is_empty() && self.charset.iter().all(|c| c.is_ascii_digit())
    }
}

/// One position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Literal(char),
    Class(CharClass),
}

impl Slot {
    /// Characters this slot can take, in generation order
    pub fn choices(&self) -> Vec<char> {
        match self {
            Slot::Literal(c) => vec![*c],
            Slot::Class(class) => class.charset().chars().collect(),
        }
    }
}

/// Crunch-style pattern: a fixed sequence of literal and class slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    pub fn parse(text: &str) -> Self {
        let slots = text
            .chars()
            .map(|c| match CharClass::from_placeholder(c) {
                Some(class) => Slot::Class(class),
                None => Slot::Literal(c),
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_literal(&self) -> bool {
        self.slots.iter().all(|slot| matches!(slot, Slot::Literal(_)))
    }
}
