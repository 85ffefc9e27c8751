// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pattern expansion: the Cartesian product of every slot's characters

use crate::types::{Candidate, Pattern};

/// Lazily walks all expansions of a pattern in lexicographic slot order.
/// The rightmost slot varies fastest.
pub struct PatternExpander {
    choices: Vec<Vec<char>>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl PatternExpander {
    pub fn new(pattern: &Pattern) -> Self {
        let choices: Vec<Vec<char>> = pattern.slots().iter().map(|slot| slot.choices()).collect();
        let exhausted = choices.is_empty() || choices.iter().any(|c| c.is_empty());
        Self {
            indices: vec![0; choices.len()],
            choices,
            exhausted,
        }
    }

    /// Number of expansions, or `None` if it overflows `u128`
    pub fn total(&self) -> Option<u128> {
        if self.choices.is_empty() {
            return Some(0);
        }
        self.choices
            .iter()
            .try_fold(1u128, |acc, c| acc.checked_mul(c.len() as u128))
    }

    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.choices[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for PatternExpander {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.exhausted {
            return None;
        }
        let word: String = self
            .indices
            .iter()
            .zip(&self.choices)
            .map(|(&i, chars)| chars[i])
            .collect();
        self.advance();
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> Vec<String> {
        PatternExpander::new(&Pattern::parse(text)).collect()
    }

    #[test]
    fn test_mixed_pattern() {
        let words = expand("a%");
        assert_eq!(words.len(), 10);
        assert_eq!(words.first().map(String::as_str), Some("a0"));
        assert_eq!(words.last().map(String::as_str), Some("a9"));
    }

    #[test]
    fn test_alpha_pattern_order() {
        let words = expand("@@");
        assert_eq!(words.len(), 26 * 26);
        assert_eq!(&words[..3], &["aa", "ab", "ac"]);
        assert_eq!(words.last().map(String::as_str), Some("zz"));
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(sorted, words);
    }

    #[test]
    fn test_upper_and_symbol_slots() {
        let words = expand(",^");
        assert_eq!(words.len(), 26 * 32);
        assert_eq!(words[0], "A!");
        assert_eq!(words.last().map(String::as_str), Some("Z~"));
    }

    #[test]
    fn test_empty_pattern_yields_nothing() {
        assert!(expand("").is_empty());
        assert_eq!(PatternExpander::new(&Pattern::parse("")).total(), Some(0));
    }

    #[test]
    fn test_total_matches_product() {
        let expander = PatternExpander::new(&Pattern::parse("x%@"));
        assert_eq!(expander.total(), Some(260));
    }
}
