// SPDX-License-Identifier: PMPL-1.0-or-later

//! Mutation stage
//!
//! Each input word becomes an ordered, deduplicated set of base forms (case
//! variants, reversal, repetition, leet), which is then multiplied by the
//! configured affixes. Output is grouped by input word. Only the current
//! word's base forms are buffered; affix combinations are computed on demand
//! from a cursor.

use crate::config::GenerationConfig;
use crate::leet;
use crate::types::Candidate;
use std::collections::BTreeSet;

pub const SMART_NUMBER_SUFFIXES: &[&str] = &["1", "123", "123456", "01", "007"];
pub const SMART_SYMBOL_SUFFIXES: &[&str] = &["!", "@", "#", "*", "?!"];

/// Case and structure toggles plus the final affix lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRules {
    pub lowercase: bool,
    pub uppercase: bool,
    pub capitalize: bool,
    pub inverse_case: bool,
    pub reverse: bool,
    pub repeat: bool,
    pub leet: bool,
    pub sandwich: bool,
    /// Sorted, deduplicated
    pub prefixes: Vec<String>,
    /// Sorted, deduplicated; includes smart number and symbol suffixes
    pub suffixes: Vec<String>,
}

impl MutationRules {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let mut suffixes: Vec<String> = config.suffixes.clone();
        if config.smart_numbers {
            suffixes.extend(SMART_NUMBER_SUFFIXES.iter().map(|s| s.to_string()));
            suffixes.push(config.current_year.to_string());
            suffixes.push((config.current_year - 1).to_string());
        }
        if config.smart_symbols {
            suffixes.extend(SMART_SYMBOL_SUFFIXES.iter().map(|s| s.to_string()));
        }

        let rules = Self {
            lowercase: config.lowercase,
            uppercase: config.uppercase,
            capitalize: config.capitalize,
            inverse_case: config.inverse_case,
            reverse: config.reverse,
            repeat: config.repeat,
            leet: config.leet,
            sandwich: config.sandwich,
            prefixes: sorted_unique(config.prefixes.iter().cloned()),
            suffixes: sorted_unique(suffixes),
        };
        log::debug!(
            "mutation rules: {} prefixes, {} suffixes, sandwich={}",
            rules.prefixes.len(),
            rules.suffixes.len(),
            rules.sandwich
        );
        rules
    }

    /// Ordered, deduplicated base forms of `word`
    pub fn base_forms(&self, word: &str) -> Vec<Candidate> {
        let mut forms = vec![word.to_string()];

        if self.lowercase {
            push_unique(&mut forms, word.to_lowercase());
        }
        if self.uppercase {
            push_unique(&mut forms, word.to_uppercase());
        }
        if self.capitalize {
            push_unique(&mut forms, capitalize(word));
        }
        if self.inverse_case {
            push_unique(&mut forms, swap_case(word));
        }
        if self.reverse {
            push_unique(&mut forms, word.chars().rev().collect());
        }
        if self.repeat {
            push_unique(&mut forms, word.repeat(2));
        }
        // Leet runs last so every case variant gets its own substitutions.
        if self.leet {
            let gathered = forms.clone();
            for form in &gathered {
                for variant in leet::substitutions(form) {
                    push_unique(&mut forms, variant);
                }
            }
        }

        forms
    }

    /// Candidates produced per base form
    pub fn expansions_per_form(&self) -> usize {
        let suffixes = self.suffixes.len();
        let sandwiches = if self.sandwich { suffixes } else { 0 };
        1 + suffixes + self.prefixes.len() * (1 + suffixes) + sandwiches
    }

    /// The `step`-th expansion of `form`:
    /// `f`, `f+s`..., then per prefix `p+f`, `p+f+s`..., then `s+f+s`...
    fn expansion(&self, form: &str, step: usize) -> Candidate {
        let suffixes = &self.suffixes;
        if step == 0 {
            return form.to_string();
        }
        let step = step - 1;
        if step < suffixes.len() {
            return format!("{}{}", form, suffixes[step]);
        }

        let step = step - suffixes.len();
        let per_prefix = 1 + suffixes.len();
        if step < self.prefixes.len() * per_prefix {
            let prefix = &self.prefixes[step / per_prefix];
            return match step % per_prefix {
                0 => format!("{}{}", prefix, form),
                n => format!("{}{}{}", prefix, form, suffixes[n - 1]),
            };
        }

        let suffix = &suffixes[step - self.prefixes.len() * per_prefix];
        format!("{}{}{}", suffix, form, suffix)
    }
}

fn sorted_unique(items: impl IntoIterator<Item = String>) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

fn push_unique(forms: &mut Vec<Candidate>, form: Candidate) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}

/// First character upper, remainder lower
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn swap_case(word: &str) -> String {
    word.chars()
        .flat_map(|c| {
            let swapped: Vec<char> = if c.is_uppercase() {
                c.to_lowercase().collect()
            } else if c.is_lowercase() {
                c.to_uppercase().collect()
            } else {
                vec![c]
            };
            swapped
        })
        .collect()
}

/// Lazy mutation stage over any candidate stream
pub struct Mutator<I> {
    source: I,
    rules: MutationRules,
    forms: Vec<Candidate>,
    form_index: usize,
    step: usize,
    steps_per_form: usize,
}

impl<I> Mutator<I>
where
    I: Iterator<Item = Candidate>,
{
    pub fn new(source: I, config: &GenerationConfig) -> Self {
        let rules = MutationRules::from_config(config);
        let steps_per_form = rules.expansions_per_form();
        Self {
            source,
            rules,
            forms: Vec::new(),
            form_index: 0,
            step: 0,
            steps_per_form,
        }
    }

    pub fn rules(&self) -> &MutationRules {
        &self.rules
    }
}

impl<I> Iterator for Mutator<I>
where
    I: Iterator<Item = Candidate>,
{
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.form_index >= self.forms.len() {
            let word = self.source.next()?;
            if word.is_empty() {
                continue;
            }
            self.forms = self.rules.base_forms(&word);
            self.form_index = 0;
            self.step = 0;
        }

        let candidate = self
            .rules
            .expansion(&self.forms[self.form_index], self.step);
        self.step += 1;
        if self.step == self.steps_per_form {
            self.step = 0;
            self.form_index += 1;
        }
        Some(candidate)
    }
}

/// Wrap `source` in the mutation stage. With no rules enabled every input
/// word is yielded once, in order; empty words are the one exception and
/// are dropped rather than producing a zero-length candidate.
pub fn process<I>(source: I, config: &GenerationConfig) -> Mutator<I>
where
    I: Iterator<Item = Candidate>,
{
    Mutator::new(source, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenerationConfig {
        GenerationConfig::for_year(2026)
    }

    #[test]
    fn test_capitalize_and_swap_case() {
        assert_eq!(capitalize("pASSword"), "Password");
        assert_eq!(capitalize(""), "");
        assert_eq!(swap_case("Pass1!"), "pASS1!");
    }

    #[test]
    fn test_reverse_only_applies_to_input_word() {
        let mut cfg = config();
        cfg.uppercase = true;
        cfg.reverse = true;
        let forms = MutationRules::from_config(&cfg).base_forms("Ab");
        assert_eq!(forms, vec!["Ab", "AB", "bA"]);
    }

    #[test]
    fn test_base_forms_dedup() {
        let mut cfg = config();
        cfg.lowercase = true;
        cfg.capitalize = true;
        let forms = MutationRules::from_config(&cfg).base_forms("admin");
        assert_eq!(forms, vec!["admin", "Admin"]);
    }

    #[test]
    fn test_leet_extends_case_forms() {
        let mut cfg = config();
        cfg.uppercase = true;
        cfg.leet = true;
        let forms = MutationRules::from_config(&cfg).base_forms("sa");
        assert_eq!(forms, vec!["sa", "SA", "54", "$@"]);
    }

    #[test]
    fn test_smart_suffixes_sorted() {
        let mut cfg = config();
        cfg.smart_numbers = true;
        cfg.smart_symbols = true;
        cfg.suffixes = vec!["123".to_string(), "".to_string()];
        let rules = MutationRules::from_config(&cfg);
        assert_eq!(
            rules.suffixes,
            vec!["!", "#", "*", "007", "01", "1", "123", "123456", "2025", "2026", "?!", "@"]
        );
    }

    #[test]
    fn test_expansion_order() {
        let mut cfg = config();
        cfg.prefixes = vec!["x".to_string(), "w".to_string()];
        cfg.suffixes = vec!["1".to_string()];
        cfg.sandwich = true;
        let out: Vec<String> = process(vec!["a".to_string()].into_iter(), &cfg).collect();
        assert_eq!(out, vec!["a", "a1", "wa", "wa1", "xa", "xa1", "1a1"]);
    }

    #[test]
    fn test_identity_without_flags() {
        let words = vec!["one".to_string(), "Two".to_string(), "one".to_string()];
        let out: Vec<String> = process(words.clone().into_iter(), &config()).collect();
        assert_eq!(out, words);
    }

    #[test]
    fn test_empty_words_skipped() {
        let words = vec!["".to_string(), "a".to_string()];
        let out: Vec<String> = process(words.into_iter(), &config()).collect();
        assert_eq!(out, vec!["a"]);
    }
}
