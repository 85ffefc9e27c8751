// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filter stage: length bounds, content policies, global uniqueness and a
//! hard output limit
//!
//! The seen-set grows with every emitted candidate. That is the price of
//! exact deduplication on very large runs.

use crate::config::GenerationConfig;
use crate::types::{Candidate, CharClass};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a candidate was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    TooShort,
    TooLong,
    Missing(CharClass),
    Duplicate,
}

/// Stateless part of the filter: bounds and content policies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub required: Vec<CharClass>,
}

impl FilterPolicy {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let required = [
            (config.require_numbers, CharClass::Digits),
            (config.require_symbols, CharClass::Symbols),
            (config.require_upper, CharClass::Upper),
            (config.require_lowercase, CharClass::Lower),
        ]
        .into_iter()
        .filter_map(|(enabled, class)| enabled.then_some(class))
        .collect();

        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            required,
        }
    }

    /// First failing length or content check, if any
    pub fn check(&self, candidate: &str) -> Option<Rejection> {
        let length = candidate.chars().count();
        if length < self.min_length {
            return Some(Rejection::TooShort);
        }
        if length > self.max_length {
            return Some(Rejection::TooLong);
        }
        self.required
            .iter()
            .find(|class| !candidate.chars().any(|c| class.matches(c)))
            .map(|class| Rejection::Missing(*class))
    }
}

/// Lazy filter over any candidate stream
pub struct Filter<I> {
    source: I,
    policy: FilterPolicy,
    limit: usize,
    seen: HashSet<Candidate>,
    emitted: usize,
    rejected: usize,
    stop: Option<Arc<AtomicBool>>,
}

impl<I> Filter<I>
where
    I: Iterator<Item = Candidate>,
{
    pub fn new(source: I, config: &GenerationConfig) -> Self {
        Self {
            source,
            policy: FilterPolicy::from_config(config),
            limit: config.limit,
            seen: HashSet::new(),
            emitted: 0,
            rejected: 0,
            stop: None,
        }
    }

    /// Stop pulling from upstream once `stop` is raised, even mid-rejection
    pub fn with_stop(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn limit_reached(&self) -> bool {
        self.limit > 0 && self.emitted >= self.limit
    }

    pub fn interrupted(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|stop| stop.load(Ordering::Relaxed))
    }

    fn admit(&mut self, candidate: &Candidate) -> Result<(), Rejection> {
        if let Some(rejection) = self.policy.check(candidate) {
            return Err(rejection);
        }
        if self.seen.contains(candidate) {
            return Err(Rejection::Duplicate);
        }
        self.seen.insert(candidate.clone());
        Ok(())
    }
}

impl<I> Iterator for Filter<I>
where
    I: Iterator<Item = Candidate>,
{
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        // Checked before pulling so upstream is never drained past the limit.
        while !self.limit_reached() && !self.interrupted() {
            let candidate = self.source.next()?;
            match self.admit(&candidate) {
                Ok(()) => {
                    self.emitted += 1;
                    return Some(candidate);
                }
                Err(_) => self.rejected += 1,
            }
        }
        None
    }
}

/// Wrap `source` in the filter stage
pub fn filter<I>(source: I, config: &GenerationConfig) -> Filter<I>
where
    I: Iterator<Item = Candidate>,
{
    Filter::new(source, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_length_bounds() {
        let mut cfg = GenerationConfig::for_year(2026);
        cfg.min_length = 4;
        cfg.max_length = 6;
        let out: Vec<String> =
            filter(words(&["hi", "pass", "longer", "toolongword"]).into_iter(), &cfg).collect();
        assert_eq!(out, vec!["pass", "longer"]);
    }

    #[test]
    fn test_length_counts_characters() {
        let mut cfg = GenerationConfig::for_year(2026);
        cfg.max_length = 4;
        let out: Vec<String> = filter(words(&["café"]).into_iter(), &cfg).collect();
        assert_eq!(out, vec!["café"]);
    }

    #[test]
    fn test_policy_reports_first_failure() {
        let mut cfg = GenerationConfig::for_year(2026);
        cfg.require_numbers = true;
        cfg.require_upper = true;
        let policy = FilterPolicy::from_config(&cfg);
        assert_eq!(policy.check("pass"), Some(Rejection::Missing(CharClass::Digits)));
        assert_eq!(policy.check("pass1"), Some(Rejection::Missing(CharClass::Upper)));
        assert_eq!(policy.check("Pass1"), None);
    }

    #[test]
    fn test_rejections_counted() {
        let cfg = GenerationConfig::for_year(2026);
        let mut stage = filter(words(&["a", "a", "b"]).into_iter(), &cfg);
        let out: Vec<String> = stage.by_ref().collect();
        assert_eq!(out, vec!["a", "b"]);
        assert_eq!(stage.emitted(), 2);
        assert_eq!(stage.rejected(), 1);
    }

    #[test]
    fn test_stop_flag_ends_rejection_run() {
        let mut cfg = GenerationConfig::for_year(2026);
        cfg.require_numbers = true;
        let stop = Arc::new(AtomicBool::new(false));
        let raise = stop.clone();
        let source = (0..1_000_000).map(move |i| {
            if i == 10 {
                raise.store(true, Ordering::SeqCst);
            }
            "abc".to_string()
        });
        let mut stage = filter(source, &cfg).with_stop(stop);
        assert_eq!(stage.next(), None);
        assert!(stage.interrupted());
        assert_eq!(stage.rejected(), 11);
    }
}
