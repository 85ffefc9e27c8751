// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded list of well-known weak credentials

use crate::types::Candidate;
use std::collections::HashSet;

pub const STATIC_WORDS: &[&str] = &[
    "password", "admin", "root", "user", "123456", "qwerty", "welcome", "login", "manager",
    "guest", "test", "demo", "access", "master",
];

/// Every embedded word exactly once, in list order
pub fn static_words() -> impl Iterator<Item = Candidate> {
    let mut seen = HashSet::new();
    STATIC_WORDS
        .iter()
        .filter(move |word| seen.insert(**word))
        .map(|word| word.to_string())
}
