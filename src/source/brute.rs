// SPDX-License-Identifier: PMPL-1.0-or-later

//! Brute-force enumeration over a charset and length range
//!
//! Counts in a mixed-radix system whose digits are the charset, most
//! significant position first, one length at a time from shortest to
//! longest. Only the current index vector is kept in memory.

use crate::types::{Candidate, CharsetSpec};

pub struct BruteForce {
    charset: Vec<char>,
    length: usize,
    max_length: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl BruteForce {
    pub fn new(spec: &CharsetSpec) -> Self {
        let exhausted = spec.charset.is_empty() || spec.min_length > spec.max_length;
        Self {
            charset: spec.charset.clone(),
            length: spec.min_length,
            max_length: spec.max_length,
            indices: vec![0; spec.min_length],
            exhausted,
        }
    }

    /// Step to the next index vector, rolling over to the next length when
    /// every position has wrapped.
    fn advance(&mut self) {
        let radix = self.charset.len();
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < radix {
                return;
            }
            self.indices[pos] = 0;
        }

        if self.length >= self.max_length {
            self.exhausted = true;
            return;
        }
        self.length += 1;
        self.indices = vec![0; self.length];
    }
}

impl Iterator for BruteForce {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.exhausted {
            return None;
        }
        let word: String = self.indices.iter().map(|&i| self.charset[i]).collect();
        self.advance();
        Some(word)
    }
}
