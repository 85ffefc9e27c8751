// SPDX-License-Identifier: PMPL-1.0-or-later

//! Numeric smart list: common PINs, plausible years and every 4-digit code,
//! used instead of brute force when no minimum length is requested.

use crate::types::Candidate;
use std::collections::HashSet;

pub const FIRST_YEAR: i32 = 1980;
/// Years past the current one that are still worth trying
pub const FUTURE_YEARS: i32 = 5;

const COMMON_NUMBERS: &[&str] = &[
    "123", "1234", "12345", "123456", "1234567", "12345678", "123456789", "1234567890",
    "0123456789", "987654321", "654321", "4321", "000", "0000", "000000", "00000000", "111",
    "1111", "111111", "11111111", "121212", "123123", "112233", "101010", "666666", "696969",
    "777777", "888888", "999999", "159753", "147258369",
];

/// Lazily yields the smart list without repeats
pub fn smart_numbers(current_year: i32) -> impl Iterator<Item = Candidate> {
    let common = COMMON_NUMBERS.iter().map(|n| n.to_string());
    let years = (FIRST_YEAR..=current_year + FUTURE_YEARS).map(|year| year.to_string());
    let pins = (0..10_000u32).map(|pin| format!("{:04}", pin));

    let mut seen = HashSet::new();
    common
        .chain(years)
        .chain(pins)
        .filter(move |candidate| seen.insert(candidate.clone()))
}
