// SPDX-License-Identifier: PMPL-1.0-or-later

//! Leetspeak substitution
//!
//! Produces at most two variants per word: every substitutable letter swapped
//! for its primary symbol, and, when it differs, the variant that prefers each
//! letter's secondary symbol.

/// Replacement symbols per lowercase letter, primary first
const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('b', &['8']),
    ('e', &['3']),
    ('g', &['6', '9']),
    ('i', &['1', '!']),
    ('l', &['1', '!']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7', '+']),
    ('z', &['2']),
];

fn replacements(c: char) -> Option<&'static [char]> {
    let lower = c.to_ascii_lowercase();
    LEET_TABLE
        .iter()
        .find(|(letter, _)| *letter == lower)
        .map(|(_, subs)| *subs)
}

/// Leet variants of `word`; empty when nothing is substitutable
pub fn substitutions(word: &str) -> Vec<String> {
    if !word.chars().any(|c| replacements(c).is_some()) {
        return Vec::new();
    }

    let primary: String = word
        .chars()
        .map(|c| replacements(c).map_or(c, |subs| subs[0]))
        .collect();
    let alternate: String = word
        .chars()
        .map(|c| replacements(c).map_or(c, |subs| subs[subs.len() - 1]))
        .collect();

    if alternate == primary {
        vec![primary]
    } else {
        vec![primary, alternate]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_variants() {
        assert_eq!(
            substitutions("password"),
            vec!["p455w0rd".to_string(), "p@$$w0rd".to_string()]
        );
    }

    #[test]
    fn test_no_substitutable_letters() {
        assert!(substitutions("xyz").is_empty());
        assert!(substitutions("").is_empty());
        assert!(substitutions("123").is_empty());
    }

    #[test]
    fn test_single_replacement_letters_yield_one_variant() {
        // b, e, o and z only have one symbol, so the alternate equals the primary
        assert_eq!(substitutions("bozo"), vec!["8020".to_string()]);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(
            substitutions("ADMIN"),
            vec!["4DM1N".to_string(), "@DM!N".to_string()]
        );
    }

    #[test]
    fn test_never_more_than_two() {
        for word in ["alligator", "testing", "Zebras", "glass"] {
            assert!(substitutions(word).len() <= 2, "{}", word);
        }
    }
}
