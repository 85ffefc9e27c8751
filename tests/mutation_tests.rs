// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the mutation stage

use wordforge::config::GenerationConfig;
use wordforge::mutate;

fn run(words: &[&str], config: &GenerationConfig) -> Vec<String> {
    let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    mutate::process(words.into_iter(), config).collect()
}

fn base_config() -> GenerationConfig {
    GenerationConfig::for_year(2025)
}

#[test]
fn test_case_transformations() {
    let mut config = base_config();
    config.lowercase = true;
    config.uppercase = true;
    let results = run(&["Test"], &config);
    assert!(results.contains(&"TEST".to_string()));
    assert!(results.contains(&"test".to_string()));
    assert!(results.contains(&"Test".to_string()));
    assert!(results.iter().all(|r| !r.is_empty()));
}

#[test]
fn test_no_flags_is_identity() {
    let results = run(&["b", "a", "c"], &base_config());
    assert_eq!(results, vec!["b", "a", "c"]);
}

#[test]
fn test_smart_numbers() {
    let mut config = base_config();
    config.smart_numbers = true;
    let results = run(&["pass"], &config);
    assert!(results.contains(&"pass123".to_string()));
    assert!(results.contains(&"pass1".to_string()));
    assert!(results.contains(&"pass2025".to_string()));
    assert!(results.contains(&"pass2024".to_string()));
    assert!(!results.contains(&"pass2026".to_string()));
}

#[test]
fn test_smart_symbols() {
    let mut config = base_config();
    config.smart_symbols = true;
    let results = run(&["pass"], &config);
    for expected in ["pass!", "pass@", "pass#", "pass*", "pass?!"] {
        assert!(results.contains(&expected.to_string()), "missing {}", expected);
    }
}

#[test]
fn test_prefix_suffix() {
    let mut config = base_config();
    config.prefixes = vec!["pre_".to_string()];
    config.suffixes = vec!["_suf".to_string()];
    let results = run(&["word"], &config);
    assert_eq!(results, vec!["word", "word_suf", "pre_word", "pre_word_suf"]);
}

#[test]
fn test_reverse() {
    let mut config = base_config();
    config.reverse = true;
    let results = run(&["admin"], &config);
    assert_eq!(results, vec!["admin", "nimda"]);
}

#[test]
fn test_repeat() {
    let mut config = base_config();
    config.repeat = true;
    let results = run(&["admin"], &config);
    assert!(results.contains(&"adminadmin".to_string()));
}

#[test]
fn test_sandwich() {
    let mut config = base_config();
    config.sandwich = true;
    config.suffixes = vec!["123".to_string()];
    let results = run(&["admin"], &config);
    assert!(results.contains(&"123admin123".to_string()));
    assert!(results.contains(&"admin123".to_string()));
}

#[test]
fn test_leet_applies_to_case_variants() {
    let mut config = base_config();
    config.capitalize = true;
    config.leet = true;
    let results = run(&["password"], &config);
    assert!(results.contains(&"Password".to_string()));
    assert!(results.contains(&"p455w0rd".to_string()));
    assert!(results.contains(&"p@$$w0rd".to_string()));
    assert!(results.contains(&"P455w0rd".to_string()));
}

#[test]
fn test_output_grouped_by_input_word() {
    let mut config = base_config();
    config.suffixes = vec!["1".to_string()];
    let results = run(&["b", "a"], &config);
    assert_eq!(results, vec!["b", "b1", "a", "a1"]);
}

#[test]
fn test_stage_is_lazy_over_unbounded_input() {
    let mut config = base_config();
    config.uppercase = true;
    let endless = std::iter::repeat("word".to_string());
    let first: Vec<String> = mutate::process(endless, &config).take(4).collect();
    assert_eq!(first, vec!["word", "WORD", "word", "WORD"]);
}

#[test]
fn test_large_affix_cross_product_is_streamed() {
    let mut config = base_config();
    config.prefixes = (0..2000).map(|n| format!("p{}", n)).collect();
    config.suffixes = (0..2000).map(|n| format!("s{}", n)).collect();
    let mut stage = mutate::process(vec!["w".to_string()].into_iter(), &config);
    assert_eq!(stage.rules().expansions_per_form(), 1 + 2000 + 2000 * 2001);
    assert_eq!(stage.next(), Some("w".to_string()));
    assert_eq!(stage.next(), Some("ws0".to_string()));
}
