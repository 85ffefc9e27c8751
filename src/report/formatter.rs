// SPDX-License-Identifier: PMPL-1.0-or-later

//! Colored run banner and summary, written to stderr so the candidate
//! stream on stdout stays clean

use crate::config::Settings;
use crate::output::{RunSummary, StopReason};
use crate::source::WordSource;
use colored::*;

pub struct RunFormatter;

impl RunFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self, settings: &Settings, source: &WordSource) {
        let generation = &settings.generation;
        eprintln!("{}", "=== WORDFORGE ===".bold().cyan());
        eprintln!("  Source: {}", source.to_string().bold());

        let toggles: Vec<&str> = [
            (generation.lowercase, "lower"),
            (generation.uppercase, "upper"),
            (generation.capitalize, "capitalize"),
            (generation.inverse_case, "inverse"),
            (generation.leet, "leet"),
            (generation.reverse, "reverse"),
            (generation.repeat, "repeat"),
            (generation.sandwich, "sandwich"),
            (generation.smart_numbers, "numbers"),
            (generation.smart_symbols, "symbols"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect();
        if toggles.is_empty() {
            eprintln!("  Mutations: {}", "none".dimmed());
        } else {
            eprintln!("  Mutations: {}", toggles.join(", ").yellow());
        }

        if !generation.prefixes.is_empty() {
            eprintln!("  Prefixes: {}", generation.prefixes.join(" "));
        }
        if !generation.suffixes.is_empty() {
            eprintln!("  Suffixes: {}", generation.suffixes.join(" "));
        }

        eprintln!(
            "  Length: {}..={}  |  Limit: {}",
            generation.min_length,
            generation.max_length,
            if generation.limit > 0 {
                generation.limit.to_string()
            } else {
                "unlimited".to_string()
            }
        );
        if generation.has_content_policy() {
            let policies: Vec<&str> = [
                (generation.require_numbers, "digit"),
                (generation.require_symbols, "symbol"),
                (generation.require_upper, "upper"),
                (generation.require_lowercase, "lower"),
            ]
            .into_iter()
            .filter_map(|(enabled, name)| enabled.then_some(name))
            .collect();
            eprintln!("  Requires: {}", policies.join(", "));
        }
        eprintln!();
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        let status = match summary.stopped {
            StopReason::Exhausted => "source exhausted".green(),
            StopReason::LimitReached => "limit reached".green(),
            StopReason::DownstreamClosed => "output closed".yellow(),
            StopReason::Interrupted => "interrupted".red(),
        };
        eprintln!("{}", "=== SUMMARY ===".bold().cyan());
        eprintln!("  Written: {}", summary.written.to_string().bold());
        eprintln!("  Rejected: {}", summary.rejected);
        eprintln!(
            "  Elapsed: {:.2}s ({:.0} words/s)",
            summary.elapsed.as_secs_f64(),
            summary.rate()
        );
        eprintln!("  Stopped: {}", status);
    }
}

impl Default for RunFormatter {
    fn default() -> Self {
        Self::new()
    }
}
