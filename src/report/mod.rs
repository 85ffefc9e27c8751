// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run reporting: banner, summary, progress meter and JSON stats

pub mod formatter;
pub mod progress;

use crate::config::Settings;
use crate::output::RunSummary;
use crate::source::WordSource;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::RunFormatter;
pub use progress::ProgressMeter;

pub fn print_banner(settings: &Settings, source: &WordSource) {
    RunFormatter::new().print_banner(settings, source);
}

pub fn print_summary(summary: &RunSummary) {
    RunFormatter::new().print_summary(summary);
}

/// Write run statistics as JSON
pub fn write_stats(summary: &RunSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json).with_context(|| format!("writing stats to {}", path.display()))?;
    Ok(())
}
