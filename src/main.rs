// SPDX-License-Identifier: PMPL-1.0-or-later

//! wordforge: streaming wordlist generator
//!
//! Builds candidates from dictionaries, patterns or brute force, expands them
//! with deterministic mutation rules and writes the filtered stream to stdout
//! or a file.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wordforge::config::{self, ConfigLayer};
use wordforge::output;
use wordforge::report::{self, ProgressMeter};
use wordforge::types::CharClasses;

#[derive(Parser)]
#[command(name = "wordforge")]
#[command(version)]
#[command(about = "Intelligent wordlist generator")]
#[command(
    after_help = "Example:\n  wordforge --dict rockyou.txt --capitalize --numbers --suffix 2024 --limit 10000"
)]
struct Cli {
    /// Dictionary file(s); use '-' for stdin
    #[arg(short, long, num_args = 1..)]
    dict: Vec<PathBuf>,

    /// Crunch-style pattern: @ lower, , upper, % digit, ^ symbol
    #[arg(short, long)]
    pattern: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML or JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write run statistics as JSON
    #[arg(long, value_name = "PATH")]
    stats: Option<PathBuf>,

    /// Generate from digits
    #[arg(long, help_heading = "Generation")]
    gen_digits: bool,

    /// Generate from lowercase letters
    #[arg(long, help_heading = "Generation")]
    gen_lower: bool,

    /// Generate from uppercase letters
    #[arg(long, help_heading = "Generation")]
    gen_upper: bool,

    /// Generate from ASCII punctuation
    #[arg(long, help_heading = "Generation")]
    gen_symbols: bool,

    /// Custom brute-force charset (overrides the class flags)
    #[arg(long, help_heading = "Generation")]
    charset: Option<String>,

    /// Add lowercase variant
    #[arg(long, help_heading = "Mutations")]
    lower: bool,

    /// Add uppercase variant
    #[arg(long, help_heading = "Mutations")]
    upper: bool,

    /// Add capitalized variant
    #[arg(long, help_heading = "Mutations")]
    capitalize: bool,

    /// Add inverse-case variant (pASSWORD)
    #[arg(long, help_heading = "Mutations")]
    inverse: bool,

    /// Add leetspeak variants
    #[arg(long, help_heading = "Mutations")]
    leet: bool,

    /// Add reversed word
    #[arg(long, help_heading = "Mutations")]
    reverse: bool,

    /// Add word repeated twice
    #[arg(long, help_heading = "Mutations")]
    repeat: bool,

    /// Wrap words in each suffix (123admin123)
    #[arg(long, help_heading = "Mutations")]
    sandwich: bool,

    /// Append common numbers and recent years
    #[arg(long, help_heading = "Mutations")]
    numbers: bool,

    /// Append common symbols
    #[arg(long, help_heading = "Mutations")]
    symbols: bool,

    /// Prefix(es) to prepend
    #[arg(long, num_args = 1.., help_heading = "Prefix & Suffix")]
    prefix: Vec<String>,

    /// Suffix(es) to append
    #[arg(long, num_args = 1.., help_heading = "Prefix & Suffix")]
    suffix: Vec<String>,

    /// Minimum length
    #[arg(long, help_heading = "Filters")]
    min_length: Option<usize>,

    /// Maximum length
    #[arg(long, help_heading = "Filters")]
    max_length: Option<usize>,

    /// Maximum number of words to emit (0 = unlimited)
    #[arg(long, help_heading = "Filters")]
    limit: Option<usize>,

    /// Only emit words containing a digit
    #[arg(long, help_heading = "Filters")]
    require_numbers: bool,

    /// Only emit words containing a symbol
    #[arg(long, help_heading = "Filters")]
    require_symbols: bool,

    /// Only emit words containing an uppercase letter
    #[arg(long, help_heading = "Filters")]
    require_upper: bool,

    /// Only emit words containing a lowercase letter
    #[arg(long, help_heading = "Filters")]
    require_lower: bool,

    /// No banner, summary or progress
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show progress even when writing to stdout
    #[arg(long)]
    progress: bool,
}

impl Cli {
    /// Command-line values as the explicit config layer. Unset flags stay
    /// `None` so the config file can supply them.
    fn explicit_layer(&self) -> ConfigLayer {
        let flag = |set: bool| set.then_some(true);
        let list = |items: &Vec<String>| (!items.is_empty()).then(|| items.clone());

        let classes = CharClasses {
            digits: self.gen_digits,
            lower: self.gen_lower,
            upper: self.gen_upper,
            symbols: self.gen_symbols,
        };

        ConfigLayer {
            dict: (!self.dict.is_empty()).then(|| self.dict.clone()),
            pattern: self.pattern.clone(),
            generate: classes.any().then_some(classes),
            charset: self.charset.clone(),
            lower: flag(self.lower),
            upper: flag(self.upper),
            capitalize: flag(self.capitalize),
            inverse: flag(self.inverse),
            leet: flag(self.leet),
            reverse: flag(self.reverse),
            repeat: flag(self.repeat),
            sandwich: flag(self.sandwich),
            numbers: flag(self.numbers),
            symbols: flag(self.symbols),
            prefix: list(&self.prefix),
            suffix: list(&self.suffix),
            min_length: self.min_length,
            max_length: self.max_length,
            limit: self.limit,
            require_numbers: flag(self.require_numbers),
            require_symbols: flag(self.require_symbols),
            require_upper: flag(self.require_upper),
            require_lowercase: flag(self.require_lower),
        }
    }
}

/// 128 + SIGINT
const INTERRUPT_EXIT_CODE: i32 = 130;

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let current_year = chrono::Local::now().year();
    let settings = config::merge(cli.config.as_deref(), cli.explicit_layer(), current_year)
        .context("invalid configuration")?;

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        // A second interrupt exits even if a blocking read never returns.
        ctrlc::set_handler(move || {
            if stop.swap(true, Ordering::SeqCst) {
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
        })
        .context("installing interrupt handler")?;
    }

    let mut pipeline = wordforge::run(&settings).with_stop(stop.clone());
    if !cli.quiet {
        if let Some(source) = pipeline.source() {
            report::print_banner(&settings, source);
        }
    }

    let mut progress = if !cli.quiet && (cli.progress || cli.output.is_some()) {
        ProgressMeter::new("Generating")
    } else {
        ProgressMeter::disabled()
    };

    let writer = output::open_output(cli.output.as_deref())?;
    let summary = output::emit(&mut pipeline, writer, &stop, &mut progress)?;

    if !cli.quiet {
        report::print_summary(&summary);
    }
    if let Some(path) = &cli.stats {
        report::write_stats(&summary, path)?;
    }

    Ok(())
}
