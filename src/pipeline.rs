// SPDX-License-Identifier: PMPL-1.0-or-later

//! Source -> mutation -> filter, chained as pull-based iterators

use crate::config::{GenerationConfig, Settings};
use crate::filter::Filter;
use crate::mutate::Mutator;
use crate::source::{Candidates, WordSource};
use crate::types::Candidate;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub struct Pipeline {
    source: Option<WordSource>,
    stages: Filter<Mutator<Candidates>>,
}

impl Pipeline {
    /// Chain the stages over an arbitrary base stream
    pub fn over(words: Candidates, config: &GenerationConfig) -> Self {
        Self {
            source: None,
            stages: Filter::new(Mutator::new(words, config), config),
        }
    }

    /// Share an interrupt flag with the filter so a raised flag stops
    /// upstream pulls between rejections, not only between emitted candidates
    pub fn with_stop(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stages = self.stages.with_stop(stop);
        self
    }

    /// Base source in use, when selected from settings
    pub fn source(&self) -> Option<&WordSource> {
        self.source.as_ref()
    }

    pub fn emitted(&self) -> usize {
        self.stages.emitted()
    }

    pub fn rejected(&self) -> usize {
        self.stages.rejected()
    }

    pub fn limit_reached(&self) -> bool {
        self.stages.limit_reached()
    }

    pub fn interrupted(&self) -> bool {
        self.stages.interrupted()
    }
}

impl Iterator for Pipeline {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        self.stages.next()
    }
}

/// Build the pipeline for one run. Nothing is generated until it is pulled.
pub fn run(settings: &Settings) -> Pipeline {
    let source = WordSource::select(&settings.source, settings.generation.current_year);
    log::info!("base source: {}", source);
    let mut pipeline = Pipeline::over(source.produce(), &settings.generation);
    pipeline.source = Some(source);
    pipeline
}
