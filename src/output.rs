// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output sink: writes candidates one per line until the pipeline ends,
//! the reader goes away or an interrupt is requested

use crate::pipeline::Pipeline;
use crate::report::ProgressMeter;
use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Exhausted,
    LimitReached,
    /// The reader closed the pipe (e.g. `| head`)
    DownstreamClosed,
    Interrupted,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub written: usize,
    pub rejected: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
    pub stopped: StopReason,
}

impl RunSummary {
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.written as f64 / secs
        } else {
            0.0
        }
    }
}

fn as_secs<S>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

fn is_broken_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}

/// Open the output target: a file (parent directories created) or stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Drain `pipeline` into `writer`. A closed pipe or a raised `stop` flag ends
/// the run cleanly; everything already written stays valid.
pub fn emit<W: Write>(
    pipeline: &mut Pipeline,
    writer: W,
    stop: &AtomicBool,
    progress: &mut ProgressMeter,
) -> Result<RunSummary> {
    let start = Instant::now();
    let mut out = BufWriter::new(writer);
    let mut written = 0usize;

    let mut stopped = loop {
        if stop.load(Ordering::Relaxed) {
            break StopReason::Interrupted;
        }
        let Some(candidate) = pipeline.next() else {
            break if pipeline.interrupted() {
                StopReason::Interrupted
            } else if pipeline.limit_reached() {
                StopReason::LimitReached
            } else {
                StopReason::Exhausted
            };
        };
        if let Err(err) = writeln!(out, "{}", candidate) {
            if is_broken_pipe(&err) {
                break StopReason::DownstreamClosed;
            }
            return Err(err).context("writing candidate");
        }
        written += 1;
        progress.tick();
    };

    if let Err(err) = out.flush() {
        if !is_broken_pipe(&err) {
            return Err(err).context("flushing output");
        }
        stopped = StopReason::DownstreamClosed;
    }
    progress.finish();

    Ok(RunSummary {
        written,
        rejected: pipeline.rejected(),
        elapsed: start.elapsed(),
        stopped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn pipeline(words: &[&str], config: &GenerationConfig) -> Pipeline {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Pipeline::over(Box::new(words.into_iter()), config)
    }

    #[test]
    fn test_writes_one_candidate_per_line() {
        let config = GenerationConfig::for_year(2026);
        let mut buffer = Vec::new();
        let summary = emit(
            &mut pipeline(&["a", "b", "a"], &config),
            &mut buffer,
            &AtomicBool::new(false),
            &mut ProgressMeter::disabled(),
        )
        .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a\nb\n");
        assert_eq!(summary.written, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.stopped, StopReason::Exhausted);
    }

    #[test]
    fn test_limit_reported() {
        let mut config = GenerationConfig::for_year(2026);
        config.limit = 1;
        let summary = emit(
            &mut pipeline(&["a", "b"], &config),
            io::sink(),
            &AtomicBool::new(false),
            &mut ProgressMeter::disabled(),
        )
        .unwrap();
        assert_eq!(summary.written, 1);
        assert_eq!(summary.stopped, StopReason::LimitReached);
    }

    #[test]
    fn test_interrupt_stops_before_pulling() {
        let config = GenerationConfig::for_year(2026);
        let mut stages = pipeline(&["a", "b"], &config);
        let summary = emit(
            &mut stages,
            io::sink(),
            &AtomicBool::new(true),
            &mut ProgressMeter::disabled(),
        )
        .unwrap();
        assert_eq!(summary.written, 0);
        assert_eq!(summary.stopped, StopReason::Interrupted);
        assert_eq!(stages.next(), Some("a".to_string()));
    }

    #[test]
    fn test_interrupt_during_rejection_run() {
        let mut config = GenerationConfig::for_year(2026);
        config.require_numbers = true;
        let stop = Arc::new(AtomicBool::new(false));
        let pulled = Arc::new(AtomicUsize::new(0));
        let source = {
            let stop = stop.clone();
            let pulled = pulled.clone();
            (0..2_000_000).map(move |_| {
                if pulled.fetch_add(1, Ordering::SeqCst) + 1 == 10 {
                    stop.store(true, Ordering::SeqCst);
                }
                "abc".to_string()
            })
        };
        let mut stages = Pipeline::over(Box::new(source), &config).with_stop(stop.clone());
        let summary = emit(
            &mut stages,
            io::sink(),
            &stop,
            &mut ProgressMeter::disabled(),
        )
        .unwrap();
        assert_eq!(summary.stopped, StopReason::Interrupted);
        assert_eq!(summary.written, 0);
        assert_eq!(pulled.load(Ordering::SeqCst), 10);
        assert_eq!(summary.rejected, 10);
    }

    #[test]
    fn test_broken_pipe_is_clean_stop() {
        let config = GenerationConfig::for_year(2026);
        let summary = emit(
            &mut pipeline(&["a", "b"], &config),
            ClosedPipe,
            &AtomicBool::new(false),
            &mut ProgressMeter::disabled(),
        )
        .unwrap();
        assert_eq!(summary.stopped, StopReason::DownstreamClosed);
    }
}
