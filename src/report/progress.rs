// SPDX-License-Identifier: PMPL-1.0-or-later

//! Throughput meter redrawn in place on stderr

use std::io::{self, Write};
use std::time::Instant;

pub const REDRAW_EVERY: u64 = 1000;

pub struct ProgressMeter {
    enabled: bool,
    label: &'static str,
    count: u64,
    start: Instant,
    drawn: bool,
}

impl ProgressMeter {
    pub fn new(label: &'static str) -> Self {
        Self {
            enabled: true,
            label,
            count: 0,
            start: Instant::now(),
            drawn: false,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new("")
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn tick(&mut self) {
        self.count += 1;
        if self.enabled && self.count % REDRAW_EVERY == 0 {
            self.draw();
        }
    }

    fn draw(&mut self) {
        let elapsed = self.start.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.count as f64 / elapsed
        } else {
            0.0
        };
        let mut stderr = io::stderr().lock();
        // Progress is best effort; a failing stderr must not stop generation.
        let _ = write!(stderr, "\r{}: {} words | {:.0} w/s", self.label, self.count, rate);
        let _ = stderr.flush();
        self.drawn = true;
    }

    /// Final redraw and line break, only if anything was drawn
    pub fn finish(&mut self) {
        if self.enabled && self.drawn {
            self.draw();
            eprintln!();
        }
    }
}
