// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line-by-line dictionary reader over files and stdin
//!
//! Files are opened one at a time and dropped as soon as they are exhausted
//! or fail. Missing files and read errors are logged and skipped; they never
//! abort the run. No deduplication happens here.

use crate::types::Candidate;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Path token that selects standard input
pub const STDIN_MARKER: &str = "-";

pub struct DictionaryReader {
    paths: VecDeque<PathBuf>,
    current: Option<(PathBuf, Box<dyn BufRead>)>,
    buf: Vec<u8>,
}

impl DictionaryReader {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into(),
            current: None,
            buf: Vec::new(),
        }
    }

    /// Open the next path that can be opened, warning about the rest
    fn open_next(&mut self) -> bool {
        while let Some(path) = self.paths.pop_front() {
            match open(&path) {
                Ok(reader) => {
                    log::debug!("reading dictionary {}", path.display());
                    self.current = Some((path, reader));
                    return true;
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    log::warn!("dictionary file not found: {}", path.display());
                }
                Err(err) => {
                    log::warn!("cannot open dictionary {}: {}", path.display(), err);
                }
            }
        }
        false
    }
}

fn open(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path == Path::new(STDIN_MARKER) {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// UTF-8 first, then a Windows-1252 fallback so no line is ever lost
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text
        }
    }
}

impl Iterator for DictionaryReader {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            if self.current.is_none() && !self.open_next() {
                return None;
            }
            let Some((path, reader)) = self.current.as_mut() else {
                continue;
            };

            self.buf.clear();
            match reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    log::debug!("finished dictionary {}", path.display());
                }
                Ok(_) => {
                    let line = decode_line(&self.buf);
                    let word = line.trim();
                    if !word.is_empty() {
                        return Some(word.to_string());
                    }
                    continue;
                }
                Err(err) => {
                    log::warn!(
                        "error reading {}: {} (skipping rest of file)",
                        path.display(),
                        err
                    );
                }
            }
            self.current = None;
        }
    }
}
