// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration errors. These are fatal and raised before the pipeline starts.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("min length {min} is greater than max length {max}")]
    InvertedLengthRange { min: usize, max: usize },
    #[error("custom charset is empty")]
    EmptyCharset,
    #[error("reading config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },
    #[error("unsupported config file extension for {}", .path.display())]
    UnsupportedConfigFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, GenerationError>;
