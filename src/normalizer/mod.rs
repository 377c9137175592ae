//! Time expression normalizer
//!
//! Rewrites Spanish time-of-day expressions (`5h30m`, `17h`, `9:05`,
//! `8 en punto`, `3 de la tarde`, `5 y cuarto`, ...) into 24-hour `HH:MM`.
//! Expressions that match a pattern but do not describe a valid time are
//! written back unchanged.

mod patterns;
mod rewriter;
mod time_converter;
mod time_types;

pub use patterns::{TimePattern, TIME_PATTERNS};
pub use rewriter::{rewrite_line, LineRewriter, RewrittenLine};
pub use time_converter::{convert_explicit, convert_natural, ConversionError};
pub use time_types::{CanonicalTime, Period, Qualifier};

use log::info;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Errors that abort a normalization run
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Failed to open input file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create output file '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write line {line}")]
    Write {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Counters collected over a normalization run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub lines: usize,
    pub rewritten: usize,
    pub rejected: usize,
}

impl fmt::Display for NormalizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines, {} expressions normalized, {} left unchanged",
            self.lines, self.rewritten, self.rejected
        )
    }
}

/// Stream `reader` into `writer` one line at a time, normalizing each line.
pub fn normalize_reader<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<NormalizeSummary, NormalizeError> {
    let rewriter = LineRewriter::default();
    let mut summary = NormalizeSummary::default();
    let mut line = String::new();

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|source| NormalizeError::Read { line: summary.lines + 1, source })?;
        if read == 0 {
            break;
        }
        summary.lines += 1;

        let result = rewriter.rewrite(&line);
        summary.rewritten += result.rewritten;
        summary.rejected += result.rejected;

        writer
            .write_all(result.text.as_bytes())
            .map_err(|source| NormalizeError::Write { line: summary.lines, source })?;
    }

    writer
        .flush()
        .map_err(|source| NormalizeError::Write { line: summary.lines, source })?;

    Ok(summary)
}

/// Normalize the time expressions of `input` into a new file at `output`.
///
/// The output keeps the line structure of the input. Nothing is retried: an
/// I/O failure aborts the run and whatever was flushed so far stays on disk.
pub fn normalize_times<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<NormalizeSummary, NormalizeError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|source| NormalizeError::Open { path: input.to_path_buf(), source })?;
    let writer = File::create(output)
        .map(BufWriter::new)
        .map_err(|source| NormalizeError::Create { path: output.to_path_buf(), source })?;

    info!("Normalizing times: {} -> {}", input.display(), output.display());
    let summary = normalize_reader(reader, writer)?;
    info!("Finished {}: {}", input.display(), summary);

    Ok(summary)
}
