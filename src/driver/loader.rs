//! Candidate loading from delimited text.
//!
//! One candidate per line. Only the first comma-separated field is read, so
//! both bare value files and `value,extra` rows are accepted. Blank lines are
//! skipped; anything else that is not an integer is an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Result, SpeedyError};

/// Reads candidates from any reader.
///
/// # Errors
/// `SpeedyError::MalformedInput` with the 1-based line number for a token that
/// is not UTF-8 or does not parse as `i64`; `SpeedyError::Io` if the reader fails.
pub fn load_candidates<R: Read>(reader: R) -> Result<Vec<i64>> {
    let mut values = Vec::new();

    for (idx, raw) in BufReader::new(reader).split(b'\n').enumerate() {
        let raw = raw?;
        let line = std::str::from_utf8(&raw).map_err(|_| SpeedyError::MalformedInput {
            line: idx + 1,
            token: String::from_utf8_lossy(&raw).trim().to_string(),
        })?;
        let token = line.split(',').next().unwrap_or("").trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| SpeedyError::MalformedInput {
                line: idx + 1,
                token: token.to_string(),
            })?;
        values.push(value);
    }

    log::debug!("loaded {} candidate values", values.len());
    Ok(values)
}

/// Opens `path` and reads candidates from it.
pub fn load_candidates_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    log::info!("loading candidates from {}", path.display());
    load_candidates(File::open(path)?)
}
