//! Test-set generation: every rank `1..=n^k`, shuffled, one per line.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ensure_positive, Result, SpeedyError};

/// Size of the enumeration space, `n^k`, or `None` on overflow.
pub fn enumeration_size(n: u64, k: u32) -> Option<u64> {
    n.checked_pow(k)
}

/// Builds the values `1..=n^k` in random order.
///
/// # Errors
/// `SpeedyError::InvalidArgument` if `n` or `k` is zero, or if `n^k` overflows
/// or exceeds `max_values`.
pub fn generate_test_set<R: Rng + ?Sized>(
    n: u64,
    k: u32,
    max_values: u64,
    rng: &mut R,
) -> Result<Vec<i64>> {
    ensure_positive(n, k)?;
    let size = enumeration_size(n, k)
        .filter(|&size| size <= max_values)
        .ok_or_else(|| {
            SpeedyError::InvalidArgument(format!(
                "n^k for n={} k={} exceeds the generator limit of {} values",
                n, k, max_values
            ))
        })?;
    let size = i64::try_from(size).map_err(|_| {
        SpeedyError::InvalidArgument(format!("n^k = {} does not fit an i64 rank", size))
    })?;

    let mut values: Vec<i64> = (1..=size).collect();
    values.shuffle(rng);

    log::info!("generated {} shuffled values for n={} k={}", values.len(), n, k);
    Ok(values)
}

/// Writes one value per line.
pub fn write_test_set<W: Write>(writer: W, values: &[i64]) -> Result<()> {
    let mut out = BufWriter::new(writer);
    for value in values {
        writeln!(out, "{}", value)?;
    }
    out.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the values to it.
pub fn write_test_set_to_path<P: AsRef<Path>>(path: P, values: &[i64]) -> Result<()> {
    let path = path.as_ref();
    write_test_set(File::create(path)?, values)?;
    log::info!("wrote {} values to {}", values.len(), path.display());
    Ok(())
}
