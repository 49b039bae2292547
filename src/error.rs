// In: src/error.rs

//! This module defines the single, unified error type for the entire speedy library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeedyError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// A caller-supplied parameter is outside its valid domain (e.g. `n == 0`).
    /// Always raised before any unwind step runs.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The candidate sequence was empty, so no minimum or maximum exists.
    #[error("Input contained no candidate values")]
    EmptyInput,

    /// A candidate token could not be parsed as an integer.
    #[error("Malformed input on line {line}: '{token}' is not an integer")]
    MalformedInput { line: usize, token: String },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during config or report handling.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, SpeedyError>;

/// Rejects a zero domain or selection size. Shared by every entry point that
/// accepts `n` and `k` so the check runs before any computation.
pub(crate) fn ensure_positive(n: u64, k: u32) -> Result<()> {
    if n == 0 {
        return Err(SpeedyError::InvalidArgument(format!(
            "domain size n must be positive, got {}",
            n
        )));
    }
    if k == 0 {
        return Err(SpeedyError::InvalidArgument(format!(
            "selection size k must be positive, got {}",
            k
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_rejects_zero() {
        assert!(matches!(
            ensure_positive(0, 5),
            Err(SpeedyError::InvalidArgument(_))
        ));
        assert!(matches!(
            ensure_positive(5, 0),
            Err(SpeedyError::InvalidArgument(_))
        ));
        assert!(ensure_positive(1, 1).is_ok());
    }

    #[test]
    fn test_malformed_message_names_line_and_token() {
        let err = SpeedyError::MalformedInput {
            line: 3,
            token: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed input on line 3: 'abc' is not an integer"
        );
    }
}
