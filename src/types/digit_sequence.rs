//! The mixed-radix digit sequence produced by the rank mapper.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of `k` digits where the digit at 1-based position `j`
/// lies in `[0, j]`.
///
/// The digits are not guaranteed to be distinct, so this is a numeral in a
/// factorial-like base rather than a permutation of `k` elements. The sequence
/// is produced once and never mutated afterwards; only read access is exposed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct DigitSequence(Vec<u32>);

impl DigitSequence {
    pub(crate) fn from_digits(digits: Vec<u32>) -> Self {
        Self(digits)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size in bytes of the digit payload. This is the figure recorded in each
    /// telemetry sample.
    pub fn byte_size(&self) -> usize {
        std::mem::size_of_val(self.0.as_slice())
    }

    /// True if every digit respects its positional radix.
    pub fn is_well_formed(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(idx, &digit)| digit as usize <= idx + 1)
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, digit) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", digit)?;
        }
        write!(f, "]")
    }
}
