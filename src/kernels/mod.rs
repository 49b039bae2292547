//! This module serves as the public API for the collection of pure, stateless
//! numeric kernels used by the unwinder.
//!
//! Kernels never allocate shared state and never log; orchestration and
//! observability live in `pipeline`.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Layered scalar transforms: `encode` / `decode` at a nesting depth.
pub mod codec;

/// Mixed-radix rank expansion.
pub mod rank;

//==================================================================================
// 2. Public API
//==================================================================================

pub use codec::{decode, encode};
pub use rank::ith_digits;
