//! Kernelized subspace alignment for cross-environment transfer.
//!
//! Maps archived (source) solutions and freshly sampled (target) solutions
//! into a shared representation that reduces the distributional mismatch
//! between the two domains, then returns the transformed source rows for
//! reuse as seed individuals. The construction follows the reference
//! transfer technique: kernel Gram matrix, MMD block matrix, ridge-smoothed
//! kernel, generalized eigen step.

mod aligner;
pub use aligner::*;
mod kernel;
pub use kernel::*;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TransferError {
    /// Inputs that can never produce a valid alignment (empty domains,
    /// mismatched row widths, bad target dimension).
    Config(String),
    /// The kernel system was singular or produced non-finite values.
    /// Callers are expected to skip transfer for the step, not abort.
    NumericalInstability(String),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Config(msg) => write!(f, "invalid alignment config: {}", msg),
            TransferError::NumericalInstability(msg) => {
                write!(f, "numerical instability during alignment: {}", msg)
            }
        }
    }
}

impl std::error::Error for TransferError {}
