//! Error types for digit plan computation.

use serde::{Deserialize, Serialize};

/// Failure of a single digit plan computation.
///
/// Only [`ComputationError::InvalidValue`] is reachable from user input. The
/// remaining variants signal a broken internal invariant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ComputationError {
    /// The primary operand is negative, non-numeric, or NaN.
    #[error("Invalid value: {reason}")]
    InvalidValue { reason: String },

    /// The aligner was handed a greater operand below the lesser one.
    #[error("Numbers are out of order: {greater} < {lesser}")]
    OutOfOrder { lesser: f64, greater: f64 },

    /// A digit and a decimal point ended up at the same aligned index.
    #[error("Aligned digits disagree at index {index}")]
    Misaligned { index: usize },
}

impl ComputationError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// True for variants that indicate a programming defect rather than bad input.
    #[inline]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::OutOfOrder { .. } | Self::Misaligned { .. })
    }
}
