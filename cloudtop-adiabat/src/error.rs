use thiserror::Error;

use crate::variant::ModelVariant;

/// Errors that make a coefficient table unusable.
///
/// A malformed table is a build-time defect, not a runtime data issue, so
/// construction fails outright and no evaluation can proceed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TableError {
    /// The table's row count does not match the variant's adiabat degree.
    #[error("coefficient table has {actual} rows, but the {variant:?} variant requires {expected}")]
    RowCount {
        variant: ModelVariant,
        expected: usize,
        actual: usize,
    },

    /// A table entry is NaN or infinite.
    #[error("coefficient table entry [{row}][{col}] is not finite")]
    NonFiniteEntry { row: usize, col: usize },
}

/// Errors that may occur when evaluating the surrogate.
///
/// Out-of-domain inputs are deliberately *not* represented here; they are
/// reported as data via [`DomainCheck`](crate::DomainCheck).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluateError {
    /// An input scalar is NaN or infinite.
    ///
    /// Rejected before any arithmetic so a NaN cannot propagate silently
    /// through the polynomial chain.
    #[error("`{name}` is not finite: {value}")]
    NonFiniteInput { name: &'static str, value: f64 },
}
