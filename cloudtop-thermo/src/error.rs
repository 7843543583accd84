use thiserror::Error;

/// Errors that may occur when evaluating parcel thermodynamics.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThermoError {
    /// An input scalar is NaN or infinite.
    #[error("`{name}` is not finite: {value}")]
    NonFiniteInput { name: &'static str, value: f64 },
}
