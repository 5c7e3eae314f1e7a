//! Cycle analysis errors.

use tc_core::TcError;
use tc_gas::GasError;
use thiserror::Error;

/// Result type for cycle operations.
pub type CycleResult<T> = Result<T, CycleError>;

/// Errors that can occur during cycle construction or simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Invalid design parameter, rejected at construction.
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    /// Operating-point argument that makes a formula undefined.
    #[error("Operating point outside model domain: {what}")]
    Domain { what: &'static str },

    /// Gas property lookup failed.
    #[error("Gas property error: {0}")]
    Gas(String),
}

impl From<GasError> for CycleError {
    fn from(err: GasError) -> Self {
        CycleError::Gas(err.to_string())
    }
}

impl From<TcError> for CycleError {
    fn from(err: TcError) -> Self {
        // Numeric guards fire on operating-point values, not stored config,
        // so they surface as domain errors.
        match err {
            TcError::NonFinite { what, .. } => CycleError::Domain { what },
            TcError::InvalidArg { what } => CycleError::Domain { what },
            TcError::Invariant { what } => CycleError::Domain { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CycleError::InvalidConfig {
            what: "pressure ratio must be positive",
        };
        assert!(err.to_string().contains("pressure ratio"));

        let err = CycleError::Domain {
            what: "peak temperature must be positive",
        };
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn gas_error_converts() {
        let gas_err = GasError::NonPhysical { what: "pressure" };
        let err: CycleError = gas_err.into();
        assert!(matches!(err, CycleError::Gas(_)));
    }
}
