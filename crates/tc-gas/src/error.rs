//! Gas property errors.

use thiserror::Error;

/// Result type for gas property operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur during gas property lookup.
///
/// Backend unavailability is deliberately NOT represented here: a missing
/// equation-of-state backend is a recoverable condition handled at provider
/// construction (fallback to ideal gas), not an error surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Non-physical values (negative pressure, temperature, cp).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Backend (CoolProp) error for a state it should support.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GasError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = GasError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }
}
