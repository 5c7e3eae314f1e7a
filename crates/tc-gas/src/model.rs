//! Gas property model trait and validation helpers.

use crate::error::{GasError, GasResult};
use tc_core::units::{Pressure, Temperature};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific heat capacity at constant pressure [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Trait for gas property models.
///
/// Implementations must be thread-safe (Send + Sync) so a single read-only
/// engine instance can be shared across sweep threads. All methods are
/// deterministic for a fixed (T, P) under a fixed backend.
pub trait GasModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Specific heat at constant pressure [J/(kg·K)] at the given state.
    fn cp(&self, t: Temperature, p: Pressure) -> GasResult<SpecHeatCapacity>;

    /// Specific enthalpy [J/kg] at the given state.
    fn enthalpy(&self, t: Temperature, p: Pressure) -> GasResult<SpecEnthalpy>;
}

/// Validation helpers for gas property inputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> GasResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> GasResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure specific heat capacity is positive and finite.
    pub fn validate_cp(cp: SpecHeatCapacity) -> GasResult<()> {
        if !cp.is_finite() || cp <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "cp must be positive and finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use tc_core::units::{k, pa};

    #[test]
    fn validate_positive_temperature() {
        assert!(validate_temperature(k(300.0)).is_ok());
        assert!(validate_temperature(k(0.0)).is_err());
        assert!(validate_temperature(k(-10.0)).is_err());
        assert!(validate_temperature(k(f64::NAN)).is_err());
    }

    #[test]
    fn validate_positive_pressure() {
        assert!(validate_pressure(pa(101_325.0)).is_ok());
        assert!(validate_pressure(pa(0.0)).is_err());
        assert!(validate_pressure(pa(-100.0)).is_err());
    }

    #[test]
    fn validate_cp_positive() {
        assert!(validate_cp(1005.0).is_ok());
        assert!(validate_cp(0.0).is_err());
        assert!(validate_cp(-100.0).is_err());
        assert!(validate_cp(f64::INFINITY).is_err());
    }
}
