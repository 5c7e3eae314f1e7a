//! Calorically perfect ideal-gas model.

use crate::error::GasResult;
use crate::model::{GasModel, SpecEnthalpy, SpecHeatCapacity, validation};
use tc_core::units::{Pressure, Temperature};

/// Ideal-gas model with constant specific heat.
///
/// ## Model
///
/// ```text
/// cp(T, P) = cp          (configured constant)
/// h(T, P)  = cp * T      (calorically perfect gas, h = 0 at 0 K)
/// ```
///
/// Pressure is accepted for interface symmetry with real-gas backends but
/// does not influence either property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas {
    cp: SpecHeatCapacity,
}

impl IdealGas {
    /// Create an ideal-gas model with the given constant cp [J/(kg·K)].
    ///
    /// # Errors
    /// Returns an error if cp is zero, negative, or non-finite.
    pub fn new(cp: SpecHeatCapacity) -> GasResult<Self> {
        validation::validate_cp(cp)?;
        Ok(Self { cp })
    }

    /// The configured constant cp [J/(kg·K)].
    pub fn cp_constant(&self) -> SpecHeatCapacity {
        self.cp
    }
}

impl GasModel for IdealGas {
    fn name(&self) -> &str {
        "ideal-gas"
    }

    fn cp(&self, t: Temperature, p: Pressure) -> GasResult<SpecHeatCapacity> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        Ok(self.cp)
    }

    fn enthalpy(&self, t: Temperature, p: Pressure) -> GasResult<SpecEnthalpy> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;
        Ok(self.cp * t.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tc_core::units::{k, pa};

    #[test]
    fn rejects_invalid_cp() {
        assert!(IdealGas::new(0.0).is_err());
        assert!(IdealGas::new(-1.0).is_err());
        assert!(IdealGas::new(f64::NAN).is_err());
    }

    #[test]
    fn rejects_non_physical_state() {
        let gas = IdealGas::new(1005.0).unwrap();
        assert!(gas.cp(k(-1.0), pa(101_325.0)).is_err());
        assert!(gas.enthalpy(k(300.0), pa(0.0)).is_err());
    }

    proptest! {
        // h(T, ·) == cp * T exactly, for any valid state
        #[test]
        fn enthalpy_is_cp_times_t(
            t in 1.0f64..5000.0,
            p in 1.0f64..1e8,
        ) {
            let gas = IdealGas::new(1005.0).unwrap();
            let h = gas.enthalpy(k(t), pa(p)).unwrap();
            prop_assert_eq!(h, 1005.0 * t);
        }

        // cp(T, P) == cp for any valid state
        #[test]
        fn cp_is_constant(
            t in 1.0f64..5000.0,
            p in 1.0f64..1e8,
        ) {
            let gas = IdealGas::new(1005.0).unwrap();
            prop_assert_eq!(gas.cp(k(t), pa(p)).unwrap(), 1005.0);
        }
    }
}
