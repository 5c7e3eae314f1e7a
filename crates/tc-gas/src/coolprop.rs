//! CoolProp-based real-gas model for air.

use crate::error::{GasError, GasResult};
use crate::model::{GasModel, SpecEnthalpy, SpecHeatCapacity, validation};
use rfluids::prelude::*;
use tc_core::units::{Pressure, Temperature};

/// CoolProp equation-of-state backend for the pseudo-pure fluid "Air".
///
/// Thread-safe: rfluids Fluid instances are created per query and are not
/// shared between calls.
#[derive(Debug, Clone, Copy)]
pub struct CoolPropGas;

impl CoolPropGas {
    /// Create the backend, probing it once with a reference-state query.
    ///
    /// The probe makes backend availability a construction-time decision:
    /// if it fails, the caller falls back to the ideal-gas model rather
    /// than deferring failures into property lookups.
    pub fn new() -> GasResult<Self> {
        let backend = Self;
        // Sea-level standard state; any supported backend must resolve it.
        backend.fluid_at(288.15, 101_325.0)?;
        Ok(backend)
    }

    fn fluid_at(&self, t_k: f64, p_pa: f64) -> GasResult<Fluid> {
        Fluid::from(Pure::Air)
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| GasError::Backend {
                message: format!("rfluids error at T={} K, P={} Pa: {}", t_k, p_pa, e),
            })
    }
}

impl GasModel for CoolPropGas {
    fn name(&self) -> &str {
        "coolprop-air"
    }

    fn cp(&self, t: Temperature, p: Pressure) -> GasResult<SpecHeatCapacity> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;

        let mut fluid = self.fluid_at(t.value, p.value)?;
        let cp = fluid.specific_heat().map_err(|e| GasError::Backend {
            message: format!("rfluids error getting specific heat: {}", e),
        })?;
        validation::validate_cp(cp)?;
        Ok(cp)
    }

    fn enthalpy(&self, t: Temperature, p: Pressure) -> GasResult<SpecEnthalpy> {
        validation::validate_temperature(t)?;
        validation::validate_pressure(p)?;

        let mut fluid = self.fluid_at(t.value, p.value)?;
        fluid.enthalpy().map_err(|e| GasError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })
    }
}
