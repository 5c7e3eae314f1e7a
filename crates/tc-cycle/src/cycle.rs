//! Base engine cycle: shared design state and isentropic math.

use crate::config::CycleConfig;
use crate::error::{CycleError, CycleResult};
use crate::stage::{self, StageState};
use tc_core::units::{Temperature, Velocity};
use tc_gas::{GasProperties, SpecEnthalpy, SpecHeatCapacity};

/// Base cycle model: immutable design config plus the injected gas
/// capability.
///
/// Every operation is a pure function of the stored config and its call
/// arguments; no simulation results are retained between calls. Instances
/// are safe to share read-only across threads.
#[derive(Debug)]
pub struct EngineCycle {
    config: CycleConfig,
    gas: GasProperties,
}

impl EngineCycle {
    /// Build a cycle from a validated config.
    ///
    /// The gas capability is resolved here, once: a real-gas request with no
    /// available backend degrades to ideal with a single warning and never
    /// fails construction.
    pub fn new(config: CycleConfig) -> CycleResult<Self> {
        let gas = GasProperties::select(config.gas_model(), config.cp())?;
        Ok(Self { config, gas })
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    /// Inlet conditions as a gas-path state.
    pub fn inlet_state(&self) -> StageState {
        StageState::new(self.config.inlet_temperature(), self.config.inlet_pressure())
    }

    /// Exit state after isentropic compression across the design pressure
    /// ratio.
    pub fn compressor_exit(&self) -> CycleResult<StageState> {
        stage::compress(
            self.inlet_state(),
            self.config.pressure_ratio(),
            self.config.gamma(),
        )
    }

    /// Cycle thermal efficiency in the inlet/peak-temperature-ratio form:
    ///
    /// ```text
    /// η = 1 - T1 / T_max
    /// ```
    ///
    /// This is the model's defined notion of thermal efficiency. It is not
    /// the pressure-ratio Brayton expression `1 - r^((1-γ)/γ)` and must not
    /// be replaced by it.
    pub fn thermal_efficiency(&self, max_temp: Temperature) -> CycleResult<f64> {
        if !max_temp.value.is_finite() || max_temp.value <= 0.0 {
            return Err(CycleError::Domain {
                what: "peak cycle temperature must be positive",
            });
        }
        Ok(1.0 - self.config.inlet_temperature().value / max_temp.value)
    }

    /// Specific thrust from a single ideal expansion back across the full
    /// compressor pressure ratio, with the flow at the peak temperature.
    ///
    /// This simplified one-expansion model is independent of the staged
    /// turbojet pipeline and deliberately kept as a separate operation.
    pub fn specific_thrust(&self, max_temp: Temperature) -> CycleResult<Velocity> {
        if !max_temp.value.is_finite() || max_temp.value <= 0.0 {
            return Err(CycleError::Domain {
                what: "peak cycle temperature must be positive",
            });
        }
        let compressor_exit = self.compressor_exit()?;
        let hot_flow = StageState::new(max_temp, compressor_exit.pressure);
        stage::nozzle_exit_velocity(
            hot_flow,
            self.config.inlet_pressure(),
            self.config.gamma(),
            self.config.gas_constant(),
        )
    }

    /// Specific heat at a gas-path state, from the injected gas model.
    pub fn cp_at(&self, state: &StageState) -> CycleResult<SpecHeatCapacity> {
        Ok(self.gas.cp(state.temperature, state.pressure)?)
    }

    /// Specific enthalpy at a gas-path state, from the injected gas model.
    pub fn enthalpy_at(&self, state: &StageState) -> CycleResult<SpecEnthalpy> {
        Ok(self.gas.enthalpy(state.temperature, state.pressure)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::units::{k, pa};

    fn sea_level_cycle(r: f64) -> EngineCycle {
        let config = CycleConfig::new(k(288.15), pa(101_325.0), r, 1.4).unwrap();
        EngineCycle::new(config).unwrap()
    }

    #[test]
    fn compressor_exit_matches_isentropic_relation() {
        let cycle = sea_level_cycle(10.0);
        let exit = cycle.compressor_exit().unwrap();
        assert!((exit.temperature.value - 556.3).abs() < 1.0);
        assert!((exit.pressure.value - 1_013_250.0).abs() < 1e-6);
    }

    #[test]
    fn thermal_efficiency_uses_temperature_ratio_form() {
        use tc_core::{Tolerances, nearly_equal};

        let cycle = sea_level_cycle(10.0);
        let eta = cycle.thermal_efficiency(k(1400.0)).unwrap();
        assert!(nearly_equal(
            eta,
            1.0 - 288.15 / 1400.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn thermal_efficiency_rejects_zero_peak_temperature() {
        let cycle = sea_level_cycle(10.0);
        assert!(matches!(
            cycle.thermal_efficiency(k(0.0)),
            Err(CycleError::Domain { .. })
        ));
        assert!(cycle.thermal_efficiency(k(-100.0)).is_err());
    }

    #[test]
    fn specific_thrust_expands_across_full_pressure_ratio() {
        let cycle = sea_level_cycle(10.0);
        let v = cycle.specific_thrust(k(1400.0)).unwrap();

        // Hand calc: sqrt(2*1.4*287*1400/0.4 * (1 - (1/10)^(0.4/1.4)))
        let bracket = 1.0 - 0.1f64.powf(0.4 / 1.4);
        let expected = (2.0 * 1.4 * 287.0 * 1400.0 / 0.4 * bracket).sqrt();
        assert!((v.value - expected).abs() < 1e-9);
    }

    #[test]
    fn specific_thrust_is_zero_at_unity_pressure_ratio() {
        let cycle = sea_level_cycle(1.0);
        let v = cycle.specific_thrust(k(1400.0)).unwrap();
        assert_eq!(v.value, 0.0);
    }

    #[test]
    fn gas_lookup_is_exposed_on_the_cycle() {
        let cycle = sea_level_cycle(10.0);
        let inlet = cycle.inlet_state();
        assert_eq!(cycle.cp_at(&inlet).unwrap(), 1005.0);
        assert_eq!(cycle.enthalpy_at(&inlet).unwrap(), 1005.0 * 288.15);
    }
}
