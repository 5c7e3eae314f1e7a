//! Turbojet engine model.

use crate::config::{CycleConfig, TurbojetSpec};
use crate::cycle::EngineCycle;
use crate::error::CycleResult;
use crate::performance::TurbojetPerformance;
use crate::stage;
use tc_core::units::Temperature;

/// Dry (non-afterburning) turbojet.
///
/// ## Model
///
/// A fixed four-stage pipeline per simulate call:
///
/// 1. Compressor: isentropic compression across the design pressure ratio
/// 2. Combustor: constant-pressure heat addition to the peak temperature
/// 3. Turbine: isentropic expansion to the fixed back-pressure margin
///    `P4 = 1.2 * P1`
/// 4. Nozzle: isentropic expansion from `P4` to ambient
///
/// Derived metrics compose multiplicatively:
///
/// ```text
/// thrust      = V_exit * η_nozzle
/// thermal_eff = (1 - T1/T_max) * η_combustion
/// ```
#[derive(Debug)]
pub struct Turbojet {
    cycle: EngineCycle,
    spec: TurbojetSpec,
}

impl Turbojet {
    /// Build a turbojet from a cycle config and turbojet parameters.
    pub fn new(config: CycleConfig, spec: TurbojetSpec) -> CycleResult<Self> {
        Ok(Self {
            cycle: EngineCycle::new(config)?,
            spec,
        })
    }

    /// The underlying base cycle.
    pub fn cycle(&self) -> &EngineCycle {
        &self.cycle
    }

    pub fn spec(&self) -> &TurbojetSpec {
        &self.spec
    }

    /// Run the four-stage pipeline for one operating point.
    ///
    /// Pure function of the stored design state and `max_temp`; nothing is
    /// retained between calls.
    pub fn simulate_cycle(&self, max_temp: Temperature) -> CycleResult<TurbojetPerformance> {
        let config = self.cycle.config();

        let compressor_exit = self.cycle.compressor_exit()?;
        let combustor_exit = stage::combust(compressor_exit, max_temp)?;
        let turbine_exit = stage::expand_to_back_pressure(
            combustor_exit,
            config.inlet_pressure(),
            config.gamma(),
        )?;
        let exit_velocity = stage::nozzle_exit_velocity(
            turbine_exit,
            config.inlet_pressure(),
            config.gamma(),
            config.gas_constant(),
        )?;

        let specific_thrust = exit_velocity.value * self.spec.nozzle_efficiency();
        let thermal_efficiency =
            self.cycle.thermal_efficiency(max_temp)? * self.spec.combustion_efficiency();

        Ok(TurbojetPerformance {
            compressor_exit_temp_k: compressor_exit.temperature.value,
            compressor_exit_pressure_pa: compressor_exit.pressure.value,
            turbine_exit_temp_k: turbine_exit.temperature.value,
            turbine_exit_pressure_pa: turbine_exit.pressure.value,
            nozzle_exit_velocity_mps: exit_velocity.value,
            specific_thrust,
            thermal_efficiency,
        })
    }
}
