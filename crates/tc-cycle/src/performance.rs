//! Per-variant performance records.
//!
//! Each engine variant returns its own tagged record shape. The serialized
//! field names are an external contract: downstream tabular, CSV, and
//! Pareto-front consumers key into them by literal string, so renaming any
//! of them is a breaking change.

use serde::{Deserialize, Serialize};

/// Contract key strings, shared between serialization and ordered iteration.
pub mod keys {
    pub const COMPRESSOR_EXIT_TEMP: &str = "Compressor Exit Temp (K)";
    pub const COMPRESSOR_EXIT_PRESSURE: &str = "Compressor Exit Pressure (Pa)";
    pub const TURBINE_EXIT_TEMP: &str = "Turbine Exit Temp (K)";
    pub const TURBINE_EXIT_PRESSURE: &str = "Turbine Exit Pressure (Pa)";
    pub const AFTERBURNER_EXIT_TEMP: &str = "Afterburner Exit Temp (K)";
    pub const NOZZLE_EXIT_VELOCITY: &str = "Nozzle Exit Velocity (m/s)";
    pub const SPECIFIC_THRUST: &str = "Specific Thrust (N/kg/s)";
    pub const THERMAL_EFFICIENCY: &str = "Thermal Efficiency";
    pub const ADDITIONAL_FUEL_TO_AIR_RATIO: &str = "Additional Fuel-to-Air Ratio";
}

/// Results of one turbojet simulate call. All values SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbojetPerformance {
    #[serde(rename = "Compressor Exit Temp (K)")]
    pub compressor_exit_temp_k: f64,
    #[serde(rename = "Compressor Exit Pressure (Pa)")]
    pub compressor_exit_pressure_pa: f64,
    #[serde(rename = "Turbine Exit Temp (K)")]
    pub turbine_exit_temp_k: f64,
    #[serde(rename = "Turbine Exit Pressure (Pa)")]
    pub turbine_exit_pressure_pa: f64,
    #[serde(rename = "Nozzle Exit Velocity (m/s)")]
    pub nozzle_exit_velocity_mps: f64,
    #[serde(rename = "Specific Thrust (N/kg/s)")]
    pub specific_thrust: f64,
    #[serde(rename = "Thermal Efficiency")]
    pub thermal_efficiency: f64,
}

impl TurbojetPerformance {
    /// Metrics in contract order as (key, value) pairs.
    pub fn metrics(&self) -> [(&'static str, f64); 7] {
        [
            (keys::COMPRESSOR_EXIT_TEMP, self.compressor_exit_temp_k),
            (
                keys::COMPRESSOR_EXIT_PRESSURE,
                self.compressor_exit_pressure_pa,
            ),
            (keys::TURBINE_EXIT_TEMP, self.turbine_exit_temp_k),
            (keys::TURBINE_EXIT_PRESSURE, self.turbine_exit_pressure_pa),
            (keys::NOZZLE_EXIT_VELOCITY, self.nozzle_exit_velocity_mps),
            (keys::SPECIFIC_THRUST, self.specific_thrust),
            (keys::THERMAL_EFFICIENCY, self.thermal_efficiency),
        ]
    }
}

/// Results of one afterburning-turbojet simulate call. All values SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AfterburningPerformance {
    #[serde(rename = "Compressor Exit Temp (K)")]
    pub compressor_exit_temp_k: f64,
    #[serde(rename = "Turbine Exit Temp (K)")]
    pub turbine_exit_temp_k: f64,
    #[serde(rename = "Afterburner Exit Temp (K)")]
    pub afterburner_exit_temp_k: f64,
    #[serde(rename = "Nozzle Exit Velocity (m/s)")]
    pub nozzle_exit_velocity_mps: f64,
    #[serde(rename = "Specific Thrust (N/kg/s)")]
    pub specific_thrust: f64,
    #[serde(rename = "Additional Fuel-to-Air Ratio")]
    pub additional_fuel_to_air_ratio: f64,
}

impl AfterburningPerformance {
    /// Metrics in contract order as (key, value) pairs.
    pub fn metrics(&self) -> [(&'static str, f64); 6] {
        [
            (keys::COMPRESSOR_EXIT_TEMP, self.compressor_exit_temp_k),
            (keys::TURBINE_EXIT_TEMP, self.turbine_exit_temp_k),
            (keys::AFTERBURNER_EXIT_TEMP, self.afterburner_exit_temp_k),
            (keys::NOZZLE_EXIT_VELOCITY, self.nozzle_exit_velocity_mps),
            (keys::SPECIFIC_THRUST, self.specific_thrust),
            (
                keys::ADDITIONAL_FUEL_TO_AIR_RATIO,
                self.additional_fuel_to_air_ratio,
            ),
        ]
    }
}
