//! Engine design-point configuration.
//!
//! A config is created once per design point, validated eagerly, and reused
//! across any number of simulate calls with different operating parameters.
//! Nothing here mutates after construction.

use crate::error::{CycleError, CycleResult};
use tc_core::units::{Pressure, Temperature};
use tc_gas::{GasModelKind, SpecHeatCapacity};

/// Default specific heat at constant pressure for air [J/(kg·K)]
pub const DEFAULT_CP: SpecHeatCapacity = 1005.0;

/// Default specific gas constant for air [J/(kg·K)]
pub const DEFAULT_GAS_CONSTANT: f64 = 287.0;

/// Shared design state for all engine cycle variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleConfig {
    inlet_temperature: Temperature,
    inlet_pressure: Pressure,
    pressure_ratio: f64,
    gamma: f64,
    cp: SpecHeatCapacity,
    gas_constant: f64,
    gas_model: GasModelKind,
}

impl CycleConfig {
    /// Create a config with air defaults for cp/R and the ideal-gas model.
    ///
    /// # Errors
    /// Rejects non-positive inlet temperature or pressure, a non-positive
    /// pressure ratio, or `gamma <= 1`, all at construction.
    pub fn new(
        inlet_temperature: Temperature,
        inlet_pressure: Pressure,
        pressure_ratio: f64,
        gamma: f64,
    ) -> CycleResult<Self> {
        let config = Self {
            inlet_temperature,
            inlet_pressure,
            pressure_ratio,
            gamma,
            cp: DEFAULT_CP,
            gas_constant: DEFAULT_GAS_CONSTANT,
            gas_model: GasModelKind::Ideal,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the gas constants (cp [J/(kg·K)], R [J/(kg·K)]).
    pub fn with_gas_constants(
        mut self,
        cp: SpecHeatCapacity,
        gas_constant: f64,
    ) -> CycleResult<Self> {
        self.cp = cp;
        self.gas_constant = gas_constant;
        self.validate()?;
        Ok(self)
    }

    /// Select the gas property model.
    pub fn with_gas_model(mut self, gas_model: GasModelKind) -> Self {
        self.gas_model = gas_model;
        self
    }

    fn validate(&self) -> CycleResult<()> {
        let t1 = self.inlet_temperature.value;
        if !t1.is_finite() || t1 <= 0.0 {
            return Err(CycleError::InvalidConfig {
                what: "inlet temperature must be positive and finite",
            });
        }
        let p1 = self.inlet_pressure.value;
        if !p1.is_finite() || p1 <= 0.0 {
            return Err(CycleError::InvalidConfig {
                what: "inlet pressure must be positive and finite",
            });
        }
        if !self.pressure_ratio.is_finite() || self.pressure_ratio <= 0.0 {
            return Err(CycleError::InvalidConfig {
                what: "pressure ratio must be positive and finite",
            });
        }
        if !self.gamma.is_finite() || self.gamma <= 1.0 {
            return Err(CycleError::InvalidConfig {
                what: "specific heat ratio must be greater than 1",
            });
        }
        if !self.cp.is_finite() || self.cp <= 0.0 {
            return Err(CycleError::InvalidConfig {
                what: "cp must be positive and finite",
            });
        }
        if !self.gas_constant.is_finite() || self.gas_constant <= 0.0 {
            return Err(CycleError::InvalidConfig {
                what: "gas constant must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn inlet_temperature(&self) -> Temperature {
        self.inlet_temperature
    }

    pub fn inlet_pressure(&self) -> Pressure {
        self.inlet_pressure
    }

    pub fn pressure_ratio(&self) -> f64 {
        self.pressure_ratio
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn cp(&self) -> SpecHeatCapacity {
        self.cp
    }

    pub fn gas_constant(&self) -> f64 {
        self.gas_constant
    }

    pub fn gas_model(&self) -> GasModelKind {
        self.gas_model
    }
}

/// Turbojet-specific design parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbojetSpec {
    fuel_to_air_ratio: f64,
    combustion_efficiency: f64,
    nozzle_efficiency: f64,
}

impl TurbojetSpec {
    /// Create turbojet parameters.
    ///
    /// # Errors
    /// Rejects a negative fuel-to-air ratio or efficiencies outside (0, 1].
    pub fn new(
        fuel_to_air_ratio: f64,
        combustion_efficiency: f64,
        nozzle_efficiency: f64,
    ) -> CycleResult<Self> {
        if !fuel_to_air_ratio.is_finite() || fuel_to_air_ratio < 0.0 {
            return Err(CycleError::InvalidConfig {
                what: "fuel-to-air ratio must be non-negative and finite",
            });
        }
        validate_efficiency(combustion_efficiency, "combustion efficiency must be in (0,1]")?;
        validate_efficiency(nozzle_efficiency, "nozzle efficiency must be in (0,1]")?;
        Ok(Self {
            fuel_to_air_ratio,
            combustion_efficiency,
            nozzle_efficiency,
        })
    }

    pub fn fuel_to_air_ratio(&self) -> f64 {
        self.fuel_to_air_ratio
    }

    pub fn combustion_efficiency(&self) -> f64 {
        self.combustion_efficiency
    }

    pub fn nozzle_efficiency(&self) -> f64 {
        self.nozzle_efficiency
    }
}

impl Default for TurbojetSpec {
    /// Eurofighter-like defaults: f = 0.025, η_comb = 0.98, η_noz = 0.95.
    fn default() -> Self {
        Self {
            fuel_to_air_ratio: 0.025,
            combustion_efficiency: 0.98,
            nozzle_efficiency: 0.95,
        }
    }
}

/// Afterburner (reheat stage) design parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AfterburnerSpec {
    efficiency: f64,
    fuel_ratio: f64,
}

impl AfterburnerSpec {
    /// Create afterburner parameters.
    ///
    /// # Errors
    /// Rejects an efficiency outside (0, 1] or a negative fuel ratio.
    pub fn new(efficiency: f64, fuel_ratio: f64) -> CycleResult<Self> {
        validate_efficiency(efficiency, "afterburner efficiency must be in (0,1]")?;
        if !fuel_ratio.is_finite() || fuel_ratio < 0.0 {
            return Err(CycleError::InvalidConfig {
                what: "afterburner fuel ratio must be non-negative and finite",
            });
        }
        Ok(Self {
            efficiency,
            fuel_ratio,
        })
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn fuel_ratio(&self) -> f64 {
        self.fuel_ratio
    }
}

impl Default for AfterburnerSpec {
    /// Defaults: η_ab = 0.95, additional fuel ratio 0.015.
    fn default() -> Self {
        Self {
            efficiency: 0.95,
            fuel_ratio: 0.015,
        }
    }
}

fn validate_efficiency(eta: f64, what: &'static str) -> CycleResult<()> {
    if !eta.is_finite() || eta <= 0.0 || eta > 1.0 {
        return Err(CycleError::InvalidConfig { what });
    }
    Ok(())
}
