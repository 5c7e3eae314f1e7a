//! tc-atmos: International Standard Atmosphere (ISA) ambient conditions.
//!
//! Closed-form piecewise model: linear temperature lapse with the barometric
//! pressure formula up to the 11 km tropopause, isothermal layer above. The
//! cycle core never calls this crate; sweep and CLI callers resolve an
//! altitude to `(T1, P1)` here and pass the values into cycle constructors.

use tc_core::units::constants::{G0_MPS2, P0_SEA_LEVEL_PA, T0_SEA_LEVEL_K};
use tc_core::units::{Pressure, Temperature, k, pa};

/// Temperature lapse rate below the tropopause [K/m]
const LAPSE_RATE_K_PER_M: f64 = -0.0065;
/// Tropopause altitude [m]
const TROPOPAUSE_M: f64 = 11_000.0;
/// Isothermal-layer temperature above the tropopause [K]
const T_TROPOPAUSE_K: f64 = 216.65;
/// Specific gas constant for air in the ISA model [J/(kg·K)]
const R_AIR: f64 = 287.05;

/// Ambient temperature and pressure at one altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientConditions {
    pub temperature: Temperature,
    pub pressure: Pressure,
}

/// ISA temperature [K] at the given geometric altitude [m].
pub fn isa_temperature(altitude_m: f64) -> Temperature {
    if altitude_m < TROPOPAUSE_M {
        k(T0_SEA_LEVEL_K + LAPSE_RATE_K_PER_M * altitude_m)
    } else {
        k(T_TROPOPAUSE_K)
    }
}

/// ISA pressure [Pa] at the given geometric altitude [m].
pub fn isa_pressure(altitude_m: f64) -> Pressure {
    let exponent = -G0_MPS2 / (LAPSE_RATE_K_PER_M * R_AIR);
    if altitude_m < TROPOPAUSE_M {
        let t = isa_temperature(altitude_m).value;
        pa(P0_SEA_LEVEL_PA * (t / T0_SEA_LEVEL_K).powf(exponent))
    } else {
        // Exponential decay in the isothermal layer, anchored at the
        // tropopause pressure from the gradient-layer formula.
        let p_tropopause = P0_SEA_LEVEL_PA * (T_TROPOPAUSE_K / T0_SEA_LEVEL_K).powf(exponent);
        let decay = (-G0_MPS2 * (altitude_m - TROPOPAUSE_M) / (R_AIR * T_TROPOPAUSE_K)).exp();
        pa(p_tropopause * decay)
    }
}

/// Resolve both ambient conditions at the given altitude [m].
pub fn ambient_at(altitude_m: f64) -> AmbientConditions {
    AmbientConditions {
        temperature: isa_temperature(altitude_m),
        pressure: isa_pressure(altitude_m),
    }
}
