//! Gas-path stage functions.
//!
//! Each stage is a free function taking explicit state, so the turbojet and
//! afterburning pipelines share one implementation of every stage they have
//! in common instead of re-deriving the math per engine variant.
//!
//! All relations are closed-form isentropic expressions:
//!
//! ```text
//! T2/T1 = (P2/P1)^((γ-1)/γ)
//! ```

use crate::error::{CycleError, CycleResult};
use tc_core::ensure_positive;
use tc_core::units::{Pressure, Temperature, Velocity, k, mps, pa};

/// Turbine discharge pressure as a multiple of ambient.
///
/// The turbine always expands to a fixed margin above ambient rather than to
/// a configurable turbine pressure ratio. This is a deliberate model
/// simplification, not a placeholder for a missing parameter.
pub const TURBINE_BACK_PRESSURE_MARGIN: f64 = 1.2;

/// Transient (T, P) pair at one point in the gas path.
///
/// Produced by one stage, consumed by the next; never stored beyond a single
/// simulate call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageState {
    pub temperature: Temperature,
    pub pressure: Pressure,
}

impl StageState {
    pub fn new(temperature: Temperature, pressure: Pressure) -> Self {
        Self {
            temperature,
            pressure,
        }
    }
}

#[inline]
fn isentropic_exponent(gamma: f64) -> f64 {
    (gamma - 1.0) / gamma
}

/// Isentropic compression across the given pressure ratio.
///
/// ```text
/// T2 = T1 * r^((γ-1)/γ)
/// P2 = P1 * r
/// ```
pub fn compress(inlet: StageState, pressure_ratio: f64, gamma: f64) -> CycleResult<StageState> {
    let r = ensure_positive(pressure_ratio, "pressure ratio")?;
    let t2 = inlet.temperature.value * r.powf(isentropic_exponent(gamma));
    let p2 = inlet.pressure.value * r;
    Ok(StageState::new(k(t2), pa(p2)))
}

/// Idealized constant-pressure heat addition to the peak cycle temperature.
///
/// No combustor pressure loss is modeled.
pub fn combust(
    compressor_exit: StageState,
    peak_temperature: Temperature,
) -> CycleResult<StageState> {
    ensure_positive(peak_temperature.value, "peak cycle temperature")?;
    Ok(StageState::new(peak_temperature, compressor_exit.pressure))
}

/// Isentropic turbine expansion to the fixed back-pressure margin.
///
/// ```text
/// P4 = 1.2 * P_ambient
/// T4 = T3 * (P4/P3)^((γ-1)/γ)
/// ```
pub fn expand_to_back_pressure(
    combustor_exit: StageState,
    ambient_pressure: Pressure,
    gamma: f64,
) -> CycleResult<StageState> {
    ensure_positive(ambient_pressure.value, "ambient pressure")?;
    let p4 = ambient_pressure.value * TURBINE_BACK_PRESSURE_MARGIN;
    let ratio = p4 / combustor_exit.pressure.value;
    let t4 = combustor_exit.temperature.value * ratio.powf(isentropic_exponent(gamma));
    Ok(StageState::new(k(t4), pa(p4)))
}

/// Reheat to the afterburner temperature at ambient discharge pressure.
///
/// The exit state depends only on the afterburner temperature and the
/// ambient pressure: the incoming turbine state is deliberately discarded
/// in full, its temperature overwritten by the reheat and its pressure by
/// the ambient value, leaving no pressure margin across the downstream
/// nozzle. The upstream state is still accepted so reheat chains
/// stage-to-stage like the other pipeline steps.
pub fn reheat(
    _turbine_exit: StageState,
    afterburner_temperature: Temperature,
    ambient_pressure: Pressure,
) -> CycleResult<StageState> {
    ensure_positive(afterburner_temperature.value, "afterburner temperature")?;
    ensure_positive(ambient_pressure.value, "ambient pressure")?;
    Ok(StageState::new(afterburner_temperature, ambient_pressure))
}

/// Ideal nozzle exit velocity from isentropic expansion to ambient.
///
/// ```text
/// V = sqrt( 2γR·T/(γ-1) * (1 - (P_ambient/P)^((γ-1)/γ)) )
/// ```
///
/// The expansion term is zero when the stage already sits at ambient
/// pressure; it must never be negative (expansion below ambient under a
/// fractional exponent has no real solution).
pub fn nozzle_exit_velocity(
    stage: StageState,
    ambient_pressure: Pressure,
    gamma: f64,
    gas_constant: f64,
) -> CycleResult<Velocity> {
    ensure_positive(stage.temperature.value, "nozzle inlet temperature")?;
    ensure_positive(stage.pressure.value, "nozzle inlet pressure")?;
    ensure_positive(ambient_pressure.value, "ambient pressure")?;

    let pressure_term =
        1.0 - (ambient_pressure.value / stage.pressure.value).powf(isentropic_exponent(gamma));
    if pressure_term < 0.0 {
        return Err(CycleError::Domain {
            what: "nozzle inlet pressure below ambient",
        });
    }

    let v_squared =
        2.0 * gamma * gas_constant * stage.temperature.value / (gamma - 1.0) * pressure_term;
    Ok(mps(v_squared.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sea_level_inlet() -> StageState {
        StageState::new(k(288.15), pa(101_325.0))
    }

    #[test]
    fn unity_pressure_ratio_is_a_no_op() {
        let inlet = sea_level_inlet();
        let exit = compress(inlet, 1.0, 1.4).unwrap();
        assert!((exit.temperature.value - inlet.temperature.value).abs() < 1e-9);
        assert!((exit.pressure.value - inlet.pressure.value).abs() < 1e-9);
    }

    #[test]
    fn compression_heats_the_flow() {
        let exit = compress(sea_level_inlet(), 10.0, 1.4).unwrap();
        assert!((exit.temperature.value - 556.3).abs() < 1.0);
        assert!((exit.pressure.value - 1_013_250.0).abs() < 1e-6);
    }

    #[test]
    fn compress_rejects_non_positive_ratio() {
        assert!(compress(sea_level_inlet(), 0.0, 1.4).is_err());
        assert!(compress(sea_level_inlet(), -1.0, 1.4).is_err());
    }

    #[test]
    fn combustion_holds_pressure() {
        let compressor_exit = compress(sea_level_inlet(), 10.0, 1.4).unwrap();
        let combustor_exit = combust(compressor_exit, k(1400.0)).unwrap();
        assert_eq!(combustor_exit.pressure, compressor_exit.pressure);
        assert_eq!(combustor_exit.temperature.value, 1400.0);
    }

    #[test]
    fn combustion_rejects_non_positive_peak() {
        let compressor_exit = compress(sea_level_inlet(), 10.0, 1.4).unwrap();
        assert!(combust(compressor_exit, k(0.0)).is_err());
    }

    #[test]
    fn turbine_discharges_at_fixed_margin_above_ambient() {
        let compressor_exit = compress(sea_level_inlet(), 10.0, 1.4).unwrap();
        let combustor_exit = combust(compressor_exit, k(1400.0)).unwrap();
        let turbine_exit =
            expand_to_back_pressure(combustor_exit, pa(101_325.0), 1.4).unwrap();
        assert!((turbine_exit.pressure.value - 121_590.0).abs() < 1.0);
        assert!((turbine_exit.temperature.value - 763.8).abs() < 1.0);
    }

    #[test]
    fn nozzle_velocity_matches_hand_calc() {
        let turbine_exit = StageState::new(k(763.8), pa(121_590.0));
        let v = nozzle_exit_velocity(turbine_exit, pa(101_325.0), 1.4, 287.0).unwrap();
        assert!((v.value - 279.0).abs() < 2.0);
    }

    #[test]
    fn nozzle_velocity_is_zero_at_ambient_pressure() {
        let stage = StageState::new(k(1800.0), pa(101_325.0));
        let v = nozzle_exit_velocity(stage, pa(101_325.0), 1.4, 287.0).unwrap();
        assert_eq!(v.value, 0.0);
    }

    #[test]
    fn nozzle_rejects_pressure_below_ambient() {
        let stage = StageState::new(k(700.0), pa(50_000.0));
        let result = nozzle_exit_velocity(stage, pa(101_325.0), 1.4, 287.0);
        assert!(matches!(result, Err(CycleError::Domain { .. })));
    }

    #[test]
    fn reheat_sets_ambient_pressure() {
        let turbine_exit = StageState::new(k(763.8), pa(121_590.0));
        let afterburner_exit = reheat(turbine_exit, k(1800.0), pa(101_325.0)).unwrap();
        assert_eq!(afterburner_exit.temperature.value, 1800.0);
        assert_eq!(afterburner_exit.pressure.value, 101_325.0);
    }

    #[test]
    fn reheat_is_independent_of_the_incoming_turbine_state() {
        let hot = StageState::new(k(900.0), pa(200_000.0));
        let cold = StageState::new(k(400.0), pa(110_000.0));
        let from_hot = reheat(hot, k(1800.0), pa(101_325.0)).unwrap();
        let from_cold = reheat(cold, k(1800.0), pa(101_325.0)).unwrap();
        assert_eq!(from_hot, from_cold);
    }
}
