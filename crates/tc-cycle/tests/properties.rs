//! Property tests for the cycle relations.

use proptest::prelude::*;
use tc_core::units::{k, pa};
use tc_cycle::{CycleConfig, EngineCycle};

fn cycle_with(t1: f64, p1: f64, r: f64, gamma: f64) -> EngineCycle {
    let config = CycleConfig::new(k(t1), pa(p1), r, gamma).unwrap();
    EngineCycle::new(config).unwrap()
}

proptest! {
    // A compression ratio of 1 leaves the inlet state unchanged.
    #[test]
    fn unity_pressure_ratio_returns_inlet_state(
        t1 in 100.0f64..1000.0,
        p1 in 1_000.0f64..1e7,
        gamma in 1.05f64..1.8,
    ) {
        let cycle = cycle_with(t1, p1, 1.0, gamma);
        let exit = cycle.compressor_exit().unwrap();
        prop_assert!((exit.temperature.value - t1).abs() <= 1e-9 * t1);
        prop_assert!((exit.pressure.value - p1).abs() <= 1e-9 * p1);
    }

    // Thermal efficiency is strictly increasing in peak temperature.
    #[test]
    fn thermal_efficiency_increases_with_peak_temperature(
        t1 in 100.0f64..1000.0,
        max_temp in 200.0f64..4000.0,
        delta in 1.0f64..500.0,
    ) {
        let cycle = cycle_with(t1, 101_325.0, 10.0, 1.4);
        let eta_low = cycle.thermal_efficiency(k(max_temp)).unwrap();
        let eta_high = cycle.thermal_efficiency(k(max_temp + delta)).unwrap();
        prop_assert!(eta_high > eta_low);
    }

    // Thermal efficiency approaches 1 from below as peak temperature grows.
    #[test]
    fn thermal_efficiency_is_bounded_by_one(
        t1 in 100.0f64..1000.0,
        max_temp in 100.0f64..1e9,
    ) {
        let cycle = cycle_with(t1, 101_325.0, 10.0, 1.4);
        let eta = cycle.thermal_efficiency(k(max_temp)).unwrap();
        prop_assert!(eta < 1.0);
    }

    // Compression never cools the flow for r >= 1.
    #[test]
    fn compression_is_monotone_in_pressure_ratio(
        t1 in 100.0f64..1000.0,
        r in 1.0f64..60.0,
        gamma in 1.05f64..1.8,
    ) {
        let cycle = cycle_with(t1, 101_325.0, r, gamma);
        let exit = cycle.compressor_exit().unwrap();
        prop_assert!(exit.temperature.value >= t1 - 1e-9);
    }

    // Specific thrust is finite and non-negative for compressing configs.
    #[test]
    fn specific_thrust_is_well_defined(
        r in 1.0f64..60.0,
        max_temp in 600.0f64..2500.0,
    ) {
        let cycle = cycle_with(288.15, 101_325.0, r, 1.4);
        let v = cycle.specific_thrust(k(max_temp)).unwrap();
        prop_assert!(v.value.is_finite());
        prop_assert!(v.value >= 0.0);
    }
}

#[test]
fn thermal_efficiency_limit_at_large_peak_temperature() {
    let cycle = cycle_with(288.15, 101_325.0, 10.0, 1.4);
    let eta = cycle.thermal_efficiency(k(1e12)).unwrap();
    assert!((1.0 - eta).abs() < 1e-9);
}
