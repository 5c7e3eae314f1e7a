// tc-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Standard gravitational acceleration [m/s²]
    pub const G0_MPS2: f64 = 9.806_65;

    /// Sea-level standard temperature [K]
    pub const T0_SEA_LEVEL_K: f64 = 288.15;

    /// Sea-level standard pressure [Pa]
    pub const P0_SEA_LEVEL_PA: f64 = 101_325.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let p = pa(101_325.0);
        let t = k(300.0);
        let v = mps(250.0);
        let r = unitless(0.5);
        assert_eq!(p.value, 101_325.0);
        assert_eq!(t.value, 300.0);
        assert_eq!(v.value, 250.0);
        assert_eq!(r.value, 0.5);
    }
}
