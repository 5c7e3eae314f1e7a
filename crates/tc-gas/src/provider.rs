//! Gas property capability object with construction-time fallback.

use crate::error::GasResult;
use crate::ideal::IdealGas;
use crate::model::{GasModel, SpecEnthalpy, SpecHeatCapacity};
use tc_core::units::{Pressure, Temperature};
use tracing::warn;

/// Which gas model a cycle should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GasModelKind {
    /// Calorically perfect gas with the configured constant cp.
    #[default]
    Ideal,
    /// Equation-of-state lookup for air via the CoolProp backend.
    ///
    /// Degrades to `Ideal` at construction when the backend is unavailable.
    Real,
}

/// Injected gas property capability.
///
/// Selected once at construction by the surrounding application and held
/// immutably by the owning cycle for its lifetime. If `Real` is requested
/// and the CoolProp backend is not compiled in (feature `coolprop`) or fails
/// its construction probe, the provider degrades permanently to ideal-gas
/// behavior and emits exactly one warning. The fallback is never an error.
pub struct GasProperties {
    model: Box<dyn GasModel>,
    degraded: bool,
}

impl GasProperties {
    /// Build an ideal-gas provider with the given constant cp [J/(kg·K)].
    pub fn ideal(cp: SpecHeatCapacity) -> GasResult<Self> {
        Ok(Self {
            model: Box::new(IdealGas::new(cp)?),
            degraded: false,
        })
    }

    /// Build a provider for the requested model kind.
    ///
    /// `cp` is the constant used by the ideal model, and by the fallback
    /// when a real-gas request cannot be honored.
    pub fn select(kind: GasModelKind, cp: SpecHeatCapacity) -> GasResult<Self> {
        match kind {
            GasModelKind::Ideal => Self::ideal(cp),
            GasModelKind::Real => Self::real_or_fallback(cp),
        }
    }

    #[cfg(feature = "coolprop")]
    fn real_or_fallback(cp: SpecHeatCapacity) -> GasResult<Self> {
        match crate::coolprop::CoolPropGas::new() {
            Ok(backend) => Ok(Self {
                model: Box::new(backend),
                degraded: false,
            }),
            Err(e) => {
                warn!("CoolProp backend probe failed ({e}); falling back to ideal gas model");
                let mut provider = Self::ideal(cp)?;
                provider.degraded = true;
                Ok(provider)
            }
        }
    }

    #[cfg(not(feature = "coolprop"))]
    fn real_or_fallback(cp: SpecHeatCapacity) -> GasResult<Self> {
        warn!("CoolProp backend is not compiled in; falling back to ideal gas model");
        let mut provider = Self::ideal(cp)?;
        provider.degraded = true;
        Ok(provider)
    }

    /// Name of the model actually in use.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// True when a real-gas request was demoted to ideal at construction.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Specific heat at constant pressure [J/(kg·K)] at the given state.
    pub fn cp(&self, t: Temperature, p: Pressure) -> GasResult<SpecHeatCapacity> {
        self.model.cp(t, p)
    }

    /// Specific enthalpy [J/kg] at the given state.
    pub fn enthalpy(&self, t: Temperature, p: Pressure) -> GasResult<SpecEnthalpy> {
        self.model.enthalpy(t, p)
    }
}

impl std::fmt::Debug for GasProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GasProperties")
            .field("model", &self.model.name())
            .field("degraded", &self.degraded)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_selection_is_not_degraded() {
        let gas = GasProperties::select(GasModelKind::Ideal, 1005.0).unwrap();
        assert!(!gas.is_degraded());
        assert_eq!(gas.model_name(), "ideal-gas");
    }

    #[cfg(not(feature = "coolprop"))]
    #[test]
    fn real_without_backend_falls_back_to_ideal() {
        use tc_core::units::{k, pa};

        let real = GasProperties::select(GasModelKind::Real, 1005.0).unwrap();
        let ideal = GasProperties::select(GasModelKind::Ideal, 1005.0).unwrap();

        assert!(real.is_degraded());
        assert_eq!(real.model_name(), "ideal-gas");

        // Degraded provider must match the ideal model exactly
        let t = k(556.0);
        let p = pa(1_013_250.0);
        assert_eq!(real.cp(t, p).unwrap(), ideal.cp(t, p).unwrap());
        assert_eq!(real.enthalpy(t, p).unwrap(), ideal.enthalpy(t, p).unwrap());
    }

    #[cfg(not(feature = "coolprop"))]
    #[test]
    fn fallback_warns_exactly_once_per_construction() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tc_core::units::{k, pa};
        use tracing::span::{Attributes, Id, Record};
        use tracing::{Event, Level, Metadata, Subscriber};

        struct WarnCounter(Arc<AtomicUsize>);

        impl Subscriber for WarnCounter {
            fn enabled(&self, metadata: &Metadata<'_>) -> bool {
                *metadata.level() == Level::WARN
            }
            fn new_span(&self, _: &Attributes<'_>) -> Id {
                Id::from_u64(1)
            }
            fn record(&self, _: &Id, _: &Record<'_>) {}
            fn record_follows_from(&self, _: &Id, _: &Id) {}
            fn event(&self, event: &Event<'_>) {
                if *event.metadata().level() == Level::WARN {
                    self.0.fetch_add(1, Ordering::SeqCst);
                }
            }
            fn enter(&self, _: &Id) {}
            fn exit(&self, _: &Id) {}
        }

        let warns = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(WarnCounter(Arc::clone(&warns)), || {
            let first = GasProperties::select(GasModelKind::Real, 1005.0).unwrap();
            assert!(first.is_degraded());
            assert_eq!(warns.load(Ordering::SeqCst), 1);

            // Property lookups on the degraded provider stay silent
            let t = k(288.15);
            let p = pa(101_325.0);
            first.cp(t, p).unwrap();
            first.enthalpy(t, p).unwrap();
            assert_eq!(warns.load(Ordering::SeqCst), 1);

            let second = GasProperties::select(GasModelKind::Real, 1005.0).unwrap();
            assert!(second.is_degraded());
            assert_eq!(warns.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn rejects_invalid_fallback_cp() {
        assert!(GasProperties::select(GasModelKind::Ideal, -1.0).is_err());
    }
}
