//! tc-gas: working-fluid property lookup for turbocycle.
//!
//! Provides:
//! - `GasModel` trait for cp/enthalpy lookup at a (T, P) state
//! - Calorically perfect ideal-gas model
//! - CoolProp backend for real-gas air properties (feature `coolprop`)
//! - `GasProperties` capability object with construction-time fallback
//!
//! # Architecture
//!
//! The `GasModel` trait isolates the cycle code from backend dependencies.
//! The CoolProp equation-of-state backend (via `rfluids`) is optional; when
//! it is not compiled in, or fails its construction-time probe, a provider
//! asked for real-gas behavior degrades permanently to the ideal-gas model
//! and emits a single warning. Degradation is decided once, never per call.
//!
//! # Example
//!
//! ```
//! use tc_gas::{GasModelKind, GasProperties};
//! use tc_core::units::{k, pa};
//!
//! let gas = GasProperties::select(GasModelKind::Ideal, 1005.0).unwrap();
//! let h = gas.enthalpy(k(300.0), pa(101_325.0)).unwrap();
//! assert_eq!(h, 1005.0 * 300.0);
//! ```

#[cfg(feature = "coolprop")]
pub mod coolprop;
pub mod error;
pub mod ideal;
pub mod model;
pub mod provider;

// Re-exports for ergonomics
#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropGas;
pub use error::{GasError, GasResult};
pub use ideal::IdealGas;
pub use model::{GasModel, SpecEnthalpy, SpecHeatCapacity};
pub use provider::{GasModelKind, GasProperties};
