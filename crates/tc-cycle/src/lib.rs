//! tc-cycle: closed-form jet engine cycle analysis.
//!
//! Models the thermodynamic cycle of air-breathing jet engines with
//! single-expression isentropic relations per stage:
//!
//! - `EngineCycle`: shared design state, compressor relation, thermal
//!   efficiency, and the simplified single-expansion specific thrust
//! - `Turbojet`: four-stage pipeline (compressor, combustor, turbine,
//!   nozzle)
//! - `AfterburningTurbojet`: five-stage pipeline adding constant-pressure
//!   reheat
//!
//! Engine variants are built by composition over one `CycleConfig` and the
//! free stage functions in [`stage`]; both pipelines call the same stage
//! implementations, so shared stages cannot drift apart. Each variant
//! returns its own tagged performance record whose serialized field names
//! are a frozen external contract.
//!
//! # Example
//!
//! ```
//! use tc_cycle::{CycleConfig, Turbojet, TurbojetSpec};
//! use tc_core::units::{k, pa};
//!
//! let config = CycleConfig::new(k(288.15), pa(101_325.0), 10.0, 1.4).unwrap();
//! let engine = Turbojet::new(config, TurbojetSpec::default()).unwrap();
//! let perf = engine.simulate_cycle(k(1400.0)).unwrap();
//! assert!(perf.specific_thrust > 0.0);
//! ```

pub mod afterburning;
pub mod config;
pub mod cycle;
pub mod error;
pub mod performance;
pub mod stage;
pub mod turbojet;

// Re-exports for ergonomics
pub use afterburning::AfterburningTurbojet;
pub use config::{AfterburnerSpec, CycleConfig, TurbojetSpec, DEFAULT_CP, DEFAULT_GAS_CONSTANT};
pub use cycle::EngineCycle;
pub use error::{CycleError, CycleResult};
pub use performance::{AfterburningPerformance, TurbojetPerformance, keys};
pub use stage::{StageState, TURBINE_BACK_PRESSURE_MARGIN};
pub use turbojet::Turbojet;

// The gas capability types appear in this crate's public API
pub use tc_gas::{GasModelKind, GasProperties};
