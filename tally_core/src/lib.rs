//! # tally_core - Construction Material Estimation Engine
//!
//! `tally_core` is the computational heart of Tally: a catalog of
//! construction-material calculators (concrete, paint, tile, roofing, ...)
//! behind a localized, unit-aware API. All inputs and outputs are
//! JSON-serializable, making it straightforward to drive from a web UI,
//! a CLI, or an API layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculation is a pure function of its arguments
//! - **SI inside**: formulas compute in meters, square meters, cubic meters
//!   and liters; unit conversion happens only at the boundaries
//! - **Graceful degradation**: bad field values fall back to sane defaults
//!   instead of failing the calculation surface
//! - **JSON-First**: all public types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_core::calculations::{run_calculation, CalcRequest, EngineInput, FormulaKey};
//! use tally_core::countries::resolve_profile;
//! use tally_core::units::UnitSystem;
//!
//! let profile = resolve_profile("DE").unwrap();
//!
//! let mut inputs = EngineInput::new();
//! inputs.insert("length".into(), 6.0.into());
//! inputs.insert("width".into(), 4.0.into());
//! inputs.insert("thickness".into(), 0.15.into());
//!
//! let result = run_calculation(&CalcRequest {
//!     formula: FormulaKey::Concrete,
//!     inputs: &inputs,
//!     unit_system: UnitSystem::Metric,
//!     defaults: &profile.defaults,
//!     waste_factor: profile.defaults.waste_for(FormulaKey::Concrete),
//! });
//!
//! println!("Concrete: {:.2} m³", result["volume"]);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The engine: formula dispatch and all twelve material formulas
//! - [`countries`] - Immutable country default profiles (coverage figures, waste, roll sizes)
//! - [`registry`] - Declarative calculator schemas: fields, result labels, localized copy
//! - [`units`] - Metric/imperial conversion and display labels
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod countries;
pub mod errors;
pub mod registry;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    run_calculation, run_calculation_by_key, CalcRequest, EngineInput, EngineResult, FieldValue,
    FormulaKey,
};
pub use countries::{fallback_profile, profiles, resolve_profile, CountryDefaults, CountryProfile};
pub use errors::{CalcError, CalcResult};
pub use units::UnitSystem;
