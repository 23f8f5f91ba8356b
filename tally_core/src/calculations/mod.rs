//! # Material Calculations
//!
//! The calculation engine: a dispatch table over twelve per-material
//! formulas. Each formula consumes raw user field values, a unit system,
//! a country default profile and a waste factor, and produces a flat
//! mapping of named quantities in SI units.
//!
//! Each material lives in its own module following the pattern:
//!
//! - `calculate(inputs, system, [defaults,] waste_factor) -> EngineResult`
//!
//! ## Degradation policy
//!
//! The engine never fails. Missing or malformed numeric inputs resolve to
//! material-specific fallback defaults, negative areas clamp to zero, and
//! near-vertical roof angles are floored before division. Every code path
//! returns a finite, non-NaN result mapping. The string-keyed front door
//! ([`run_calculation_by_key`]) returns an empty mapping for unknown keys.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::calculations::{run_calculation, CalcRequest, EngineInput, FormulaKey};
//! use tally_core::countries::fallback_profile;
//! use tally_core::units::UnitSystem;
//!
//! let mut inputs = EngineInput::new();
//! inputs.insert("mode".into(), "slab".into());
//! inputs.insert("length".into(), 6.0.into());
//! inputs.insert("width".into(), 4.0.into());
//! inputs.insert("thickness".into(), 0.15.into());
//!
//! let result = run_calculation(&CalcRequest {
//!     formula: FormulaKey::Concrete,
//!     inputs: &inputs,
//!     unit_system: UnitSystem::Metric,
//!     defaults: &fallback_profile().defaults,
//!     waste_factor: 0.08,
//! });
//!
//! assert!((result["volume"] - 3.888).abs() < 1e-9);
//! ```

pub mod brick;
pub mod concrete;
pub mod drywall;
pub mod electrical;
pub mod flooring;
pub mod insulation;
pub mod paint;
pub mod plaster;
pub mod roofing;
pub mod screed;
pub mod tile;
pub mod wallpaper;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::countries::CountryDefaults;
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Upper bound of the waste/overage factor the UI offers.
///
/// The engine itself accepts any finite factor; clamping to `[0, MAX]`
/// is the caller's job at the input boundary.
pub const WASTE_FACTOR_MAX: f64 = 0.35;

// ============================================================================
// Formula Keys
// ============================================================================

/// The closed set of supported material formulas.
///
/// Dispatch over this enum is an exhaustive match, so adding a variant
/// without wiring its formula is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaKey {
    Concrete,
    Paint,
    Flooring,
    Tile,
    Roofing,
    Drywall,
    Wallpaper,
    Brick,
    Insulation,
    Plaster,
    Screed,
    Electrical,
}

impl FormulaKey {
    /// All formula variants, in declaration order
    pub const ALL: [FormulaKey; 12] = [
        FormulaKey::Concrete,
        FormulaKey::Paint,
        FormulaKey::Flooring,
        FormulaKey::Tile,
        FormulaKey::Roofing,
        FormulaKey::Drywall,
        FormulaKey::Wallpaper,
        FormulaKey::Brick,
        FormulaKey::Insulation,
        FormulaKey::Plaster,
        FormulaKey::Screed,
        FormulaKey::Electrical,
    ];

    /// Lowercase wire code for this formula (matches registry slugs)
    pub fn code(&self) -> &'static str {
        match self {
            FormulaKey::Concrete => "concrete",
            FormulaKey::Paint => "paint",
            FormulaKey::Flooring => "flooring",
            FormulaKey::Tile => "tile",
            FormulaKey::Roofing => "roofing",
            FormulaKey::Drywall => "drywall",
            FormulaKey::Wallpaper => "wallpaper",
            FormulaKey::Brick => "brick",
            FormulaKey::Insulation => "insulation",
            FormulaKey::Plaster => "plaster",
            FormulaKey::Screed => "screed",
            FormulaKey::Electrical => "electrical",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaKey::Concrete => "Concrete",
            FormulaKey::Paint => "Paint",
            FormulaKey::Flooring => "Flooring",
            FormulaKey::Tile => "Tile",
            FormulaKey::Roofing => "Roofing",
            FormulaKey::Drywall => "Drywall",
            FormulaKey::Wallpaper => "Wallpaper",
            FormulaKey::Brick => "Brick",
            FormulaKey::Insulation => "Insulation",
            FormulaKey::Plaster => "Plaster",
            FormulaKey::Screed => "Screed",
            FormulaKey::Electrical => "Electrical",
        }
    }

    /// Parse a wire code, returning `None` for unknown strings
    pub fn parse(key: &str) -> Option<Self> {
        FormulaKey::ALL
            .into_iter()
            .find(|f| f.code().eq_ignore_ascii_case(key.trim()))
    }

    /// Parse a wire code, failing loudly for unknown strings
    pub fn from_str_flexible(key: &str) -> CalcResult<Self> {
        FormulaKey::parse(key).ok_or_else(|| CalcError::unknown_formula(key))
    }
}

impl std::fmt::Display for FormulaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Field Values
// ============================================================================

/// A raw user-supplied field value: a number, an enumerated mode/option
/// string, or a toggle.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "slab", "length": 6, "diagonal": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Toggle(bool),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Toggle(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Raw field values keyed by field identifier, supplied fresh per call.
pub type EngineInput = BTreeMap<String, FieldValue>;

/// Named SI-unit quantities produced by a formula.
///
/// The key set depends on which formula ran; absent keys mean "not
/// applicable to this material", not zero.
pub type EngineResult = BTreeMap<String, f64>;

// ============================================================================
// Shared Numeric Helpers
// ============================================================================

/// Resolve a raw field to a finite number, falling back for missing, empty,
/// or unparseable values. Guards every formula input against NaN.
pub fn to_number(value: Option<&FieldValue>, fallback: f64) -> f64 {
    match value {
        Some(FieldValue::Number(n)) if n.is_finite() => *n,
        Some(FieldValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return fallback;
            }
            match trimmed.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => parsed,
                _ => fallback,
            }
        }
        _ => fallback,
    }
}

/// Resolve a raw field to a toggle state. Missing fields are off.
pub fn to_bool(value: Option<&FieldValue>) -> bool {
    match value {
        Some(FieldValue::Toggle(b)) => *b,
        Some(FieldValue::Number(n)) => *n != 0.0,
        Some(FieldValue::Text(s)) => !s.is_empty(),
        None => false,
    }
}

/// Resolve a raw field to an option string, falling back when absent.
pub fn to_text<'a>(value: Option<&'a FieldValue>, fallback: &'a str) -> &'a str {
    match value {
        Some(FieldValue::Text(s)) => s.as_str(),
        _ => fallback,
    }
}

pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Negative intermediate areas clamp to zero before further computation.
pub(crate) fn clamp_above_zero(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Ceiling division for pack-like counts (bags, tiles, sheets, rolls,
/// bundles, conduits). A non-positive per-unit coverage yields zero
/// rather than infinity.
pub(crate) fn ceil_count(quantity: f64, per_unit: f64) -> f64 {
    if per_unit > 0.0 {
        (quantity / per_unit).ceil()
    } else {
        0.0
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// One calculation request. The engine holds no state between calls; the
/// profile is passed in explicitly rather than read from ambient storage.
#[derive(Debug, Clone)]
pub struct CalcRequest<'a> {
    /// Which material formula to run
    pub formula: FormulaKey,
    /// Raw field values as collected by the caller
    pub inputs: &'a EngineInput,
    /// Unit system the raw values are expressed in
    pub unit_system: UnitSystem,
    /// Active country default profile
    pub defaults: &'a CountryDefaults,
    /// Waste/overage fraction, applied as `(1 + factor)` to base quantities
    pub waste_factor: f64,
}

/// Run one material calculation and return its SI-unit result mapping.
pub fn run_calculation(request: &CalcRequest) -> EngineResult {
    let inputs = request.inputs;
    let unit_system = request.unit_system;
    let defaults = request.defaults;
    let waste_factor = request.waste_factor;

    match request.formula {
        FormulaKey::Concrete => concrete::calculate(inputs, unit_system, waste_factor),
        FormulaKey::Paint => paint::calculate(inputs, unit_system, defaults, waste_factor),
        FormulaKey::Flooring => flooring::calculate(inputs, unit_system, waste_factor),
        FormulaKey::Tile => tile::calculate(inputs, unit_system, defaults, waste_factor),
        FormulaKey::Roofing => roofing::calculate(inputs, unit_system, waste_factor),
        FormulaKey::Drywall => drywall::calculate(inputs, unit_system, waste_factor),
        FormulaKey::Wallpaper => wallpaper::calculate(inputs, unit_system, defaults, waste_factor),
        FormulaKey::Brick => brick::calculate(inputs, unit_system, defaults, waste_factor),
        FormulaKey::Insulation => insulation::calculate(inputs, unit_system, waste_factor),
        FormulaKey::Plaster => plaster::calculate(inputs, unit_system, defaults, waste_factor),
        FormulaKey::Screed => screed::calculate(inputs, unit_system, waste_factor),
        FormulaKey::Electrical => electrical::calculate(inputs, unit_system, waste_factor),
    }
}

/// String-keyed front door preserving the reference soft-failure policy:
/// an unknown key yields an empty result mapping, not an error.
///
/// Strict callers should parse the key with [`FormulaKey::from_str_flexible`]
/// and use [`run_calculation`] instead.
pub fn run_calculation_by_key(
    key: &str,
    inputs: &EngineInput,
    unit_system: UnitSystem,
    defaults: &CountryDefaults,
    waste_factor: f64,
) -> EngineResult {
    match FormulaKey::parse(key) {
        Some(formula) => run_calculation(&CalcRequest {
            formula,
            inputs,
            unit_system,
            defaults,
            waste_factor,
        }),
        None => EngineResult::new(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::inputs;
    use super::*;
    use crate::countries::fallback_profile;

    #[test]
    fn test_formula_key_parse() {
        assert_eq!(FormulaKey::parse("tile"), Some(FormulaKey::Tile));
        assert_eq!(FormulaKey::parse("  ROOFING "), Some(FormulaKey::Roofing));
        assert_eq!(FormulaKey::parse("asphalt"), None);
        assert!(FormulaKey::from_str_flexible("asphalt").is_err());
    }

    #[test]
    fn test_formula_key_codes_are_unique() {
        for (i, a) in FormulaKey::ALL.iter().enumerate() {
            for b in &FormulaKey::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_formula_key_serialization() {
        let json = serde_json::to_string(&FormulaKey::Drywall).unwrap();
        assert_eq!(json, "\"drywall\"");
        let roundtrip: FormulaKey = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, FormulaKey::Drywall);
    }

    #[test]
    fn test_to_number_fallbacks() {
        assert_eq!(to_number(None, 4.2), 4.2);
        assert_eq!(to_number(Some(&FieldValue::Number(7.0)), 4.2), 7.0);
        assert_eq!(to_number(Some(&FieldValue::Number(f64::NAN)), 4.2), 4.2);
        assert_eq!(to_number(Some(&FieldValue::Number(f64::INFINITY)), 4.2), 4.2);
        assert_eq!(to_number(Some(&"".into()), 4.2), 4.2);
        assert_eq!(to_number(Some(&"  12.5 ".into()), 4.2), 12.5);
        assert_eq!(to_number(Some(&"twelve".into()), 4.2), 4.2);
        assert_eq!(to_number(Some(&FieldValue::Toggle(true)), 4.2), 4.2);
    }

    #[test]
    fn test_to_bool() {
        assert!(!to_bool(None));
        assert!(to_bool(Some(&FieldValue::Toggle(true))));
        assert!(!to_bool(Some(&FieldValue::Toggle(false))));
        assert!(to_bool(Some(&FieldValue::Number(1.0))));
        assert!(!to_bool(Some(&FieldValue::Number(0.0))));
        assert!(to_bool(Some(&"on".into())));
        assert!(!to_bool(Some(&"".into())));
    }

    #[test]
    fn test_field_value_untagged_serialization() {
        let input = inputs(&[
            ("mode", "slab".into()),
            ("length", 6.0.into()),
            ("diagonal", true.into()),
        ]);
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: EngineInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_unknown_key_returns_empty_mapping() {
        let profile = fallback_profile();
        let result = run_calculation_by_key(
            "asphalt",
            &EngineInput::new(),
            UnitSystem::Metric,
            &profile.defaults,
            0.08,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_known_key_dispatches() {
        let profile = fallback_profile();
        let input = inputs(&[
            ("mode", "slab".into()),
            ("length", 6.0.into()),
            ("width", 4.0.into()),
            ("thickness", 0.15.into()),
        ]);
        let result = run_calculation_by_key(
            "concrete",
            &input,
            UnitSystem::Metric,
            &profile.defaults,
            0.08,
        );
        assert!((result["volume"] - 3.888).abs() < 1e-9);
    }

    #[test]
    fn test_every_formula_returns_finite_results_on_empty_input() {
        // Degradation policy: fallbacks everywhere, never NaN or infinity.
        let profile = fallback_profile();
        let empty = EngineInput::new();
        for formula in FormulaKey::ALL {
            let result = run_calculation(&CalcRequest {
                formula,
                inputs: &empty,
                unit_system: UnitSystem::Metric,
                defaults: &profile.defaults,
                waste_factor: 0.08,
            });
            assert!(!result.is_empty(), "{} produced no results", formula);
            for (key, value) in &result {
                assert!(value.is_finite(), "{}:{} is not finite", formula, key);
            }
        }
    }
}
