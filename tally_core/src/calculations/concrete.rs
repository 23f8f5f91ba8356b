//! # Concrete Volume
//!
//! Estimates ready-mix volume for a rectangular slab or a cylindrical
//! column/pier pour.
//!
//! ## Fields
//!
//! - `mode` - `"slab"` (default) or `"cylinder"`
//! - slab: `length`, `width`, `thickness`
//! - cylinder: `diameter`, `height`
//!
//! ## Example
//!
//! ```rust
//! use tally_core::calculations::{concrete, EngineInput};
//! use tally_core::units::UnitSystem;
//!
//! let mut inputs = EngineInput::new();
//! inputs.insert("length".into(), 6.0.into());
//! inputs.insert("width".into(), 4.0.into());
//! inputs.insert("thickness".into(), 0.15.into());
//!
//! let result = concrete::calculate(&inputs, UnitSystem::Metric, 0.08);
//! assert!((result["volume"] - 3.888).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::{to_number, to_text, EngineInput, EngineResult};
use crate::units::{length_to_meters, UnitSystem};

/// Pour geometry selected by the `mode` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcreteMode {
    Slab,
    Cylinder,
}

impl ConcreteMode {
    /// Parse the mode field. Anything other than `"cylinder"` is a slab,
    /// matching the form's two-option select.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("cylinder") {
            ConcreteMode::Cylinder
        } else {
            ConcreteMode::Slab
        }
    }
}

/// Calculate required concrete volume in m³, waste included.
pub fn calculate(inputs: &EngineInput, system: UnitSystem, waste_factor: f64) -> EngineResult {
    let mode = ConcreteMode::parse(to_text(inputs.get("mode"), "slab"));

    let base_volume = match mode {
        ConcreteMode::Cylinder => {
            let d = length_to_meters(to_number(inputs.get("diameter"), 0.4), system);
            let h = length_to_meters(to_number(inputs.get("height"), 3.0), system);
            PI * (d / 2.0) * (d / 2.0) * h
        }
        ConcreteMode::Slab => {
            let l = length_to_meters(to_number(inputs.get("length"), 6.0), system);
            let w = length_to_meters(to_number(inputs.get("width"), 4.0), system);
            let t = length_to_meters(to_number(inputs.get("thickness"), 0.15), system);
            l * w * t
        }
    };

    let volume = base_volume * (1.0 + waste_factor);
    EngineResult::from([("volume".to_string(), volume)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;

    #[test]
    fn test_slab_metric() {
        let input = inputs(&[
            ("mode", "slab".into()),
            ("length", 6.0.into()),
            ("width", 4.0.into()),
            ("thickness", 0.15.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.08);
        // 6 * 4 * 0.15 = 3.6 m³ base, 8% waste on top
        assert!((result["volume"] - 3.888).abs() < 1e-9);
    }

    #[test]
    fn test_cylinder_metric() {
        let input = inputs(&[
            ("mode", "cylinder".into()),
            ("diameter", 0.4.into()),
            ("height", 3.0.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.0);
        let expected = PI * 0.2 * 0.2 * 3.0;
        assert!((result["volume"] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_slab_imperial_converts_feet() {
        let input = inputs(&[
            ("length", 10.0.into()),
            ("width", 10.0.into()),
            ("thickness", 0.5.into()),
        ]);
        let result = calculate(&input, UnitSystem::Imperial, 0.0);
        let expected = (10.0 * 0.3048) * (10.0 * 0.3048) * (0.5 * 0.3048);
        assert!((result["volume"] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_use_slab_defaults() {
        let result = calculate(&EngineInput::new(), UnitSystem::Metric, 0.0);
        // Default slab is 6 x 4 x 0.15
        assert!((result["volume"] - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_waste_monotonic() {
        let input = inputs(&[("length", 6.0.into()), ("width", 4.0.into())]);
        let low = calculate(&input, UnitSystem::Metric, 0.05);
        let high = calculate(&input, UnitSystem::Metric, 0.15);
        assert!(high["volume"] > low["volume"]);
    }
}
