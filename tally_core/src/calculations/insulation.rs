//! # Insulation Volume and Rolls
//!
//! Fill volume from area and layer thickness; roll count from the covered
//! area (not the volume - roll thickness already matches the layer).

use crate::calculations::{ceil_count, to_number, EngineInput, EngineResult};
use crate::units::{area_to_sqm, length_to_meters, UnitSystem};

/// Calculate insulation volume (m³) and roll count, waste included.
pub fn calculate(inputs: &EngineInput, system: UnitSystem, waste_factor: f64) -> EngineResult {
    let area = area_to_sqm(to_number(inputs.get("area"), 50.0), system);
    let thickness = length_to_meters(to_number(inputs.get("thickness"), 0.1), system);
    let roll_area = area_to_sqm(to_number(inputs.get("rollArea"), 10.0), system);

    let base_volume = area * thickness;
    let total_volume = base_volume * (1.0 + waste_factor);
    let rolls = ceil_count(area * (1.0 + waste_factor), roll_area);

    EngineResult::from([
        ("volume".to_string(), total_volume),
        ("rolls".to_string(), rolls),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;

    #[test]
    fn test_volume_and_rolls() {
        let input = inputs(&[
            ("area", 50.0.into()),
            ("thickness", 0.1.into()),
            ("rollArea", 10.0.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.08);
        assert!((result["volume"] - 5.0 * 1.08).abs() < 1e-9);
        // Roll count follows covered area: 54 m² / 10 m² -> 6 rolls
        assert_eq!(result["rolls"], 6.0);
    }

    #[test]
    fn test_zero_roll_area_yields_zero_rolls() {
        let input = inputs(&[("rollArea", 0.0.into())]);
        let result = calculate(&input, UnitSystem::Metric, 0.08);
        assert_eq!(result["rolls"], 0.0);
        assert!(result["volume"] > 0.0);
    }
}
