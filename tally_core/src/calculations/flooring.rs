//! # Flooring Packs
//!
//! Floor area from room dimensions, rounded up to whole retail packs.

use crate::calculations::{ceil_count, to_number, EngineInput, EngineResult};
use crate::units::{area_to_sqm, length_to_meters, UnitSystem};

/// Calculate floor area (m²) and pack count, waste included.
pub fn calculate(inputs: &EngineInput, system: UnitSystem, waste_factor: f64) -> EngineResult {
    let length = length_to_meters(to_number(inputs.get("length"), 5.0), system);
    let width = length_to_meters(to_number(inputs.get("width"), 4.0), system);
    let pack_coverage = area_to_sqm(to_number(inputs.get("packCoverage"), 2.2), system);

    let area = length * width;
    let total_area = area * (1.0 + waste_factor);
    let packs = ceil_count(total_area, pack_coverage);

    EngineResult::from([
        ("area".to_string(), total_area),
        ("packs".to_string(), packs),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;

    #[test]
    fn test_pack_count_rounds_up() {
        let input = inputs(&[
            ("length", 5.0.into()),
            ("width", 4.0.into()),
            ("packCoverage", 2.2.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.08);
        // 20 m² * 1.08 = 21.6 m²; 21.6 / 2.2 = 9.81... -> 10 packs
        assert!((result["area"] - 21.6).abs() < 1e-9);
        assert_eq!(result["packs"], 10.0);
    }

    #[test]
    fn test_pack_ceiling_bounds() {
        let input = inputs(&[
            ("length", 5.0.into()),
            ("width", 4.0.into()),
            ("packCoverage", 2.2.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.08);
        let packs = result["packs"];
        let required = result["area"];
        assert!((packs - 1.0) * 2.2 < required);
        assert!(required <= packs * 2.2);
    }

    #[test]
    fn test_zero_pack_coverage_yields_zero_packs() {
        let input = inputs(&[("packCoverage", 0.0.into())]);
        let result = calculate(&input, UnitSystem::Metric, 0.05);
        assert_eq!(result["packs"], 0.0);
        assert!(result["area"].is_finite());
    }
}
