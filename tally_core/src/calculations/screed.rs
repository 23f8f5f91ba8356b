//! # Floor Screed
//!
//! Screed volume split into cement and sand by mix ratio, with cement
//! converted to weight and whole 50 kg bags.

use crate::calculations::{ceil_count, to_number, EngineInput, EngineResult};
use crate::units::{area_to_sqm, length_to_meters, UnitSystem};

/// Bulk density of cement, kg/m³
const CEMENT_DENSITY_KG_M3: f64 = 1500.0;

/// Retail cement bag, kg
const CEMENT_BAG_KG: f64 = 50.0;

/// Calculate screed volume (m³), cement weight (kg), cement bags and sand
/// volume (m³), waste included.
pub fn calculate(inputs: &EngineInput, system: UnitSystem, waste_factor: f64) -> EngineResult {
    let area = area_to_sqm(to_number(inputs.get("area"), 30.0), system);
    let thickness = length_to_meters(to_number(inputs.get("thickness"), 0.05), system);
    let cement_ratio = to_number(inputs.get("cementRatio"), 0.2);
    let sand_ratio = to_number(inputs.get("sandRatio"), 3.0);

    let base_volume = area * thickness;
    let total_volume = base_volume * (1.0 + waste_factor);

    let total_parts = cement_ratio + sand_ratio;
    let (cement_volume, sand_volume) = if total_parts > 0.0 {
        (
            total_volume * cement_ratio / total_parts,
            total_volume * sand_ratio / total_parts,
        )
    } else {
        (0.0, 0.0)
    };

    let cement_weight = cement_volume * CEMENT_DENSITY_KG_M3;
    let cement_bags = ceil_count(cement_weight, CEMENT_BAG_KG);

    EngineResult::from([
        ("volume".to_string(), total_volume),
        ("cementWeight".to_string(), cement_weight),
        ("cementBags".to_string(), cement_bags),
        ("sandVolume".to_string(), sand_volume),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;

    #[test]
    fn test_ratio_split() {
        let input = inputs(&[
            ("area", 30.0.into()),
            ("thickness", 0.05.into()),
            ("cementRatio", 1.0.into()),
            ("sandRatio", 3.0.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.06);

        let total = 30.0 * 0.05 * 1.06;
        assert!((result["volume"] - total).abs() < 1e-9);
        assert!((result["sandVolume"] - total * 0.75).abs() < 1e-9);

        let cement_volume = total * 0.25;
        assert!((result["cementWeight"] - cement_volume * 1500.0).abs() < 1e-9);
        assert_eq!(
            result["cementBags"],
            (cement_volume * 1500.0 / 50.0).ceil()
        );
    }

    #[test]
    fn test_components_sum_to_total() {
        let input = inputs(&[("cementRatio", 0.2.into()), ("sandRatio", 3.0.into())]);
        let result = calculate(&input, UnitSystem::Metric, 0.06);
        let cement_volume = result["cementWeight"] / 1500.0;
        assert!((cement_volume + result["sandVolume"] - result["volume"]).abs() < 1e-9);
    }

    #[test]
    fn test_zero_ratios_stay_finite() {
        let input = inputs(&[("cementRatio", 0.0.into()), ("sandRatio", 0.0.into())]);
        let result = calculate(&input, UnitSystem::Metric, 0.06);
        assert_eq!(result["cementWeight"], 0.0);
        assert_eq!(result["sandVolume"], 0.0);
        assert!(result["volume"] > 0.0);
    }
}
