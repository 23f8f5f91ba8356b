//! # Roofing Bundles
//!
//! Slope area from the horizontal footprint and pitch angle, then whole
//! shingle bundles. The footprint is divided by `cos(angle)`; the divisor
//! is floored at 0.2 so near-vertical angles cannot blow the area up.

use crate::calculations::{ceil_count, deg_to_rad, to_number, EngineInput, EngineResult};
use crate::units::{area_to_sqm, length_to_meters, UnitSystem};

/// Smallest cos(angle) divisor accepted; caps slope amplification at 5x.
const MIN_COS_ANGLE: f64 = 0.2;

/// Calculate slope area (m²) and bundle count, waste included.
pub fn calculate(inputs: &EngineInput, system: UnitSystem, waste_factor: f64) -> EngineResult {
    let length = length_to_meters(to_number(inputs.get("length"), 10.0), system);
    let width = length_to_meters(to_number(inputs.get("width"), 8.0), system);
    let angle = to_number(inputs.get("angle"), 28.0);
    let bundle_coverage = area_to_sqm(to_number(inputs.get("bundleCoverage"), 3.1), system);

    let base_area = length * width;
    let slope_area = base_area / deg_to_rad(angle).cos().max(MIN_COS_ANGLE);
    let total_area = slope_area * (1.0 + waste_factor);
    let bundles = ceil_count(total_area, bundle_coverage);

    EngineResult::from([
        ("area".to_string(), total_area),
        ("bundles".to_string(), bundles),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;

    #[test]
    fn test_flat_roof_equals_footprint() {
        let input = inputs(&[
            ("length", 10.0.into()),
            ("width", 8.0.into()),
            ("angle", 0.0.into()),
            ("bundleCoverage", 3.1.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.0);
        assert!((result["area"] - 80.0).abs() < 1e-9);
        assert_eq!(result["bundles"], (80.0f64 / 3.1).ceil());
    }

    #[test]
    fn test_pitch_increases_area() {
        let flat = inputs(&[("angle", 0.0.into())]);
        let pitched = inputs(&[("angle", 35.0.into())]);
        let a = calculate(&flat, UnitSystem::Metric, 0.07);
        let b = calculate(&pitched, UnitSystem::Metric, 0.07);
        assert!(b["area"] > a["area"]);
    }

    #[test]
    fn test_near_vertical_angle_is_floored() {
        // cos(89°) ≈ 0.0175 would multiply area by ~57; the 0.2 floor caps it at 5x.
        let input = inputs(&[
            ("length", 10.0.into()),
            ("width", 8.0.into()),
            ("angle", 89.0.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.0);
        assert!((result["area"] - 80.0 / MIN_COS_ANGLE).abs() < 1e-9);
        assert!(result["area"].is_finite());
    }
}
