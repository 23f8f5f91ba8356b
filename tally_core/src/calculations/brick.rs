//! # Brick and Mortar
//!
//! Brick count and mortar volume per wall area, from the regional brick
//! format in the country profile. Bricks are left fractional here; rounding
//! to pallets or packs is a purchasing decision, not a formula one.

use crate::calculations::{to_number, EngineInput, EngineResult};
use crate::countries::CountryDefaults;
use crate::units::{area_to_sqm, UnitSystem};

/// Calculate brick count and mortar volume (m³), waste included.
pub fn calculate(
    inputs: &EngineInput,
    system: UnitSystem,
    defaults: &CountryDefaults,
    waste_factor: f64,
) -> EngineResult {
    let wall_area = area_to_sqm(to_number(inputs.get("wallArea"), 40.0), system);
    let bricks_per_sqm = to_number(inputs.get("bricksPerSqm"), defaults.brick.bricks_per_sqm);
    let mortar_per_sqm = to_number(inputs.get("mortarPerSqm"), defaults.brick.mortar_per_sqm);

    let factor = 1.0 + waste_factor;
    let bricks = wall_area * bricks_per_sqm * factor;
    let mortar = wall_area * mortar_per_sqm * factor;

    EngineResult::from([
        ("bricks".to_string(), bricks),
        ("mortar".to_string(), mortar),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;
    use crate::countries::resolve_profile;

    #[test]
    fn test_profile_brick_format() {
        let defaults = &resolve_profile("IN").unwrap().defaults;
        let input = inputs(&[("wallArea", 40.0.into())]);
        let result = calculate(&input, UnitSystem::Metric, defaults, 0.08);
        // IN: 54 bricks/m², 0.04 m³ mortar/m²
        assert!((result["bricks"] - 40.0 * 54.0 * 1.08).abs() < 1e-9);
        assert!((result["mortar"] - 40.0 * 0.04 * 1.08).abs() < 1e-9);
    }

    #[test]
    fn test_imperial_wall_area() {
        let defaults = &resolve_profile("US").unwrap().defaults;
        let input = inputs(&[("wallArea", 400.0.into())]); // ft²
        let result = calculate(&input, UnitSystem::Imperial, defaults, 0.0);
        assert!((result["bricks"] - 400.0 * 0.092903 * 50.0).abs() < 1e-9);
    }
}
