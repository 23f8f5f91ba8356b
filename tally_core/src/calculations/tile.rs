//! # Tile Count
//!
//! Floor/wall area divided by single-tile area, rounded up. Laying tiles
//! diagonally wastes more material to edge cuts than any user-tuned waste
//! factor accounts for, so the `diagonal` toggle *replaces* the caller's
//! waste factor with the profile's diagonal-cut figure; the two are never
//! combined.

use crate::calculations::{ceil_count, to_bool, to_number, EngineInput, EngineResult};
use crate::countries::CountryDefaults;
use crate::units::{length_to_meters, UnitSystem};

/// Calculate tiled area (m²) and tile count, waste included.
pub fn calculate(
    inputs: &EngineInput,
    system: UnitSystem,
    defaults: &CountryDefaults,
    waste_factor: f64,
) -> EngineResult {
    let length = length_to_meters(to_number(inputs.get("length"), 5.0), system);
    let width = length_to_meters(to_number(inputs.get("width"), 3.0), system);
    let tile_length = length_to_meters(to_number(inputs.get("tileLength"), 0.6), system);
    let tile_width = length_to_meters(to_number(inputs.get("tileWidth"), 0.3), system);
    let diagonal = to_bool(inputs.get("diagonal"));

    let area = length * width;
    let tile_area = tile_length * tile_width;
    let waste = if diagonal {
        defaults.tile.diagonal_waste
    } else {
        waste_factor
    };

    let total_area = area * (1.0 + waste);
    let tiles = ceil_count(total_area, tile_area);

    EngineResult::from([
        ("area".to_string(), total_area),
        ("tiles".to_string(), tiles),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;
    use crate::countries::resolve_profile;

    fn room() -> EngineInput {
        inputs(&[
            ("length", 5.0.into()),
            ("width", 3.0.into()),
            ("tileLength", 0.6.into()),
            ("tileWidth", 0.3.into()),
        ])
    }

    #[test]
    fn test_straight_layout_uses_waste_factor() {
        let defaults = &resolve_profile("GB").unwrap().defaults;
        let result = calculate(&room(), UnitSystem::Metric, defaults, 0.1);
        // 15 m² * 1.1 = 16.5 m²; tile 0.18 m²; 16.5 / 0.18 = 91.67 -> 92
        assert!((result["area"] - 16.5).abs() < 1e-9);
        assert_eq!(result["tiles"], 92.0);
    }

    #[test]
    fn test_diagonal_overrides_waste_factor() {
        // GB diagonal waste is 0.13; pass a deliberately different factor
        // and check the diagonal figure wins outright.
        let defaults = &resolve_profile("GB").unwrap().defaults;
        let mut input = room();
        input.insert("diagonal".into(), true.into());

        let diagonal = calculate(&input, UnitSystem::Metric, defaults, 0.02);
        let straight = calculate(&room(), UnitSystem::Metric, defaults, 0.02);

        assert!((diagonal["area"] - 15.0 * 1.13).abs() < 1e-9);
        assert_ne!(diagonal["area"], straight["area"]);

        // Same factor passed in -> identical output regardless of factor value
        let diagonal_other = calculate(&input, UnitSystem::Metric, defaults, 0.3);
        assert_eq!(diagonal["area"], diagonal_other["area"]);
    }

    #[test]
    fn test_tile_ceiling_bounds() {
        let defaults = &resolve_profile("DE").unwrap().defaults;
        let result = calculate(&room(), UnitSystem::Metric, defaults, 0.11);
        let tile_area = 0.6 * 0.3;
        let tiles = result["tiles"];
        assert!((tiles - 1.0) * tile_area < result["area"]);
        assert!(result["area"] <= tiles * tile_area);
    }
}
