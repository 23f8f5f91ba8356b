//! # Drywall Sheets
//!
//! Wall area from perimeter and height minus openings, rounded up to whole
//! sheets. Negative areas (openings larger than the wall) clamp to zero.

use crate::calculations::{ceil_count, clamp_above_zero, to_number, EngineInput, EngineResult};
use crate::units::{area_to_sqm, length_to_meters, UnitSystem};

/// Calculate wall area (m²) and sheet count, waste included.
pub fn calculate(inputs: &EngineInput, system: UnitSystem, waste_factor: f64) -> EngineResult {
    let perimeter = length_to_meters(to_number(inputs.get("perimeter"), 20.0), system);
    let height = length_to_meters(to_number(inputs.get("height"), 2.8), system);
    let openings = area_to_sqm(to_number(inputs.get("openings"), 4.0), system);
    let sheet_area = area_to_sqm(to_number(inputs.get("sheetArea"), 2.88), system);

    let area = clamp_above_zero(perimeter * height - openings);
    let total_area = area * (1.0 + waste_factor);
    let sheets = ceil_count(total_area, sheet_area);

    EngineResult::from([
        ("area".to_string(), total_area),
        ("sheets".to_string(), sheets),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;

    #[test]
    fn test_sheet_count() {
        let input = inputs(&[
            ("perimeter", 20.0.into()),
            ("height", 2.8.into()),
            ("openings", 4.0.into()),
            ("sheetArea", 2.88.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.12);
        // (56 - 4) * 1.12 = 58.24 m²; 58.24 / 2.88 = 20.2 -> 21 sheets
        assert!((result["area"] - 58.24).abs() < 1e-9);
        assert_eq!(result["sheets"], 21.0);
    }

    #[test]
    fn test_openings_exceeding_wall_clamp_to_zero() {
        let input = inputs(&[
            ("perimeter", 4.0.into()),
            ("height", 2.0.into()),
            ("openings", 9.0.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.12);
        assert_eq!(result["area"], 0.0);
        assert_eq!(result["sheets"], 0.0);
    }
}
