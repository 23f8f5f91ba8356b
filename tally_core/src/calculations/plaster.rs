//! # Plaster Volume and Bags
//!
//! Mixed plaster volume from area and coat thickness, then whole bags from
//! the per-bag yield. The reported `area` is the base wall area; waste is
//! applied to the volume only.

use crate::calculations::{ceil_count, to_number, EngineInput, EngineResult};
use crate::countries::CountryDefaults;
use crate::units::{area_to_sqm, length_to_meters, UnitSystem};

/// Per-bag yield assumed when the profile carries no plaster group, m³.
const DEFAULT_COVERAGE_PER_BAG: f64 = 0.1;

/// Calculate plaster volume (m³), bag count and base area (m²).
pub fn calculate(
    inputs: &EngineInput,
    system: UnitSystem,
    defaults: &CountryDefaults,
    waste_factor: f64,
) -> EngineResult {
    let area = area_to_sqm(to_number(inputs.get("area"), 40.0), system);
    let thickness = length_to_meters(to_number(inputs.get("thickness"), 0.01), system);
    let coverage_per_bag = to_number(
        inputs.get("coveragePerBag"),
        defaults
            .plaster
            .map(|p| p.coverage_per_bag)
            .unwrap_or(DEFAULT_COVERAGE_PER_BAG),
    );

    let base_volume = area * thickness;
    let total_volume = base_volume * (1.0 + waste_factor);
    let bags = ceil_count(total_volume, coverage_per_bag);

    EngineResult::from([
        ("volume".to_string(), total_volume),
        ("bags".to_string(), bags),
        ("area".to_string(), area),
    ])
}
