//! # Paint Quantity
//!
//! Wall area from perimeter and height, minus openings, then liters from
//! the coverage figure and coat count. Coverage defaults come from the
//! country profile; imperial coverage input is quoted in ft²/gal and
//! converted with the compound coverage conversion.

use crate::calculations::{clamp_above_zero, to_number, EngineInput, EngineResult};
use crate::countries::CountryDefaults;
use crate::units::{area_to_sqm, coverage_to_metric, length_to_meters, UnitSystem};

/// Calculate paintable area (m²) and paint volume (liters), waste included.
pub fn calculate(
    inputs: &EngineInput,
    system: UnitSystem,
    defaults: &CountryDefaults,
    waste_factor: f64,
) -> EngineResult {
    let perimeter = length_to_meters(to_number(inputs.get("perimeter"), 20.0), system);
    let height = length_to_meters(to_number(inputs.get("height"), 2.7), system);
    let openings = area_to_sqm(to_number(inputs.get("openings"), 2.0), system);

    // Zero coats makes no sense; treat it like a missing field.
    let default_coats = f64::from(defaults.paint.coats);
    let mut coats = to_number(inputs.get("coats"), default_coats);
    if coats == 0.0 {
        coats = default_coats;
    }

    let coverage = coverage_to_metric(
        to_number(inputs.get("coverage"), defaults.paint.coverage_sqm_per_liter),
        system,
    );

    let area = clamp_above_zero(perimeter * height - openings);
    let total_area = area * (1.0 + waste_factor);
    let liters = total_area * coats / coverage;

    EngineResult::from([
        ("area".to_string(), total_area),
        ("volume".to_string(), liters),
    ])
}
