//! # Wallpaper Rolls
//!
//! Strip arithmetic: how many full-height strips a roll yields, how many
//! strips the walls need, and whole rolls from the quotient. Roll geometry
//! defaults (length, width, trim allowance) are regional and come from the
//! country profile.

use crate::calculations::{ceil_count, to_number, EngineInput, EngineResult};
use crate::countries::CountryDefaults;
use crate::units::{length_to_meters, UnitSystem};

/// Floor on the per-strip height so degenerate inputs cannot make a single
/// roll yield thousands of strips.
const MIN_STRIP_HEIGHT_M: f64 = 0.1;

/// Calculate total strips and whole rolls, waste included.
pub fn calculate(
    inputs: &EngineInput,
    system: UnitSystem,
    defaults: &CountryDefaults,
    waste_factor: f64,
) -> EngineResult {
    let perimeter = length_to_meters(to_number(inputs.get("perimeter"), 25.0), system);
    let height = length_to_meters(to_number(inputs.get("height"), 2.6), system);
    let allowance = length_to_meters(
        to_number(inputs.get("allowance"), defaults.wallpaper.allowance_m),
        system,
    );
    let roll_length = length_to_meters(
        to_number(inputs.get("rollLength"), defaults.wallpaper.roll_length_m),
        system,
    );
    let roll_width = length_to_meters(
        to_number(inputs.get("rollWidth"), defaults.wallpaper.roll_width_m),
        system,
    );

    let strip_height = (height + allowance).max(MIN_STRIP_HEIGHT_M);
    let strips_per_roll = (roll_length / strip_height).floor().max(1.0);

    let total_strips = if roll_width > 0.0 {
        (perimeter / roll_width * (1.0 + waste_factor)).ceil()
    } else {
        0.0
    };
    let rolls = ceil_count(total_strips, strips_per_roll);

    EngineResult::from([
        ("strips".to_string(), total_strips),
        ("rolls".to_string(), rolls),
    ])
}
