//! # Electrical Cable and Conduit
//!
//! Rough-in cable length: one vertical drop per socket or switch plus
//! horizontal runs around the perimeter, then whole 3 m conduit sticks.

use crate::calculations::{ceil_count, to_number, EngineInput, EngineResult};
use crate::units::{length_to_meters, UnitSystem};

/// Horizontal runs follow walls and detour around framing; 1.5x perimeter
/// is the rough-in planning figure.
const HORIZONTAL_ROUTING_FACTOR: f64 = 1.5;

/// Standard conduit stick length, m
const CONDUIT_LENGTH_M: f64 = 3.0;

/// Calculate cable length (m), outlet counts and conduit sticks, waste
/// included on the cable run.
pub fn calculate(inputs: &EngineInput, system: UnitSystem, waste_factor: f64) -> EngineResult {
    let perimeter = length_to_meters(to_number(inputs.get("perimeter"), 40.0), system);
    let height = length_to_meters(to_number(inputs.get("height"), 2.7), system);
    let sockets = to_number(inputs.get("sockets"), 10.0);
    let switches = to_number(inputs.get("switches"), 5.0);

    let vertical_runs = sockets + switches;
    let vertical_length = vertical_runs * height;
    let horizontal_length = perimeter * HORIZONTAL_ROUTING_FACTOR;
    let total_length = (vertical_length + horizontal_length) * (1.0 + waste_factor);
    let conduits = ceil_count(total_length, CONDUIT_LENGTH_M);

    EngineResult::from([
        ("cableLength".to_string(), total_length),
        ("sockets".to_string(), sockets),
        ("switches".to_string(), switches),
        ("conduits".to_string(), conduits),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_support::inputs;

    #[test]
    fn test_cable_length() {
        let input = inputs(&[
            ("perimeter", 40.0.into()),
            ("height", 2.7.into()),
            ("sockets", 10.0.into()),
            ("switches", 5.0.into()),
        ]);
        let result = calculate(&input, UnitSystem::Metric, 0.12);

        // 15 drops * 2.7 m + 40 m * 1.5 = 100.5 m; 12% waste -> 112.56 m
        assert!((result["cableLength"] - 112.56).abs() < 1e-9);
        assert_eq!(result["sockets"], 10.0);
        assert_eq!(result["switches"], 5.0);
        assert_eq!(result["conduits"], (112.56f64 / 3.0).ceil());
    }

    #[test]
    fn test_imperial_lengths_convert() {
        let input = inputs(&[
            ("perimeter", 100.0.into()), // ft
            ("height", 8.0.into()),      // ft
            ("sockets", 4.0.into()),
            ("switches", 2.0.into()),
        ]);
        let result = calculate(&input, UnitSystem::Imperial, 0.0);
        let expected = (6.0 * 8.0 * 0.3048) + (100.0 * 0.3048 * 1.5);
        assert!((result["cableLength"] - expected).abs() < 1e-9);
    }
}
