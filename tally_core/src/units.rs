//! # Unit Systems and Conversion
//!
//! Bidirectional conversion between SI base units and a user-facing unit
//! system (metric or imperial), for four quantity kinds: length, area, bulk
//! volume (reported in cubic yards for imperial) and liquid volume (reported
//! in US gallons for imperial).
//!
//! ## Design Philosophy
//!
//! All formula computation inside the engine happens in SI units (meters,
//! square meters, cubic meters, liters). Conversion happens strictly at the
//! boundaries: raw user value -> SI on the way in, SI result -> display value
//! on the way out. The engine itself never reasons in imperial units.
//!
//! Conversion constants are literal values, not derived from each other.
//! In particular `CUBIC_M_TO_CUBIC_YARD` is its own constant family: cubing
//! the inverse foot factor gives a slightly different (also valid) number,
//! and reference output is matched only by the literal.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::units::{length_to_meters, meters_to_user_length, UnitSystem};
//!
//! let span_m = length_to_meters(12.0, UnitSystem::Imperial); // 12 ft
//! assert!((span_m - 3.6576).abs() < 1e-9);
//! assert!((meters_to_user_length(span_m, UnitSystem::Imperial) - 12.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Feet to meters
pub const FEET_TO_M: f64 = 0.3048;

/// Square feet to square meters
pub const SQFT_TO_SQM: f64 = 0.092903;

/// Cubic meters to cubic yards (direct constant, not the cubed foot factor)
pub const CUBIC_M_TO_CUBIC_YARD: f64 = 1.30795062;

/// Liters to US gallons
pub const LITER_TO_GALLON: f64 = 0.264172;

/// Liters per US gallon (canonical gallon constant for the reverse direction)
pub const LITERS_PER_GALLON: f64 = 3.78541;

// ============================================================================
// Unit System
// ============================================================================

/// The user-facing unit system. Selected per request/session, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// SI units: meters, square meters, cubic meters, liters
    Metric,
    /// US customary: feet, square feet, cubic yards, gallons
    Imperial,
}

impl UnitSystem {
    /// All unit system variants for UI selection
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric",
            UnitSystem::Imperial => "Imperial",
        }
    }

    /// Short abbreviation for compact UI labels
    pub fn abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "SI",
            UnitSystem::Imperial => "US",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().as_str() {
            "metric" | "si" | "m" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "ft" => Ok(UnitSystem::Imperial),
            _ => Err(CalcError::invalid_input(
                "unit_system",
                s,
                "Expected 'metric' or 'imperial'",
            )),
        }
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Input Boundary (user value -> SI)
// ============================================================================

/// Convert a length in the user's unit system (ft or m) to meters.
///
/// The value is assumed to already be expressed in the declared system;
/// no magnitude-based inference happens here.
pub fn length_to_meters(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Imperial => value * FEET_TO_M,
        UnitSystem::Metric => value,
    }
}

/// Convert an area in the user's unit system (ft² or m²) to square meters.
pub fn area_to_sqm(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Imperial => value * SQFT_TO_SQM,
        UnitSystem::Metric => value,
    }
}

/// Convert a coverage figure (area per unit liquid volume) to m² per liter.
///
/// Imperial coverage is quoted in ft² per gallon, so this is a compound
/// conversion: area factor in, gallon factor out.
pub fn coverage_to_metric(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Imperial => value * SQFT_TO_SQM / LITERS_PER_GALLON,
        UnitSystem::Metric => value,
    }
}

// ============================================================================
// Output Boundary (SI -> user value)
// ============================================================================

/// Convert meters to the user's length unit (ft or m).
pub fn meters_to_user_length(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Imperial => value / FEET_TO_M,
        UnitSystem::Metric => value,
    }
}

/// Convert square meters to the user's area unit (ft² or m²).
pub fn sqm_to_user_area(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Imperial => value / SQFT_TO_SQM,
        UnitSystem::Metric => value,
    }
}

/// Convert cubic meters to the user's bulk volume unit (yd³ or m³).
pub fn cubic_meters_to_user_volume(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Imperial => value * CUBIC_M_TO_CUBIC_YARD,
        UnitSystem::Metric => value,
    }
}

/// Convert liters to the user's liquid volume unit (gal or L).
pub fn liters_to_user_volume(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Imperial => value * LITER_TO_GALLON,
        UnitSystem::Metric => value,
    }
}

/// Physical kind of an SI result value, used to pick the output conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Meters -> ft
    Length,
    /// Square meters -> ft²
    Area,
    /// Cubic meters -> yd³
    Volume,
    /// Liters -> gallons
    Liquid,
    /// Pure counts and weights pass through unchanged
    Count,
}

/// Project an SI result value into the user's unit system.
pub fn convert_result(si_value: f64, system: UnitSystem, kind: QuantityKind) -> f64 {
    match kind {
        QuantityKind::Length => meters_to_user_length(si_value, system),
        QuantityKind::Area => sqm_to_user_area(si_value, system),
        QuantityKind::Volume => cubic_meters_to_user_volume(si_value, system),
        QuantityKind::Liquid => liters_to_user_volume(si_value, system),
        QuantityKind::Count => si_value,
    }
}

// ============================================================================
// Field Unit Kinds and Labels
// ============================================================================

/// Semantic unit kind of a calculator input field.
///
/// Shared between the engine (which decides how to normalize the raw value)
/// and the registry (which annotates fields for form rendering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Length,
    Width,
    Height,
    Thickness,
    Diameter,
    Area,
    Volume,
    Angle,
    Count,
    Coverage,
    Percent,
}

impl UnitKind {
    /// Display suffix for a field of this kind in the given unit system.
    pub fn label(&self, system: UnitSystem) -> &'static str {
        match self {
            UnitKind::Length
            | UnitKind::Width
            | UnitKind::Height
            | UnitKind::Thickness
            | UnitKind::Diameter => match system {
                UnitSystem::Imperial => "ft",
                UnitSystem::Metric => "m",
            },
            UnitKind::Area => match system {
                UnitSystem::Imperial => "ft²",
                UnitSystem::Metric => "m²",
            },
            UnitKind::Volume => match system {
                UnitSystem::Imperial => "yd³",
                UnitSystem::Metric => "m³",
            },
            UnitKind::Coverage => match system {
                UnitSystem::Imperial => "ft²/gal",
                UnitSystem::Metric => "m²/L",
            },
            UnitKind::Angle => "°",
            UnitKind::Percent => "%",
            UnitKind::Count => "",
        }
    }
}

// ============================================================================
// Number Formatting
// ============================================================================

/// Format a quantity for display with en-US conventions (dot decimal
/// separator, comma grouping) so output is stable across locales.
///
/// When `max_decimals` is `None`, values above 100 get one decimal place and
/// smaller values get two; trailing zeros are trimmed either way.
pub fn format_quantity(value: f64, max_decimals: Option<u32>) -> String {
    let decimals = max_decimals.unwrap_or(if value > 100.0 { 1 } else { 2 });
    let rounded = format!("{:.*}", decimals as usize, value);

    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Format a fraction (e.g. a waste factor) as a percentage string.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_quantity(value * 100.0, Some(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_metric_is_identity() {
        for v in [0.0, 0.15, 2.7, 144.0] {
            assert_eq!(length_to_meters(v, UnitSystem::Metric), v);
            assert_eq!(area_to_sqm(v, UnitSystem::Metric), v);
            assert_eq!(cubic_meters_to_user_volume(v, UnitSystem::Metric), v);
            assert_eq!(liters_to_user_volume(v, UnitSystem::Metric), v);
            assert_eq!(coverage_to_metric(v, UnitSystem::Metric), v);
        }
    }

    #[test]
    fn test_length_round_trip() {
        for v in [0.1, 1.0, 12.0, 250.0] {
            let m = length_to_meters(v, UnitSystem::Imperial);
            assert!((meters_to_user_length(m, UnitSystem::Imperial) - v).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_area_round_trip() {
        for v in [0.5, 10.0, 430.0] {
            let sqm = area_to_sqm(v, UnitSystem::Imperial);
            assert!((sqm_to_user_area(sqm, UnitSystem::Imperial) - v).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_volume_uses_literal_yard_constant() {
        // 1 m³ must come out as exactly the literal constant, not (1/0.3048)³/27
        assert_eq!(cubic_meters_to_user_volume(1.0, UnitSystem::Imperial), 1.30795062);
    }

    #[test]
    fn test_liquid_conversion() {
        assert!((liters_to_user_volume(10.0, UnitSystem::Imperial) - 2.64172).abs() < TOLERANCE);
    }

    #[test]
    fn test_coverage_compound_conversion() {
        // 350 ft²/gal is a typical paint spec; ≈ 8.59 m²/L
        let metric = coverage_to_metric(350.0, UnitSystem::Imperial);
        assert!((metric - 350.0 * 0.092903 / 3.78541).abs() < TOLERANCE);
        assert!(metric > 8.0 && metric < 9.0);
    }

    #[test]
    fn test_convert_result_kinds() {
        assert!((convert_result(1.0, UnitSystem::Imperial, QuantityKind::Volume) - 1.30795062).abs() < TOLERANCE);
        assert!((convert_result(1.0, UnitSystem::Imperial, QuantityKind::Liquid) - 0.264172).abs() < TOLERANCE);
        assert_eq!(convert_result(7.0, UnitSystem::Imperial, QuantityKind::Count), 7.0);
        assert_eq!(convert_result(5.0, UnitSystem::Metric, QuantityKind::Area), 5.0);
    }

    #[test]
    fn test_unit_system_parse() {
        assert_eq!(UnitSystem::from_str_flexible("Imperial").unwrap(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::from_str_flexible("si").unwrap(), UnitSystem::Metric);
        assert!(UnitSystem::from_str_flexible("furlong").is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(UnitKind::Thickness.label(UnitSystem::Metric), "m");
        assert_eq!(UnitKind::Area.label(UnitSystem::Imperial), "ft²");
        assert_eq!(UnitKind::Coverage.label(UnitSystem::Metric), "m²/L");
        assert_eq!(UnitKind::Count.label(UnitSystem::Imperial), "");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
        let roundtrip: UnitSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, UnitSystem::Imperial);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.888, None), "3.89");
        assert_eq!(format_quantity(144.26, None), "144.3");
        assert_eq!(format_quantity(12500.0, None), "12,500");
        assert_eq!(format_quantity(-1234.5, Some(2)), "-1,234.5");
        assert_eq!(format_percent(0.08), "8%");
        assert_eq!(format_percent(0.125), "12.5%");
    }
}
