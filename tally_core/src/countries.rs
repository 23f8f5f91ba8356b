//! # Country Default Profiles
//!
//! A fixed set of named profiles, one per supported country, holding the
//! per-material default constants (paint coverage, tile waste, brick density,
//! roll geometry, ...) and the preferred unit system used to pre-fill
//! calculators sensibly per region.
//!
//! The seed list is immutable configuration data: it is built once behind a
//! [`once_cell::sync::Lazy`] on first access, sorted by country code, and
//! never mutated afterwards. The engine receives a profile explicitly with
//! every call rather than reaching for ambient state.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::countries::{profiles, resolve_profile, fallback_profile};
//! use tally_core::calculations::FormulaKey;
//!
//! let de = resolve_profile("de").unwrap();
//! assert_eq!(de.defaults.paint.coverage_sqm_per_liter, 12.0);
//!
//! // Unknown codes are an error; callers fall back instead of propagating.
//! let profile = resolve_profile("FR").unwrap_or_else(|_| fallback_profile());
//! assert_eq!(profile.country_code, fallback_profile().country_code);
//!
//! // Per-formula waste with a guaranteed non-zero fallback chain.
//! let waste = de.defaults.waste_for(FormulaKey::Tile);
//! assert!(waste > 0.0);
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::FormulaKey;
use crate::errors::{CalcError, CalcResult};
use crate::registry::Locale;
use crate::units::UnitSystem;

/// Waste fraction used when a profile is missing both the requested entry
/// and the concrete entry. Never zero: under-ordering is the failure mode
/// the waste factor exists to prevent.
pub const WASTE_FALLBACK: f64 = 0.08;

// ============================================================================
// Per-Material Default Groups
// ============================================================================

/// Paint defaults: how far a liter stretches, and how many coats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintDefaults {
    /// Coverage in m² per liter (single coat)
    pub coverage_sqm_per_liter: f64,
    /// Default coat count
    pub coats: u32,
}

/// Flooring defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlooringDefaults {
    /// Area one retail pack covers, m²
    pub pack_coverage_sqm: f64,
}

/// Tile defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileDefaults {
    /// Area of a single tile, m²
    pub tile_area_sqm: f64,
    /// Cutting waste for diagonal layouts. Overrides the caller's waste
    /// factor when the diagonal toggle is set; it does not add to it.
    pub diagonal_waste: f64,
}

/// Drywall defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrywallDefaults {
    /// Area of a single sheet, m²
    pub sheet_area_sqm: f64,
}

/// Wallpaper defaults: regional roll geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallpaperDefaults {
    /// Roll length, m
    pub roll_length_m: f64,
    /// Roll width, m
    pub roll_width_m: f64,
    /// Trim/seam allowance added to wall height per strip, m
    pub allowance_m: f64,
}

/// Roofing defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofingDefaults {
    /// Area one shingle bundle covers, m²
    pub bundle_coverage_sqm: f64,
    /// Typical regional roof pitch, degrees
    pub default_angle_degrees: f64,
}

/// Brick defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickDefaults {
    /// Bricks per m² of wall (single wythe, regional brick format)
    pub bricks_per_sqm: f64,
    /// Mortar volume per m² of wall, m³
    pub mortar_per_sqm: f64,
}

/// Insulation defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsulationDefaults {
    /// Area one roll covers, m²
    pub roll_area_sqm: f64,
}

/// Plaster defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasterDefaults {
    /// Mixed volume one bag yields, m³
    pub coverage_per_bag: f64,
}

// ============================================================================
// Country Defaults
// ============================================================================

/// Default numeric parameters for one country, grouped by material family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDefaults {
    /// Waste fraction per formula. Seeded with an entry for every formula
    /// key; [`CountryDefaults::waste_for`] guards the lookup regardless.
    pub waste: BTreeMap<FormulaKey, f64>,
    pub paint: PaintDefaults,
    pub flooring: FlooringDefaults,
    pub tile: TileDefaults,
    pub drywall: DrywallDefaults,
    pub wallpaper: WallpaperDefaults,
    pub roofing: RoofingDefaults,
    pub brick: BrickDefaults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insulation: Option<InsulationDefaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaster: Option<PlasterDefaults>,
}

impl CountryDefaults {
    /// Waste fraction for a formula, falling back to the concrete entry and
    /// then to [`WASTE_FALLBACK`]. Never returns zero for a missing key.
    pub fn waste_for(&self, formula: FormulaKey) -> f64 {
        self.waste
            .get(&formula)
            .or_else(|| self.waste.get(&FormulaKey::Concrete))
            .copied()
            .unwrap_or(WASTE_FALLBACK)
    }
}

/// One country profile: identity, preferred units, currency, and defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    /// ISO 3166-1 alpha-2 code, uppercase
    pub country_code: String,
    /// English display name
    pub name_en: String,
    /// Russian display name
    pub name_ru: String,
    /// Unit system users in this country expect
    pub unit_system: UnitSystem,
    /// ISO 4217 currency code
    pub currency: String,
    /// Material defaults
    pub defaults: CountryDefaults,
}

impl CountryProfile {
    /// Localized display name
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.name_en,
            Locale::Ru => &self.name_ru,
        }
    }
}

// ============================================================================
// Seed Data
// ============================================================================

/// Waste fractions shared by most profiles; individual countries override
/// single entries below.
fn base_waste() -> BTreeMap<FormulaKey, f64> {
    BTreeMap::from([
        (FormulaKey::Concrete, 0.08),
        (FormulaKey::Paint, 0.07),
        (FormulaKey::Flooring, 0.08),
        (FormulaKey::Tile, 0.1),
        (FormulaKey::Roofing, 0.07),
        (FormulaKey::Drywall, 0.12),
        (FormulaKey::Wallpaper, 0.08),
        (FormulaKey::Brick, 0.05),
        (FormulaKey::Insulation, 0.08),
        (FormulaKey::Plaster, 0.1),
        (FormulaKey::Screed, 0.06),
        (FormulaKey::Electrical, 0.12),
    ])
}

fn waste_with(overrides: &[(FormulaKey, f64)]) -> BTreeMap<FormulaKey, f64> {
    let mut waste = base_waste();
    for (key, value) in overrides {
        waste.insert(*key, *value);
    }
    waste
}

fn seed_profiles() -> Vec<CountryProfile> {
    vec![
        CountryProfile {
            country_code: "US".to_string(),
            name_en: "United States".to_string(),
            name_ru: "США".to_string(),
            unit_system: UnitSystem::Imperial,
            currency: "USD".to_string(),
            defaults: CountryDefaults {
                waste: waste_with(&[(FormulaKey::Concrete, 0.09), (FormulaKey::Drywall, 0.15)]),
                paint: PaintDefaults { coverage_sqm_per_liter: 9.3, coats: 2 },
                flooring: FlooringDefaults { pack_coverage_sqm: 2.23 },
                tile: TileDefaults { tile_area_sqm: 0.25, diagonal_waste: 0.15 },
                drywall: DrywallDefaults { sheet_area_sqm: 2.973 }, // 4ft x 8ft
                wallpaper: WallpaperDefaults {
                    roll_length_m: 10.06,
                    roll_width_m: 0.527,
                    allowance_m: 0.1,
                },
                roofing: RoofingDefaults { bundle_coverage_sqm: 3.06, default_angle_degrees: 26.0 },
                brick: BrickDefaults { bricks_per_sqm: 50.0, mortar_per_sqm: 0.036 },
                insulation: Some(InsulationDefaults { roll_area_sqm: 9.3 }),
                plaster: Some(PlasterDefaults { coverage_per_bag: 0.1 }),
            },
        },
        CountryProfile {
            country_code: "GB".to_string(),
            name_en: "United Kingdom".to_string(),
            name_ru: "Великобритания".to_string(),
            unit_system: UnitSystem::Metric,
            currency: "GBP".to_string(),
            defaults: CountryDefaults {
                waste: waste_with(&[(FormulaKey::Tile, 0.12)]),
                paint: PaintDefaults { coverage_sqm_per_liter: 11.0, coats: 2 },
                flooring: FlooringDefaults { pack_coverage_sqm: 2.6 },
                tile: TileDefaults { tile_area_sqm: 0.24, diagonal_waste: 0.13 },
                drywall: DrywallDefaults { sheet_area_sqm: 2.88 },
                wallpaper: WallpaperDefaults {
                    roll_length_m: 10.05,
                    roll_width_m: 0.53,
                    allowance_m: 0.08,
                },
                roofing: RoofingDefaults { bundle_coverage_sqm: 3.1, default_angle_degrees: 30.0 },
                brick: BrickDefaults { bricks_per_sqm: 52.0, mortar_per_sqm: 0.035 },
                insulation: Some(InsulationDefaults { roll_area_sqm: 10.0 }),
                plaster: Some(PlasterDefaults { coverage_per_bag: 0.12 }),
            },
        },
        CountryProfile {
            country_code: "DE".to_string(),
            name_en: "Germany".to_string(),
            name_ru: "Германия".to_string(),
            unit_system: UnitSystem::Metric,
            currency: "EUR".to_string(),
            defaults: CountryDefaults {
                waste: waste_with(&[(FormulaKey::Concrete, 0.07), (FormulaKey::Tile, 0.11)]),
                paint: PaintDefaults { coverage_sqm_per_liter: 12.0, coats: 2 },
                flooring: FlooringDefaults { pack_coverage_sqm: 2.5 },
                tile: TileDefaults { tile_area_sqm: 0.23, diagonal_waste: 0.12 },
                drywall: DrywallDefaults { sheet_area_sqm: 3.0 },
                wallpaper: WallpaperDefaults {
                    roll_length_m: 10.0,
                    roll_width_m: 0.53,
                    allowance_m: 0.07,
                },
                roofing: RoofingDefaults { bundle_coverage_sqm: 3.2, default_angle_degrees: 32.0 },
                brick: BrickDefaults { bricks_per_sqm: 48.0, mortar_per_sqm: 0.033 },
                insulation: Some(InsulationDefaults { roll_area_sqm: 10.0 }),
                plaster: Some(PlasterDefaults { coverage_per_bag: 0.11 }),
            },
        },
        CountryProfile {
            country_code: "RU".to_string(),
            name_en: "Russia".to_string(),
            name_ru: "Россия".to_string(),
            unit_system: UnitSystem::Metric,
            currency: "RUB".to_string(),
            defaults: CountryDefaults {
                waste: waste_with(&[(FormulaKey::Drywall, 0.13), (FormulaKey::Wallpaper, 0.09)]),
                paint: PaintDefaults { coverage_sqm_per_liter: 10.5, coats: 2 },
                flooring: FlooringDefaults { pack_coverage_sqm: 2.4 },
                tile: TileDefaults { tile_area_sqm: 0.25, diagonal_waste: 0.12 },
                drywall: DrywallDefaults { sheet_area_sqm: 3.0 },
                wallpaper: WallpaperDefaults {
                    roll_length_m: 10.05,
                    roll_width_m: 0.53,
                    allowance_m: 0.1,
                },
                roofing: RoofingDefaults { bundle_coverage_sqm: 3.15, default_angle_degrees: 30.0 },
                brick: BrickDefaults { bricks_per_sqm: 51.0, mortar_per_sqm: 0.035 },
                insulation: Some(InsulationDefaults { roll_area_sqm: 9.5 }),
                plaster: Some(PlasterDefaults { coverage_per_bag: 0.1 }),
            },
        },
        CountryProfile {
            country_code: "IN".to_string(),
            name_en: "India".to_string(),
            name_ru: "Индия".to_string(),
            unit_system: UnitSystem::Metric,
            currency: "INR".to_string(),
            defaults: CountryDefaults {
                waste: waste_with(&[(FormulaKey::Paint, 0.08), (FormulaKey::Brick, 0.08)]),
                paint: PaintDefaults { coverage_sqm_per_liter: 9.0, coats: 2 },
                flooring: FlooringDefaults { pack_coverage_sqm: 2.1 },
                tile: TileDefaults { tile_area_sqm: 0.22, diagonal_waste: 0.12 },
                drywall: DrywallDefaults { sheet_area_sqm: 2.88 },
                wallpaper: WallpaperDefaults {
                    roll_length_m: 10.0,
                    roll_width_m: 0.52,
                    allowance_m: 0.08,
                },
                roofing: RoofingDefaults { bundle_coverage_sqm: 3.0, default_angle_degrees: 24.0 },
                brick: BrickDefaults { bricks_per_sqm: 54.0, mortar_per_sqm: 0.04 },
                insulation: Some(InsulationDefaults { roll_area_sqm: 9.0 }),
                plaster: Some(PlasterDefaults { coverage_per_bag: 0.1 }),
            },
        },
        CountryProfile {
            country_code: "CA".to_string(),
            name_en: "Canada".to_string(),
            name_ru: "Канада".to_string(),
            unit_system: UnitSystem::Metric,
            currency: "CAD".to_string(),
            defaults: CountryDefaults {
                waste: waste_with(&[(FormulaKey::Roofing, 0.08)]),
                paint: PaintDefaults { coverage_sqm_per_liter: 10.0, coats: 2 },
                flooring: FlooringDefaults { pack_coverage_sqm: 2.3 },
                tile: TileDefaults { tile_area_sqm: 0.24, diagonal_waste: 0.13 },
                drywall: DrywallDefaults { sheet_area_sqm: 2.973 },
                wallpaper: WallpaperDefaults {
                    roll_length_m: 10.06,
                    roll_width_m: 0.527,
                    allowance_m: 0.08,
                },
                roofing: RoofingDefaults { bundle_coverage_sqm: 3.05, default_angle_degrees: 27.0 },
                brick: BrickDefaults { bricks_per_sqm: 50.0, mortar_per_sqm: 0.035 },
                insulation: Some(InsulationDefaults { roll_area_sqm: 9.3 }),
                plaster: Some(PlasterDefaults { coverage_per_bag: 0.1 }),
            },
        },
    ]
}

static PROFILES: Lazy<Vec<CountryProfile>> = Lazy::new(|| {
    let mut profiles = seed_profiles();
    profiles.sort_by(|a, b| a.country_code.cmp(&b.country_code));
    profiles
});

// ============================================================================
// Lookup
// ============================================================================

/// All seeded profiles, sorted ascending by country code. The order is
/// deterministic so UIs may index by position.
pub fn profiles() -> &'static [CountryProfile] {
    &PROFILES
}

/// Resolve a profile by country code (case-insensitive).
pub fn resolve_profile(country_code: &str) -> CalcResult<&'static CountryProfile> {
    let needle = country_code.trim();
    PROFILES
        .iter()
        .find(|p| p.country_code.eq_ignore_ascii_case(needle))
        .ok_or_else(|| CalcError::country_not_found(needle))
}

/// The profile callers substitute when resolution fails: the first entry in
/// sorted order. Computation always proceeds with *some* profile.
pub fn fallback_profile() -> &'static CountryProfile {
    &PROFILES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_sorted_by_code() {
        let codes: Vec<&str> = profiles().iter().map(|p| p.country_code.as_str()).collect();
        assert_eq!(codes, vec!["CA", "DE", "GB", "IN", "RU", "US"]);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_profile("us").unwrap().country_code, "US");
        assert_eq!(resolve_profile(" GB ").unwrap().country_code, "GB");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let err = resolve_profile("FR").unwrap_err();
        assert_eq!(err.error_code(), "COUNTRY_NOT_FOUND");
    }

    #[test]
    fn test_fallback_profile_is_first_sorted() {
        assert_eq!(fallback_profile().country_code, "CA");
    }

    #[test]
    fn test_only_us_is_imperial() {
        for profile in profiles() {
            let expect_imperial = profile.country_code == "US";
            assert_eq!(profile.unit_system == UnitSystem::Imperial, expect_imperial);
        }
    }

    #[test]
    fn test_every_profile_covers_every_formula() {
        for profile in profiles() {
            for formula in FormulaKey::ALL {
                assert!(
                    profile.defaults.waste.contains_key(&formula),
                    "{} missing waste entry for {}",
                    profile.country_code,
                    formula
                );
                assert!(profile.defaults.waste_for(formula) > 0.0);
            }
        }
    }

    #[test]
    fn test_waste_fallback_chain() {
        let mut defaults = resolve_profile("GB").unwrap().defaults.clone();
        defaults.waste.remove(&FormulaKey::Screed);
        // Falls back to the concrete entry, not zero
        assert_eq!(defaults.waste_for(FormulaKey::Screed), 0.08);

        defaults.waste.clear();
        assert_eq!(defaults.waste_for(FormulaKey::Screed), WASTE_FALLBACK);
    }

    #[test]
    fn test_us_overrides() {
        let us = resolve_profile("US").unwrap();
        assert_eq!(us.defaults.waste_for(FormulaKey::Concrete), 0.09);
        assert_eq!(us.defaults.waste_for(FormulaKey::Drywall), 0.15);
        // Non-overridden entries keep the base figure
        assert_eq!(us.defaults.waste_for(FormulaKey::Paint), 0.07);
    }

    #[test]
    fn test_localized_names() {
        let ru = resolve_profile("RU").unwrap();
        assert_eq!(ru.name(Locale::En), "Russia");
        assert_eq!(ru.name(Locale::Ru), "Россия");
    }

    #[test]
    fn test_profile_serialization() {
        let profile = resolve_profile("DE").unwrap();
        let json = serde_json::to_string(profile).unwrap();
        let roundtrip: CountryProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(*profile, roundtrip);
    }
}
