//! # Calculator Registry
//!
//! Static, declarative descriptions of every calculator: input fields with
//! per-system defaults, result labels with unit annotations, and localized
//! presentation text (title, description, FAQ, guide).
//!
//! No computation lives here. The registry is the schema the engine and the
//! UI agree on: field identifiers must match what each formula reads, and
//! result label ids must match the keys each formula emits (both are checked
//! by tests in this module).
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::registry::{definitions, find, Locale};
//! use tally_core::units::UnitSystem;
//!
//! let tile = find("tile").unwrap();
//! println!("{}", tile.title.get(Locale::En));
//!
//! for field in &tile.inputs {
//!     let default = field.default_for(UnitSystem::Metric);
//!     println!("{} = {:?}", field.id, default);
//! }
//! ```

mod definitions;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::{FieldValue, FormulaKey};
use crate::units::{QuantityKind, UnitKind, UnitSystem};

// ============================================================================
// Localization
// ============================================================================

/// Supported interface locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ru,
}

impl Locale {
    /// All locale variants
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Lowercase language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

/// A string in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub ru: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, ru: &'static str) -> Self {
        LocalizedText { en, ru }
    }

    /// Pick the string for a locale
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ru => self.ru,
        }
    }
}

// ============================================================================
// Input Fields
// ============================================================================

/// How a field is rendered and what value shape it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free numeric entry
    Number,
    /// One of a fixed option list
    Select,
    /// On/off switch
    Toggle,
}

/// One option of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: LocalizedText,
}

/// Declarative description of one calculator input field.
///
/// Construction follows a builder pattern so the definition tables read
/// close to the rendered forms:
///
/// ```rust
/// use tally_core::registry::{InputField, LocalizedText};
/// use tally_core::units::UnitKind;
///
/// let field = InputField::number("length", LocalizedText::new("Length", "Длина"))
///     .with_unit(UnitKind::Length)
///     .with_defaults(6.0, 20.0)
///     .with_range(0.0, 1000.0, 0.1);
/// assert_eq!(field.id, "length");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    /// Field identifier; must match what the formula reads
    pub id: &'static str,
    pub kind: FieldKind,
    pub label: LocalizedText,
    pub description: Option<LocalizedText>,
    /// Semantic unit for label suffixes and input normalization
    pub unit_kind: Option<UnitKind>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    /// Pre-filled value when the metric system is active
    pub default_metric: Option<FieldValue>,
    /// Pre-filled value when the imperial system is active
    pub default_imperial: Option<FieldValue>,
    /// Options for select fields, empty otherwise
    pub options: Vec<SelectOption>,
    /// Conditional-visibility group (e.g. concrete's slab vs cylinder mode)
    pub group: Option<&'static str>,
}

impl InputField {
    /// Start a numeric field
    pub fn number(id: &'static str, label: LocalizedText) -> Self {
        InputField::new(id, FieldKind::Number, label)
    }

    /// Start a select field with its option list
    pub fn select(id: &'static str, label: LocalizedText, options: Vec<SelectOption>) -> Self {
        let mut field = InputField::new(id, FieldKind::Select, label);
        field.options = options;
        field
    }

    /// Start a toggle field
    pub fn toggle(id: &'static str, label: LocalizedText) -> Self {
        InputField::new(id, FieldKind::Toggle, label)
    }

    fn new(id: &'static str, kind: FieldKind, label: LocalizedText) -> Self {
        InputField {
            id,
            kind,
            label,
            description: None,
            unit_kind: None,
            min: None,
            max: None,
            step: None,
            default_metric: None,
            default_imperial: None,
            options: Vec::new(),
            group: None,
        }
    }

    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_unit(mut self, unit_kind: UnitKind) -> Self {
        self.unit_kind = Some(unit_kind);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.step = Some(step);
        self
    }

    /// Same pre-filled value in both unit systems
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        let value = value.into();
        self.default_metric = Some(value.clone());
        self.default_imperial = Some(value);
        self
    }

    /// Distinct pre-filled values per unit system
    pub fn with_defaults(
        mut self,
        metric: impl Into<FieldValue>,
        imperial: impl Into<FieldValue>,
    ) -> Self {
        self.default_metric = Some(metric.into());
        self.default_imperial = Some(imperial.into());
        self
    }

    pub fn with_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    /// Pre-filled value for the active unit system
    pub fn default_for(&self, system: UnitSystem) -> Option<&FieldValue> {
        match system {
            UnitSystem::Metric => self.default_metric.as_ref(),
            UnitSystem::Imperial => self.default_imperial.as_ref(),
        }
    }
}

// ============================================================================
// Result Labels
// ============================================================================

/// Display annotation for one engine result key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultLabel {
    /// Result identifier; must match a key the formula emits
    pub id: &'static str,
    pub label: LocalizedText,
    /// Physical kind, used to pick the SI -> display conversion
    pub quantity: QuantityKind,
    /// SI unit suffix ("m³", "L", "kg", "pcs", ...)
    pub si_unit: &'static str,
}

impl ResultLabel {
    pub const fn new(
        id: &'static str,
        label: LocalizedText,
        quantity: QuantityKind,
        si_unit: &'static str,
    ) -> Self {
        ResultLabel {
            id,
            label,
            quantity,
            si_unit,
        }
    }

    /// Display unit suffix in the given unit system. Counts and weights
    /// keep their SI suffix in both systems.
    pub fn unit_label(&self, system: UnitSystem) -> &'static str {
        match self.quantity {
            QuantityKind::Length => match system {
                UnitSystem::Imperial => "ft",
                UnitSystem::Metric => "m",
            },
            QuantityKind::Area => match system {
                UnitSystem::Imperial => "ft²",
                UnitSystem::Metric => "m²",
            },
            QuantityKind::Volume => match system {
                UnitSystem::Imperial => "yd³",
                UnitSystem::Metric => "m³",
            },
            QuantityKind::Liquid => match system {
                UnitSystem::Imperial => "gal",
                UnitSystem::Metric => "L",
            },
            QuantityKind::Count => self.si_unit,
        }
    }
}

// ============================================================================
// FAQ and Guide
// ============================================================================

/// One FAQ entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorFaq {
    pub question: LocalizedText,
    pub answer: LocalizedText,
}

/// One block of long-form guide content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GuideSection {
    Paragraph { body: &'static str },
    List { items: Vec<&'static str> },
}

/// Long-form guide attached to some calculators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guide {
    pub intro: LocalizedText,
    pub sections: Vec<GuideSection>,
}

// ============================================================================
// Calculator Definitions
// ============================================================================

/// Full declarative description of one calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorDefinition {
    /// URL slug; equals the formula's wire code
    pub slug: &'static str,
    /// Formula the calculator dispatches to
    pub formula: FormulaKey,
    /// Catalog star rating
    pub rating: f64,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub how_it_works: LocalizedText,
    pub inputs: Vec<InputField>,
    pub faq: Vec<CalculatorFaq>,
    pub guide: Option<Guide>,
    pub result_labels: Vec<ResultLabel>,
}

impl CalculatorDefinition {
    /// Which waste entry of the country profile applies
    pub fn waste_key(&self) -> FormulaKey {
        self.formula
    }

    /// Look up a result label by engine result key
    pub fn result_label(&self, id: &str) -> Option<&ResultLabel> {
        self.result_labels.iter().find(|label| label.id == id)
    }
}

static DEFINITIONS: Lazy<Vec<CalculatorDefinition>> = Lazy::new(definitions::build);

/// All calculator definitions, one per formula, in catalog order.
pub fn definitions() -> &'static [CalculatorDefinition] {
    &DEFINITIONS
}

/// Look up a calculator by slug.
pub fn find(slug: &str) -> Option<&'static CalculatorDefinition> {
    DEFINITIONS.iter().find(|def| def.slug == slug)
}

/// Look up a calculator by formula key.
pub fn find_by_formula(formula: FormulaKey) -> Option<&'static CalculatorDefinition> {
    DEFINITIONS.iter().find(|def| def.formula == formula)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{run_calculation, CalcRequest, EngineInput};
    use crate::countries::fallback_profile;

    #[test]
    fn test_every_formula_has_a_definition() {
        for formula in FormulaKey::ALL {
            let def = find_by_formula(formula)
                .unwrap_or_else(|| panic!("no definition for {}", formula));
            assert_eq!(def.slug, formula.code());
            assert!(!def.inputs.is_empty());
            assert!(!def.result_labels.is_empty());
        }
        assert_eq!(definitions().len(), FormulaKey::ALL.len());
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<&str> = definitions().iter().map(|d| d.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), definitions().len());
    }

    #[test]
    fn test_result_labels_match_engine_output() {
        // Run every formula with its registry defaults and check the result
        // key set matches the declared labels exactly.
        let profile = fallback_profile();
        for def in definitions() {
            let mut inputs = EngineInput::new();
            for field in &def.inputs {
                if let Some(value) = field.default_for(UnitSystem::Metric) {
                    inputs.insert(field.id.to_string(), value.clone());
                }
            }
            let result = run_calculation(&CalcRequest {
                formula: def.formula,
                inputs: &inputs,
                unit_system: UnitSystem::Metric,
                defaults: &profile.defaults,
                waste_factor: 0.08,
            });

            for label in &def.result_labels {
                assert!(
                    result.contains_key(label.id),
                    "{}: engine did not emit '{}'",
                    def.slug,
                    label.id
                );
            }
            for key in result.keys() {
                assert!(
                    def.result_label(key).is_some(),
                    "{}: result key '{}' has no label",
                    def.slug,
                    key
                );
            }
        }
    }

    #[test]
    fn test_number_fields_have_defaults_for_both_systems() {
        for def in definitions() {
            for field in &def.inputs {
                if field.kind == FieldKind::Number {
                    assert!(
                        field.default_metric.is_some() && field.default_imperial.is_some(),
                        "{}.{} is missing a default",
                        def.slug,
                        field.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_select_fields_have_options() {
        for def in definitions() {
            for field in &def.inputs {
                match field.kind {
                    FieldKind::Select => assert!(
                        !field.options.is_empty(),
                        "{}.{} has no options",
                        def.slug,
                        field.id
                    ),
                    _ => assert!(
                        field.options.is_empty(),
                        "{}.{} is not a select but has options",
                        def.slug,
                        field.id
                    ),
                }
            }
        }
    }

    #[test]
    fn test_localized_text_lookup() {
        let text = LocalizedText::new("Length", "Длина");
        assert_eq!(text.get(Locale::En), "Length");
        assert_eq!(text.get(Locale::Ru), "Длина");
    }

    #[test]
    fn test_unit_labels_follow_quantity() {
        let label = ResultLabel::new(
            "volume",
            LocalizedText::new("Volume", "Объём"),
            QuantityKind::Volume,
            "m³",
        );
        assert_eq!(label.unit_label(UnitSystem::Metric), "m³");
        assert_eq!(label.unit_label(UnitSystem::Imperial), "yd³");

        let count = ResultLabel::new(
            "bags",
            LocalizedText::new("Bags", "Мешки"),
            QuantityKind::Count,
            "pcs",
        );
        assert_eq!(count.unit_label(UnitSystem::Imperial), "pcs");
    }

    #[test]
    fn test_definitions_serialize() {
        let json = serde_json::to_string(&definitions()[0]).unwrap();
        assert!(json.contains("\"slug\""));
    }
}
