//! # Tally CLI Application
//!
//! Interactive terminal front-end for the estimation engine. Walks the
//! registry schema for the chosen calculator, prompts every field with its
//! per-system default, runs the engine and prints the results in the
//! user's units plus a raw JSON dump.

use std::io::{self, BufRead, Write};

use tally_core::calculations::{
    run_calculation, to_number, CalcRequest, EngineInput, FieldValue, WASTE_FACTOR_MAX,
};
use tally_core::countries::{fallback_profile, profiles, resolve_profile};
use tally_core::registry::{definitions, find, FieldKind, Locale};
use tally_core::units::{convert_result, format_quantity, UnitSystem};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    let line = prompt_line(&format!("{} [{}]: ", prompt, format_quantity(default, None)));
    if line.is_empty() {
        return default;
    }
    line.parse().unwrap_or(default)
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    let line = prompt_line(&format!("{} [{}]: ", prompt, hint));
    match line.to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn main() {
    let locale = Locale::En;

    println!("Tally CLI - Construction Material Estimator");
    println!("===========================================");
    println!();

    println!("Countries:");
    for profile in profiles() {
        println!(
            "  {}  {} ({}, {})",
            profile.country_code,
            profile.name(locale),
            profile.unit_system.display_name(),
            profile.currency
        );
    }
    let code = prompt_line("Country code [US]: ");
    let profile = if code.is_empty() {
        resolve_profile("US").unwrap_or_else(|_| fallback_profile())
    } else {
        resolve_profile(&code).unwrap_or_else(|err| {
            eprintln!("{}; using {}", err, fallback_profile().country_code);
            fallback_profile()
        })
    };
    let system = profile.unit_system;

    println!();
    println!("Calculators:");
    for def in definitions() {
        println!("  {:<11} {}", def.slug, def.title.get(locale));
    }
    let slug = {
        let entered = prompt_line("Calculator [concrete]: ");
        if entered.is_empty() {
            "concrete".to_string()
        } else {
            entered
        }
    };
    let Some(def) = find(&slug) else {
        eprintln!("Unknown calculator: {}", slug);
        std::process::exit(1);
    };

    println!();
    println!("{} ({} units)", def.title.get(locale), system.display_name());
    println!("{}", def.description.get(locale));
    println!();

    let mut inputs = EngineInput::new();
    for field in &def.inputs {
        let default = field.default_for(system);
        let suffix = field
            .unit_kind
            .map(|kind| kind.label(system))
            .filter(|label| !label.is_empty())
            .map(|label| format!(" ({})", label))
            .unwrap_or_default();
        let label = format!("{}{}", field.label.get(locale), suffix);

        match field.kind {
            FieldKind::Number => {
                let fallback = to_number(default, 0.0);
                let value = prompt_f64(&label, fallback);
                inputs.insert(field.id.to_string(), value.into());
            }
            FieldKind::Select => {
                let options: Vec<&str> = field.options.iter().map(|o| o.value).collect();
                let fallback = match default {
                    Some(FieldValue::Text(s)) => s.as_str(),
                    _ => options.first().copied().unwrap_or(""),
                };
                let entered =
                    prompt_line(&format!("{} ({}) [{}]: ", label, options.join("/"), fallback));
                let value = if options.contains(&entered.as_str()) {
                    entered
                } else {
                    fallback.to_string()
                };
                inputs.insert(field.id.to_string(), value.into());
            }
            FieldKind::Toggle => {
                let fallback = matches!(default, Some(FieldValue::Toggle(true)));
                let value = prompt_bool(&label, fallback);
                inputs.insert(field.id.to_string(), value.into());
            }
        }
    }

    let default_waste = profile.defaults.waste_for(def.formula);
    let waste_factor = prompt_f64("Waste factor", default_waste).clamp(0.0, WASTE_FACTOR_MAX);

    let result = run_calculation(&CalcRequest {
        formula: def.formula,
        inputs: &inputs,
        unit_system: system,
        defaults: &profile.defaults,
        waste_factor,
    });

    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", def.title.get(locale).to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    for label in &def.result_labels {
        let Some(si_value) = result.get(label.id) else {
            continue;
        };
        let display = convert_result(*si_value, system, label.quantity);
        let unit = label.unit_label(system);
        if unit.is_empty() {
            println!("  {:<18} {}", label.label.get(locale), format_quantity(display, None));
        } else {
            println!(
                "  {:<18} {} {}",
                label.label.get(locale),
                format_quantity(display, None),
                unit
            );
        }
    }
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (SI units, for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}
