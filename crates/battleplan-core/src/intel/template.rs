//! Starter `intel.toml` documents.
//!
//! The blank template carries one comment per field with the prompt and an
//! example, so it doubles as the intake form. The sample template is fully
//! filled in and generates a plan as-is.

use super::model::StrategicChoice;

/// Prompt and example for each field, in form order.
const FIELD_PROMPTS: [(&str, &str, &str); 8] = [
    (
        "hungry_crowd",
        "1. The \"Hungry Crowd\" (exact audience)",
        "Homeowners in Terrebonne, QC.",
    ),
    (
        "burning_pain",
        "2. The burning pain (what keeps them up?)",
        "My brakes are grinding and I'm terrified of a $2,000 bill.",
    ),
    (
        "bait",
        "3. The \"Bait\" (irresistible offer)",
        "Free Brake Inspection + 10% Off Parts",
    ),
    (
        "usp",
        "4. The USP (unique selling proposition)",
        "Honest, certified mechanics. Guaranteed same-day callback.",
    ),
    ("business_name", "5. Business name", "Garage XYZ"),
    ("contact_number", "5. Business contact number", "555-123-4567"),
    (
        "primary_language",
        "6. Primary language / market",
        "French-first, Terrebonne/Mascouche",
    ),
    (
        "strategic_choice",
        "7. Critical strategic choice",
        "Single-Target Assault",
    ),
];

/// Render an intel document.
///
/// With `sample == None` every value is left empty for the operator to fill
/// in; with `Some(choice)` each field holds its example and the strategic
/// choice is set to `choice`.
pub fn render_intel_template(sample: Option<StrategicChoice>) -> String {
    let mut doc = String::with_capacity(1024);
    doc.push_str("# Intel for battleplan. Every field is mandatory.\n");
    doc.push_str("# Fill values in place or use `battleplan intel set <file> <field> <value>`.\n\n");
    doc.push_str("[intel]\n");

    for (key, prompt, example) in FIELD_PROMPTS {
        doc.push_str(&format!("# {prompt}\n"));
        if key == "strategic_choice" {
            for choice in [StrategicChoice::Single, StrategicChoice::Multi] {
                doc.push_str(&format!("#   \"{choice}\" ({})\n", choice.summary()));
            }
        } else {
            doc.push_str(&format!("#   e.g. {example}\n"));
        }

        let value = match (sample, key) {
            (None, _) => String::new(),
            (Some(choice), "strategic_choice") => choice.to_string(),
            (Some(_), _) => example.to_owned(),
        };
        doc.push_str(&format!("{key} = {}\n\n", toml_string(&value)));
    }

    doc
}

/// Quote a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::toml_format::{FIELD_KEYS, IntelToml};
    use crate::intel::{IntelParseError, missing_fields, parse_intel_toml};

    #[test]
    fn prompts_cover_every_field_in_order() {
        let keys: Vec<&str> = FIELD_PROMPTS.iter().map(|(k, _, _)| *k).collect();
        assert_eq!(keys, FIELD_KEYS);
    }

    #[test]
    fn blank_template_parses_with_every_field_missing() {
        let doc = render_intel_template(None);
        let file: IntelToml = toml::from_str(&doc).expect("blank template is valid TOML");
        assert_eq!(missing_fields(&file.intel).len(), 8);
        assert!(matches!(
            parse_intel_toml(&doc),
            Err(IntelParseError::EmptyField("hungry_crowd"))
        ));
    }

    #[test]
    fn blank_template_lists_both_choices() {
        let doc = render_intel_template(None);
        assert!(doc.contains("\"Single-Target Assault\" (One avatar, one funnel)"));
        assert!(doc.contains("\"Multi-Avatar Domination\" (Three avatars, three funnels)"));
    }

    #[test]
    fn sample_template_is_valid_intel() {
        let doc = render_intel_template(Some(StrategicChoice::Multi));
        let intel = parse_intel_toml(&doc).expect("sample template should validate");
        assert_eq!(intel.strategic_choice, StrategicChoice::Multi);
        assert_eq!(intel.bait, "Free Brake Inspection + 10% Off Parts");
        assert_eq!(
            intel.burning_pain,
            "My brakes are grinding and I'm terrified of a $2,000 bill."
        );
    }
}
