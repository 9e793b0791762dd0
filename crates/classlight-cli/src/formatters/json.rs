//! JSON formatter for highlight decisions.

use super::DecisionView;

pub struct JsonFormatter;

pub fn render_json(decisions: &[DecisionView]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(decisions)
}

pub fn print_json(decisions: &[DecisionView]) {
    match render_json(decisions) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing decisions: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classlight_core::{AncestryFacts, CandidateReference, Rgb, Section, TextRange};
    use classlight_rule_engine::{resolve_in, RuleDefinition, RuleSet};

    #[test]
    fn test_render_json_array() {
        let set = RuleSet::new(
            &[RuleDefinition::new("Java util", "java.util.", Rgb::new(0xFFF2CC))],
            [Section::FieldType],
        );
        let field = CandidateReference::type_reference("java.util.List")
            .with_facts(AncestryFacts {
                within_field: true,
                ..Default::default()
            })
            .with_range(TextRange::new(8, 32))
            .with_name_range(TextRange::new(18, 22));
        let local = CandidateReference::type_reference("java.util.Map");
        let views: Vec<DecisionView> = [field, local]
            .iter()
            .map(|reference| DecisionView::new(reference, &resolve_in(&set, reference)))
            .collect();

        let rendered = render_json(&views).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let decisions = json.as_array().unwrap();

        assert_eq!(decisions.len(), 2);
        assert_eq!(decisions[0]["highlighted"], true);
        assert_eq!(decisions[0]["section"], "FIELD_TYPE");
        assert_eq!(decisions[0]["display_range"], "name-only");
        assert_eq!(decisions[0]["range"]["start"], 18);
        assert_eq!(decisions[0]["rule"]["pattern"], "java.util.");
        assert_eq!(decisions[0]["rule"]["color"], "FFF2CC");
        assert_eq!(decisions[0]["rule"]["style"], "BACKGROUND");
        assert_eq!(decisions[0]["tooltip"], "Java util");
        assert_eq!(decisions[0]["attributes"]["background"], "FFF2CC");

        assert_eq!(decisions[1]["highlighted"], false);
        assert_eq!(decisions[1]["section"], "OTHER");
        assert!(decisions[1].get("rule").is_none());
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
