//! Prompt text.
//!
//! All user-facing strings the evaluator generates live here so a
//! translation layer has one place to hook in.

use crate::steps::InvestigatorSelector;

pub const DIFFICULTY: &str = "Check campaign difficulty.";
pub const PLAYER_COUNT: &str = "How many players?";
pub const COMPLEX_CAMPAIGN_LOG: &str = "A more complex Campaign Log branch of some sort";

pub fn scenario_completed(scenario_name: &str) -> String {
    format!("Have you have already completed {scenario_name}?")
}

pub fn chaos_bag(tag: &str) -> String {
    format!("Check Chaos Bag: {tag}")
}

pub fn scenario_data(kind: &str) -> String {
    format!("Scenario Data: {kind}")
}

pub fn investigator_chosen(card_name: &str) -> String {
    format!("If {card_name} was chosen as an investigator for this campaign")
}

pub fn unknown_log_entry(section: &str, id: &str) -> String {
    format!("Unknown campaign log {section}.{id}")
}

pub fn log_text_entry(section: &str, text: &str) -> String {
    format!("Check {section}. <i>If {text}</i>")
}

pub fn log_card_entry(card_name: &str, section: &str) -> String {
    format!("Is {card_name} is listed under {section}?")
}

pub fn unknown_card(code: &str) -> String {
    format!("Unknown card {code}")
}

/// Question for a card-in-deck check.
///
/// Selectors that don't name a single check (`all`, `choice`,
/// `input_value`, unrecognized, or none) have no phrasing yet and
/// produce `""`.
pub fn has_card(card_name: &str, investigator: Option<InvestigatorSelector>) -> String {
    match investigator {
        Some(InvestigatorSelector::Any) => {
            format!("Does any investigator have {card_name} in their deck?")
        }
        Some(InvestigatorSelector::LeadInvestigator) => {
            format!("Does the lead investigator have {card_name} in their deck?")
        }
        Some(InvestigatorSelector::Defeated) => {
            format!("Was an investigator with {card_name} in their deck defeated?")
        }
        Some(InvestigatorSelector::All)
        | Some(InvestigatorSelector::Choice)
        | Some(InvestigatorSelector::InputValue)
        | Some(InvestigatorSelector::Unknown)
        | None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_card_phrasing() {
        let any = has_card("Lita Chantler", Some(InvestigatorSelector::Any));
        let lead = has_card("Lita Chantler", Some(InvestigatorSelector::LeadInvestigator));
        let defeated = has_card("Lita Chantler", Some(InvestigatorSelector::Defeated));

        assert_eq!(any, "Does any investigator have Lita Chantler in their deck?");
        assert_ne!(any, lead);
        assert_ne!(lead, defeated);
        assert!(has_card("Lita Chantler", Some(InvestigatorSelector::Choice)).is_empty());
        assert!(has_card("Lita Chantler", Some(InvestigatorSelector::Unknown)).is_empty());
        assert!(has_card("Lita Chantler", None).is_empty());
    }

    #[test]
    fn test_log_phrasing() {
        assert_eq!(unknown_log_entry("Foo", "42"), "Unknown campaign log Foo.42");
        assert_eq!(
            log_text_entry("Campaign Notes", "your house burned down."),
            "Check Campaign Notes. <i>If your house burned down.</i>"
        );
    }
}
