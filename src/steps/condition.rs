//! Branch conditions.
//!
//! A branch step carries exactly one condition describing what the
//! players have to check. Conditions arrive from the guide data tagged
//! by `"type"`; tags this crate doesn't model are kept as
//! [`Condition::Unknown`] so the guide can still show something for them.

use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::core::CardCode;

/// Which investigator(s) a card condition applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestigatorSelector {
    /// Any investigator in the campaign.
    Any,
    /// Every investigator.
    All,
    /// The lead investigator.
    LeadInvestigator,
    /// An investigator who was defeated.
    Defeated,
    /// An investigator chosen by the players.
    Choice,
    /// An investigator named by an earlier input.
    InputValue,
    /// A selector this crate doesn't model.
    #[serde(other)]
    Unknown,
}

/// Check against the campaign log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignLogCondition {
    /// Log section to look in.
    pub section: String,

    /// Entry within the section. Absent when the whole section is checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Check against campaign-wide data.
///
/// Serialized flat next to the condition's `"type"`, keyed by
/// `"campaign_data"`. Kinds other than the three modeled ones are kept
/// verbatim in [`CampaignDataCondition::Other`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampaignDataCondition {
    /// Campaign difficulty level.
    Difficulty,
    /// Whether a scenario has been completed.
    ScenarioCompleted {
        /// Scenario code.
        scenario: String,
    },
    /// Chaos bag contents.
    ChaosBag,
    /// Anything else (`"scenario_replayed"`, ...).
    Other(String),
}

impl CampaignDataCondition {
    /// The raw `campaign_data` tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            CampaignDataCondition::Difficulty => "difficulty",
            CampaignDataCondition::ScenarioCompleted { .. } => "scenario_completed",
            CampaignDataCondition::ChaosBag => "chaos_bag",
            CampaignDataCondition::Other(kind) => kind,
        }
    }
}

/// Wire form of [`CampaignDataCondition`].
#[derive(Deserialize)]
struct RawCampaignData {
    campaign_data: String,
    #[serde(default)]
    scenario: Option<String>,
}

#[derive(Serialize)]
struct RawCampaignDataRef<'a> {
    campaign_data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<&'a str>,
}

impl<'de> Deserialize<'de> for CampaignDataCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawCampaignData::deserialize(deserializer)?;
        Ok(match raw.campaign_data.as_str() {
            "difficulty" => CampaignDataCondition::Difficulty,
            "scenario_completed" => CampaignDataCondition::ScenarioCompleted {
                scenario: raw.scenario.ok_or_else(|| D::Error::missing_field("scenario"))?,
            },
            "chaos_bag" => CampaignDataCondition::ChaosBag,
            _ => CampaignDataCondition::Other(raw.campaign_data),
        })
    }
}

impl Serialize for CampaignDataCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let scenario = match self {
            CampaignDataCondition::ScenarioCompleted { scenario } => Some(scenario.as_str()),
            _ => None,
        };
        RawCampaignDataRef {
            campaign_data: self.tag(),
            scenario,
        }
        .serialize(serializer)
    }
}

/// Kind of scenario data a condition checks.
///
/// Kinds other than player count and investigator are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScenarioDataKind {
    /// Number of players.
    PlayerCount,
    /// Which investigators were chosen.
    Investigator,
    /// Anything else (`"resolution"`, ...).
    Other(String),
}

impl ScenarioDataKind {
    /// The raw `scenario_data` tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ScenarioDataKind::PlayerCount => "player_count",
            ScenarioDataKind::Investigator => "investigator",
            ScenarioDataKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ScenarioDataKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "player_count" => ScenarioDataKind::PlayerCount,
            "investigator" => ScenarioDataKind::Investigator,
            _ => ScenarioDataKind::Other(kind),
        }
    }
}

impl From<ScenarioDataKind> for String {
    fn from(kind: ScenarioDataKind) -> Self {
        match kind {
            ScenarioDataKind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ScenarioDataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check against the current scenario's setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDataCondition {
    /// What to check.
    pub scenario_data: ScenarioDataKind,
}

/// Check whether an investigator has a card in their deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCondition {
    /// Card to look for.
    pub card: CardCode,

    /// Which investigator(s) the check is about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investigator: Option<InvestigatorSelector>,
}

/// A branch condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// `campaign_log`
    CampaignLog(CampaignLogCondition),
    /// `campaign_data`
    CampaignData(CampaignDataCondition),
    /// `scenario_data`
    ScenarioData(ScenarioDataCondition),
    /// `has_card`
    HasCard(CardCondition),
    /// Any other tag, kept verbatim.
    Unknown {
        /// The raw `"type"` value.
        type_tag: String,
    },
}

impl Condition {
    /// Create a campaign log entry condition.
    pub fn campaign_log(section: impl Into<String>, id: impl Into<String>) -> Self {
        Self::CampaignLog(CampaignLogCondition {
            section: section.into(),
            id: Some(id.into()),
        })
    }

    /// Create a condition on a whole campaign log section.
    pub fn campaign_log_section(section: impl Into<String>) -> Self {
        Self::CampaignLog(CampaignLogCondition {
            section: section.into(),
            id: None,
        })
    }

    /// Create a scenario-completed condition.
    pub fn scenario_completed(scenario: impl Into<String>) -> Self {
        Self::CampaignData(CampaignDataCondition::ScenarioCompleted {
            scenario: scenario.into(),
        })
    }

    /// Create a scenario data condition.
    pub fn scenario_data(kind: ScenarioDataKind) -> Self {
        Self::ScenarioData(ScenarioDataCondition { scenario_data: kind })
    }

    /// Create a card ownership condition.
    pub fn has_card(card: impl Into<String>, investigator: Option<InvestigatorSelector>) -> Self {
        Self::HasCard(CardCondition {
            card: CardCode::new(card),
            investigator,
        })
    }

    /// Create a condition with an unrecognized tag.
    pub fn unknown(type_tag: impl Into<String>) -> Self {
        Self::Unknown {
            type_tag: type_tag.into(),
        }
    }

    /// The raw `"type"` tag.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        match self {
            Condition::CampaignLog(_) => "campaign_log",
            Condition::CampaignData(_) => "campaign_data",
            Condition::ScenarioData(_) => "scenario_data",
            Condition::HasCard(_) => "has_card",
            Condition::Unknown { type_tag } => type_tag,
        }
    }
}

/// Wire form of the recognized conditions.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedCondition {
    CampaignLog(CampaignLogCondition),
    CampaignData(CampaignDataCondition),
    ScenarioData(ScenarioDataCondition),
    HasCard(CardCondition),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedConditionRef<'a> {
    CampaignLog(&'a CampaignLogCondition),
    CampaignData(&'a CampaignDataCondition),
    ScenarioData(&'a ScenarioDataCondition),
    HasCard(&'a CardCondition),
}

const KNOWN_TAGS: [&str; 4] = ["campaign_log", "campaign_data", "scenario_data", "has_card"];

/// Reads the input into a `serde_json::Value` first so an unknown `"type"`
/// can be kept without failing. This works with any self-describing
/// format, but goes through JSON's data model (e.g. map keys must be
/// strings).
impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| D::Error::missing_field("type"))?;

        if !KNOWN_TAGS.contains(&tag) {
            return Ok(Condition::unknown(tag));
        }

        let tagged: TaggedCondition = serde_json::from_value(value).map_err(D::Error::custom)?;
        Ok(match tagged {
            TaggedCondition::CampaignLog(c) => Condition::CampaignLog(c),
            TaggedCondition::CampaignData(c) => Condition::CampaignData(c),
            TaggedCondition::ScenarioData(c) => Condition::ScenarioData(c),
            TaggedCondition::HasCard(c) => Condition::HasCard(c),
        })
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tagged = match self {
            Condition::CampaignLog(c) => TaggedConditionRef::CampaignLog(c),
            Condition::CampaignData(c) => TaggedConditionRef::CampaignData(c),
            Condition::ScenarioData(c) => TaggedConditionRef::ScenarioData(c),
            Condition::HasCard(c) => TaggedConditionRef::HasCard(c),
            Condition::Unknown { type_tag } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", type_tag)?;
                return map.end();
            }
        };
        tagged.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Condition {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_campaign_log() {
        let condition = parse(r#"{"type": "campaign_log", "section": "campaign_notes", "id": "house_burned"}"#);
        assert_eq!(condition, Condition::campaign_log("campaign_notes", "house_burned"));

        let section_only = parse(r#"{"type": "campaign_log", "section": "campaign_notes"}"#);
        assert_eq!(section_only, Condition::campaign_log_section("campaign_notes"));
    }

    #[test]
    fn test_parse_campaign_data() {
        let condition = parse(
            r#"{"type": "campaign_data", "campaign_data": "scenario_completed", "scenario": "the_gathering"}"#,
        );
        assert_eq!(condition, Condition::scenario_completed("the_gathering"));

        let difficulty = parse(r#"{"type": "campaign_data", "campaign_data": "difficulty"}"#);
        assert_eq!(
            difficulty,
            Condition::CampaignData(CampaignDataCondition::Difficulty)
        );
    }

    #[test]
    fn test_parse_scenario_data() {
        let count = parse(r#"{"type": "scenario_data", "scenario_data": "player_count"}"#);
        assert_eq!(count, Condition::scenario_data(ScenarioDataKind::PlayerCount));

        let other = parse(r#"{"type": "scenario_data", "scenario_data": "resolution"}"#);
        assert_eq!(
            other,
            Condition::scenario_data(ScenarioDataKind::Other("resolution".to_string()))
        );
    }

    #[test]
    fn test_parse_has_card() {
        let condition = parse(r#"{"type": "has_card", "card": "01117", "investigator": "lead_investigator"}"#);
        assert_eq!(
            condition,
            Condition::has_card("01117", Some(InvestigatorSelector::LeadInvestigator))
        );
    }

    #[test]
    fn test_parse_unknown_tag() {
        let condition = parse(r#"{"type": "math", "operation": "sum"}"#);
        assert_eq!(condition, Condition::unknown("math"));
        assert_eq!(condition.type_tag(), "math");
    }

    #[test]
    fn test_parse_unknown_campaign_data() {
        let condition = parse(r#"{"type": "campaign_data", "campaign_data": "scenario_replayed"}"#);
        assert_eq!(
            condition,
            Condition::CampaignData(CampaignDataCondition::Other("scenario_replayed".to_string()))
        );

        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "campaign_data", "campaign_data": "scenario_replayed"})
        );
    }

    #[test]
    fn test_scenario_completed_needs_scenario() {
        let result = serde_json::from_str::<Condition>(
            r#"{"type": "campaign_data", "campaign_data": "scenario_completed"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_investigator() {
        let condition = parse(r#"{"type": "has_card", "card": "01117", "investigator": "resigned"}"#);
        assert_eq!(
            condition,
            Condition::has_card("01117", Some(InvestigatorSelector::Unknown))
        );
    }

    #[test]
    fn test_parse_from_value() {
        let value = serde_json::json!({"type": "math", "operation": "sum"});
        let condition = Condition::deserialize(value).unwrap();
        assert_eq!(condition, Condition::unknown("math"));
    }

    #[test]
    fn test_missing_type_is_error() {
        let result = serde_json::from_str::<Condition>(r#"{"section": "campaign_notes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_known_tag_with_bad_fields_is_error() {
        let result = serde_json::from_str::<Condition>(r#"{"type": "has_card"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_shapes() {
        let value = serde_json::to_value(Condition::scenario_completed("the_gathering")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "campaign_data",
                "campaign_data": "scenario_completed",
                "scenario": "the_gathering",
            })
        );

        let value = serde_json::to_value(Condition::unknown("math")).unwrap();
        assert_eq!(value, serde_json::json!({"type": "math"}));
    }

    #[test]
    fn test_condition_serialization() {
        let condition = Condition::has_card("01117", Some(InvestigatorSelector::Defeated));
        let json = serde_json::to_string(&condition).unwrap();
        let deserialized: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(condition, deserialized);
    }
}
