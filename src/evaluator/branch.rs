//! Branch step evaluation.
//!
//! Turns a branch step into a [`PromptDescriptor`] by dispatching on its
//! condition. Evaluation is pure: it only reads the step and the lookup
//! services, so it can be re-run on every render.

use log::{debug, warn};

use crate::cards::{Card, CardLookup, CardResolution};
use crate::core::{CardCode, EvaluatorConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::guide::{CampaignGuideLookup, LogEntry};
use crate::steps::{
    BranchOption, BranchStep, CampaignDataCondition, CampaignLogCondition, CardCondition, Condition,
    ScenarioDataCondition, ScenarioDataKind,
};

use super::issue::EvalIssue;
use super::phrasing;
use super::prompt::PromptDescriptor;

/// Services and settings for evaluating steps.
pub struct EvalContext<'a> {
    /// Scenario and campaign log definitions.
    pub guide: &'a dyn CampaignGuideLookup,
    /// Card database.
    pub cards: &'a dyn CardLookup,
    /// Lookup settings.
    pub config: EvaluatorConfig,
}

impl<'a> EvalContext<'a> {
    /// Create a context with the default config.
    pub fn new(guide: &'a dyn CampaignGuideLookup, cards: &'a dyn CardLookup) -> Self {
        Self {
            guide,
            cards,
            config: EvaluatorConfig::default(),
        }
    }

    /// Replace the config.
    #[must_use]
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }
}

/// A prompt plus the problems recovered while building it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub prompt: PromptDescriptor,
    pub issues: Vec<EvalIssue>,
}

impl Evaluation {
    /// Check if evaluation hit no problems.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Evaluator for branch steps.
///
/// ## Example
///
/// ```
/// use arkham_guide::cards::CardRegistry;
/// use arkham_guide::evaluator::{BranchEvaluator, EvalContext, PromptDescriptor};
/// use arkham_guide::guide::{CampaignGuide, ScenarioInfo};
/// use arkham_guide::steps::{BranchOption, BranchStep, Condition};
///
/// let guide = CampaignGuide::new()
///     .with_scenario(ScenarioInfo::new("S1", "The Gathering"))
///     .unwrap();
/// let cards = CardRegistry::new();
/// let ctx = EvalContext::new(&guide, &cards);
///
/// let step = BranchStep::new("done_gathering", Condition::scenario_completed("S1"))
///     .with_option(BranchOption::when(true))
///     .with_option(BranchOption::when(false));
///
/// let prompt = BranchEvaluator::evaluate(&step, &ctx);
/// assert_eq!(prompt.text(), Some("Have you have already completed The Gathering?"));
/// ```
pub struct BranchEvaluator;

impl BranchEvaluator {
    /// Build the prompt for a step.
    ///
    /// Never fails: unresolved references and awkward option sets fall
    /// back to informational text or empty result slots.
    pub fn evaluate(step: &BranchStep, ctx: &EvalContext) -> PromptDescriptor {
        Self::evaluate_with_diagnostics(step, ctx).prompt
    }

    /// Build the prompt for a step and report recovered problems.
    pub fn evaluate_with_diagnostics(step: &BranchStep, ctx: &EvalContext) -> Evaluation {
        debug!("step {}: {} condition", step.id, step.condition.type_tag());

        let mut pass = StepPass {
            step,
            ctx,
            issues: Vec::new(),
        };
        let prompt = pass.run();

        for issue in &pass.issues {
            if issue.is_unresolved_reference() {
                warn!("step {}: {}", step.id, issue);
            } else {
                debug!("step {}: {}", step.id, issue);
            }
        }

        Evaluation {
            prompt,
            issues: pass.issues,
        }
    }
}

/// State for a single evaluation.
struct StepPass<'s, 'c> {
    step: &'s BranchStep,
    ctx: &'s EvalContext<'c>,
    issues: Vec<EvalIssue>,
}

impl<'s> StepPass<'s, '_> {
    fn run(&mut self) -> PromptDescriptor {
        match &self.step.condition {
            Condition::CampaignLog(condition) => self.campaign_log(condition),
            Condition::CampaignData(condition) => self.campaign_data(condition),
            Condition::ScenarioData(condition) => self.scenario_data(condition),
            Condition::HasCard(condition) => self.has_card(condition),
            Condition::Unknown { type_tag } => PromptDescriptor::info(type_tag.clone()),
        }
    }

    fn campaign_data(&mut self, condition: &CampaignDataCondition) -> PromptDescriptor {
        match condition {
            CampaignDataCondition::Difficulty => PromptDescriptor::info(phrasing::DIFFICULTY),
            CampaignDataCondition::ScenarioCompleted { scenario } => {
                let name = match self.ctx.guide.scenario(scenario) {
                    Some(info) => info.scenario_name.as_str(),
                    None => {
                        self.issues.push(EvalIssue::UnresolvedScenario {
                            code: scenario.clone(),
                        });
                        scenario.as_str()
                    }
                };
                let text = phrasing::scenario_completed(name);
                self.bool_prompt(text)
            }
            CampaignDataCondition::ChaosBag => {
                PromptDescriptor::info(phrasing::chaos_bag(condition.tag()))
            }
            CampaignDataCondition::Other(kind) => PromptDescriptor::info(kind.clone()),
        }
    }

    fn scenario_data(&mut self, condition: &ScenarioDataCondition) -> PromptDescriptor {
        match &condition.scenario_data {
            ScenarioDataKind::PlayerCount => PromptDescriptor::Numeric {
                step_id: self.step.id.clone(),
                prompt: phrasing::PLAYER_COUNT.to_string(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                options: self.step.options.clone(),
            },
            ScenarioDataKind::Investigator => match self.single_card_option() {
                Some(code) => {
                    let card = match self.resolve_card(code) {
                        Ok(card) => card,
                        Err(fallback) => return fallback,
                    };
                    self.investigator_prompt(&card)
                }
                None => PromptDescriptor::info(phrasing::scenario_data(
                    condition.scenario_data.as_str(),
                )),
            },
            ScenarioDataKind::Other(kind) => PromptDescriptor::info(phrasing::scenario_data(kind)),
        }
    }

    fn campaign_log(&mut self, condition: &CampaignLogCondition) -> PromptDescriptor {
        // Only all-yes/no option sets are handled; anything else falls
        // through to the placeholder.
        if self.step.has_binary_options() {
            if let Some(id) = &condition.id {
                return self.campaign_log_entry(&condition.section, id);
            }
        }
        PromptDescriptor::info(phrasing::COMPLEX_CAMPAIGN_LOG)
    }

    fn campaign_log_entry(&mut self, section: &str, id: &str) -> PromptDescriptor {
        let Some(entry) = self.ctx.guide.log_entry(section, id) else {
            self.issues.push(EvalIssue::UnresolvedLogEntry {
                section: section.to_string(),
                id: id.to_string(),
            });
            return PromptDescriptor::info(phrasing::unknown_log_entry(section, id));
        };

        match entry {
            LogEntry::Text { section, text, .. } => {
                let prompt = self
                    .step
                    .text
                    .clone()
                    .unwrap_or_else(|| phrasing::log_text_entry(section, text));
                self.bool_prompt(prompt)
            }
            LogEntry::Card { section, code, .. } => {
                let card = match self.resolve_card(code) {
                    Ok(card) => card,
                    Err(fallback) => return fallback,
                };
                let prompt = self
                    .step
                    .text
                    .clone()
                    .unwrap_or_else(|| phrasing::log_card_entry(&card.name, section));
                self.bool_prompt(prompt)
            }
        }
    }

    fn has_card(&mut self, condition: &CardCondition) -> PromptDescriptor {
        let card = match self.resolve_card(&condition.card) {
            Ok(card) => card,
            Err(fallback) => return fallback,
        };
        let text = phrasing::has_card(&card.display_name(), condition.investigator);
        self.bool_prompt(text)
    }

    /// The card code of the only option that carries one.
    fn single_card_option(&self) -> Option<&'s CardCode> {
        let step: &'s BranchStep = self.step;
        let mut codes = step.options.iter().filter_map(|o| o.condition.as_ref());
        match (codes.next(), codes.next()) {
            (Some(code), None) => Some(code),
            _ => None,
        }
    }

    fn resolve_card(&mut self, code: &CardCode) -> Result<Card, PromptDescriptor> {
        let config = &self.ctx.config;
        match self.ctx.cards.card(code, config.card_kind, config.taboo_id) {
            CardResolution::Found(card) => Ok(card),
            CardResolution::Pending => {
                debug!("step {}: card {} pending", self.step.id, code);
                Err(PromptDescriptor::Pending { code: code.clone() })
            }
            CardResolution::Missing => {
                self.issues
                    .push(EvalIssue::UnresolvedCard { code: code.clone() });
                Err(PromptDescriptor::info(phrasing::unknown_card(code.as_str())))
            }
        }
    }

    /// Yes/no prompt whose slots are the first options tagged true and false.
    fn bool_prompt(&mut self, text: String) -> PromptDescriptor {
        for value in [true, false] {
            let matching = self
                .step
                .options
                .iter()
                .filter(|o| o.bool_condition == Some(value))
                .count();
            if matching > 1 {
                self.issues.push(EvalIssue::DuplicateBoolOption { value });
            }
        }

        let true_option = self.step.bool_option(true).cloned();
        let false_option = self.step.bool_option(false).cloned();
        self.binary(text, true_option, false_option)
    }

    /// Yes/no prompt for "was this investigator chosen".
    fn investigator_prompt(&mut self, card: &Card) -> PromptDescriptor {
        let text = phrasing::investigator_chosen(&card.name);
        let true_option = self.step.card_option(&card.code).cloned();
        let false_option = self.step.default_option().cloned();
        self.binary(text, true_option, false_option)
    }

    fn binary(
        &mut self,
        text: String,
        true_option: Option<BranchOption>,
        false_option: Option<BranchOption>,
    ) -> PromptDescriptor {
        if true_option.is_none() {
            self.issues.push(EvalIssue::MissingTrueOption);
        }
        if false_option.is_none() {
            self.issues.push(EvalIssue::MissingFalseOption);
        }
        PromptDescriptor::Binary {
            step_id: self.step.id.clone(),
            text,
            true_option,
            false_option,
        }
    }
}
