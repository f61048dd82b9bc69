use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use serde_json::json;

use arkham_guide::{
    BranchEvaluator, BranchStep, CampaignGuide, CardRegistry, EvalContext, EvaluatorConfig,
    Evaluation, StepId,
};

/// Print the prompt each branch step of a campaign guide would show.
#[derive(Parser, Debug)]
#[command(name = "guide-eval", version)]
struct Args {
    /// Guide JSON file (scenarios, campaign_log, steps)
    #[arg(long)]
    guide: PathBuf,

    /// Card JSON file (array of cards)
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Only evaluate this step
    #[arg(long)]
    step: Option<String>,

    /// Taboo list applied to card lookups
    #[arg(long)]
    taboo: Option<u32>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Control verbosity with RUST_LOG:
    //   RUST_LOG=warn   unresolved scenarios, log entries, cards
    //   RUST_LOG=debug  + dispatch decisions and option-set problems
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let guide_json = fs::read_to_string(&args.guide)
        .with_context(|| format!("failed to read {}", args.guide.display()))?;
    let guide = CampaignGuide::from_json(&guide_json).context("failed to load guide")?;

    let cards = match &args.cards {
        Some(path) => {
            let cards_json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            CardRegistry::from_json(&cards_json).context("failed to load cards")?
        }
        None => CardRegistry::new(),
    };
    info!("loaded {} steps, {} cards", guide.step_count(), cards.len());

    let mut config = EvaluatorConfig::new();
    if let Some(taboo) = args.taboo {
        config = config.with_taboo(taboo);
    }
    let ctx = EvalContext::new(&guide, &cards).with_config(config);

    let steps = select_steps(&guide, args.step.as_deref())
        .with_context(|| format!("bad --step for {}", args.guide.display()))?;

    for step in steps {
        let eval = BranchEvaluator::evaluate_with_diagnostics(step, &ctx);
        println!("{}", render_line(step, &eval, args.pretty)?);
    }

    Ok(())
}

/// Steps to evaluate: the named one, or every step in guide order.
fn select_steps<'g>(guide: &'g CampaignGuide, only: Option<&str>) -> Result<Vec<&'g BranchStep>> {
    match only {
        Some(id) => match guide.step(&StepId::new(id)) {
            Some(step) => Ok(vec![step]),
            None => bail!("no step {id}"),
        },
        None => Ok(guide.steps().collect()),
    }
}

/// One output line: `{"step", "prompt", "issues"}`.
fn render_line(step: &BranchStep, eval: &Evaluation, pretty: bool) -> Result<String> {
    let line = json!({
        "step": step.id,
        "prompt": eval.prompt,
        "issues": eval.issues,
    });
    let out = if pretty {
        serde_json::to_string_pretty(&line)?
    } else {
        serde_json::to_string(&line)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUIDE: &str = r#"{
        "scenarios": [{"code": "the_gathering", "scenario_name": "The Gathering"}],
        "steps": [
            {"id": "difficulty", "condition": {"type": "campaign_data", "campaign_data": "difficulty"}},
            {"id": "tally", "condition": {"type": "math"}}
        ]
    }"#;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "guide-eval", "--guide", "g.json", "--step", "tally", "--taboo", "2", "--pretty",
        ])
        .unwrap();
        assert_eq!(args.guide, PathBuf::from("g.json"));
        assert_eq!(args.step.as_deref(), Some("tally"));
        assert_eq!(args.taboo, Some(2));
        assert!(args.pretty);
        assert!(args.cards.is_none());

        assert!(Args::try_parse_from(["guide-eval"]).is_err());
    }

    #[test]
    fn test_select_all_steps_in_order() {
        let guide = CampaignGuide::from_json(GUIDE).unwrap();
        let ids: Vec<&str> = select_steps(&guide, None)
            .unwrap()
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["difficulty", "tally"]);
    }

    #[test]
    fn test_select_named_step() {
        let guide = CampaignGuide::from_json(GUIDE).unwrap();
        let steps = select_steps(&guide, Some("tally")).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].id.as_str(), "tally");
    }

    #[test]
    fn test_select_unknown_step_fails() {
        let guide = CampaignGuide::from_json(GUIDE).unwrap();
        let err = select_steps(&guide, Some("nowhere")).unwrap_err();
        assert_eq!(err.to_string(), "no step nowhere");
    }

    #[test]
    fn test_render_line() {
        let guide = CampaignGuide::from_json(GUIDE).unwrap();
        let cards = CardRegistry::new();
        let ctx = EvalContext::new(&guide, &cards);
        let step = guide.step(&StepId::new("tally")).unwrap();
        let eval = BranchEvaluator::evaluate_with_diagnostics(step, &ctx);

        let line = render_line(step, &eval, false).unwrap();
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["step"], "tally");
        assert_eq!(value["prompt"]["kind"], "info");
        assert_eq!(value["prompt"]["text"], "math");
        assert_eq!(value["issues"], serde_json::json!([]));

        assert!(render_line(step, &eval, true).unwrap().contains('\n'));
    }
}
