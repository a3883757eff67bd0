//! Interactive terminal entry point: survey form, classification, and
//! knowledge-base lookups.

mod display;
mod form;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use prepcheck_core::{
    KnowledgeBase, RecommendationPolicy, RegionMode, build_feature_vector, recommend,
};
use prepcheck_model::load_classifier;

#[derive(Debug, Parser)]
#[command(name = "prepcheck", about = "Household disaster-preparedness survey")]
struct Cli {
    /// Directory holding model.onnx, labels.json, and features.json.
    #[arg(long, env = "PREPCHECK_MODEL_DIR", default_value = "model")]
    model_dir: PathBuf,

    /// Region mapping mode: curated | universal.
    #[arg(long, env = "PREPCHECK_REGION_MODE", default_value = "universal")]
    region_mode: RegionMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Walk the survey interactively and classify the household.
    Assess,
    /// List the available states and union territories.
    States,
    /// List the disaster types applicable to a state.
    Disasters { state: String },
    /// Show the checklist template for a disaster type.
    Checklist { disaster_type: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let kb = KnowledgeBase::new(cli.region_mode);
    let stdout = std::io::stdout();

    match cli.command {
        Command::Assess => {
            let stdin = std::io::stdin();
            assess(&mut stdin.lock(), &mut stdout.lock(), &kb, &cli.model_dir)
        }
        Command::States => {
            let mut out = stdout.lock();
            for region in kb.regions() {
                writeln!(out, "{region}")?;
            }
            Ok(())
        }
        Command::Disasters { state } => {
            let mut out = stdout.lock();
            for disaster in kb.disaster_types_for_region(&state)? {
                writeln!(out, "{disaster}")?;
            }
            Ok(())
        }
        Command::Checklist { disaster_type } => {
            let mut out = stdout.lock();
            for item in kb.checklist_template(&disaster_type)? {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
    }
}

/// Run the survey, classify, and render the result card.
///
/// The form UI always shows the curated action list, independent of level.
fn assess<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    kb: &KnowledgeBase,
    model_dir: &std::path::Path,
) -> anyhow::Result<()> {
    let classifier = load_classifier(model_dir)
        .with_context(|| format!("loading classifier artifacts from {}", model_dir.display()))?;

    let answers = form::run_survey(input, out, kb)?;
    let features = build_feature_vector(&answers.profile, kb)?;
    let level = classifier.classify(&features).context("classifying household")?;
    info!(level = %level, "household classified");

    let assessment = display::Assessment {
        recommendations: recommend(
            kb,
            RecommendationPolicy::FixedActions,
            &answers.profile.disaster_type,
            &level,
        ),
        tips: kb.improvement_tips(&level).to_vec(),
        state: answers.state,
        disaster_type: answers.profile.disaster_type,
        completion_percent: features.completion_percent,
        awareness_score: features.awareness_score,
        level,
    };
    display::print_assessment(out, &assessment)?;

    Ok(())
}
