//! Summary → hypotheses → validation results.

use std::path::PathBuf;
use std::sync::Arc;

use adsight_evaluation::{EvaluationReport, Evaluator};
use adsight_ingestion::{load_hypotheses, load_records, load_summary, SummaryBuilder};
use adsight_insight::HypothesisGenerator;
use adsight_types::{AnalysisConfig, Hypothesis, MetricAggregate, Summary};
use serde::Serialize;
use tracing::info;

use crate::error::CliResult;

/// Where the metrics come from.
#[derive(Debug, Clone)]
pub enum Input {
    /// Raw ad rows, summarized here.
    Records(PathBuf),
    /// A summary built elsewhere.
    Summary(PathBuf),
}

/// Everything one run produces.
#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub totals: MetricAggregate,
    pub daily_points: usize,
    pub hypotheses: Vec<Hypothesis>,
    pub report: EvaluationReport,
}

pub fn read_summary(input: &Input, config: &AnalysisConfig) -> CliResult<Summary> {
    match input {
        Input::Records(path) => {
            let records = load_records(path)?;
            Ok(SummaryBuilder::from_config(config).build(&records)?)
        }
        Input::Summary(path) => Ok(load_summary(path)?),
    }
}

/// Caller-supplied hypotheses, or the generator's when none are given.
pub fn read_or_generate(
    hypotheses: Option<&PathBuf>,
    summary: &Summary,
    config: &AnalysisConfig,
) -> CliResult<Vec<Hypothesis>> {
    match hypotheses {
        Some(path) => Ok(load_hypotheses(path)?),
        None => Ok(HypothesisGenerator::new(config.clone()).generate(summary)),
    }
}

pub async fn evaluate(
    hypotheses: Vec<Hypothesis>,
    summary: Summary,
    config: &AnalysisConfig,
    concurrent: bool,
) -> RunOutput {
    let evaluator = Evaluator::new(config.clone());
    let totals = summary.totals;
    let daily_points = summary.daily_len();

    let results = if concurrent {
        let shared: Arc<[Hypothesis]> = hypotheses.clone().into();
        Arc::new(evaluator)
            .validate_concurrent(shared, Arc::new(summary))
            .await
    } else {
        evaluator.validate(&hypotheses, &summary)
    };

    let report = EvaluationReport::summarize(results);
    info!(
        hypotheses = report.counts.total,
        validated = report.counts.validated,
        skipped = report.counts.skipped,
        failed = report.counts.failed,
        "run complete"
    );
    RunOutput {
        totals,
        daily_points,
        hypotheses,
        report,
    }
}
