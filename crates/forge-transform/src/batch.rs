//! Parallel transform of many components.

use forge_core::config::TransformConfig;
use forge_core::errors::ParseError;
use forge_core::models::CustomizationBundle;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::orchestrator::{TransformOutput, TransformState, Transformer};

/// One component to transform.
#[derive(Debug, Clone)]
pub struct ComponentJob {
    pub name: String,
    pub source: String,
    pub bundle: CustomizationBundle,
}

impl ComponentJob {
    pub fn new(name: impl Into<String>, source: impl Into<String>, bundle: CustomizationBundle) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            bundle,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComponentResult {
    pub name: String,
    pub outcome: Result<TransformOutput, ParseError>,
}

impl ComponentResult {
    pub fn state(&self) -> TransformState {
        match &self.outcome {
            Ok(output) => output.state,
            Err(_) => TransformState::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub components: usize,
    pub emitted: usize,
    pub partially_applied: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[ComponentResult]) -> Self {
        let mut summary = Self {
            components: results.len(),
            ..Self::default()
        };
        for result in results {
            match result.state() {
                TransformState::PartiallyApplied => summary.partially_applied += 1,
                TransformState::Failed => summary.failed += 1,
                _ => summary.emitted += 1,
            }
        }
        summary
    }
}

/// Transform every job in parallel. Each job parses into its own tree; a
/// parse failure is recorded for that component only. Results keep the
/// order of `jobs`.
pub fn transform_batch(jobs: &[ComponentJob], config: &TransformConfig) -> Vec<ComponentResult> {
    let transformer = Transformer::new(config.clone());
    let results: Vec<ComponentResult> = jobs
        .par_iter()
        .map(|job| ComponentResult {
            name: job.name.clone(),
            outcome: transformer.transform(&job.source, &job.bundle),
        })
        .collect();

    let summary = BatchSummary::from_results(&results);
    info!(
        components = summary.components,
        emitted = summary.emitted,
        partially_applied = summary.partially_applied,
        failed = summary.failed,
        "batch transformed"
    );
    results
}
