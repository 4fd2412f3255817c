//! One component's transform: parse, inject the import, apply modifications
//! in order, emit.
//!
//! Each call owns its tree; a [`Transformer`] holds only configuration and a
//! parser frontend, so one instance can serve many threads.

use forge_core::config::TransformConfig;
use forge_core::errors::ParseError;
use forge_core::models::{CodeModification, CustomizationBundle};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::emitter::emit;
use crate::locator::Locator;
use crate::mutator::{self, ensure_import};
use crate::parser::{SourceParser, TsxParser};
use crate::report::{ReportEntry, TransformReport};
use crate::tree::SyntaxTree;

/// Lifecycle of a single component transform.
///
/// `Parsed` and `Mutating` are transient; a finished transform ends in
/// `Emitted` or `PartiallyApplied`, and a parse failure ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformState {
    Parsed,
    Mutating,
    Emitted,
    PartiallyApplied,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    pub text: String,
    pub report: TransformReport,
    pub state: TransformState,
}

impl TransformOutput {
    pub fn is_partial(&self) -> bool {
        self.state == TransformState::PartiallyApplied
    }
}

pub struct Transformer<P: SourceParser = TsxParser> {
    parser: P,
    config: TransformConfig,
    class_attributes: Vec<String>,
}

impl Transformer<TsxParser> {
    pub fn new(config: TransformConfig) -> Self {
        Self::with_parser(TsxParser::new(), config)
    }
}

impl Default for Transformer<TsxParser> {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

impl<P: SourceParser> Transformer<P> {
    pub fn with_parser(parser: P, config: TransformConfig) -> Self {
        let class_attributes = config.effective_class_attributes();
        Self {
            parser,
            config,
            class_attributes,
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform one component. Fails only when the source does not parse;
    /// every other problem is recorded in the report.
    pub fn transform(
        &self,
        source: &str,
        bundle: &CustomizationBundle,
    ) -> Result<TransformOutput, ParseError> {
        let mut tree = match self.parser.parse(source) {
            Ok(tree) => tree,
            Err(error) => {
                warn!(state = ?TransformState::Failed, %error, "component source failed to parse");
                return Err(error);
            }
        };
        debug!(state = ?TransformState::Parsed, nodes = tree.len(), "parsed component");

        let mut report = TransformReport::default();
        debug!(
            state = ?TransformState::Mutating,
            modifications = bundle.code_modifications.len(),
            "applying bundle"
        );
        if bundle.needs_motion_import() {
            let outcome = ensure_import(&mut tree, &self.config);
            debug!(?outcome, library = self.config.effective_animation_library(), "import injection");
            report.import = Some(outcome);
        }
        let modifications = &bundle.code_modifications;
        for (index, modification) in modifications.iter().enumerate() {
            let later: Vec<&CodeModification> = modifications[index + 1..].iter().collect();
            self.apply_modification(&mut tree, index, modification, &later, &mut report);
        }

        let text = emit(&tree);
        let state = if report.has_unsupported() {
            TransformState::PartiallyApplied
        } else {
            TransformState::Emitted
        };
        let summary = report.summary();
        info!(
            ?state,
            applied = summary.applied,
            already_present = summary.already_present,
            unmatched = summary.unmatched,
            unsupported = summary.unsupported,
            "component transformed"
        );
        Ok(TransformOutput {
            text,
            report,
            state,
        })
    }

    /// Locate every match first, then mutate each. Node ids stay valid
    /// across edits, so later points are unaffected by earlier ones.
    ///
    /// Wrappers that a `later` wrap-element would create are not matched,
    /// so a rerun over already transformed output sees what the first run
    /// saw.
    fn apply_modification(
        &self,
        tree: &mut SyntaxTree,
        index: usize,
        modification: &CodeModification,
        later: &[&CodeModification],
        report: &mut TransformReport,
    ) {
        let points =
            Locator::new(tree, &self.class_attributes).locate_before(modification, later);
        debug!(
            index,
            action = %modification.action,
            target = %modification.target,
            matches = points.len(),
            "applying modification"
        );
        if points.is_empty() {
            report.push(ReportEntry::unmatched(index, modification));
            return;
        }
        for point in &points {
            let outcome = mutator::apply(tree, point, modification, &self.config);
            if outcome.is_unsupported() {
                warn!(
                    index,
                    action = %modification.action,
                    element = point.tag().map(|t| t.name.as_str()).unwrap_or_default(),
                    %outcome,
                    "modification skipped"
                );
            }
            report.push(ReportEntry::matched(index, modification, point, outcome));
        }
    }
}

/// Transform one component with the default TSX frontend.
pub fn transform(
    source: &str,
    bundle: &CustomizationBundle,
    config: &TransformConfig,
) -> Result<TransformOutput, ParseError> {
    Transformer::new(config.clone()).transform(source, bundle)
}
