//! Per-modification transform report.

use forge_core::models::{CodeModification, ModificationAction};
use serde::Serialize;

use crate::locator::InsertionPoint;
use crate::mutator::{ImportOutcome, MutationOutcome};
use crate::tree::Position;

/// One modification applied to one matched element, or a modification that
/// matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// Index of the modification in the bundle's `codeModifications`.
    pub modification_index: usize,
    pub action: ModificationAction,
    pub target: String,
    pub outcome: MutationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl ReportEntry {
    pub fn matched(
        index: usize,
        modification: &CodeModification,
        point: &InsertionPoint,
        outcome: MutationOutcome,
    ) -> Self {
        let tag = point.tag();
        Self {
            modification_index: index,
            action: modification.action,
            target: modification.target.clone(),
            outcome,
            element: tag.map(|t| t.name.clone()),
            position: tag.and_then(|t| t.position),
        }
    }

    pub fn unmatched(index: usize, modification: &CodeModification) -> Self {
        Self {
            modification_index: index,
            action: modification.action,
            target: modification.target.clone(),
            outcome: MutationOutcome::NoTargetMatched,
            element: None,
            position: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReport {
    /// Set when the bundle required the animation import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportOutcome>,
    pub entries: Vec<ReportEntry>,
}

/// Outcome counts over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub applied: usize,
    pub already_present: usize,
    pub unmatched: usize,
    pub unsupported: usize,
}

impl TransformReport {
    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Entries produced by the modification at `index`.
    pub fn entries_for(&self, index: usize) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(move |e| e.modification_index == index)
    }

    /// Entries skipped for any reason, no-match included.
    pub fn skipped(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_skipped())
    }

    pub fn has_unsupported(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_unsupported())
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for entry in &self.entries {
            match entry.outcome {
                MutationOutcome::Applied => summary.applied += 1,
                MutationOutcome::AlreadyPresent => summary.already_present += 1,
                MutationOutcome::NoTargetMatched => summary.unmatched += 1,
                _ => summary.unsupported += 1,
            }
        }
        summary
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
