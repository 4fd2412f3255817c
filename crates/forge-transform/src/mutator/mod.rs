//! Structural mutations, one handler per action kind.
//!
//! Handlers edit tree nodes in place; they never run text substitution over
//! the source. Every handler reports what it did instead of failing, so one
//! odd element never aborts a component.

pub mod class;
pub mod import;
pub mod prop;
pub mod wrap;

use forge_core::config::TransformConfig;
use forge_core::models::{CodeModification, ModificationAction};
use serde::Serialize;

use crate::locator::InsertionPoint;
use crate::tree::SyntaxTree;

pub use import::{ensure_import, ImportOutcome};

/// Result of applying one modification at one insertion point, or of
/// finding none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationOutcome {
    Applied,
    /// No element name contains the modification's target.
    NoTargetMatched,
    /// The change is already in the tree; nothing was edited.
    AlreadyPresent,
    /// add-class on an element with no className-equivalent attribute.
    MissingAttribute,
    /// The attribute's value is an expression (or absent), not a string literal.
    UnsupportedAttributeForm,
    /// The modification's `value` cannot be expressed in the tree.
    InvalidValue,
    /// The insertion point does not accept this action.
    NotApplicable,
}

impl MutationOutcome {
    /// True when the modification was skipped for this element.
    pub fn is_skipped(self) -> bool {
        matches!(
            self,
            Self::NoTargetMatched
                | Self::MissingAttribute
                | Self::UnsupportedAttributeForm
                | Self::InvalidValue
                | Self::NotApplicable
        )
    }
}

impl MutationOutcome {
    /// Skipped for a reason other than having nothing to match.
    pub fn is_unsupported(self) -> bool {
        self.is_skipped() && self != Self::NoTargetMatched
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::NoTargetMatched => "no-target-matched",
            Self::AlreadyPresent => "already-present",
            Self::MissingAttribute => "missing-attribute",
            Self::UnsupportedAttributeForm => "unsupported-attribute-form",
            Self::InvalidValue => "invalid-value",
            Self::NotApplicable => "not-applicable",
        }
    }
}

impl std::fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatch a modification to its handler.
pub fn apply(
    tree: &mut SyntaxTree,
    point: &InsertionPoint,
    modification: &CodeModification,
    config: &TransformConfig,
) -> MutationOutcome {
    let value = modification.value.as_str();
    match (modification.action, point) {
        (_, InsertionPoint::ImportList { .. }) => MutationOutcome::NotApplicable,
        (ModificationAction::AddClass, InsertionPoint::ClassAttribute { attribute, .. }) => {
            class::add_class(tree, *attribute, value)
        }
        (ModificationAction::AddClass, InsertionPoint::OpeningTag(_)) => {
            MutationOutcome::MissingAttribute
        }
        (
            ModificationAction::AddProp,
            InsertionPoint::OpeningTag(tag) | InsertionPoint::ClassAttribute { tag, .. },
        ) => prop::add_prop(tree, tag.tag, value, config.effective_synthesize_missing_props()),
        (
            ModificationAction::WrapElement,
            InsertionPoint::OpeningTag(tag) | InsertionPoint::ClassAttribute { tag, .. },
        ) => wrap::wrap_element(tree, tag, value),
    }
}

/// JSX identifier: starts with a letter, `_` or `$`; continues with
/// alphanumerics, `_`, `$` or `-`.
pub(crate) fn is_jsx_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-'))
}
