//! add-class: append class tokens to a string-literal class attribute.

use rustc_hash::FxHashSet;

use super::MutationOutcome;
use crate::tree::{NodeId, Role, SyntaxTree};

/// Characters that cannot appear in a class token written into a literal.
const FORBIDDEN: &[char] = &['"', '\'', '`', '{', '}', '<', '>'];

/// Append the whitespace-separated tokens of `value` that the attribute does
/// not already contain. A value already appearing in the class list, as a
/// whole or token by token, leaves the attribute unchanged.
pub fn add_class(tree: &mut SyntaxTree, attribute: NodeId, value: &str) -> MutationOutcome {
    let mut seen = FxHashSet::default();
    let tokens: Vec<&str> = value
        .split_whitespace()
        .filter(|t| seen.insert(*t))
        .collect();
    if tokens.is_empty() || tokens.iter().any(|t| t.contains(FORBIDDEN)) {
        return MutationOutcome::InvalidValue;
    }

    let Some(literal) = tree.child_by_role(attribute, Role::Value) else {
        return MutationOutcome::UnsupportedAttributeForm;
    };
    let Some((quote, existing)) = tree.string_literal(literal) else {
        return MutationOutcome::UnsupportedAttributeForm;
    };

    if existing.contains(&tokens.join(" ")) {
        return MutationOutcome::AlreadyPresent;
    }
    let present: FxHashSet<&str> = existing.split_whitespace().collect();
    let missing: Vec<&str> = tokens
        .into_iter()
        .filter(|t| !present.contains(t))
        .collect();
    if missing.is_empty() {
        return MutationOutcome::AlreadyPresent;
    }

    let base = existing.trim_end();
    let updated = if base.trim_start().is_empty() {
        missing.join(" ")
    } else {
        format!("{base} {}", missing.join(" "))
    };
    tree.replace_text(literal, format!("{quote}{updated}{quote}"));
    MutationOutcome::Applied
}
