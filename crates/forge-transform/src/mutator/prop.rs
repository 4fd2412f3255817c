//! add-prop: set a string-valued attribute on an opening tag.

use super::{is_jsx_identifier, MutationOutcome};
use crate::locator::Locator;
use crate::tree::{NodeId, NodeKind, Role, SyntaxTree};

/// A parsed `name=value` modification value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropAssignment {
    pub name: String,
    pub value: String,
}

impl PropAssignment {
    /// Parse `name=value`, `name="value"` or `name='value'`. The value may
    /// not contain a double quote or a line break.
    pub fn parse(raw: &str) -> Option<Self> {
        let (name, value) = raw.split_once('=')?;
        let name = name.trim();
        let value = strip_quotes(value.trim());
        if !is_jsx_identifier(name) || value.contains(['"', '\n', '\r']) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Set `name="value"` on `tag`. An existing string literal is rewritten in
/// place; an absent attribute is synthesized when `synthesize` is set.
pub fn add_prop(tree: &mut SyntaxTree, tag: NodeId, raw: &str, synthesize: bool) -> MutationOutcome {
    let Some(prop) = PropAssignment::parse(raw) else {
        return MutationOutcome::InvalidValue;
    };
    let existing = Locator::new(tree, &[]).attribute(tag, &prop.name);

    match existing {
        Some(attribute) => rewrite(tree, attribute, &prop.value),
        None if synthesize => insert(tree, tag, &prop),
        None => MutationOutcome::MissingAttribute,
    }
}

fn rewrite(tree: &mut SyntaxTree, attribute: NodeId, value: &str) -> MutationOutcome {
    let Some(literal) = tree.child_by_role(attribute, Role::Value) else {
        return MutationOutcome::UnsupportedAttributeForm;
    };
    let Some((quote, current)) = tree.string_literal(literal) else {
        return MutationOutcome::UnsupportedAttributeForm;
    };
    if current == value {
        return MutationOutcome::AlreadyPresent;
    }
    let quote = if value.contains(quote) { '"' } else { quote };
    tree.replace_text(literal, format!("{quote}{value}{quote}"));
    MutationOutcome::Applied
}

fn insert(tree: &mut SyntaxTree, tag: NodeId, prop: &PropAssignment) -> MutationOutcome {
    let Some(index) = closing_token_index(tree, tag) else {
        return MutationOutcome::NotApplicable;
    };
    // Follow the layout of the last existing attribute, so multi-line tags
    // stay one attribute per line.
    let gap = tree
        .children(tag)
        .iter()
        .rposition(|&c| tree.kind(c) == NodeKind::Attribute)
        .and_then(|i| tree.gap(tag, i))
        .filter(|g| !g.is_empty())
        .unwrap_or(" ")
        .to_string();

    let attribute = tree.build_string_attribute(&prop.name, &prop.value);
    tree.insert_child(tag, index, attribute, gap);
    MutationOutcome::Applied
}

/// Index of the `>` or `/` that ends the tag's attribute list.
fn closing_token_index(tree: &SyntaxTree, tag: NodeId) -> Option<usize> {
    let children = tree.children(tag);
    let name = children
        .iter()
        .position(|&c| tree.node(c).role() == Some(Role::Name))?;
    children
        .iter()
        .enumerate()
        .skip(name + 1)
        .find(|&(_, &c)| {
            tree.kind(c) == NodeKind::Token && matches!(&*tree.text(c), ">" | "/" | "/>")
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignments() {
        assert_eq!(
            PropAssignment::parse("data-theme=\"neon\""),
            Some(PropAssignment {
                name: "data-theme".into(),
                value: "neon".into()
            })
        );
        assert_eq!(
            PropAssignment::parse(" role = 'button' ").map(|p| p.value),
            Some("button".to_string())
        );
        assert_eq!(
            PropAssignment::parse("tabIndex=0").map(|p| p.value),
            Some("0".to_string())
        );
        assert!(PropAssignment::parse("disabled").is_none());
        assert!(PropAssignment::parse("=x").is_none());
        assert!(PropAssignment::parse("title=a\"b").is_none());
    }
}
