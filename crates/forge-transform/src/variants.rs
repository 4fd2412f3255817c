//! Variant discovery on `cva(...)` declarations, and variant class rendering.

use std::collections::BTreeMap;

use forge_core::errors::ParseError;
use forge_core::models::Variant;

use crate::parser::parse;
use crate::tree::{NodeId, NodeKind, Role, SyntaxTree};

/// Names of the variant groups declared in the `variants: { ... }` object
/// of every `cva(...)` call in `source`, in source order.
///
/// ```text
/// cva("base", { variants: { variant: {...}, size: {...} } })  =>  ["variant", "size"]
/// ```
pub fn extract_variants(source: &str) -> Result<Vec<String>, ParseError> {
    let tree = parse(source)?;
    Ok(variant_groups(&tree))
}

/// Read-only walk of an already parsed tree.
pub fn variant_groups(tree: &SyntaxTree) -> Vec<String> {
    let mut names = Vec::new();
    for call in tree.descendants(tree.root()) {
        if !is_cva_call(tree, call) {
            continue;
        }
        let Some(arguments) = tree.child_by_role(call, Role::Arguments) else {
            continue;
        };
        for options in tree.children_of_kind(arguments, NodeKind::Object) {
            let Some(variants) = pair_value(tree, options, "variants") else {
                continue;
            };
            if tree.kind(variants) != NodeKind::Object {
                continue;
            }
            names.extend(
                tree.children_of_kind(variants, NodeKind::Pair)
                    .filter_map(|pair| pair_key(tree, pair)),
            );
        }
    }
    names
}

fn is_cva_call(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.kind(id) == NodeKind::Call
        && tree
            .child_by_role(id, Role::Function)
            .is_some_and(|f| tree.text(f) == "cva")
}

/// Key of an object pair, unquoted when written as a string.
fn pair_key(tree: &SyntaxTree, pair: NodeId) -> Option<String> {
    let key = tree.child_by_role(pair, Role::Key)?;
    match tree.string_literal(key) {
        Some((_, unquoted)) => Some(unquoted),
        None => Some(tree.text(key).into_owned()),
    }
}

fn pair_value(tree: &SyntaxTree, object: NodeId, key: &str) -> Option<NodeId> {
    tree.children_of_kind(object, NodeKind::Pair)
        .find(|&pair| pair_key(tree, pair).as_deref() == Some(key))
        .and_then(|pair| tree.child_by_role(pair, Role::Value))
}

/// Variant name → class string. A later variant with the same name wins.
pub fn variant_classes(variants: &[Variant]) -> BTreeMap<String, String> {
    variants
        .iter()
        .map(|v| (v.name.clone(), v.classes.clone()))
        .collect()
}
