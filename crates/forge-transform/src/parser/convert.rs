//! tree-sitter tree -> owned [`SyntaxTree`] arena.

use tree_sitter::Node;

use crate::tree::{NodeId, NodeKind, Position, Role, SyntaxTree};

/// Copy a parsed tree into an arena. The root spans the whole source so that
/// leading and trailing layout survive emission.
pub fn convert_tree(root: Node, source: &str) -> SyntaxTree {
    let mut tree = SyntaxTree::with_source(source.to_string(), NodeKind::Program);
    let root_id = tree.root();
    convert_children(&mut tree, root, root_id, 0, source.len(), source);
    tree
}

fn convert_children(
    tree: &mut SyntaxTree,
    ts_node: Node,
    parent: NodeId,
    start: usize,
    end: usize,
    source: &str,
) {
    let is_attribute = tree.kind(parent) == NodeKind::Attribute;
    let mut prev_end = start;
    let mut seen_named = false;
    let mut after_eq = false;

    let mut cursor = ts_node.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            let kind = NodeKind::from_grammar(child.kind(), child.is_named());
            let child_start = child.start_byte().clamp(prev_end, end);
            let child_end = child.end_byte().clamp(child_start, end);
            let point = child.start_position();
            let id = tree.alloc_parsed(
                kind,
                child_start..child_end,
                Position {
                    line: point.row + 1,
                    column: point.column + 1,
                },
            );

            // JSX attributes carry no field names in the grammar.
            let role = if is_attribute && child.is_named() {
                if !seen_named {
                    Some(Role::Name)
                } else if after_eq {
                    Some(Role::Value)
                } else {
                    None
                }
            } else {
                cursor.field_name().and_then(Role::from_field)
            };
            tree.set_role(id, role);

            let gap = source.get(prev_end..child_start).unwrap_or_default();
            tree.push_child(parent, id, gap);
            convert_children(tree, child, id, child_start, child_end, source);

            seen_named |= child.is_named();
            after_eq = !child.is_named() && child.kind() == "=";
            prev_end = child_end;
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    let trailing = source.get(prev_end..end).unwrap_or_default();
    tree.set_trailing(parent, trailing);
}
