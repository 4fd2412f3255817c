//! Locating ERROR and MISSING nodes in a tree-sitter tree.
//!
//! tree-sitter always produces a tree; the transform engine refuses to work
//! on one that contains recovery nodes.

use forge_core::errors::ParseError;
use tree_sitter::Node;

const SNIPPET_CHARS: usize = 24;

/// Count ERROR and MISSING nodes in a tree.
pub fn count_errors(root: Node) -> u32 {
    let mut count = 0u32;
    let mut cursor = root.walk();
    visit(&mut cursor, &mut |node| {
        if node.is_error() || node.is_missing() {
            count += 1;
        }
        true
    });
    count
}

/// The first ERROR or MISSING node in document order, as a `ParseError`.
pub fn first_error(root: Node, source: &str) -> Option<ParseError> {
    let mut found = None;
    let mut cursor = root.walk();
    visit(&mut cursor, &mut |node| {
        if node.is_missing() {
            found = Some(syntax_error(&node, format!("missing `{}`", node.kind())));
        } else if node.is_error() {
            let text = source
                .get(node.start_byte()..node.end_byte())
                .unwrap_or_default();
            let snippet: String = text.chars().take(SNIPPET_CHARS).collect();
            found = Some(syntax_error(&node, format!("unexpected `{}`", snippet.trim())));
        }
        found.is_none()
    });
    found
}

fn syntax_error(node: &Node, message: String) -> ParseError {
    let start = node.start_position();
    ParseError::Syntax {
        line: start.row + 1,
        column: start.column + 1,
        message,
    }
}

/// Pre-order walk that stops as soon as `f` returns false.
fn visit<'a>(cursor: &mut tree_sitter::TreeCursor<'a>, f: &mut impl FnMut(Node<'a>) -> bool) {
    loop {
        if !f(cursor.node()) {
            return;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
