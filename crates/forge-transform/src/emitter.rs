//! Serializing a [`SyntaxTree`] back to source text.
//!
//! Untouched subtrees are copied from the original source byte for byte;
//! only dirty nodes are reassembled from their children and recorded layout.

use crate::tree::SyntaxTree;

/// Render the current tree state. Deterministic: the same tree always
/// yields the same text, and an unmodified tree yields its source exactly.
pub fn emit(tree: &SyntaxTree) -> String {
    let mut out = String::with_capacity(tree.source().len() + 64);
    tree.write_node(tree.root(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::tree::{NodeKind, Role};

    const SOURCE: &str = "import * as React from \"react\"\n\n// keep me\nexport function Card() {\n    return (\n        <div   className='card'>\n            {children}\n        </div>\n    )\n}\n";

    #[test]
    fn unmodified_tree_round_trips() {
        let tree = parse(SOURCE).unwrap();
        assert_eq!(emit(&tree), SOURCE);
    }

    #[test]
    fn synthetic_trees_are_assembled() {
        let mut tree = SyntaxTree::synthetic(NodeKind::Program);
        let import = tree.build_named_import("motion", "framer-motion");
        let root = tree.root();
        tree.push_child(root, import, "");
        tree.set_trailing(root, "\n");
        assert_eq!(emit(&tree), "import { motion } from \"framer-motion\";\n");
    }

    #[test]
    fn only_the_edited_node_changes() {
        let mut tree = parse(SOURCE).unwrap();
        let literal = tree
            .descendants(tree.root())
            .find(|&id| tree.node(id).role() == Some(Role::Value))
            .unwrap();
        tree.replace_text(literal, "'card glow'");
        assert_eq!(emit(&tree), SOURCE.replace("'card'", "'card glow'"));
    }
}
