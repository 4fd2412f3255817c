//! Owned, editable syntax tree.
//!
//! A `SyntaxTree` is an arena of [`SyntaxNode`]s built once per transform.
//! Parsed nodes remember their byte span in the original source together with
//! the layout text between their children, so any subtree that is never edited
//! can be emitted as the exact original slice. Edits mark the edited node and
//! all of its ancestors dirty; only dirty nodes are reassembled on emission.

pub mod node;
pub mod synth;

use std::borrow::Cow;
use std::ops::Range;

pub use node::{NodeId, NodeKind, Position, Role, SyntaxNode};

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    nodes: Vec<SyntaxNode>,
    root: NodeId,
}

impl SyntaxTree {
    /// An empty tree with a single synthesized root of `kind`.
    /// Used to build small trees by hand.
    pub fn synthetic(kind: NodeKind) -> Self {
        Self {
            source: String::new(),
            nodes: vec![SyntaxNode::new(kind)],
            root: NodeId(0),
        }
    }

    /// A tree over `source` whose root spans the whole text.
    pub(crate) fn with_source(source: String, root_kind: NodeKind) -> Self {
        let mut root = SyntaxNode::new(root_kind);
        root.span = Some(0..source.len());
        root.position = Some(Position { line: 1, column: 1 });
        Self {
            source,
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut SyntaxNode {
        &mut self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when any edit has been made since the tree was built.
    pub fn is_modified(&self) -> bool {
        self.node(self.root).dirty
    }

    /// First child filling `role`.
    pub fn child_by_role(&self, id: NodeId, role: Role) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.node(c).role == Some(role))
    }

    /// Children of `kind`, in source order.
    pub fn children_of_kind(&self, id: NodeId, kind: NodeKind) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&c| self.node(c).kind == kind)
    }

    /// Position of `id` within its parent's child list.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// The current text of a node: the original slice when untouched,
    /// otherwise the reassembled text.
    pub fn text(&self, id: NodeId) -> Cow<'_, str> {
        let node = self.node(id);
        match (&node.span, node.dirty, &node.text) {
            (Some(span), false, None) => Cow::Borrowed(&self.source[span.clone()]),
            (_, _, Some(text)) => Cow::Borrowed(text.as_str()),
            _ => {
                let mut out = String::new();
                self.write_node(id, &mut out);
                Cow::Owned(out)
            }
        }
    }

    /// Inner text of a string literal without its quotes, plus the quote used.
    pub fn string_literal(&self, id: NodeId) -> Option<(char, String)> {
        if self.kind(id) != NodeKind::StringLiteral {
            return None;
        }
        let raw = self.text(id);
        let quote = raw.chars().next()?;
        if !matches!(quote, '"' | '\'') || raw.len() < 2 || !raw.ends_with(quote) {
            return None;
        }
        Some((quote, raw[1..raw.len() - 1].to_string()))
    }

    /// Pre-order iterator over the subtree rooted at `id`.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Append `id`'s current text to `out`.
    pub(crate) fn write_node(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if let Some(text) = &node.text {
            out.push_str(text);
            return;
        }
        if let (Some(span), false) = (&node.span, node.dirty) {
            out.push_str(&self.source[span.clone()]);
            return;
        }
        for (gap, &child) in node.gaps.iter().zip(&node.children) {
            out.push_str(gap);
            self.write_node(child, out);
        }
        out.push_str(&node.trailing);
    }

    // ---- Construction ----

    /// Allocate a detached node.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode::new(kind));
        id
    }

    /// Allocate a detached leaf carrying `text`.
    pub fn alloc_leaf(&mut self, kind: NodeKind, text: impl Into<String>) -> NodeId {
        let id = self.alloc(kind);
        self.node_mut(id).text = Some(text.into());
        id
    }

    /// Attach a parsed node, recording its original span and position.
    pub(crate) fn alloc_parsed(
        &mut self,
        kind: NodeKind,
        span: Range<usize>,
        position: Position,
    ) -> NodeId {
        let id = self.alloc(kind);
        let node = self.node_mut(id);
        node.span = Some(span);
        node.position = Some(position);
        id
    }

    pub fn set_role(&mut self, id: NodeId, role: Option<Role>) {
        self.node_mut(id).role = role;
    }

    /// Append `child` under `parent`, preceded by `gap`. Does not mark
    /// anything dirty; used while a tree is being built.
    pub fn push_child(&mut self, parent: NodeId, child: NodeId, gap: impl Into<String>) {
        self.node_mut(child).parent = Some(parent);
        let node = self.node_mut(parent);
        node.children.push(child);
        node.gaps.push(gap.into());
    }

    pub fn set_trailing(&mut self, id: NodeId, trailing: impl Into<String>) {
        self.node_mut(id).trailing = trailing.into();
    }

    // ---- Editing ----

    /// Mark `id` and every ancestor as changed.
    pub fn mark_dirty(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node_mut(node_id);
            if node.dirty {
                break;
            }
            node.dirty = true;
            current = node.parent;
        }
    }

    /// Replace a node's content with literal text.
    pub fn replace_text(&mut self, id: NodeId, text: impl Into<String>) {
        let node = self.node_mut(id);
        node.text = Some(text.into());
        node.children.clear();
        node.gaps.clear();
        node.trailing.clear();
        self.mark_dirty(id);
    }

    /// Insert `child` at `index` under `parent`, preceded by `gap`.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId, gap: impl Into<String>) {
        self.node_mut(child).parent = Some(parent);
        let node = self.node_mut(parent);
        let index = index.min(node.children.len());
        node.children.insert(index, child);
        node.gaps.insert(index, gap.into());
        self.mark_dirty(parent);
    }

    /// Replace the layout emitted before the child at `index`.
    pub fn set_gap(&mut self, parent: NodeId, index: usize, gap: impl Into<String>) {
        let Some(slot) = self.node_mut(parent).gaps.get_mut(index) else {
            return;
        };
        *slot = gap.into();
        self.mark_dirty(parent);
    }

    pub fn gap(&self, parent: NodeId, index: usize) -> Option<&str> {
        self.node(parent).gaps.get(index).map(String::as_str)
    }

    /// Put `new` where `old` sits in its parent; `new` inherits the slot's
    /// layout and role. `old` becomes detached. Returns false if `old` has
    /// no parent.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) -> bool {
        let Some(parent) = self.parent(old) else {
            return false;
        };
        let Some(index) = self.index_in_parent(old) else {
            return false;
        };
        let role = self.node(old).role;
        self.node_mut(parent).children[index] = new;
        let new_node = self.node_mut(new);
        new_node.parent = Some(parent);
        new_node.role = role;
        let old_node = self.node_mut(old);
        old_node.parent = None;
        old_node.role = None;
        self.mark_dirty(parent);
        true
    }
}

pub struct Descendants<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children.iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (SyntaxTree, NodeId, NodeId) {
        // root: [a] " " [b]
        let mut tree = SyntaxTree::synthetic(NodeKind::Program);
        let root = tree.root();
        let a = tree.alloc_leaf(NodeKind::Identifier, "a");
        let b = tree.alloc_leaf(NodeKind::Identifier, "b");
        tree.push_child(root, a, "");
        tree.push_child(root, b, " ");
        tree.set_trailing(root, "\n");
        (tree, a, b)
    }

    #[test]
    fn synthetic_tree_emits_children_with_gaps() {
        let (tree, _, _) = sample();
        assert_eq!(tree.text(tree.root()), "a b\n");
        assert!(!tree.is_modified());
    }

    #[test]
    fn replace_text_marks_ancestors_dirty() {
        let (mut tree, a, _) = sample();
        tree.replace_text(a, "alpha");
        assert!(tree.is_modified());
        assert_eq!(tree.text(tree.root()), "alpha b\n");
    }

    #[test]
    fn replace_child_inherits_slot() {
        let (mut tree, _, b) = sample();
        tree.set_role(b, Some(Role::Value));
        let c = tree.alloc_leaf(NodeKind::StringLiteral, "\"c\"");
        assert!(tree.replace_child(b, c));
        assert_eq!(tree.text(tree.root()), "a \"c\"\n");
        assert_eq!(tree.node(c).role(), Some(Role::Value));
        assert_eq!(tree.parent(b), None);
        assert_eq!(tree.string_literal(c), Some(('"', "c".to_string())));
    }

    #[test]
    fn descendants_are_preorder() {
        let (tree, a, b) = sample();
        let order: Vec<_> = tree.descendants(tree.root()).collect();
        assert_eq!(order, vec![tree.root(), a, b]);
    }
}
