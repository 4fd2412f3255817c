//! Builders for the nodes the mutators insert.
//!
//! Synthesized nodes have real structure (names, sources and values carry
//! their roles), so the locator sees them exactly like parsed nodes.

use super::{NodeId, NodeKind, Role, SyntaxTree};

impl SyntaxTree {
    /// `import { <binding> } from "<library>";`
    pub fn build_named_import(&mut self, binding: &str, library: &str) -> NodeId {
        let import = self.alloc(NodeKind::Import);
        let keyword = self.alloc_leaf(NodeKind::Token, "import");
        let clause = self.alloc_leaf(NodeKind::Other, format!("{{ {binding} }}"));
        let from = self.alloc_leaf(NodeKind::Token, "from");
        let source = self.alloc_leaf(NodeKind::StringLiteral, format!("\"{library}\""));
        self.set_role(source, Some(Role::Source));
        let semi = self.alloc_leaf(NodeKind::Token, ";");

        self.push_child(import, keyword, "");
        self.push_child(import, clause, " ");
        self.push_child(import, from, " ");
        self.push_child(import, source, " ");
        self.push_child(import, semi, "");
        import
    }

    /// `<name></name>` with no attributes. Returns the element; children go
    /// between its opening and closing tags (index 1).
    pub fn build_element(&mut self, name: &str) -> NodeId {
        let element = self.alloc(NodeKind::Element);

        let open = self.alloc(NodeKind::OpeningTag);
        self.set_role(open, Some(Role::OpenTag));
        let lt = self.alloc_leaf(NodeKind::Token, "<");
        let open_name = self.alloc_leaf(NodeKind::Identifier, name);
        self.set_role(open_name, Some(Role::Name));
        let gt = self.alloc_leaf(NodeKind::Token, ">");
        self.push_child(open, lt, "");
        self.push_child(open, open_name, "");
        self.push_child(open, gt, "");

        let close = self.alloc(NodeKind::ClosingTag);
        self.set_role(close, Some(Role::CloseTag));
        let lt_slash = self.alloc_leaf(NodeKind::Token, "</");
        let close_name = self.alloc_leaf(NodeKind::Identifier, name);
        self.set_role(close_name, Some(Role::Name));
        let gt = self.alloc_leaf(NodeKind::Token, ">");
        self.push_child(close, lt_slash, "");
        self.push_child(close, close_name, "");
        self.push_child(close, gt, "");

        self.push_child(element, open, "");
        self.push_child(element, close, "");
        element
    }

    /// `name="value"` as a JSX attribute.
    pub fn build_string_attribute(&mut self, name: &str, value: &str) -> NodeId {
        let attribute = self.alloc(NodeKind::Attribute);
        self.set_role(attribute, Some(Role::Attribute));
        let attr_name = self.alloc_leaf(NodeKind::Identifier, name);
        self.set_role(attr_name, Some(Role::Name));
        let eq = self.alloc_leaf(NodeKind::Token, "=");
        let literal = self.alloc_leaf(NodeKind::StringLiteral, format!("\"{value}\""));
        self.set_role(literal, Some(Role::Value));
        self.push_child(attribute, attr_name, "");
        self.push_child(attribute, eq, "");
        self.push_child(attribute, literal, "");
        attribute
    }
}
