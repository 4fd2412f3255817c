//! Arena node types.

use std::ops::Range;

use serde::Serialize;

/// Index of a node inside its [`SyntaxTree`](super::SyntaxTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Grammar-neutral classification of the constructs the engine understands.
/// Everything else is carried as `Other` and only ever emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    HashBang,
    Comment,
    Import,
    ExpressionStatement,
    Element,
    SelfClosingElement,
    OpeningTag,
    ClosingTag,
    Attribute,
    ExpressionContainer,
    StringLiteral,
    Identifier,
    Call,
    Arguments,
    Object,
    Pair,
    Text,
    Token,
    Error,
    Other,
}

impl NodeKind {
    /// Map a tree-sitter TSX node kind onto the neutral vocabulary.
    pub fn from_grammar(kind: &str, named: bool) -> Self {
        if !named {
            return Self::Token;
        }
        match kind {
            "program" => Self::Program,
            "hash_bang_line" => Self::HashBang,
            "comment" => Self::Comment,
            "import_statement" => Self::Import,
            "expression_statement" => Self::ExpressionStatement,
            "jsx_element" => Self::Element,
            "jsx_self_closing_element" => Self::SelfClosingElement,
            "jsx_opening_element" => Self::OpeningTag,
            "jsx_closing_element" => Self::ClosingTag,
            "jsx_attribute" => Self::Attribute,
            "jsx_expression" => Self::ExpressionContainer,
            "string" => Self::StringLiteral,
            "identifier" | "property_identifier" | "type_identifier" | "member_expression"
            | "nested_identifier" | "jsx_namespace_name" => Self::Identifier,
            "call_expression" => Self::Call,
            "arguments" => Self::Arguments,
            "object" => Self::Object,
            "pair" => Self::Pair,
            "jsx_text" => Self::Text,
            "ERROR" => Self::Error,
            _ => Self::Other,
        }
    }

    /// An element node that can be wrapped.
    pub fn is_element(self) -> bool {
        matches!(self, Self::Element | Self::SelfClosingElement)
    }

    /// A node carrying an element name and attributes.
    pub fn is_tag(self) -> bool {
        matches!(self, Self::OpeningTag | Self::SelfClosingElement)
    }
}

/// The slot a child occupies in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Name,
    Source,
    Attribute,
    Value,
    Key,
    Function,
    Arguments,
    OpenTag,
    CloseTag,
}

impl Role {
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            "source" => Some(Self::Source),
            "attribute" => Some(Self::Attribute),
            "value" => Some(Self::Value),
            "key" => Some(Self::Key),
            "function" => Some(Self::Function),
            "arguments" => Some(Self::Arguments),
            "open_tag" => Some(Self::OpenTag),
            "close_tag" => Some(Self::CloseTag),
            _ => None,
        }
    }
}

/// 1-based source position of a node's first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub(crate) kind: NodeKind,
    pub(crate) role: Option<Role>,
    /// Byte range in the original source; `None` for synthesized nodes.
    pub(crate) span: Option<Range<usize>>,
    pub(crate) position: Option<Position>,
    /// Replacement text. When set, children are ignored on emission.
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<NodeId>,
    /// `gaps[i]` is the layout emitted before `children[i]`.
    pub(crate) gaps: Vec<String>,
    /// Layout emitted after the last child.
    pub(crate) trailing: String,
    pub(crate) parent: Option<NodeId>,
    /// Set when this node or a descendant changed since parsing.
    pub(crate) dirty: bool,
}

impl SyntaxNode {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            role: None,
            span: None,
            position: None,
            text: None,
            children: Vec::new(),
            gaps: Vec::new(),
            trailing: String::new(),
            parent: None,
            dirty: false,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_synthesized(&self) -> bool {
        self.span.is_none()
    }
}
