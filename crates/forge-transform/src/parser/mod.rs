//! Parser frontends producing [`SyntaxTree`]s.
//!
//! The engine only depends on [`SourceParser`]; the tree-sitter TSX grammar
//! is one implementation of it.

pub mod convert;
pub mod error_tolerant;
pub mod tsx;

use forge_core::errors::ParseError;

use crate::tree::SyntaxTree;

pub use tsx::TsxParser;

/// Contract every parser frontend implements.
pub trait SourceParser: Send + Sync {
    /// Parse a whole module. Fails on any syntax error; there is no partial tree.
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError>;
}

/// Parse TSX source with the default frontend.
pub fn parse(source: &str) -> Result<SyntaxTree, ParseError> {
    TsxParser::new().parse(source)
}
