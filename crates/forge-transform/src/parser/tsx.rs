//! TSX parser: tree-sitter TypeScript grammar with JSX, thread-local instances.

use std::cell::RefCell;

use forge_core::errors::ParseError;
use tree_sitter::Parser;

use super::convert::convert_tree;
use super::error_tolerant::{count_errors, first_error};
use super::SourceParser;
use crate::tree::SyntaxTree;

thread_local! {
    static TSX_PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TsxParser;

impl TsxParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for TsxParser {
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        let ts_tree = TSX_PARSER.with(|cell| {
            let mut slot = cell.borrow_mut();
            if slot.is_none() {
                let mut parser = Parser::new();
                parser
                    .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
                    .map_err(|e| ParseError::LanguageInit(e.to_string()))?;
                *slot = Some(parser);
            }
            match slot.as_mut() {
                Some(parser) => parser.parse(source, None).ok_or(ParseError::NoTree),
                None => Err(ParseError::NoTree),
            }
        })?;

        let root = ts_tree.root_node();
        if root.has_error() {
            tracing::debug!(errors = count_errors(root), "source has syntax errors");
            return Err(first_error(root, source).unwrap_or(ParseError::Syntax {
                line: 1,
                column: 1,
                message: "syntax error".to_string(),
            }));
        }

        Ok(convert_tree(root, source))
    }
}
