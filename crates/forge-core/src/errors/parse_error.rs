//! Parser errors.

use super::error_code::{self, ForgeErrorCode};

/// Errors raised while turning component source into a syntax tree.
/// Always fatal for the component being transformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at {line}:{column}: {message}")]
    Syntax {
        /// 1-based line.
        line: usize,
        /// 1-based column, in bytes.
        column: usize,
        message: String,
    },

    #[error("Failed to load grammar: {0}")]
    LanguageInit(String),

    #[error("Parser produced no tree")]
    NoTree,
}

impl ParseError {
    /// Line/column of the failure, when the parser could locate it.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

impl ForgeErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LanguageInit(_) => error_code::GRAMMAR_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
