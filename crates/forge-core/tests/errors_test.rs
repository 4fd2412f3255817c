//! Tests for the Forge error handling system.

use std::collections::HashSet;

use forge_core::errors::error_code::ForgeErrorCode;
use forge_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let parse = ParseError::Syntax {
        line: 1,
        column: 2,
        message: "unexpected token".into(),
    };
    let validation = ValidationError::UnknownVariant {
        field: "action",
        value: "remove-class".into(),
    };
    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    let registry = RegistryError::InvalidItemName("Bad Name".into());
    let generation = GenerationError::EmptyResponse;

    let codes: HashSet<&str> = [
        parse.error_code(),
        validation.error_code(),
        config.error_code(),
        registry.error_code(),
        generation.error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 5, "each subsystem has its own code");
}

#[test]
fn test_from_conversions_keep_codes() {
    let parse = ParseError::NoTree;
    let top: TransformError = parse.into();
    assert!(matches!(top, TransformError::Parse(ParseError::NoTree)));
    assert_eq!(top.error_code(), "PARSE_ERROR");

    let validation = ValidationError::InvalidJson("eof".into());
    let generation: GenerationError = validation.into();
    assert!(matches!(generation, GenerationError::Rejected(_)));
}

#[test]
fn test_tagged_string_format() {
    let err = ParseError::Syntax {
        line: 3,
        column: 7,
        message: "missing `>`".into(),
    };
    assert_eq!(err.tagged_string(), "[PARSE_ERROR] Syntax error at 3:7: missing `>`");
    assert_eq!(err.location(), Some((3, 7)));
    assert_eq!(ParseError::NoTree.location(), None);
}
