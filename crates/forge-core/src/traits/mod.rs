//! Capability traits injected by callers.

pub mod generation;

pub use generation::{generate_customization, generate_tokens, DesignGenerator};
