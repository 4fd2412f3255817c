//! forge-transform: the source-tree customization engine.
//!
//! Parses a TSX component into an owned [`tree::SyntaxTree`], locates
//! insertion points for each modification of a
//! [`CustomizationBundle`](forge_core::models::CustomizationBundle), edits the
//! tree structurally and re-emits source text. Untouched code keeps its
//! original formatting byte for byte.
//!
//! Pipeline: `parser` → (`locator` → `mutator`)* → `emitter`, sequenced by
//! [`orchestrator::Transformer`]. `batch` fans out over many components.

pub mod animations;
pub mod batch;
pub mod emitter;
pub mod locator;
pub mod mutator;
pub mod orchestrator;
pub mod parser;
pub mod report;
pub mod tree;
pub mod variants;

pub use batch::{transform_batch, BatchSummary, ComponentJob, ComponentResult};
pub use emitter::emit;
pub use mutator::{ImportOutcome, MutationOutcome};
pub use orchestrator::{transform, TransformOutput, TransformState, Transformer};
pub use parser::{parse, SourceParser, TsxParser};
pub use report::{ReportEntry, ReportSummary, TransformReport};
pub use tree::SyntaxTree;
pub use variants::extract_variants;
