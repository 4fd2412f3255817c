//! Import injection for the animation library.

use forge_core::config::TransformConfig;
use serde::Serialize;

use crate::locator::Locator;
use crate::tree::SyntaxTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportOutcome {
    Inserted,
    AlreadyPresent,
}

/// Add `import { motion } from "<library>";` unless the module already
/// imports from the library. The new statement goes first, or right after
/// a hash-bang and directive prologue when directives are respected.
pub fn ensure_import(tree: &mut SyntaxTree, config: &TransformConfig) -> ImportOutcome {
    let library = config.effective_animation_library();
    let (existing, index) = {
        let locator = Locator::new(tree, &[]);
        (
            locator.find_import(library),
            locator.import_insertion_index(config.effective_respect_directives()),
        )
    };
    if existing.is_some() {
        return ImportOutcome::AlreadyPresent;
    }

    let program = tree.root();
    let count = tree.children(program).len();
    let import = tree.build_named_import(config.effective_motion_binding(), library);

    if index < count {
        // The import takes over the displaced statement's leading layout;
        // the displaced statement moves to the next line.
        let displaced = tree.gap(program, index).unwrap_or_default().to_string();
        tree.insert_child(program, index, import, displaced);
        tree.set_gap(program, index + 1, "\n");
    } else {
        let gap = if count == 0 { "" } else { "\n" };
        tree.insert_child(program, count, import, gap);
    }
    ImportOutcome::Inserted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::emit;
    use crate::parser::parse;

    fn inject(source: &str, config: &TransformConfig) -> (ImportOutcome, String) {
        let mut tree = parse(source).unwrap();
        let outcome = ensure_import(&mut tree, config);
        (outcome, emit(&tree))
    }

    #[test]
    fn inserts_at_top() {
        let config = TransformConfig::default();
        let (outcome, text) = inject("import * as React from \"react\";\n", &config);
        assert_eq!(outcome, ImportOutcome::Inserted);
        assert_eq!(
            text,
            "import { motion } from \"framer-motion\";\nimport * as React from \"react\";\n"
        );
    }

    #[test]
    fn inserts_after_use_client() {
        let config = TransformConfig::default();
        let (_, text) = inject("\"use client\";\n\nexport const A = 1;\n", &config);
        assert_eq!(
            text,
            "\"use client\";\n\nimport { motion } from \"framer-motion\";\nexport const A = 1;\n"
        );
    }

    #[test]
    fn directives_can_be_ignored() {
        let config = TransformConfig {
            respect_directives: Some(false),
            ..TransformConfig::default()
        };
        let (_, text) = inject("\"use client\";\n", &config);
        assert_eq!(text, "import { motion } from \"framer-motion\";\n\"use client\";\n");
    }

    #[test]
    fn existing_import_is_reused() {
        let config = TransformConfig::default();
        let source = "import { AnimatePresence, motion } from 'framer-motion';\n";
        let (outcome, text) = inject(source, &config);
        assert_eq!(outcome, ImportOutcome::AlreadyPresent);
        assert_eq!(text, source);
    }

    #[test]
    fn empty_module_gets_only_the_import() {
        let config = TransformConfig::default();
        let (_, text) = inject("", &config);
        assert_eq!(text, "import { motion } from \"framer-motion\";");
    }
}
