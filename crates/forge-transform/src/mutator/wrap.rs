//! wrap-element: enclose a matched element in a new parent element.

use super::{is_jsx_identifier, MutationOutcome};
use crate::locator::{Locator, TagMatch};
use crate::tree::SyntaxTree;

/// Replace the matched element with `<wrapper>element</wrapper>`.
///
/// Elements that already are a `wrapper`, or that already sit inside one
/// through a chain of sole children, are left unchanged so repeated runs do
/// not nest wrappers.
pub fn wrap_element(tree: &mut SyntaxTree, tag: &TagMatch, wrapper: &str) -> MutationOutcome {
    let wrapper = wrapper.trim();
    if !is_element_name(wrapper) {
        return MutationOutcome::InvalidValue;
    }
    if tag.name == wrapper || Locator::new(tree, &[]).is_enclosed_by(tag.element, wrapper) {
        return MutationOutcome::AlreadyPresent;
    }
    if tree.parent(tag.element).is_none() {
        return MutationOutcome::NotApplicable;
    }

    let outer = tree.build_element(wrapper);
    if !tree.replace_child(tag.element, outer) {
        return MutationOutcome::NotApplicable;
    }
    tree.insert_child(outer, 1, tag.element, "");
    MutationOutcome::Applied
}

/// `Name`, `motion.div`, `my-element`.
fn is_element_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_jsx_identifier)
}
