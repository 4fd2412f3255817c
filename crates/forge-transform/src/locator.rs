//! Finding insertion points in a [`SyntaxTree`].
//!
//! Element matching is a case-insensitive substring test on the element's
//! name, and every matching tag is returned (fan-out). No match is an empty
//! result, never an error.

use forge_core::models::{CodeModification, ModificationAction};

use crate::tree::{NodeId, NodeKind, Position, Role, SyntaxTree};

/// A tag whose element name matched a modification target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// The node carrying name and attributes: an opening tag or a
    /// self-closing element.
    pub tag: NodeId,
    /// The whole element (the tag's parent for opening tags).
    pub element: NodeId,
    /// Element name as written, e.g. `Button` or `motion.div`.
    pub name: String,
    pub position: Option<Position>,
}

/// Where a mutation applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionPoint {
    /// The module's top-level statement list.
    ImportList { program: NodeId },
    /// A matched element's opening tag.
    OpeningTag(TagMatch),
    /// The className-equivalent attribute of a matched tag.
    ClassAttribute { tag: TagMatch, attribute: NodeId },
}

impl InsertionPoint {
    /// The matched tag, for element-level points.
    pub fn tag(&self) -> Option<&TagMatch> {
        match self {
            Self::ImportList { .. } => None,
            Self::OpeningTag(tag) | Self::ClassAttribute { tag, .. } => Some(tag),
        }
    }
}

pub struct Locator<'t> {
    tree: &'t SyntaxTree,
    class_attributes: &'t [String],
}

impl<'t> Locator<'t> {
    pub fn new(tree: &'t SyntaxTree, class_attributes: &'t [String]) -> Self {
        Self {
            tree,
            class_attributes,
        }
    }

    /// Insertion points for one modification, in document order.
    pub fn locate(&self, modification: &CodeModification) -> Vec<InsertionPoint> {
        self.matching_tags(&modification.target)
            .into_iter()
            .map(|tag| match modification.action {
                ModificationAction::AddClass => match self.class_attribute(tag.tag) {
                    Some(attribute) => InsertionPoint::ClassAttribute { tag, attribute },
                    None => InsertionPoint::OpeningTag(tag),
                },
                ModificationAction::AddProp | ModificationAction::WrapElement => {
                    InsertionPoint::OpeningTag(tag)
                }
            })
            .collect()
    }

    /// Like [`locate`](Self::locate), but skips elements that one of the
    /// `pending` wrap-element modifications would have produced: an element
    /// named exactly like its wrapper whose chain of sole children reaches
    /// that wrap's target. A rerun then sees the same elements the first
    /// run saw before those wrappers existed.
    pub fn locate_before(
        &self,
        modification: &CodeModification,
        pending: &[&CodeModification],
    ) -> Vec<InsertionPoint> {
        let wraps: Vec<&CodeModification> = pending
            .iter()
            .copied()
            .filter(|m| m.action == ModificationAction::WrapElement)
            .collect();
        let mut points = self.locate(modification);
        if !wraps.is_empty() {
            points.retain(|point| match point.tag() {
                Some(tag) => !wraps
                    .iter()
                    .any(|w| self.is_wrapper_of(tag.element, w.value.trim(), &w.target)),
                None => true,
            });
        }
        points
    }

    /// `element` is named `wrapper` and encloses, through sole children, an
    /// element whose name contains `target`.
    pub fn is_wrapper_of(&self, element: NodeId, wrapper: &str, target: &str) -> bool {
        let needle = target.trim().to_lowercase();
        if needle.is_empty() || self.element_name(element).as_deref() != Some(wrapper) {
            return false;
        }
        let mut current = element;
        while let Some(child) = self.sole_child_element(current) {
            if self
                .element_name(child)
                .is_some_and(|name| name.to_lowercase().contains(&needle))
            {
                return true;
            }
            current = child;
        }
        false
    }

    /// The only child element of `element`, ignoring whitespace text.
    pub fn sole_child_element(&self, element: NodeId) -> Option<NodeId> {
        if self.tree.kind(element) != NodeKind::Element {
            return None;
        }
        let mut content = self.tree.children(element).iter().copied().filter(|&c| {
            !matches!(self.tree.node(c).role(), Some(Role::OpenTag | Role::CloseTag))
                && !(self.tree.kind(c) == NodeKind::Text && self.tree.text(c).trim().is_empty())
        });
        match (content.next(), content.next()) {
            (Some(child), None) if self.tree.kind(child).is_element() => Some(child),
            _ => None,
        }
    }

    /// Whether `element` already sits inside an element named `wrapper`,
    /// walking up while each element is its parent's sole child.
    pub fn is_enclosed_by(&self, element: NodeId, wrapper: &str) -> bool {
        let mut current = element;
        while let Some(parent) = self.tree.parent(current) {
            if self.sole_child_element(parent) != Some(current) {
                return false;
            }
            if self.element_name(parent).as_deref() == Some(wrapper) {
                return true;
            }
            current = parent;
        }
        false
    }

    pub fn import_list(&self) -> InsertionPoint {
        InsertionPoint::ImportList {
            program: self.tree.root(),
        }
    }

    /// Every tag whose name contains `target`, compared case-insensitively.
    pub fn matching_tags(&self, target: &str) -> Vec<TagMatch> {
        let needle = target.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.tree
            .descendants(self.tree.root())
            .filter(|&id| self.tree.kind(id).is_tag())
            .filter_map(|tag| self.tag_match(tag))
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Describe a tag node, or `None` for fragments and non-tags.
    pub fn tag_match(&self, tag: NodeId) -> Option<TagMatch> {
        let name_node = self.tree.child_by_role(tag, Role::Name)?;
        let element = match self.tree.kind(tag) {
            NodeKind::SelfClosingElement => tag,
            NodeKind::OpeningTag => self.tree.parent(tag)?,
            _ => return None,
        };
        Some(TagMatch {
            tag,
            element,
            name: self.tree.text(name_node).into_owned(),
            position: self.tree.node(tag).position(),
        })
    }

    /// Name of an element node, via its opening tag.
    pub fn element_name(&self, element: NodeId) -> Option<String> {
        let tag = match self.tree.kind(element) {
            NodeKind::SelfClosingElement => element,
            NodeKind::Element => self.tree.child_by_role(element, Role::OpenTag)?,
            _ => return None,
        };
        self.tag_match(tag).map(|m| m.name)
    }

    /// The first attribute on `tag` named `name` (case-sensitive, as in JSX).
    pub fn attribute(&self, tag: NodeId, name: &str) -> Option<NodeId> {
        self.tree
            .children_of_kind(tag, NodeKind::Attribute)
            .find(|&attr| self.attribute_name(attr).as_deref() == Some(name))
    }

    /// The first className-equivalent attribute on `tag`, in source order.
    pub fn class_attribute(&self, tag: NodeId) -> Option<NodeId> {
        self.tree
            .children_of_kind(tag, NodeKind::Attribute)
            .find(|&attr| {
                self.attribute_name(attr)
                    .is_some_and(|n| self.class_attributes.iter().any(|c| *c == n))
            })
    }

    pub fn attribute_name(&self, attribute: NodeId) -> Option<String> {
        let name = self.tree.child_by_role(attribute, Role::Name)?;
        Some(self.tree.text(name).into_owned())
    }

    /// A top-level import whose module specifier is exactly `library`.
    pub fn find_import(&self, library: &str) -> Option<NodeId> {
        let program = self.tree.root();
        self.tree
            .children_of_kind(program, NodeKind::Import)
            .find(|&import| {
                self.tree
                    .child_by_role(import, Role::Source)
                    .and_then(|source| self.tree.string_literal(source))
                    .is_some_and(|(_, specifier)| specifier == library)
            })
    }

    /// Index in the program's statement list where a new import goes: the
    /// front, or just past a leading hash-bang and directive prologue.
    pub fn import_insertion_index(&self, respect_directives: bool) -> usize {
        if !respect_directives {
            return 0;
        }
        let mut index = 0;
        for (i, &child) in self.tree.children(self.tree.root()).iter().enumerate() {
            match self.tree.kind(child) {
                NodeKind::HashBang => index = i + 1,
                NodeKind::Comment => continue,
                NodeKind::ExpressionStatement if self.is_directive(child) => index = i + 1,
                _ => break,
            }
        }
        index
    }

    fn is_directive(&self, statement: NodeId) -> bool {
        let mut named = self
            .tree
            .children(statement)
            .iter()
            .filter(|&&c| self.tree.kind(c) != NodeKind::Token);
        matches!(
            (named.next(), named.next()),
            (Some(&first), None) if self.tree.kind(first) == NodeKind::StringLiteral
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn class_attrs() -> Vec<String> {
        vec!["className".to_string(), "class".to_string()]
    }

    #[test]
    fn matching_is_case_insensitive_substring_with_fan_out() {
        let tree = parse(
            "const a = <div><Button /><IconButton className=\"x\">i</IconButton><button>b</button><Badge/></div>;",
        )
        .unwrap();
        let attrs = class_attrs();
        let locator = Locator::new(&tree, &attrs);
        let names: Vec<_> = locator
            .matching_tags("BUTTON")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Button", "IconButton", "button"]);
        assert!(locator.matching_tags("Tooltip").is_empty());
        assert!(locator.matching_tags("   ").is_empty());
    }

    #[test]
    fn fragments_are_never_matched() {
        let tree = parse("const a = <><span/></>;").unwrap();
        let attrs = class_attrs();
        let locator = Locator::new(&tree, &attrs);
        assert_eq!(locator.matching_tags("span").len(), 1);
        assert!(locator.matching_tags("frag").is_empty());
    }

    #[test]
    fn class_attribute_is_located() {
        let tree = parse("const a = <Card id=\"c\" className=\"card\" />;").unwrap();
        let attrs = class_attrs();
        let locator = Locator::new(&tree, &attrs);
        let m = locator.matching_tags("card").remove(0);
        let attr = locator.class_attribute(m.tag).unwrap();
        assert_eq!(tree.text(attr), "className=\"card\"");
        assert_eq!(locator.attribute_name(attr).as_deref(), Some("className"));
        assert!(locator.attribute(m.tag, "classname").is_none());
    }

    #[test]
    fn enclosing_wrappers_are_found_through_sole_children() {
        let tree = parse("const a = <section><article>\n  <Button />\n</article><hr /></section>;").unwrap();
        let attrs = class_attrs();
        let locator = Locator::new(&tree, &attrs);
        let button = locator.matching_tags("button").remove(0).element;
        assert!(locator.is_enclosed_by(button, "article"));
        assert!(!locator.is_enclosed_by(button, "section"));

        let article = locator.matching_tags("article").remove(0).element;
        assert_eq!(locator.sole_child_element(article), Some(button));
        assert!(locator.is_wrapper_of(article, "article", "button"));
        assert!(!locator.is_wrapper_of(article, "article", "card"));
        let section = locator.matching_tags("section").remove(0).element;
        assert!(!locator.is_wrapper_of(section, "section", "button"));
    }

    #[test]
    fn finds_existing_import_by_specifier() {
        let tree = parse("import { motion } from 'framer-motion'\nimport * as React from \"react\"\n").unwrap();
        let attrs = class_attrs();
        let locator = Locator::new(&tree, &attrs);
        assert!(locator.find_import("framer-motion").is_some());
        assert!(locator.find_import("framer").is_none());
    }

    #[test]
    fn imports_go_after_directives() {
        let tree = parse("\"use client\";\n\nimport * as React from \"react\";\n").unwrap();
        let attrs = class_attrs();
        let locator = Locator::new(&tree, &attrs);
        assert_eq!(locator.import_insertion_index(true), 1);
        assert_eq!(locator.import_insertion_index(false), 0);
    }
}
