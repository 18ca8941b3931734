//! Document tree adapter over the markdown tokenizer.
//!
//! The tokenizer ([`pulldown_cmark`]) emits a flat event stream; the
//! extractors want a tree they can walk with the original source text
//! recoverable per node. This module builds that tree, collapsing every
//! node kind the parser does not care about into [`NodeKind::Other`] so the
//! rest of the crate matches on a closed set.
//!
//! Building never fails: malformed input simply yields a tree without list
//! nodes, which the extractors turn into an empty plan.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::error::{ParseError, Result};

/// Stack cap for tree construction. Nesting beyond this is flattened into
/// the enclosing node so adversarial input cannot exhaust the stack.
const MAX_TREE_DEPTH: usize = 256;

/// The node kinds the extractors distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    OrderedList,
    UnorderedList,
    ListItem,
    Other,
}

impl NodeKind {
    fn from_tag(tag: &Tag<'_>) -> Self {
        match tag {
            Tag::List(Some(_)) => NodeKind::OrderedList,
            Tag::List(None) => NodeKind::UnorderedList,
            Tag::Item => NodeKind::ListItem,
            _ => NodeKind::Other,
        }
    }
}

/// A typed node with the byte span of the source text that produced it.
#[derive(Debug, Clone)]
pub(crate) struct DocNode {
    kind: NodeKind,
    span: Range<usize>,
    children: Vec<DocNode>,
}

impl DocNode {
    fn new(kind: NodeKind, span: Range<usize>) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        self.kind
    }

    pub(crate) fn children(&self) -> &[DocNode] {
        &self.children
    }

    /// Recovers the exact source text spanned by this node.
    ///
    /// The span comes from the tokenizer's offsets, so a miss means the
    /// adapter's invariant is broken, not that the input was malformed.
    pub(crate) fn source_text<'s>(&self, source: &'s str) -> Result<&'s str> {
        source
            .get(self.span.clone())
            .ok_or(ParseError::SourceSpan {
                start: self.span.start,
                end: self.span.end,
                len: source.len(),
            })
    }
}

/// The parsed document as a tree of [`DocNode`]s.
#[derive(Debug)]
pub(crate) struct DocumentTree {
    root: DocNode,
}

impl DocumentTree {
    /// Builds the tree from raw markdown. Never fails.
    pub(crate) fn parse(text: &str) -> Self {
        let mut stack = vec![DocNode::new(NodeKind::Other, 0..text.len())];
        // Start events beyond the depth cap are counted, not pushed, so the
        // matching End events can be paired up and discarded.
        let mut skipped = 0usize;

        // No extensions: the tasklist syntax must stay literal `[x]` text so
        // the line matchers see it in the source spans.
        for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    if skipped > 0 || stack.len() >= MAX_TREE_DEPTH {
                        skipped += 1;
                    } else {
                        stack.push(DocNode::new(NodeKind::from_tag(&tag), range));
                    }
                }
                Event::End(_) => {
                    if skipped > 0 {
                        skipped -= 1;
                    } else {
                        close_top(&mut stack);
                    }
                }
                _ => {}
            }
        }

        // Unbalanced streams leave nodes open; fold them into their parents.
        while stack.len() > 1 {
            close_top(&mut stack);
        }

        let root = stack
            .pop()
            .unwrap_or_else(|| DocNode::new(NodeKind::Other, 0..text.len()));
        Self { root }
    }

    /// The document's direct children, in source order.
    pub(crate) fn top_level(&self) -> &[DocNode] {
        &self.root.children
    }

    /// The first ordered list among the document's direct children.
    pub(crate) fn first_ordered_list(&self) -> Option<&DocNode> {
        self.root
            .children
            .iter()
            .find(|node| node.kind == NodeKind::OrderedList)
    }

    /// Whether any unordered list appears anywhere in the document.
    pub(crate) fn contains_unordered_list(&self) -> bool {
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            if node.kind == NodeKind::UnorderedList {
                return true;
            }
            pending.extend(node.children.iter());
        }
        false
    }
}

fn close_top(stack: &mut Vec<DocNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(node) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_list_with_items() {
        let text = "1. Setup\n2. Build\n";
        let tree = DocumentTree::parse(text);

        let list = tree.first_ordered_list().expect("ordered list");
        let items: Vec<_> = list
            .children()
            .iter()
            .filter(|n| n.kind() == NodeKind::ListItem)
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source_text(text).unwrap().trim(), "1. Setup");
        assert_eq!(items[1].source_text(text).unwrap().trim(), "2. Build");
    }

    #[test]
    fn test_item_span_includes_nested_content() {
        let text = "1. Models:\n   - [x] Entity A\n";
        let tree = DocumentTree::parse(text);

        let list = tree.first_ordered_list().expect("ordered list");
        let item = &list.children()[0];
        assert_eq!(item.kind(), NodeKind::ListItem);

        let raw = item.source_text(text).unwrap();
        assert!(raw.contains("Models:"));
        assert!(raw.contains("[x] Entity A"));

        // The nested checklist is a child of the item at this indentation
        assert!(item
            .children()
            .iter()
            .any(|n| n.kind() == NodeKind::UnorderedList));
    }

    #[test]
    fn test_under_indented_checklist_becomes_sibling_list() {
        // Two-space indentation is less than the `1. ` marker width, so
        // CommonMark hoists the checklist out of the item.
        let text = "1. Models:\n  - [x] Entity A\n";
        let tree = DocumentTree::parse(text);

        let list = tree.first_ordered_list().expect("ordered list");
        let item = &list.children()[0];
        assert!(!item
            .children()
            .iter()
            .any(|n| n.kind() == NodeKind::UnorderedList));
        assert!(tree.contains_unordered_list());
    }

    #[test]
    fn test_degenerate_inputs_have_no_lists() {
        for text in ["", "just prose, nothing else", "[unterminated", "   \n\n"] {
            let tree = DocumentTree::parse(text);
            assert!(tree.first_ordered_list().is_none(), "input: {text:?}");
            assert!(!tree.contains_unordered_list(), "input: {text:?}");
        }
    }

    #[test]
    fn test_deep_nesting_is_bounded() {
        // Each level adds a deeper bullet; far beyond MAX_TREE_DEPTH
        let mut text = String::new();
        for level in 0..2000 {
            text.push_str(&"  ".repeat(level));
            text.push_str("- item\n");
        }

        // Must neither panic nor recurse unboundedly
        let tree = DocumentTree::parse(&text);
        assert!(tree.contains_unordered_list());
    }
}
