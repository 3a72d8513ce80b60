//! Marker scanner: picks the headings, list items and pause markers that
//! delimit reveal segments.

use serde::Serialize;

use crate::document::{Document, NodeKind};
use crate::rope::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScanKind {
    Heading,
    ListItem,
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    pub kind: ScanKind,
    pub span: Span,
}

impl ScanEntry {
    pub const fn new(kind: ScanKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Walk the document's nodes in order and keep the segment boundaries.
///
/// With `accept_first_level_only`, a list item is kept only when its indent
/// is no deeper than the smallest indent seen so far. The minimum is a
/// running one: a shallower item later on lowers it for everything after,
/// but never rejects items already accepted.
pub fn scan(document: &Document, accept_first_level_only: bool) -> Vec<ScanEntry> {
    let mut min_indent = usize::MAX;

    document
        .nodes()
        .iter()
        .filter_map(|node| {
            let kind = match node.kind {
                NodeKind::Heading => ScanKind::Heading,
                NodeKind::ListItem => {
                    let indent = node.indent?;
                    min_indent = min_indent.min(indent);
                    if accept_first_level_only && indent > min_indent {
                        return None;
                    }
                    ScanKind::ListItem
                }
                NodeKind::Comment | NodeKind::Directive if node.is_pause_marker() => ScanKind::Marker,
                NodeKind::Comment | NodeKind::Directive => return None,
            };
            Some(ScanEntry::new(kind, node.span))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(entries: &[ScanEntry]) -> Vec<ScanKind> {
        entries.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn keeps_boundaries_only() {
        let doc = Document::parse("* S\ntext\n# note\n# pause\n- a\n#+TITLE: x\n");
        assert_eq!(
            kinds(&scan(&doc, true)),
            vec![ScanKind::Heading, ScanKind::Marker, ScanKind::ListItem]
        );
    }

    #[test]
    fn nested_items_are_skipped_at_first_level() {
        let doc = Document::parse("- a\n  - a1\n- b\n");
        let entries = scan(&doc, true);
        let texts: Vec<_> = entries.iter().map(|e| doc.slice(e.span)).collect();
        assert_eq!(texts, vec!["- a\n  - a1\n", "- b\n"]);
    }

    #[test]
    fn every_item_kept_when_not_first_level_only() {
        let doc = Document::parse("- a\n  - a1\n- b\n");
        assert_eq!(scan(&doc, false).len(), 3);
    }

    #[test]
    fn running_minimum_lowers_but_never_rejects_earlier_items() {
        let doc = Document::parse("  - a\n  - b\n- c\n  - d\n");
        let entries = scan(&doc, true);
        let texts: Vec<_> = entries.iter().map(|e| doc.slice(e.span)).collect();
        // d sits under c, whose indent lowered the minimum to zero
        assert_eq!(texts, vec!["  - a\n", "  - b\n", "- c\n  - d\n"]);
    }

    #[test]
    fn empty_document_scans_to_nothing() {
        assert!(scan(&Document::parse(""), true).is_empty());
    }
}
