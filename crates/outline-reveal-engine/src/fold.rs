//! Fold controller: collapses and expands the slide's top-level list items
//! by index.

use log::trace;

use crate::host::FoldHost;
use crate::rope::Span;
use crate::scan::{ScanEntry, ScanKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldController {
    items: Vec<Span>,
}

impl FoldController {
    pub fn new(items: Vec<Span>) -> Self {
        Self { items }
    }

    /// The list items the scanner kept, in document order.
    pub fn from_entries(entries: &[ScanEntry]) -> Self {
        Self::new(
            entries
                .iter()
                .filter(|entry| entry.kind == ScanKind::ListItem)
                .map(|entry| entry.span)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<Span> {
        self.items.get(index).copied()
    }

    /// Fold item `index`. Out-of-range indices do nothing.
    pub fn fold<H: FoldHost + ?Sized>(&self, index: usize, host: &mut H) -> bool {
        match self.item(index) {
            Some(item) => {
                trace!("folding item {index} at {item:?}");
                host.fold(item);
                true
            }
            None => false,
        }
    }

    /// Unfold item `index`. Out-of-range indices do nothing.
    pub fn unfold<H: FoldHost + ?Sized>(&self, index: usize, host: &mut H) -> bool {
        match self.item(index) {
            Some(item) => {
                trace!("unfolding item {index} at {item:?}");
                host.unfold(item);
                true
            }
            None => false,
        }
    }

    pub fn unfold_all<H: FoldHost + ?Sized>(&self, host: &mut H) {
        for &item in &self.items {
            host.unfold(item);
        }
    }
}
