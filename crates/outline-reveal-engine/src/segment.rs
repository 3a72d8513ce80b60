//! Segmenter: turns scanned boundaries into the ordered, non-overlapping
//! byte ranges revealed one step at a time.
//!
//! Consecutive boundaries are looked at pairwise, with a synthetic end
//! boundary at the document end:
//!
//! | previous  | current        | emitted                                  |
//! |-----------|----------------|------------------------------------------|
//! | any       | first boundary | nothing                                  |
//! | Heading   | anything       | nothing                                  |
//! | ListItem  | ListItem       | the previous item                        |
//! | ListItem  | Marker/Heading | the previous item, then the gap after it |
//! | ListItem  | end            | the previous item, then the gap after it |
//! | Marker    | ListItem       | the gap after the marker, then the item  |
//! | Marker    | Marker/Heading | the gap after the marker                 |
//! | Marker    | end            | the gap after the marker                 |
//!
//! Gaps holding only whitespace are skipped. An item is clipped where the
//! next boundary starts inside it, and a range starting before the end of
//! the previous one is dropped, so an item named by two rows is emitted once.
//! Whatever a clipped item still holds after its nested boundaries becomes
//! a segment of its own, emitted before the first range past the item.

use std::iter;

use log::trace;

use crate::document::Document;
use crate::rope::{self, Span};
use crate::scan::{ScanEntry, ScanKind};

/// A contiguous range revealed as a unit.
pub type Segment = Span;

#[derive(Debug, Clone, Copy)]
enum Boundary {
    Entry(ScanEntry),
    End(usize),
}

impl Boundary {
    fn start(self) -> usize {
        match self {
            Self::Entry(entry) => entry.span.start,
            Self::End(end) => end,
        }
    }
}

pub fn segment(entries: &[ScanEntry], document: &Document) -> Vec<Segment> {
    let mut out = Collector::new(document);
    let boundaries = entries
        .iter()
        .copied()
        .map(Boundary::Entry)
        .chain(iter::once(Boundary::End(document.len())));

    let mut prev: Option<ScanEntry> = None;
    for cur in boundaries {
        if let Some(prev) = prev {
            emit(prev, cur, &mut out);
        }
        if let Boundary::Entry(entry) = cur {
            prev = Some(entry);
        }
    }

    out.finish()
}

fn emit(prev: ScanEntry, cur: Boundary, out: &mut Collector<'_>) {
    let next = cur.start();

    match (prev.kind, cur) {
        (ScanKind::Heading, _) => {}
        (
            ScanKind::ListItem,
            Boundary::Entry(ScanEntry {
                kind: ScanKind::ListItem,
                ..
            }),
        ) => out.item(prev.span, next),
        (ScanKind::ListItem, _) => {
            out.item(prev.span, next);
            out.gap(prev.span.end, next);
        }
        (
            ScanKind::Marker,
            Boundary::Entry(
                item @ ScanEntry {
                    kind: ScanKind::ListItem,
                    ..
                },
            ),
        ) => {
            out.gap(prev.span.end, next);
            out.item(item.span, item.span.end);
        }
        (ScanKind::Marker, _) => out.gap(prev.span.end, next),
    }
}

struct Collector<'d> {
    document: &'d Document,
    segments: Vec<Segment>,
    /// Ends of clipped items whose remainder is still owed, innermost last.
    clipped: Vec<usize>,
}

impl<'d> Collector<'d> {
    fn new(document: &'d Document) -> Self {
        Self {
            document,
            segments: Vec::new(),
            clipped: Vec::new(),
        }
    }

    /// An item, cut short if the next boundary begins inside it.
    fn item(&mut self, item: Span, next: usize) {
        let end = if item.start < next { item.end.min(next) } else { item.end };
        self.push(Span::new(item.start, end));
        if end < item.end && self.clipped.last().is_none_or(|&outer| item.end < outer) {
            self.clipped.push(item.end);
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        self.settle_clipped(usize::MAX);
        self.segments
    }

    /// Emit the tails of clipped items that end at or before `upto`.
    fn settle_clipped(&mut self, upto: usize) {
        while let Some(&end) = self.clipped.last() {
            if end > upto {
                break;
            }
            self.clipped.pop();
            let start = self.segments.last().map_or(end, |last| last.end);
            let tail = Span::new(start, end);
            if !tail.is_empty() && !self.document.is_blank(tail) {
                trace!("remainder of clipped item {tail:?}");
                self.segments.push(tail);
            }
        }
    }

    fn gap(&mut self, start: usize, end: usize) {
        let gap = Span::new(start, end);
        if self.document.is_blank(gap) {
            trace!("skipping blank gap {gap:?}");
            return;
        }
        self.push(gap);
    }

    fn push(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        self.settle_clipped(span.start);
        if let Some(last) = self.segments.last_mut() {
            if span.start == last.start {
                // same item reached again, possibly clipped this time
                last.end = last.end.min(span.end);
                return;
            }
            if span.start < last.end {
                trace!("skipping {span:?}, overlaps {last:?}");
                return;
            }
        }
        trace!("segment {span:?} {:?}", rope::preview(self.document.rope(), span, 40));
        self.segments.push(span);
    }
}
