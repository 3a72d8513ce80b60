//! The reveal cursor: the state machine that walks a slide's segments.
//!
//! ```text
//! Uninitialized --init--> Ready --advance--> Revealing --advance--> Complete
//!       ^                   |                    |                     |
//!       +-------------------+------reset---------+---------------------+
//! ```
//!
//! `current` is the index of the next segment to reveal. The cursor owns
//! every overlay it creates and releases them exactly once, on `reset`,
//! `end` or a repeated `init`.

use std::ops::ControlFlow;

use log::debug;

use crate::document::Document;
use crate::fold::FoldController;
use crate::host::{OverlayId, RevealHost};
use crate::options::RevealOptions;
use crate::scan::{scan, ScanKind};
use crate::segment::{segment, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Uninitialized,
    Ready,
    Revealing,
    Complete,
}

#[derive(Debug, Default)]
pub struct RevealCursor {
    options: RevealOptions,
    current: usize,
    segments: Vec<Segment>,
    /// One overlay per segment, same order.
    overlays: Vec<OverlayId>,
    /// Overlays keeping pause markers out of sight.
    marker_overlays: Vec<OverlayId>,
    folds: FoldController,
    large_text: bool,
    initialized: bool,
}

impl RevealCursor {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Build segments for `document` and hide them all.
    ///
    /// Overlays left over from an earlier `init` are released first.
    pub fn init<H: RevealHost + ?Sized>(&mut self, document: &Document, host: &mut H) {
        self.release(host);

        let entries = scan(document, self.options.accept_first_level_only);
        self.segments = segment(&entries, document);
        self.folds = FoldController::from_entries(&entries);

        for &seg in &self.segments {
            let id = host.create(seg);
            host.hide(id);
            host.dim_images(id);
            self.overlays.push(id);
        }

        for entry in entries.iter().filter(|e| e.kind == ScanKind::Marker) {
            let id = host.create(entry.span);
            host.hide(id);
            self.marker_overlays.push(id);
        }

        self.large_text = document.fading_override().unwrap_or_else(|| {
            document.char_count(document.first_section_span()) > self.options.large_text_threshold
        });
        self.current = 0;
        self.initialized = true;

        debug!(
            "init: {} segments, {} markers, {} foldable items, large text: {}",
            self.segments.len(),
            self.marker_overlays.len(),
            self.folds.len(),
            self.large_text
        );
    }

    /// Reveal the next segment. Returns false once everything is shown.
    pub fn advance<H: RevealHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.has_more() {
            return false;
        }
        let current = self.current;

        if self.large_text {
            if let Some(old) = current.checked_sub(self.options.fold_age) {
                self.folds.fold(old, host);
            }

            host.before_unfold(current);
            self.folds.unfold(current, host);
            host.after_unfold(current);

            for (index, &id) in self.overlays[..current].iter().enumerate().rev() {
                host.set_fade(id, self.options.fade_color(current - index));
            }
        }

        let id = self.overlays[current];
        host.clear_style(id);
        host.undim_images(id);
        self.current += 1;

        debug!("advance: revealed segment {current} of {}", self.segments.len());
        true
    }

    /// Reveal every remaining segment.
    pub fn jump_to_end<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        while self.advance(host) {}
    }

    /// Reveal the remaining segments one by one, calling `between` after
    /// each step. Returning `ControlFlow::Break` stops early.
    pub fn jump_to_end_with<H, F>(&mut self, host: &mut H, mut between: F)
    where
        H: RevealHost + ?Sized,
        F: FnMut(&mut H) -> ControlFlow<()>,
    {
        while self.advance(host) {
            if between(host).is_break() {
                debug!("jump to end stopped at segment {}", self.current);
                break;
            }
        }
    }

    /// Undo everything `init` and `advance` did to the host.
    pub fn reset<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        debug!("reset after {} of {} segments", self.current, self.segments.len());
        self.release(host);
    }

    /// Same as [`reset`](Self::reset); called when the presentation ends.
    pub fn end<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        self.reset(host);
    }

    pub fn has_more(&self) -> bool {
        self.current < self.segments.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_large_text(&self) -> bool {
        self.large_text
    }

    pub fn state(&self) -> CursorState {
        if !self.initialized {
            CursorState::Uninitialized
        } else if self.current == self.segments.len() {
            CursorState::Complete
        } else if self.current == 0 {
            CursorState::Ready
        } else {
            CursorState::Revealing
        }
    }

    fn release<H: RevealHost + ?Sized>(&mut self, host: &mut H) {
        for id in self.overlays.drain(..) {
            host.undim_images(id);
            host.delete(id);
        }
        for id in self.marker_overlays.drain(..) {
            host.delete(id);
        }
        if self.large_text {
            self.folds.unfold_all(host);
        }

        self.segments.clear();
        self.folds = FoldController::default();
        self.large_text = false;
        self.current = 0;
        self.initialized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayState, Visibility};
    use crate::tests::{large_text_options, revealed_text};
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_uninitialized() {
        let cursor = RevealCursor::default();
        assert_eq!(cursor.state(), CursorState::Uninitialized);
        assert!(!cursor.has_more());
    }

    #[test]
    fn walks_through_states() {
        let doc = Document::parse("- a\n- b\n");
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::default();

        cursor.init(&doc, &mut display);
        assert_eq!(cursor.state(), CursorState::Ready);
        cursor.advance(&mut display);
        assert_eq!(cursor.state(), CursorState::Revealing);
        cursor.advance(&mut display);
        assert_eq!(cursor.state(), CursorState::Complete);
        cursor.reset(&mut display);
        assert_eq!(cursor.state(), CursorState::Uninitialized);
    }

    #[test]
    fn empty_document_is_complete_at_once() {
        let doc = Document::parse("* Title\nplain text\n");
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::default();

        cursor.init(&doc, &mut display);
        assert!(cursor.is_empty());
        assert_eq!(cursor.state(), CursorState::Complete);
        assert!(!cursor.advance(&mut display));
        assert_eq!(display.live_overlays(), 0);
    }

    #[test]
    fn init_hides_segments_and_markers() {
        let doc = Document::parse("Hello\n# pause\nWorld\n");
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::default();

        cursor.init(&doc, &mut display);
        assert_eq!(display.live_overlays(), 2);
        assert_eq!(display.style_at(0), Visibility::Visible);
        assert_eq!(display.style_at(6), Visibility::Hidden);
        assert_eq!(display.style_at(14), Visibility::Hidden);
        assert_eq!(revealed_text(&doc, &display), "Hello\n");
    }

    #[test]
    fn repeated_init_releases_previous_overlays() {
        let doc = Document::parse("- a\n- b\n# pause\nc\n");
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::default();

        cursor.init(&doc, &mut display);
        let first = display.live_overlays();
        cursor.advance(&mut display);
        cursor.init(&doc, &mut display);

        assert_eq!(display.live_overlays(), first);
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn images_stay_dimmed_until_revealed() {
        let doc = Document::parse("- [[one.png]]\n- [[two.png]]\n");
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::default();

        cursor.init(&doc, &mut display);
        assert_eq!(display.dimmed_images(), 2);

        cursor.advance(&mut display);
        assert!(!display.is_image_dimmed(doc.images()[0]));
        assert!(display.is_image_dimmed(doc.images()[1]));

        cursor.reset(&mut display);
        assert_eq!(display.dimmed_images(), 0);
    }

    #[test]
    fn small_slides_neither_fade_nor_fold() {
        let doc = Document::parse("- a\n- b\n- c\n");
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::default();

        cursor.init(&doc, &mut display);
        assert!(!cursor.is_large_text());
        cursor.jump_to_end(&mut display);

        assert_eq!(display.styled_overlays(), 0);
        assert_eq!(display.folded_items(), 0);
        assert_eq!(display.unfold_notifications(), (0, 0));
    }

    #[test]
    fn large_text_fades_by_distance() {
        let doc = Document::parse("- a\n- b\n- c\n- d\n- e\n");
        let options = large_text_options();
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::new(options.clone());

        cursor.init(&doc, &mut display);
        assert!(cursor.is_large_text());
        for _ in 0..4 {
            cursor.advance(&mut display);
        }

        let style = |index: usize| display.style_at(cursor.segments()[index].start);
        assert_eq!(style(0), Visibility::Faded(options.disabled_color));
        assert_eq!(style(1), Visibility::Faded(options.distance_colors[1]));
        assert_eq!(style(2), Visibility::Faded(options.distance_colors[0]));
        assert_eq!(style(3), Visibility::Visible);
        assert_eq!(style(4), Visibility::Hidden);
        assert_eq!(display.unfold_notifications(), (4, 4));
    }

    #[test]
    fn jump_to_end_with_can_stop_early() {
        let doc = Document::parse("- a\n- b\n- c\n- d\n");
        let mut display = DisplayState::new(&doc);
        let mut cursor = RevealCursor::default();
        cursor.init(&doc, &mut display);

        let mut steps = 0;
        cursor.jump_to_end_with(&mut display, |_| {
            steps += 1;
            if steps == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(cursor.current(), 2);
        assert!(cursor.has_more());
    }
}
