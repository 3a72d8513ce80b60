//! In-memory reveal host that records overlay styles, folds and dimmed
//! images and answers what a given byte offset should look like.

use std::collections::{BTreeMap, BTreeSet};

use xi_rope::Rope;

use crate::document::Document;
use crate::host::{FoldHost, OverlayHost, OverlayId};
use crate::options::Color;
use crate::rope::{line_end, Span};

/// How a piece of text is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    Hidden,
    Faded(Color),
}

#[derive(Debug, Clone, Copy)]
struct Overlay {
    span: Span,
    style: Visibility,
}

#[derive(Debug, Clone)]
pub struct DisplayState {
    rope: Rope,
    images: Vec<Span>,
    overlays: BTreeMap<OverlayId, Overlay>,
    next_id: usize,
    dimmed: BTreeSet<Span>,
    /// Folded item span mapped to the start of its hidden body.
    folded: BTreeMap<Span, usize>,
    before_unfold_calls: usize,
    after_unfold_calls: usize,
}

impl DisplayState {
    pub fn new(document: &Document) -> Self {
        Self {
            rope: document.rope().clone(),
            images: document.images().to_vec(),
            overlays: BTreeMap::new(),
            next_id: 0,
            dimmed: BTreeSet::new(),
            folded: BTreeMap::new(),
            before_unfold_calls: 0,
            after_unfold_calls: 0,
        }
    }

    /// Style at `offset`. Hidden wins over faded; among fades the most
    /// recently created overlay wins.
    pub fn style_at(&self, offset: usize) -> Visibility {
        let mut style = Visibility::Visible;
        for overlay in self.overlays.values().filter(|o| o.span.contains(offset)) {
            match overlay.style {
                Visibility::Hidden => return Visibility::Hidden,
                Visibility::Faded(color) => style = Visibility::Faded(color),
                Visibility::Visible => {}
            }
        }
        style
    }

    /// True when `offset` lies in the body of a folded item, past its first
    /// line.
    pub fn is_folded_away(&self, offset: usize) -> bool {
        self.folded
            .iter()
            .any(|(item, &body)| body <= offset && offset < item.end)
    }

    pub fn is_folded(&self, item: Span) -> bool {
        self.folded.contains_key(&item)
    }

    pub fn is_image_dimmed(&self, image: Span) -> bool {
        self.dimmed.contains(&image)
    }

    pub fn overlay(&self, id: OverlayId) -> Option<(Span, Visibility)> {
        self.overlays.get(&id).map(|o| (o.span, o.style))
    }

    pub fn live_overlays(&self) -> usize {
        self.overlays.len()
    }

    /// Overlays currently hiding or fading text.
    pub fn styled_overlays(&self) -> usize {
        self.overlays
            .values()
            .filter(|o| o.style != Visibility::Visible)
            .count()
    }

    pub fn dimmed_images(&self) -> usize {
        self.dimmed.len()
    }

    pub fn folded_items(&self) -> usize {
        self.folded.len()
    }

    /// `(before, after)` unfold notification counts.
    pub fn unfold_notifications(&self) -> (usize, usize) {
        (self.before_unfold_calls, self.after_unfold_calls)
    }

    fn set_style(&mut self, id: OverlayId, style: Visibility) {
        if let Some(overlay) = self.overlays.get_mut(&id) {
            overlay.style = style;
        }
    }

    fn images_under(&self, id: OverlayId) -> Vec<Span> {
        match self.overlays.get(&id) {
            Some(overlay) => self
                .images
                .iter()
                .copied()
                .filter(|&image| overlay.span.encloses(image))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl OverlayHost for DisplayState {
    fn create(&mut self, span: Span) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        self.overlays.insert(
            id,
            Overlay {
                span,
                style: Visibility::Visible,
            },
        );
        id
    }

    fn hide(&mut self, id: OverlayId) {
        self.set_style(id, Visibility::Hidden);
    }

    fn set_fade(&mut self, id: OverlayId, color: Color) {
        self.set_style(id, Visibility::Faded(color));
    }

    fn clear_style(&mut self, id: OverlayId) {
        self.set_style(id, Visibility::Visible);
    }

    fn dim_images(&mut self, id: OverlayId) {
        let images = self.images_under(id);
        self.dimmed.extend(images);
    }

    fn undim_images(&mut self, id: OverlayId) {
        for image in self.images_under(id) {
            self.dimmed.remove(&image);
        }
    }

    fn delete(&mut self, id: OverlayId) {
        self.overlays.remove(&id);
    }
}

impl FoldHost for DisplayState {
    fn fold(&mut self, item: Span) {
        let body = line_end(&self.rope, item.start).min(item.end);
        self.folded.insert(item, body);
    }

    fn unfold(&mut self, item: Span) {
        self.folded.remove(&item);
    }

    fn before_unfold(&mut self, _index: usize) {
        self.before_unfold_calls += 1;
    }

    fn after_unfold(&mut self, _index: usize) {
        self.after_unfold_calls += 1;
    }
}
