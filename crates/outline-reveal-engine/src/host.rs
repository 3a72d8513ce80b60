//! The seams between the reveal engine and whatever draws the slide.
//!
//! The cursor never touches text directly. It asks a host to create
//! overlays over byte ranges, to hide, fade or clear them, and to fold or
//! unfold list items. [`crate::DisplayState`] is an in-memory host used by
//! the terminal presenter and by tests.

use crate::options::Color;
use crate::rope::Span;

/// Handle to an overlay owned by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(pub usize);

/// Styled ranges over the document.
///
/// Calls with an id the host does not know must be ignored.
pub trait OverlayHost {
    /// Create an overlay over `span`. It starts out unstyled.
    fn create(&mut self, span: Span) -> OverlayId;

    /// Make the overlay's text invisible.
    fn hide(&mut self, id: OverlayId);

    /// Show the overlay's text in a faded colour.
    fn set_fade(&mut self, id: OverlayId, color: Color);

    /// Drop any style, leaving the text shown normally.
    fn clear_style(&mut self, id: OverlayId);

    /// Dim every image inside the overlay. Repeated calls are no-ops.
    fn dim_images(&mut self, id: OverlayId);

    /// Restore every image inside the overlay. Repeated calls are no-ops.
    fn undim_images(&mut self, id: OverlayId);

    /// Release the overlay. The id is dead afterwards.
    fn delete(&mut self, id: OverlayId);
}

/// Folding of list items down to their first line.
pub trait FoldHost {
    fn fold(&mut self, item: Span);

    fn unfold(&mut self, item: Span);

    /// Called before the cursor unfolds the item at `index`.
    fn before_unfold(&mut self, _index: usize) {}

    /// Called after the cursor unfolds the item at `index`.
    fn after_unfold(&mut self, _index: usize) {}
}

/// Everything the reveal cursor needs from its host.
pub trait RevealHost: OverlayHost + FoldHost {}

impl<T: OverlayHost + FoldHost + ?Sized> RevealHost for T {}
