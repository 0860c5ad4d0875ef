//! A single grid position.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::hyperlink::Hyperlink;
use crate::image::ImageCellMarker;
use crate::style::Style;

/// Inline storage for a cell's grapheme cluster bytes. Most clusters are a
/// single ASCII byte or a 1-4 byte UTF-8 scalar; 16 bytes comfortably
/// covers multi-codepoint emoji ZWJ sequences without spilling to the
/// heap.
pub type GraphemeBuf = SmallVec<[u8; 16]>;

/// A single cell in a [`Screen`](crate::Screen) grid.
///
/// # Invariant
///
/// For a grapheme cluster of display width `W > 1`, the `W - 1` cells
/// immediately to its right in the same row must be
/// [continuation cells](Cell::continuation) and must never be rendered
/// independently — [`Cell::width`] reports `0` for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    grapheme: GraphemeBuf,
    width: u8,
    pub style: Style,
    pub hyperlink: Option<Arc<Hyperlink>>,
    pub image: Option<ImageCellMarker>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// A single blank (space) cell with default style.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            grapheme: GraphemeBuf::from_slice(b" "),
            width: 1,
            style: Style::default(),
            hyperlink: None,
            image: None,
        }
    }

    /// The zero-width continuation cell that sits to the right of a
    /// double-width grapheme. Never rendered on its own.
    #[must_use]
    pub fn continuation() -> Self {
        Self {
            grapheme: GraphemeBuf::new(),
            width: 0,
            style: Style::default(),
            hyperlink: None,
            image: None,
        }
    }

    /// Construct a cell holding `grapheme` with the given display `width`
    /// (1 or 2; callers are responsible for writing the matching
    /// continuation cell to the right).
    #[must_use]
    pub fn new(grapheme: &str, width: u8, style: Style) -> Self {
        debug_assert!(width <= 2, "a cell's own width must be 1 or 2");
        Self {
            grapheme: GraphemeBuf::from_slice(grapheme.as_bytes()),
            width,
            style,
            hyperlink: None,
            image: None,
        }
    }

    #[must_use]
    pub fn with_hyperlink(mut self, hyperlink: Arc<Hyperlink>) -> Self {
        self.hyperlink = Some(hyperlink);
        self
    }

    #[must_use]
    pub fn with_image(mut self, marker: ImageCellMarker) -> Self {
        self.image = Some(marker);
        self
    }

    /// The cell's grapheme cluster, as UTF-8 text.
    ///
    /// # Panics
    ///
    /// Panics if the stored bytes aren't valid UTF-8, which can't happen
    /// through the public constructors.
    #[must_use]
    pub fn grapheme(&self) -> &str {
        std::str::from_utf8(&self.grapheme).expect("cell grapheme is always valid UTF-8")
    }

    /// Display width in columns: 1 or 2 for a cell holding content, 0 for
    /// a continuation cell.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_a_single_space() {
        let c = Cell::blank();
        assert_eq!(c.grapheme(), " ");
        assert_eq!(c.width(), 1);
        assert!(!c.is_continuation());
    }

    #[test]
    fn continuation_has_zero_width_and_empty_grapheme() {
        let c = Cell::continuation();
        assert_eq!(c.grapheme(), "");
        assert_eq!(c.width(), 0);
        assert!(c.is_continuation());
    }

    #[test]
    fn wide_cell_keeps_its_cluster_and_width() {
        let c = Cell::new("界", 2, Style::default());
        assert_eq!(c.grapheme(), "界");
        assert_eq!(c.width(), 2);
    }
}
