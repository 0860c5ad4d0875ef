//! The host screen: double-buffered cell grid, cursor, capability record,
//! and image registry (§3, §4.2).

use vtcell::{Cell, Style};
use vtwidth::{WidthMethod, graphemes, grapheme_width};

use crate::ScreenError;
use crate::capability::CapabilityRecord;
use crate::cursor::Cursor;
use crate::grid::Grid;
use crate::image::{ImageRegistry, Placement};
use crate::window::Window;
use vtcell::ImageId;

/// The application's view of the terminal: a back buffer it writes to
/// each frame, a front buffer mirroring what the terminal currently
/// shows, a cursor, discovered capabilities, and the image registry.
#[derive(Debug)]
pub struct Screen {
    front: Grid,
    back: Grid,
    cursor: Cursor,
    capabilities: CapabilityRecord,
    images: ImageRegistry,
}

impl Screen {
    /// Allocate a screen of `width x height` cells. Per §3, a `Screen` is
    /// allocated on the first resize event the application loop sees;
    /// this constructor is what that first allocation calls.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            front: Grid::new(width, height),
            back: Grid::new(width, height),
            cursor: Cursor::default(),
            capabilities: CapabilityRecord::default(),
            images: ImageRegistry::new(),
        }
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.back.width()
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.back.height()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    #[must_use]
    pub fn capabilities(&self) -> &CapabilityRecord {
        &self.capabilities
    }

    pub fn capabilities_mut(&mut self) -> &mut CapabilityRecord {
        &mut self.capabilities
    }

    #[must_use]
    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageRegistry {
        &mut self.images
    }

    /// Register an image payload, gated on the terminal having confirmed
    /// Kitty graphics support. Per §7, a terminal that lacks the protocol
    /// makes image drawing a no-op, reported as
    /// [`ScreenError::ImageUnsupported`] rather than failing the caller.
    pub fn register_image(
        &mut self,
        width_px: u32,
        height_px: u32,
        payload: Vec<u8>,
    ) -> Result<ImageId, ScreenError> {
        if !self.capabilities.kitty_graphics() {
            return Err(ScreenError::ImageUnsupported);
        }
        Ok(self.images.register(width_px, height_px, payload))
    }

    /// Place a registered image onto the grid, gated the same way as
    /// [`Screen::register_image`].
    pub fn place_image(
        &mut self,
        id: ImageId,
        placement: Placement,
    ) -> Result<(), ScreenError> {
        if !self.capabilities.kitty_graphics() {
            return Err(ScreenError::ImageUnsupported);
        }
        self.images.place(id, placement);
        Ok(())
    }

    pub(crate) fn back(&self) -> &Grid {
        &self.back
    }

    pub(crate) fn back_mut(&mut self) -> &mut Grid {
        &mut self.back
    }

    pub(crate) fn front(&self) -> &Grid {
        &self.front
    }

    pub(crate) fn front_mut(&mut self) -> &mut Grid {
        &mut self.front
    }

    /// Reallocate both grids at the new geometry, discarding prior
    /// content (§3: "reallocated on every resize"). The cursor is
    /// clamped into the new bounds.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.front.resize(width, height);
        self.back.resize(width, height);
        self.cursor.row = self.cursor.row.min(height.saturating_sub(1));
        self.cursor.col = self.cursor.col.min(width.saturating_sub(1));
    }

    /// The width method the screen currently uses for grapheme sizing,
    /// derived from the capability record.
    #[must_use]
    pub fn width_method(&self) -> WidthMethod {
        self.capabilities.width_method()
    }

    /// The whole screen as a root [`Window`].
    pub fn window(&mut self) -> Window<'_> {
        let width = self.cols();
        let height = self.rows();
        Window::new(self, 0, 0, width, height)
    }

    /// Write a single grapheme cluster into the back buffer at the
    /// absolute `(col, row)`, accounting for double-width clusters by
    /// also writing the continuation cell. No-op if `(col, row)` is
    /// outside the screen, or if a double-width cluster's continuation
    /// cell would fall outside the screen (it is truncated, per §8).
    pub(crate) fn write_cell_raw(&mut self, col: u16, row: u16, grapheme: &str, style: Style) {
        if col >= self.cols() || row >= self.rows() {
            return;
        }
        let method = self.width_method();
        let width = grapheme_width(grapheme, method);
        if width == 0 {
            // Zero-width clusters (combining marks fed in on their own,
            // rather than pre-composed by the caller) don't occupy a
            // cell; nothing to write.
            return;
        }
        if width == 2 && col + 1 >= self.cols() {
            // Double-width cell would straddle the right margin: the
            // host screen truncates rather than wraps (wrapping is a VT
            // screen concept; see vtterm).
            return;
        }
        self.back.set(col, row, Cell::new(grapheme, width as u8, style));
        if width == 2 {
            self.back.set(col + 1, row, Cell::continuation());
        }
    }

    /// Iterate grapheme clusters of `text` and write them left-to-right
    /// starting at `(col, row)`. Callers typically go through
    /// [`Window::write_str`] instead, which clips to a sub-rectangle
    /// first.
    pub(crate) fn write_str_raw(&mut self, col: u16, row: u16, text: &str, style: Style) {
        let mut c = col;
        for g in graphemes(text) {
            if c >= self.cols() {
                break;
            }
            let w = grapheme_width(g, self.width_method()).max(1);
            self.write_cell_raw(c, row, g, style);
            c += w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reallocates_both_buffers_blank() {
        let mut s = Screen::new(4, 2);
        s.window().write_str(0, 0, "ab", Style::default());
        s.resize(2, 2);
        assert_eq!(s.cols(), 2);
        assert_eq!(s.back().get(0, 0).unwrap().grapheme(), " ");
    }

    #[test]
    fn register_image_without_kitty_graphics_is_unsupported() {
        let mut s = Screen::new(4, 2);
        assert!(matches!(
            s.register_image(1, 1, vec![0xff]),
            Err(ScreenError::ImageUnsupported)
        ));
    }

    #[test]
    fn register_image_with_kitty_graphics_succeeds() {
        let mut s = Screen::new(4, 2);
        s.capabilities_mut().observe_kitty_graphics();
        let id = s.register_image(1, 1, vec![0xff]).unwrap();
        assert!(s.images().get(id).is_some());
        assert!(s.place_image(id, crate::image::Placement {
            col: 0,
            row: 0,
            cols: 1,
            rows: 1,
        })
        .is_ok());
        assert_eq!(s.images().get(id).unwrap().placements.len(), 1);
    }

    #[test]
    fn double_width_at_right_margin_is_truncated() {
        let mut s = Screen::new(3, 1);
        s.write_cell_raw(2, 0, "界", Style::default());
        // Truncated: the cell at col 2 is left untouched (still blank).
        assert_eq!(s.back().get(2, 0).unwrap().grapheme(), " ");
    }

    #[test]
    fn double_width_writes_continuation_cell() {
        let mut s = Screen::new(3, 1);
        s.write_cell_raw(0, 0, "界", Style::default());
        assert_eq!(s.back().get(0, 0).unwrap().width(), 2);
        assert!(s.back().get(1, 0).unwrap().is_continuation());
    }
}
