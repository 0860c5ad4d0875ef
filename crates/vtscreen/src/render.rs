//! The cell-diff renderer (§4.2, §8).
//!
//! Walks the back screen in row-major order and emits the minimum
//! escape-sequence stream needed to make the terminal's display match it,
//! updating the front buffer only after each cell's bytes have actually
//! been written.

use std::io::{self, Write};
use std::sync::Arc;

use vtcell::{Hyperlink, Style};

use crate::screen::Screen;

/// Begin synchronized output (DEC private mode 2026).
const SYNC_BEGIN: &[u8] = b"\x1b[?2026h";
/// End synchronized output.
const SYNC_END: &[u8] = b"\x1b[?2026l";

/// Diffs a [`Screen`]'s back buffer against its front buffer and emits
/// the escape-sequence stream that reconciles them.
///
/// A `Renderer` is long-lived across frames: it remembers the style and
/// cursor position it last emitted so that consecutive frames don't
/// re-emit an SGR reset or cursor move they don't need.
#[derive(Debug)]
pub struct Renderer {
    last_style: Style,
    last_hyperlink: Option<Arc<Hyperlink>>,
    /// `(row, col_after_last_cell)` of the last cell emitted, used for
    /// the "implicit advance" cursor-move optimization.
    last_position: Option<(u16, u16)>,
    scratch: Vec<u8>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_style: Style::default(),
            last_hyperlink: None,
            last_position: None,
            scratch: Vec::with_capacity(256),
        }
    }

    /// Render `screen`'s back buffer to `out`, updating its front buffer
    /// to match. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `out`. A failed write leaves the
    /// front buffer exactly as it was before the call for any cell not
    /// yet successfully flushed, so a caller may retry.
    pub fn render<W: Write>(&mut self, screen: &mut Screen, out: &mut W) -> io::Result<usize> {
        let sync = screen.capabilities().sync_output();
        let mut total = 0;

        if sync {
            out.write_all(SYNC_BEGIN)?;
            total += SYNC_BEGIN.len();
        }

        let rows = screen.rows();
        let cols = screen.cols();
        for row in 0..rows {
            let mut col = 0;
            while col < cols {
                let back_cell = screen.back().get(col, row).expect("in bounds").clone();
                if back_cell.is_continuation() {
                    col += 1;
                    continue;
                }
                let front_cell = screen.front().get(col, row).expect("in bounds");
                if *front_cell == back_cell {
                    col += back_cell.width().max(1) as u16;
                    continue;
                }

                self.scratch.clear();
                self.emit_cell(&back_cell, col, row);
                out.write_all(&self.scratch)?;
                total += self.scratch.len();

                let width = back_cell.width().max(1) as u16;
                // Commit to the front buffer only now that the bytes for
                // this cell have been fully written.
                let width_u8 = back_cell.width();
                screen.front_mut().set(col, row, back_cell);
                if width_u8 == 2 {
                    screen
                        .front_mut()
                        .set(col + 1, row, vtcell::Cell::continuation());
                }
                self.last_position = Some((row, col + width));
                col += width;
            }
        }

        if sync {
            out.write_all(SYNC_END)?;
            total += SYNC_END.len();
        }
        Ok(total)
    }

    fn emit_cell(&mut self, cell: &vtcell::Cell, col: u16, row: u16) {
        let needs_move = match self.last_position {
            Some((last_row, last_col)) => !(last_row == row && last_col == col),
            None => true,
        };
        if needs_move {
            // 1-indexed on the wire.
            let _ = write!(self.scratch, "\x1b[{};{}H", row + 1, col + 1);
        }

        let _ = cell.style.write_transition(&self.last_style, &mut self.scratch);
        self.last_style = cell.style;

        match (&self.last_hyperlink, &cell.hyperlink) {
            (None, Some(new)) => {
                let _ = new.write_open(&mut self.scratch);
            }
            (Some(old), Some(new)) if !Arc::ptr_eq(old, new) && old.uri != new.uri => {
                let _ = Hyperlink::write_close(&mut self.scratch);
                let _ = new.write_open(&mut self.scratch);
            }
            (Some(_), None) => {
                let _ = Hyperlink::write_close(&mut self.scratch);
            }
            _ => {}
        }
        self.last_hyperlink = cell.hyperlink.clone();

        self.scratch.extend_from_slice(cell.grapheme().as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_to_string(screen: &mut Screen) -> String {
        let mut renderer = Renderer::new();
        let mut buf = Vec::new();
        renderer.render(screen, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn equal_front_and_back_emits_nothing() {
        let mut screen = Screen::new(3, 1);
        assert_eq!(render_to_string(&mut screen), "");
    }

    #[test]
    fn writes_then_render_produces_move_and_content() {
        let mut screen = Screen::new(3, 1);
        screen.window().write_str(0, 0, "abc", Style::default());
        let out = render_to_string(&mut screen);
        assert_eq!(out, "\x1b[1;1Habc");
    }

    #[test]
    fn rerender_after_clean_frame_emits_nothing() {
        let mut screen = Screen::new(3, 1);
        screen.window().write_str(0, 0, "abc", Style::default());
        let mut renderer = Renderer::new();
        let mut buf = Vec::new();
        renderer.render(&mut screen, &mut buf).unwrap();
        buf.clear();
        renderer.render(&mut screen, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn front_matches_back_after_render() {
        let mut screen = Screen::new(3, 1);
        screen.window().write_str(0, 0, "xy", Style::default());
        let mut renderer = Renderer::new();
        let mut buf = Vec::new();
        renderer.render(&mut screen, &mut buf).unwrap();
        assert_eq!(screen.front().get(0, 0), screen.back().get(0, 0));
        assert_eq!(screen.front().get(1, 0), screen.back().get(1, 0));
    }

    #[test]
    fn contiguous_writes_skip_redundant_cursor_moves() {
        let mut screen = Screen::new(5, 1);
        screen.window().write_str(0, 0, "ab", Style::default());
        let out = render_to_string(&mut screen);
        // A single move, then both cells with no move in between.
        assert_eq!(out.matches("H").count(), 1);
    }
}
