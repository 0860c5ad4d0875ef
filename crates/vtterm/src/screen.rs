//! The VT screen: a scrollable cell grid with xterm-subset semantics —
//! scrolling region, tab stops, cursor autowrap, an optional alternate
//! grid, and a scrollback ring over the primary grid.

use std::collections::VecDeque;

use vtcell::{Cell, Style};
use vtscreen::{Cursor, CursorShape};
use vtwidth::{grapheme_width, WidthMethod};

/// `ED`/`EL` erase extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    ToEnd,
    ToStart,
    All,
    /// xterm extension (`CSI 3 J`): erase the screen and drop scrollback.
    AllAndScrollback,
}

/// A row-major grid of cells, sized to a fixed width/height. A sibling of
/// [`vtscreen::Grid`] rather than a wrapper around it: the VT screen's
/// write path owns autowrap and combining-character placement, which the
/// host screen's `write_cell_raw` deliberately leaves to it.
#[derive(Debug, Clone)]
struct VtGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl VtGrid {
    fn new(width: u16, height: u16) -> Self {
        let count = usize::from(width) * usize::from(height);
        Self { width, height, cells: vec![Cell::blank(); count] }
    }

    fn idx(&self, col: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.width) + usize::from(col)
    }

    fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        (col < self.width && row < self.height).then(|| &self.cells[self.idx(col, row)])
    }

    fn set(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.width && row < self.height {
            let idx = self.idx(col, row);
            self.cells[idx] = cell;
        }
    }

    fn row(&self, row: u16) -> &[Cell] {
        let start = self.idx(0, row);
        &self.cells[start..start + usize::from(self.width)]
    }

    fn row_mut(&mut self, row: u16) -> &mut [Cell] {
        let start = self.idx(0, row);
        let width = usize::from(self.width);
        &mut self.cells[start..start + width]
    }

    fn clear(&mut self, style: Style) {
        for cell in &mut self.cells {
            *cell = Cell::new(" ", 1, style);
        }
    }
}

/// Primary or alternate grid, plus cursor, modes, and scrollback: the full
/// state one PTY-hosted emulator carries.
#[derive(Debug)]
pub struct VtScreen {
    primary: VtGrid,
    alternate: VtGrid,
    using_alternate: bool,
    scrollback: VecDeque<Vec<Cell>>,
    scrollback_cap: usize,
    cursor: Cursor,
    primary_cursor_on_alt_enter: Option<Cursor>,
    pending_wrap: bool,
    style: Style,
    /// Scrolling region, rows and columns. `left`/`right` are carried for
    /// data-model completeness (DECSLRM horizontal margins) but are not
    /// mutated by any implemented sequence, which only covers DECSTBM.
    top: u16,
    bottom: u16,
    left: u16,
    right: u16,
    tab_stops: Vec<bool>,
    last_grapheme: Option<String>,
    origin_mode: bool,
    autowrap: bool,
    sync_output: bool,
    dirty: Vec<bool>,
    width: u16,
    height: u16,
    width_method: WidthMethod,
}

impl VtScreen {
    #[must_use]
    pub fn new(width: u16, height: u16, scrollback_cap: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            primary: VtGrid::new(width, height),
            alternate: VtGrid::new(width, height),
            using_alternate: false,
            scrollback: VecDeque::new(),
            scrollback_cap,
            cursor: Cursor::default(),
            primary_cursor_on_alt_enter: None,
            pending_wrap: false,
            style: Style::default(),
            top: 0,
            bottom: height - 1,
            left: 0,
            right: width - 1,
            tab_stops: default_tab_stops(width),
            last_grapheme: None,
            origin_mode: false,
            autowrap: true,
            sync_output: false,
            dirty: vec![true; usize::from(width) * usize::from(height)],
            width,
            height,
            width_method: WidthMethod::Unicode,
        }
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    #[must_use]
    pub fn is_alternate(&self) -> bool {
        self.using_alternate
    }

    #[must_use]
    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        self.grid().get(col, row)
    }

    /// Resize both grids to `width`×`height`, discarding and reallocating
    /// their contents, matching the host screen's own `resize` semantics.
    pub fn resize(&mut self, width: u16, height: u16) {
        let width = width.max(1);
        let height = height.max(1);
        self.primary = VtGrid::new(width, height);
        self.alternate = VtGrid::new(width, height);
        self.width = width;
        self.height = height;
        self.top = 0;
        self.bottom = height - 1;
        self.left = 0;
        self.right = width - 1;
        self.tab_stops = default_tab_stops(width);
        self.cursor.row = self.cursor.row.min(height - 1);
        self.cursor.col = self.cursor.col.min(width - 1);
        self.pending_wrap = false;
        self.dirty = vec![true; usize::from(width) * usize::from(height)];
    }

    fn grid(&self) -> &VtGrid {
        if self.using_alternate { &self.alternate } else { &self.primary }
    }

    fn grid_mut(&mut self) -> &mut VtGrid {
        if self.using_alternate { &mut self.alternate } else { &mut self.primary }
    }

    fn mark_dirty(&mut self, col: u16, row: u16) {
        if col < self.width && row < self.height {
            let idx = usize::from(row) * usize::from(self.width) + usize::from(col);
            self.dirty[idx] = true;
        }
    }

    /// Copy every dirty cell into `window` and clear the dirty bits.
    /// Skipped entirely while synchronized output (mode 2026) is active:
    /// the whole point of that mode is to defer visible updates until it's
    /// cleared.
    pub fn render_into(&mut self, window: &mut vtscreen::Window<'_>) {
        if self.sync_output {
            return;
        }
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = usize::from(row) * usize::from(self.width) + usize::from(col);
                if !self.dirty[idx] {
                    continue;
                }
                self.dirty[idx] = false;
                if let Some(cell) = self.grid().get(col, row) {
                    if cell.is_continuation() {
                        continue;
                    }
                    window.write_cell(col, row, cell.grapheme(), cell.style);
                }
            }
        }
    }

    pub fn set_sync_output(&mut self, on: bool) {
        self.sync_output = on;
    }

    #[must_use]
    pub fn sync_output(&self) -> bool {
        self.sync_output
    }

    pub fn set_origin_mode(&mut self, on: bool) {
        self.origin_mode = on;
        self.move_cursor_to(0, 0);
    }

    pub fn set_autowrap(&mut self, on: bool) {
        self.autowrap = on;
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor.visible = visible;
    }

    pub fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.cursor.shape = shape;
    }

    /// Toggle the alternate screen buffer (mode 1049). Entering clears the
    /// alternate grid and remembers the primary cursor; leaving restores
    /// it, matching common xterm behavior.
    pub fn set_alternate(&mut self, on: bool) {
        if on == self.using_alternate {
            return;
        }
        if on {
            self.alternate.clear(Style::default());
            self.primary_cursor_on_alt_enter = Some(self.cursor);
            self.using_alternate = true;
        } else {
            self.using_alternate = false;
            if let Some(saved) = self.primary_cursor_on_alt_enter.take() {
                self.cursor = saved;
            }
        }
        self.pending_wrap = false;
        self.dirty.fill(true);
    }

    fn clamp_row(&self, row: i32) -> u16 {
        row.clamp(0, i32::from(self.height) - 1) as u16
    }

    fn clamp_col(&self, col: i32) -> u16 {
        col.clamp(0, i32::from(self.width) - 1) as u16
    }

    fn region_top(&self) -> u16 {
        self.top
    }

    fn region_bottom(&self) -> u16 {
        self.bottom
    }

    fn move_cursor_to(&mut self, row: u16, col: u16) {
        self.cursor.row = self.clamp_row(i32::from(row));
        self.cursor.col = self.clamp_col(i32::from(col));
        self.pending_wrap = false;
    }

    // -- cursor motion (§4.5 sequence list) ---------------------------

    pub fn cuu(&mut self, n: u16) {
        let floor = if self.cursor.row >= self.top { self.top } else { 0 };
        let row = self.cursor.row.saturating_sub(n.max(1)).max(floor);
        self.move_cursor_to(row, self.cursor.col);
    }

    pub fn cud(&mut self, n: u16) {
        let ceiling = if self.cursor.row <= self.bottom { self.bottom } else { self.height - 1 };
        let row = (self.cursor.row + n.max(1)).min(ceiling);
        self.move_cursor_to(row, self.cursor.col);
    }

    pub fn cuf(&mut self, n: u16) {
        let col = self.clamp_col(i32::from(self.cursor.col) + i32::from(n.max(1)));
        self.move_cursor_to(self.cursor.row, col);
    }

    pub fn cub(&mut self, n: u16) {
        let col = self.cursor.col.saturating_sub(n.max(1));
        self.move_cursor_to(self.cursor.row, col);
    }

    pub fn cnl(&mut self, n: u16) {
        self.cud(n);
        self.move_cursor_to(self.cursor.row, 0);
    }

    pub fn cpl(&mut self, n: u16) {
        self.cuu(n);
        self.move_cursor_to(self.cursor.row, 0);
    }

    pub fn cha(&mut self, col: u16) {
        self.move_cursor_to(self.cursor.row, col);
    }

    pub fn vpa(&mut self, row: u16) {
        let row = if self.origin_mode { self.top + row } else { row };
        self.move_cursor_to(row, self.cursor.col);
    }

    pub fn vpr(&mut self, n: u16) {
        self.cud(n);
    }

    pub fn hpr(&mut self, n: u16) {
        self.cuf(n);
    }

    /// `CUP`/`HVP`: absolute cursor positioning, already 0-based. `DECOM`
    /// makes both coordinates relative to the scrolling region's origin.
    pub fn cup(&mut self, row: u16, col: u16) {
        let (row, col) = if self.origin_mode { (self.top + row, self.left + col) } else { (row, col) };
        self.move_cursor_to(row, col);
    }

    // -- erase / insert / delete ---------------------------------------

    pub fn ed(&mut self, mode: EraseMode) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        match mode {
            EraseMode::ToEnd => {
                self.erase_line_from(row, col);
                for r in (row + 1)..self.height {
                    self.erase_line_from(r, 0);
                }
            }
            EraseMode::ToStart => {
                for r in 0..row {
                    self.erase_line_from(r, 0);
                }
                self.erase_line_range(row, 0, col.saturating_add(1));
            }
            EraseMode::All => {
                for r in 0..self.height {
                    self.erase_line_from(r, 0);
                }
            }
            EraseMode::AllAndScrollback => {
                for r in 0..self.height {
                    self.erase_line_from(r, 0);
                }
                self.scrollback.clear();
            }
        }
    }

    pub fn el(&mut self, mode: EraseMode) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        match mode {
            EraseMode::ToEnd => self.erase_line_from(row, col),
            EraseMode::ToStart => self.erase_line_range(row, 0, col.saturating_add(1)),
            EraseMode::All | EraseMode::AllAndScrollback => self.erase_line_from(row, 0),
        }
    }

    fn erase_line_from(&mut self, row: u16, from_col: u16) {
        self.erase_line_range(row, from_col, self.width);
    }

    fn erase_line_range(&mut self, row: u16, from_col: u16, to_col_exclusive: u16) {
        let style = self.style;
        for col in from_col..to_col_exclusive.min(self.width) {
            self.grid_mut().set(col, row, Cell::new(" ", 1, style));
            self.mark_dirty(col, row);
        }
    }

    /// Insert `n` blank lines at the cursor row, within the scrolling
    /// region; lines at the bottom of the region are dropped.
    pub fn il(&mut self, n: u16) {
        if self.cursor.row < self.top || self.cursor.row > self.bottom {
            return;
        }
        let n = n.max(1).min(self.bottom - self.cursor.row + 1);
        let mut row = self.bottom;
        while row >= self.cursor.row + n {
            let src = self.grid().row(row - n).to_vec();
            self.grid_mut().row_mut(row).clone_from_slice(&src);
            if row == 0 {
                break;
            }
            row -= 1;
        }
        for r in self.cursor.row..self.cursor.row + n {
            self.erase_line_range(r, 0, self.width);
        }
        for c in 0..self.width {
            for r in self.cursor.row..=self.bottom {
                self.mark_dirty(c, r);
            }
        }
    }

    /// Delete `n` lines at the cursor row, within the scrolling region;
    /// `n` clamps to the remaining rows in the region and the freed rows
    /// at the bottom are blanked.
    pub fn dl(&mut self, n: u16) {
        if self.cursor.row < self.top || self.cursor.row > self.bottom {
            return;
        }
        let remaining = self.bottom - self.cursor.row + 1;
        let n = n.max(1).min(remaining);
        for row in self.cursor.row..=self.bottom - n {
            let src = self.grid().row(row + n).to_vec();
            self.grid_mut().row_mut(row).clone_from_slice(&src);
        }
        for r in (self.bottom - n + 1)..=self.bottom {
            self.erase_line_range(r, 0, self.width);
        }
        for c in 0..self.width {
            for r in self.cursor.row..=self.bottom {
                self.mark_dirty(c, r);
            }
        }
    }

    /// Delete `n` characters at the cursor, shifting the remainder of the
    /// row left and blanking the vacated columns at the right.
    pub fn dch(&mut self, n: u16) {
        let row = self.cursor.row;
        let col = self.cursor.col;
        let n = n.max(1).min(self.width - col);
        let tail_start = col + n;
        let tail: Vec<Cell> = (tail_start..self.width).filter_map(|c| self.grid().get(c, row).cloned()).collect();
        for (offset, cell) in tail.into_iter().enumerate() {
            let dest = col + offset as u16;
            self.grid_mut().set(dest, row, cell);
            self.mark_dirty(dest, row);
        }
        self.erase_line_range(row, self.width - n, self.width);
    }

    /// Erase `n` characters in place at the cursor (no shift).
    pub fn ech(&mut self, n: u16) {
        let row = self.cursor.row;
        let col = self.cursor.col;
        let n = n.max(1);
        self.erase_line_range(row, col, col.saturating_add(n));
    }

    // -- scrolling -------------------------------------------------------

    /// `SU`: scroll the region up by `n`, pushing rows scrolled off the
    /// top of a full-height primary-screen region into scrollback.
    pub fn su(&mut self, n: u16) {
        for _ in 0..n.max(1) {
            self.scroll_up_one();
        }
    }

    /// `SD`: scroll the region down by `n`.
    pub fn sd(&mut self, n: u16) {
        for _ in 0..n.max(1) {
            self.scroll_down_one();
        }
    }

    fn scroll_up_one(&mut self) {
        let capture_scrollback = !self.using_alternate && self.top == 0;
        if capture_scrollback {
            let row = self.grid().row(self.top).to_vec();
            self.push_scrollback(row);
        }
        for row in self.top..self.bottom {
            let src = self.grid().row(row + 1).to_vec();
            self.grid_mut().row_mut(row).clone_from_slice(&src);
        }
        self.erase_line_range(self.bottom, 0, self.width);
        for c in 0..self.width {
            for r in self.top..=self.bottom {
                self.mark_dirty(c, r);
            }
        }
    }

    fn scroll_down_one(&mut self) {
        let mut row = self.bottom;
        while row > self.top {
            let src = self.grid().row(row - 1).to_vec();
            self.grid_mut().row_mut(row).clone_from_slice(&src);
            row -= 1;
        }
        self.erase_line_range(self.top, 0, self.width);
        for c in 0..self.width {
            for r in self.top..=self.bottom {
                self.mark_dirty(c, r);
            }
        }
    }

    fn push_scrollback(&mut self, row: Vec<Cell>) {
        if self.scrollback_cap == 0 {
            return;
        }
        if self.scrollback.len() >= self.scrollback_cap {
            self.scrollback.pop_front();
        }
        self.scrollback.push_back(row);
    }

    #[must_use]
    pub fn scrollback_len(&self) -> usize {
        self.scrollback.len()
    }

    #[must_use]
    pub fn scrollback_row(&self, index: usize) -> Option<&[Cell]> {
        self.scrollback.get(index).map(Vec::as_slice)
    }

    // -- scrolling region / tab stops ------------------------------------

    /// `DECSTBM`. Both bounds are 0-based and already resolved by the
    /// caller; `(0, height-1)` resets to the full screen. The cursor moves
    /// to the region's home position, matching classic DEC behavior.
    pub fn decstbm(&mut self, top: u16, bottom: u16) {
        if top >= bottom || bottom >= self.height {
            self.top = 0;
            self.bottom = self.height - 1;
        } else {
            self.top = top;
            self.bottom = bottom;
        }
        self.move_cursor_to(if self.origin_mode { self.top } else { 0 }, 0);
    }

    pub fn tab_set(&mut self) {
        if let Some(slot) = self.tab_stops.get_mut(usize::from(self.cursor.col)) {
            *slot = true;
        }
    }

    /// `TBC`: `mode` 0 clears the stop at the cursor, `3` clears all.
    pub fn tab_clear(&mut self, mode: u16) {
        match mode {
            3 => self.tab_stops.iter_mut().for_each(|s| *s = false),
            _ => {
                if let Some(slot) = self.tab_stops.get_mut(usize::from(self.cursor.col)) {
                    *slot = false;
                }
            }
        }
    }

    /// `HT`: advance to the next tab stop, or the rightmost column if none
    /// remain.
    pub fn ht(&mut self) {
        let next = self.next_tab_stop(self.cursor.col);
        self.move_cursor_to(self.cursor.row, next);
    }

    /// `CBT`: move back `n` tab stops.
    pub fn cbt(&mut self, n: u16) {
        let mut col = self.cursor.col;
        for _ in 0..n.max(1) {
            col = self.prev_tab_stop(col);
        }
        self.move_cursor_to(self.cursor.row, col);
    }

    fn next_tab_stop(&self, from: u16) -> u16 {
        ((from + 1)..self.width).find(|&c| self.tab_stops[usize::from(c)]).unwrap_or(self.width - 1)
    }

    fn prev_tab_stop(&self, from: u16) -> u16 {
        (0..from).rev().find(|&c| self.tab_stops[usize::from(c)]).unwrap_or(0)
    }

    // -- printing / line control ------------------------------------------

    /// Print one grapheme cluster at the cursor, handling autowrap and
    /// double-width placement. A pending wrap from a previous call is
    /// resolved first.
    pub fn print(&mut self, grapheme: &str) {
        let width = grapheme_width(grapheme, self.width_method).max(1);

        if self.pending_wrap {
            self.pending_wrap = false;
            self.newline_for_wrap();
        }

        if self.cursor.col + width > self.width {
            if self.autowrap {
                self.newline_for_wrap();
            } else {
                self.move_cursor_to(self.cursor.row, self.width - width.min(self.width));
            }
        }

        let style = self.style;
        let cell = Cell::new(grapheme, width as u8, style);
        let row = self.cursor.row;
        let col = self.cursor.col;
        self.grid_mut().set(col, row, cell);
        self.mark_dirty(col, row);
        if width == 2 && col + 1 < self.width {
            self.grid_mut().set(col + 1, row, Cell::continuation());
            self.mark_dirty(col + 1, row);
        }

        self.last_grapheme = Some(grapheme.to_owned());

        if col + width >= self.width {
            if self.autowrap {
                self.pending_wrap = true;
            }
            self.cursor.col = self.width - 1;
        } else {
            self.cursor.col += width;
        }
    }

    /// `REP`: repeat the last printed grapheme `n` times.
    pub fn rep(&mut self, n: u16) {
        if let Some(text) = self.last_grapheme.clone() {
            for _ in 0..n {
                self.print(&text);
            }
        }
    }

    fn newline_for_wrap(&mut self) {
        if self.cursor.row == self.bottom {
            self.scroll_up_one();
        } else {
            self.cursor.row = (self.cursor.row + 1).min(self.height - 1);
        }
        self.cursor.col = 0;
    }

    /// `LF`/`IND`: move down one row, scrolling the region if already at
    /// its bottom. Column is unchanged (a bare line feed, not `CR`+`LF`).
    pub fn line_feed(&mut self) {
        self.pending_wrap = false;
        if self.cursor.row == self.bottom {
            self.scroll_up_one();
        } else {
            self.cursor.row = (self.cursor.row + 1).min(self.height - 1);
        }
    }

    /// `RI`: move up one row, scrolling the region down if already at its
    /// top.
    pub fn reverse_index(&mut self) {
        self.pending_wrap = false;
        if self.cursor.row == self.top {
            self.scroll_down_one();
        } else {
            self.cursor.row = self.cursor.row.saturating_sub(1);
        }
    }

    pub fn carriage_return(&mut self) {
        self.pending_wrap = false;
        self.cursor.col = 0;
    }

    pub fn backspace(&mut self) {
        self.pending_wrap = false;
        self.cursor.col = self.cursor.col.saturating_sub(1);
    }
}

fn default_tab_stops(width: u16) -> Vec<bool> {
    (0..width).map(|c| c != 0 && c % 8 == 0).collect()
}
