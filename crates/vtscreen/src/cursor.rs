//! Cursor position, visibility, and shape.

/// The visual shape of the terminal cursor, as set by DECSCUSR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
    Bar,
}

/// Cursor state tracked by a [`Screen`](crate::Screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: u16,
    pub col: u16,
    pub visible: bool,
    pub shape: CursorShape,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { row: 0, col: 0, visible: true, shape: CursorShape::default() }
    }
}
