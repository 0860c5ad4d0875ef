//! Cell, style, color, hyperlink, and image model shared by the host
//! screen ([`vtscreen`](../vtscreen/index.html)) and the embedded VT
//! emulator's screen ([`vtterm`](../vtterm/index.html)).

#![warn(clippy::pedantic)]

mod cell;
mod color;
mod hyperlink;
mod image;
mod style;

pub use cell::{Cell, GraphemeBuf};
pub use color::Color;
pub use hyperlink::Hyperlink;
pub use image::{ImageCellMarker, ImageId};
pub use style::{Attrs, Style, Underline};

/// Errors raised while constructing or mutating cells.
#[derive(Debug, thiserror::Error)]
pub enum CellError {
    #[error("grapheme cluster width must be 0, 1, or 2 columns, got {0}")]
    InvalidWidth(u8),
}
