//! The host screen: double-buffered cell grid, hierarchical clipped
//! windows, the cell-diff renderer, the capability record, and the image
//! registry (§3, §4.2, §4.3 of the design).

#![warn(clippy::pedantic)]

mod capability;
mod cursor;
mod grid;
pub mod image;
mod render;
mod screen;
mod window;

pub use capability::{CapabilityRecord, UnicodeSupport};
pub use cursor::{Cursor, CursorShape};
pub use grid::Grid;
pub use render::Renderer;
pub use screen::Screen;
pub use window::Window;

/// Errors surfaced by screen operations that can fail (rendering I/O;
/// see §7).
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("write to terminal failed: {0}")]
    Io(#[from] std::io::Error),
    /// The terminal never confirmed Kitty graphics support; the image draw
    /// was skipped. Informational, not fatal — callers can ignore it and
    /// keep rendering text.
    #[error("terminal does not support Kitty graphics; image draw skipped")]
    ImageUnsupported,
}
