//! Per-cell image placement marker.
//!
//! The cell itself only carries a lightweight handle; the encoded payload
//! and placement bookkeeping live in the host screen's image registry
//! (`vtscreen::image`), which owns records by id.

/// Library-assigned image id. Monotonic, never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

/// Marks a cell as covered by a placed image, identifying which image and
/// which cell of its placement rectangle this is (so the renderer can
/// still compute width/continuation semantics without the real pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageCellMarker {
    pub id: ImageId,
    /// Column offset within the image's placement rectangle.
    pub cell_col: u16,
    /// Row offset within the image's placement rectangle.
    pub cell_row: u16,
}
