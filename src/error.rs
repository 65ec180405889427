use thiserror::Error;

/// Error type for grid carving operations
///
/// Structural problems inside a carve (degenerate rows, excessive round
/// counts) are not errors; they are absorbed by the grid. What remains are
/// the conditions a caller can actually get wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source raster has no pixels in at least one direction
    ///
    /// A grid needs at least one node per row and one row, so a raster
    /// of width 0 or height 0 cannot be turned into a grid.
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension {
        /// Width of the rejected raster
        width: u32,
        /// Height of the rejected raster
        height: u32,
    },

    /// A selection or fill mode name could not be parsed
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}
