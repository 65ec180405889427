mod error;
mod gridcarve;
mod utils;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use gridcarve::fill::FillMode;
pub use gridcarve::grid::{Grid, GridNode, NodeId};
pub use gridcarve::grid_carve::GridCarve;
pub use gridcarve::hsla::{hue_distance, hue_lerp, normalize_hue, Hsla};
pub use gridcarve::options::CarveOptions;
pub use gridcarve::raster::HslaImage;
pub use gridcarve::selection::SelectionMode;
