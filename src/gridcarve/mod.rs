pub mod fill;
pub mod grid;
pub mod grid_carve;
pub mod hsla;
pub mod options;
pub mod raster;
pub mod selection;
