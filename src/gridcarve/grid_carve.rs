use crate::error::Error;
use crate::gridcarve::grid::Grid;
use crate::gridcarve::options::CarveOptions;
use crate::gridcarve::raster::HslaImage;
use image::RgbaImage;

/// Carve an image in one call: build a grid, carve it and render it back.
pub trait GridCarve {
    /// Carves `options.rounds` passes with `options.selection` and renders
    /// the result, reconstructing carved columns when `options.fill` is set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if the image is empty in either direction.
    fn carve_grid(&self, options: &CarveOptions) -> Result<Self, Error>
    where
        Self: Sized;
}

impl GridCarve for HslaImage {
    fn carve_grid(&self, options: &CarveOptions) -> Result<Self, Error> {
        let mut grid = Grid::new(self)?;
        grid.carve_rounds(options.rounds, options.selection);
        Ok(match options.fill {
            Some(mode) => grid.render(true, mode),
            None => grid.render(false, Default::default()),
        })
    }
}

impl GridCarve for RgbaImage {
    fn carve_grid(&self, options: &CarveOptions) -> Result<Self, Error> {
        HslaImage::from_rgba(self)
            .carve_grid(options)
            .map(|carved| carved.to_rgba())
    }
}
