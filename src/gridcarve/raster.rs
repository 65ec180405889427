use crate::gridcarve::hsla::Hsla;
use image::{Rgba, RgbaImage};
use itertools::iproduct;

/// A row-major raster of [`Hsla`] pixels.
///
/// This is the buffer the grid is built from and rendered into. It offers
/// the same addressing as `image::ImageBuffer` and converts to and from
/// 8-bit RGBA images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HslaImage {
    width: u32,
    height: u32,
    pixels: Vec<Hsla>,
}

impl HslaImage {
    /// Creates a raster filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Hsla::default(); width as usize * height as usize],
        }
    }

    /// Creates a raster by evaluating `f` at every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Hsla,
    {
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wraps a row-major pixel vector. Returns `None` if the length does not
    /// match `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Hsla>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Converts an 8-bit RGBA image.
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.pixels().map(|pixel| Hsla::from(*pixel)).collect(),
        }
    }

    /// Converts to an 8-bit RGBA image.
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba::from(*self.get_pixel(x, y))
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Keep the index math in exactly one place.
    fn index_of(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside a {}x{} image",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> &Hsla {
        &self.pixels[self.index_of(x, y)]
    }

    /// Returns a mutable reference to the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> &mut Hsla {
        let index = self.index_of(x, y);
        &mut self.pixels[index]
    }

    /// Writes the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: Hsla) {
        *self.get_pixel_mut(x, y) = pixel;
    }

    /// Changes the dimensions, discarding the previous contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize, Hsla::default());
    }

    /// Iterates over the pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &Hsla> + '_ {
        self.pixels.iter()
    }

    /// Iterates over `(x, y, pixel)` in row-major order.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, &Hsla)> + '_ {
        iproduct!(0..self.height, 0..self.width)
            .zip(self.pixels.iter())
            .map(|((y, x), pixel)| (x, y, pixel))
    }
}
