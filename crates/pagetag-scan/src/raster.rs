use image::{DynamicImage, GrayImage};

/// A page rendered to a grayscale pixel grid.
///
/// The raster is `native_width * scale` by `native_height * scale` pixels
/// (rounded by the renderer), and carries the page's native extents so that
/// pixel coordinates can be mapped back into native units. Rasters are
/// ephemeral: one is produced per page, consumed by detection, and dropped.
#[derive(Debug, Clone)]
pub struct PageRaster {
    pixels: GrayImage,
    native_width: f64,
    native_height: f64,
    scale: f64,
}

impl PageRaster {
    /// Build a raster from a rendered page image and its native extents.
    pub fn new(image: DynamicImage, native_width: f64, native_height: f64, scale: f64) -> Self {
        Self {
            pixels: image.to_luma8(),
            native_width,
            native_height,
            scale,
        }
    }

    /// Native page width in document units (PDF points).
    pub fn native_width(&self) -> f64 {
        self.native_width
    }

    /// Native page height in document units (PDF points).
    pub fn native_height(&self) -> f64 {
        self.native_height
    }

    /// Uniform scale factor the raster was produced at.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixels.height()
    }

    /// Grayscale pixel value at `(x, y)`.
    pub fn luma(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel(x, y).0[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, RgbaImage};

    #[test]
    fn raster_converts_to_grayscale() {
        let rgba = RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 255, 255]));
        let raster = PageRaster::new(DynamicImage::ImageRgba8(rgba), 2.0, 2.0, 2.0);
        assert_eq!(raster.pixel_width(), 4);
        assert_eq!(raster.pixel_height(), 4);
        assert_eq!(raster.luma(0, 0), 255);
    }

    #[test]
    fn raster_keeps_native_extents_and_scale() {
        let gray = GrayImage::from_pixel(12, 6, Luma([0]));
        let raster = PageRaster::new(DynamicImage::ImageLuma8(gray), 2.0, 1.0, 6.0);
        assert_eq!(raster.native_width(), 2.0);
        assert_eq!(raster.native_height(), 1.0);
        assert_eq!(raster.scale(), 6.0);
        assert_eq!(raster.pixel_width(), 12);
        assert_eq!(raster.pixel_height(), 6);
    }
}
