use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

use super::Palette;
use crate::error::Result;

/// Something that can turn a pixel size into encoded PNG bytes.
pub trait IconRenderer {
    fn render_png(&self, size: u32) -> Result<Vec<u8>>;
}

/// Solid background with a centered filled circle spanning the middle half.
pub struct CircleRenderer {
    palette: Palette,
}

impl CircleRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Rasterize a `size`x`size` icon.
    ///
    /// The circle is inscribed in `[margin, size - margin]` on both axes
    /// (inclusive), with `margin = size / 4`.
    pub fn rasterize(&self, size: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(size, size, Rgba(self.palette.background));
        if size == 0 {
            return img;
        }

        let margin = size / 4;
        // inclusive box, so it covers pixel areas lo..hi + 1
        let lo = margin as f64;
        let hi = (size - margin) as f64 + 1.0;
        let c = (lo + hi) / 2.0;
        let r = (hi - lo) / 2.0;
        let r2 = r * r;

        // the box end may sit one past the last pixel
        let end = (size - margin).min(size - 1);
        for y in margin..=end {
            for x in margin..=end {
                let dx = x as f64 + 0.5 - c;
                let dy = y as f64 + 0.5 - c;
                if dx * dx + dy * dy <= r2 {
                    img.put_pixel(x, y, Rgba(self.palette.accent));
                }
            }
        }

        img
    }
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl IconRenderer for CircleRenderer {
    fn render_png(&self, size: u32) -> Result<Vec<u8>> {
        let img = self.rasterize(size);
        encode_png(&img)
    }
}

/// Lossless RGBA8 PNG encoding with the encoder's default settings.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ColorType::Rgba8,
    )?;
    Ok(buf)
}
