//! Decoded pixel grids.

use image::RgbaImage;

/// A single RGBA sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Create a new pixel from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
}

/// An immutable, row-major grid of RGBA samples.
///
/// A zero-sized buffer is valid and stands for empty input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create an empty (0x0) buffer.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a buffer where every sample is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Create a buffer from a function of the coordinates.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Sample at (x, y). Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Alpha channel at (x, y).
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).a
    }

    /// All samples in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl From<&RgbaImage> for PixelBuffer {
    fn from(img: &RgbaImage) -> Self {
        let pixels = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                Pixel::new(r, g, b, a)
            })
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            pixels,
        }
    }
}
