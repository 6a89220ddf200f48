//! Owned RGB pixel canvas for software rendering.
//!
//! Pixels are stored row-major, three bytes per pixel, top-left origin:
//! byte offset of `(x, y)` channel `c` is `(y * width + x) * 3 + c`. All
//! index arithmetic lives in [`Canvas::index_of`]; every accessor goes
//! through it, so a coordinate outside the canvas can never reach the
//! backing vector.

use crate::color::{opacity_factor, Rgb};
use log::debug;

/// Byte channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// In-memory render target. Shapes composite into it via the draw methods
/// in [`crate::shapes`]; the raw bytes can be borrowed for texture upload
/// or image encoding.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas cleared to black.
    pub fn new(width: u32, height: u32) -> Self {
        debug!("allocating {}x{} canvas", width, height);
        Self {
            pixels: vec![0; width as usize * height as usize * CHANNELS],
            width,
            height,
        }
    }

    /// Adopt an existing row-major RGB byte vector as a canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector length does not match the dimensions.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(format!(
                "pixel vector is {} bytes, {}x{} RGB needs {}",
                pixels.len(),
                width,
                height,
                expected
            ));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Consume the canvas, returning the raw pixel bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether pixel coordinates fall inside the canvas.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Byte offset of pixel `(x, y)`. The only place index math happens.
    #[inline]
    fn index_of(&self, x: u32, y: u32) -> usize {
        assert!(
            self.contains(x, y),
            "pixel ({}, {}) outside {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = self.index_of(x, y);
        Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index_of(x, y);
        self.pixels[idx] = color.r;
        self.pixels[idx + 1] = color.g;
        self.pixels[idx + 2] = color.b;
    }

    /// Bounds-checked read: `None` outside the canvas.
    #[inline]
    pub fn try_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if self.contains(x, y) {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Bounds-checked write. Returns whether the pixel was inside the canvas.
    #[inline]
    pub fn try_set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        if self.contains(x, y) {
            self.set_pixel(x, y, color);
            true
        } else {
            false
        }
    }

    /// Blend `color` into the pixel at `(x, y)` by a [0, 1] factor.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgb, factor: f32) {
        let mixed = self.pixel(x, y).mix(color, factor);
        self.set_pixel(x, y, mixed);
    }

    /// Bounds-checked blend. Returns whether the pixel was inside the canvas.
    #[inline]
    pub fn try_blend_pixel(&mut self, x: u32, y: u32, color: Rgb, factor: f32) -> bool {
        match self.try_pixel(x, y) {
            Some(existing) => {
                self.set_pixel(x, y, existing.mix(color, factor));
                true
            }
            None => false,
        }
    }

    /// Overwrite every pixel with a solid color.
    pub fn clear(&mut self, color: Rgb) {
        for px in self.pixels.chunks_exact_mut(CHANNELS) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    /// Blend the whole canvas toward `color` by `opacity`. Opacity 255
    /// behaves like [`Canvas::clear`]; 0 leaves every pixel untouched.
    pub fn fill(&mut self, color: Rgb, opacity: u8) {
        let factor = opacity_factor(opacity);
        for px in self.pixels.chunks_exact_mut(CHANNELS) {
            let mixed = Rgb::new(px[0], px[1], px[2]).mix(color, factor);
            px[0] = mixed.r;
            px[1] = mixed.g;
            px[2] = mixed.b;
        }
    }

    /// Raw RGB bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable view of the raw RGB bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}
