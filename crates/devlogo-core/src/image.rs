//! Owned RGBA8 image grid.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, with the four
//! channels interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  ← Row 0
//!         [R G B A R G B A ...]  ← Row 1
//!         ...
//! ```
//!
//! Dimensions are fixed once the grid is created. A 0x0 grid is valid and
//! holds no pixels.
//!
//! # Usage
//!
//! ```rust
//! use devlogo_core::RgbaImage;
//!
//! let mut img = RgbaImage::new(4, 2);
//! img.set_pixel(1, 1, [0, 128, 255, 255]);
//! assert_eq!(img.pixel(1, 1), [0, 128, 255, 255]);
//! assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
//! ```

use crate::{Error, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned 8-bit RGBA image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Buffer length for a `width` x `height` RGBA8 grid, or an error on overflow.
fn buffer_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "image dimensions overflow"))
}

impl RgbaImage {
    /// Creates a new image with every channel set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0; CHANNELS])
    }

    /// Creates an image where every pixel is `px`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn filled(width: u32, height: u32, px: [u8; CHANNELS]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: px.repeat(count),
        }
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel.
    ///
    /// ```rust
    /// use devlogo_core::RgbaImage;
    ///
    /// let img = RgbaImage::from_fn(3, 1, |x, _| [x as u8, 0, 0, 255]);
    /// assert_eq!(img.pixel(2, 0), [2, 0, 0, 255]);
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; CHANNELS],
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wraps an existing interleaved RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` tuple.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Returns `true` if the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; CHANNELS]) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; CHANNELS]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// Raw interleaved buffer.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw interleaved buffer. The length cannot change.
    #[inline]
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_new() {
        let img = RgbaImage::new(100, 50);
        assert_eq!(img.dimensions(), (100, 50));
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.as_raw().len(), 5000 * CHANNELS);
        assert!(img.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_image_filled() {
        let img = RgbaImage::filled(10, 10, [1, 2, 3, 4]);
        assert_eq!(img.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(img.pixel(9, 9), [1, 2, 3, 4]);
        assert_eq!(img.as_raw().len(), 10 * 10 * CHANNELS);
        assert_eq!(&img.as_raw()[..8], &[1, 2, 3, 4, 1, 2, 3, 4]);
        assert!(RgbaImage::filled(0, 3, [9; CHANNELS]).is_empty());
    }

    #[test]
    fn test_image_set_pixel() {
        let mut img = RgbaImage::new(10, 10);
        img.set_pixel(5, 7, [255, 0, 0, 255]);
        assert_eq!(img.pixel(5, 7), [255, 0, 0, 255]);
        assert_eq!(img.pixel(7, 5), [0, 0, 0, 0]);
        // Row-major layout
        let i = (7 * 10 + 5) * CHANNELS;
        assert_eq!(&img.as_raw()[i..i + 4], &[255, 0, 0, 255]);
    }

    #[test]
    #[should_panic]
    fn test_pixel_panics_out_of_bounds() {
        let img = RgbaImage::new(3, 2);
        img.pixel(0, 2);
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(RgbaImage::from_raw(2, 2, vec![0; 16]).is_ok());
        let err = RgbaImage::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes, got 15"));
    }

    #[test]
    fn test_empty_image() {
        let img = RgbaImage::from_raw(0, 0, Vec::new()).unwrap();
        assert!(img.is_empty());
        assert_eq!(img.pixels().count(), 0);
        assert!(RgbaImage::new(0, 7).is_empty());
    }

    #[test]
    fn test_from_fn_and_pixels_order() {
        let img = RgbaImage::from_fn(2, 2, |x, y| [x as u8, y as u8, 0, 255]);
        let px: Vec<_> = img.pixels().collect();
        assert_eq!(
            px,
            vec![[0, 0, 0, 255], [1, 0, 0, 255], [0, 1, 0, 255], [1, 1, 0, 255]]
        );
    }
}
