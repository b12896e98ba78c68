//! Benchmark fixtures for devlogo.

use devlogo_core::RgbaImage;

/// Synthetic logo: a blue/cyan gradient disc on a transparent background
/// with a white ring and a dark center.
pub fn synthetic_logo(size: u32) -> RgbaImage {
    let c = size as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let r = (dx * dx + dy * dy).sqrt() / c;
        if r > 1.0 {
            [0, 0, 0, 0]
        } else if r > 0.9 {
            [255, 255, 255, 255]
        } else if r < 0.1 {
            [8, 8, 16, 255]
        } else {
            let t = (x as f32 / size as f32 * 255.0) as u8;
            [0, t, 255, 255]
        }
    })
}
