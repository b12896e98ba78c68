//! CLI command implementations

pub mod generate;

use anyhow::{Context, Result};
use devlogo_core::RgbaImage;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    devlogo_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &RgbaImage) -> Result<()> {
    devlogo_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
