//! Dev logo generation: load, recolor, save.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::{load_image, save_image};

/// Recolors `source` and writes the result to `dest`.
pub fn run(source: &Path, dest: &Path) -> Result<()> {
    let mut image = load_image(source)?;
    info!(
        width = image.width(),
        height = image.height(),
        "Loaded {}",
        source.display()
    );

    let stats = devlogo_ops::recolor_in_place(&mut image);
    info!(
        recolored = stats.recolored,
        total = stats.total,
        "Recolored {:.1}% of pixels",
        stats.ratio() * 100.0
    );

    save_image(dest, &image)?;
    println!("Generated {}", dest.display());

    Ok(())
}
