use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Decode the image at `path`.
///
/// The format is sniffed from the file header, falling back to the
/// extension, so a truncated or mislabeled file fails here instead of
/// producing garbage icons later.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to open source image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read source image {}", path.display()))?;

    reader
        .decode()
        .with_context(|| format!("Failed to decode source image {}", path.display()))
}
