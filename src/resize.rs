use anyhow::{Result, bail};
use image::DynamicImage;

use crate::constants::icons::IconTarget;
use crate::constants::resample::FILTER;

/// Stretch `img` to exactly `width` x `height`. Aspect ratio is not kept.
pub fn resize_exact(img: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        bail!("Cannot resize to {}x{}", width, height);
    }

    Ok(img.resize_exact(width, height, FILTER))
}

pub fn resize_to_target(img: &DynamicImage, target: &IconTarget) -> Result<DynamicImage> {
    resize_exact(img, target.width, target.height)
}
