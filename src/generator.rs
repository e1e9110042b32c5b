use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::icons::{ICON_TARGETS, IconTarget};
use crate::loader::load_image;
use crate::resize::resize_to_target;
use crate::writer::write_png;

pub struct IconGenerator {
    source_image: PathBuf,
    output_dir: PathBuf,
}

impl IconGenerator {
    pub fn new(source_image: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        IconGenerator {
            source_image: source_image.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self, target: &IconTarget) -> PathBuf {
        self.output_dir.join(target.file_name)
    }

    /// Write all icons in table order, calling `on_created` after each file lands.
    ///
    /// Stops at the first failure. Files already written in this run stay on
    /// disk; nothing is written if the source cannot be decoded.
    pub fn run<F>(&self, mut on_created: F) -> Result<Vec<PathBuf>>
    where
        F: FnMut(&IconTarget, &Path),
    {
        let source = load_image(&self.source_image)?;

        let mut written = Vec::with_capacity(ICON_TARGETS.len());
        for target in &ICON_TARGETS {
            let icon = resize_to_target(&source, target)?;
            let path = self.output_path(target);
            write_png(&icon, &path)?;

            on_created(target, &path);
            written.push(path);
        }

        Ok(written)
    }
}
