use std::fs;
use std::path::{Path, PathBuf};

use crate::{RenderedImage, Result, DEFAULT_OUTPUT_NAME};

/// Writes the image as `movie-trailer-image.png` inside `dir`.
pub fn export_png(rendered: &RenderedImage, dir: &Path) -> Result<PathBuf> {
    export_png_to(rendered, &dir.join(DEFAULT_OUTPUT_NAME))
}

pub fn export_png_to(rendered: &RenderedImage, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &rendered.png)?;
    log::info!(
        "exported {}x{} png to {}",
        rendered.width,
        rendered.height,
        path.display()
    );
    Ok(path.to_path_buf())
}

pub fn png_data_uri(rendered: &RenderedImage) -> String {
    rendered.to_data_uri()
}
