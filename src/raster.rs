use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Resampling filter used for every generated icon.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// A file produced by one of the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    /// Square pixel sizes stored in the file, in file order.
    pub sizes: Vec<u32>,
    /// `false` when the run was a dry run and nothing was written.
    pub written: bool,
}

/// Decode the source icon from disk.
///
/// Any format the `image` crate can decode is accepted. The image is not
/// checked for squareness or minimum resolution.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open source icon {}", path.display()))?;
    log::debug!(
        "Loaded source icon {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Resample `img` to exactly `size`×`size`.
///
/// Both dimensions are forced to `size`, so a non-square source is stretched.
/// Sources smaller than `size` are upscaled.
pub fn resize_square(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_exact(size, size, RESAMPLE_FILTER)
}

/// Encode an image as PNG into memory.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buf.into_inner())
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))
}

/// Write `bytes` to `path`, replacing any existing file.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over `path`, so `path` is either the old file or the complete
/// new one.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tmp.as_file()
        .set_permissions(output_permissions(path)?)
        .with_context(|| format!("Failed to set permissions for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// Keep the permissions of a file being replaced; new files get 0644.
fn output_permissions(path: &Path) -> Result<std::fs::Permissions> {
    if let Ok(meta) = std::fs::metadata(path) {
        return Ok(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Ok(std::fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        let dir = path.parent().unwrap_or(Path::new("."));
        let mut perms = std::fs::metadata(dir)
            .with_context(|| format!("Failed to read metadata for {}", dir.display()))?
            .permissions();
        perms.set_readonly(false);
        Ok(perms)
    }
}
