use anyhow::{Context, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{DynamicImage, ExtendedColorType};
use std::path::Path;

use crate::raster::{self, GeneratedIcon};

/// Resolutions embedded in the Windows icon, in file order.
pub const ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

pub const ICO_FILE_NAME: &str = "app_icon.ico";

/// Encode `img` as a multi-resolution ICO.
///
/// The source is resampled independently for each entry in `sizes`, and each
/// frame is stored PNG-compressed in the order given.
pub fn encode_ico(img: &DynamicImage, sizes: &[u32]) -> Result<Vec<u8>> {
    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        log::debug!("ICO layer: {size}x{size}");
        let rgba = raster::resize_square(img, size).to_rgba8();
        let frame = IcoFrame::as_png(rgba.as_raw(), size, size, ExtendedColorType::Rgba8)
            .with_context(|| format!("Failed to encode {size}x{size} ICO frame"))?;
        frames.push(frame);
    }

    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf)
        .encode_images(&frames)
        .context("Failed to encode ICO")?;
    Ok(buf)
}

/// Generate `app_icon.ico` in `dest_dir` from the source icon.
///
/// The whole ICO is encoded in memory, written to a temporary file and
/// renamed into place, so on failure the previous file (if any) is left as
/// it was.
///
/// With `dry_run`, the icon is still encoded but nothing is written.
///
/// # Example
///
/// ```rust,no_run
/// use app_icon_gen::windows::generate_windows_icon;
/// use std::path::Path;
///
/// let icon = generate_windows_icon(
///     Path::new("assets/icons/app_icon.png"),
///     Path::new("windows/runner/resources"),
///     false,
/// )?;
/// println!("Windows icon generated: {}", icon.path.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_windows_icon(
    source: &Path,
    dest_dir: &Path,
    dry_run: bool,
) -> Result<GeneratedIcon> {
    let img = raster::load_source(source)?;
    let path = dest_dir.join(ICO_FILE_NAME);

    if !dry_run {
        raster::ensure_dir(dest_dir)?;
    }

    let ico = encode_ico(&img, ICO_SIZES)?;

    if dry_run {
        log::info!("Would write {} (multi-res: {ICO_SIZES:?})", path.display());
    } else {
        raster::write_file(&path, &ico)?;
        log::info!("Wrote {} (multi-res: {ICO_SIZES:?})", path.display());
    }

    Ok(GeneratedIcon {
        path,
        sizes: ICO_SIZES.to_vec(),
        written: !dry_run,
    })
}
