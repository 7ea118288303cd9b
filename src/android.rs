use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::raster::{self, GeneratedIcon};

/// Launcher icon size per mipmap density bucket, smallest first.
pub const DENSITIES: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

pub const LAUNCHER_ICON: &str = "ic_launcher.png";
pub const ROUND_LAUNCHER_ICON: &str = "ic_launcher_round.png";

/// Directory for a density bucket under the Android `res` directory.
pub fn density_dir(res_dir: &Path, bucket: &str) -> PathBuf {
    res_dir.join(bucket)
}

/// Generate the standard and round launcher icons for every density bucket.
///
/// The source is decoded once, before any directory is created, so a missing
/// or undecodable source leaves the `res` tree untouched. After that, the
/// first failing bucket aborts the run; files already written for earlier
/// buckets are kept.
///
/// Existing `ic_launcher.png` / `ic_launcher_round.png` files are
/// overwritten. Nothing else in the bucket directories is touched.
///
/// With `dry_run`, no directories or files are created and every returned
/// [`GeneratedIcon`] has `written == false`.
///
/// # Example
///
/// ```rust,no_run
/// use app_icon_gen::android::generate_android_icons;
/// use std::path::Path;
///
/// let icons = generate_android_icons(
///     Path::new("assets/icons/app_icon.png"),
///     Path::new("android/app/src/main/res"),
///     false,
/// )?;
/// assert_eq!(icons.len(), 10);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_android_icons(
    source: &Path,
    res_dir: &Path,
    dry_run: bool,
) -> Result<Vec<GeneratedIcon>> {
    let img = raster::load_source(source)?;
    let mut generated = Vec::with_capacity(DENSITIES.len() * 2);

    for &(bucket, size) in DENSITIES {
        let out_dir = density_dir(res_dir, bucket);
        if !dry_run {
            raster::ensure_dir(&out_dir)?;
        }

        log::debug!("Resampling to {size}x{size} for {bucket}");
        let png = raster::encode_png(&raster::resize_square(&img, size))?;

        // Both launcher variants get the same bytes.
        for name in [LAUNCHER_ICON, ROUND_LAUNCHER_ICON] {
            let path = out_dir.join(name);
            if dry_run {
                log::info!("Would write {} ({size}x{size})", path.display());
            } else {
                raster::write_file(&path, &png)?;
                log::info!("Wrote {} ({size}x{size})", path.display());
            }
            generated.push(GeneratedIcon {
                path,
                sizes: vec![size],
                written: !dry_run,
            });
        }
    }

    Ok(generated)
}
