//! # app-icon-gen
//!
//! Generate application icons from a single source image: Android launcher
//! mipmaps for every density bucket, and a multi-resolution Windows ICO.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use app_icon_gen::android::generate_android_icons;
//! use app_icon_gen::config::Config;
//! use app_icon_gen::windows::generate_windows_icon;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let root = Path::new(".");
//!     let config = Config::load(None, root)?;
//!     let paths = config.resolve(root);
//!
//!     generate_android_icons(&paths.source_icon, &paths.android_res_dir, false)?;
//!     let ico = generate_windows_icon(&paths.source_icon, &paths.windows_resources_dir, false)?;
//!     println!("Windows icon generated: {}", ico.path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Outputs
//!
//! | Target | Path (relative to project root) | Sizes |
//! |--------|---------------------------------|-------|
//! | Android | `android/app/src/main/res/mipmap-*/ic_launcher.png`, `ic_launcher_round.png` | 48, 72, 96, 144, 192 |
//! | Windows | `windows/runner/resources/app_icon.ico` | 16, 32, 48, 64, 128, 256 |
//!
//! ## Modules
//!
//! - [`android`] — Android mipmap launcher icons
//! - [`windows`] — Windows multi-resolution ICO
//! - [`config`] — Path configuration and loading/saving
//! - [`raster`] — Source loading, resampling, and PNG encoding

pub mod android;
pub mod config;
pub mod raster;
pub mod windows;
