mod common;

use anyhow::Result;
use clap::Parser;

use app_icon_gen::android;
use common::{CommonArgs, Setup};

#[derive(Parser, Debug)]
#[command(
    name = "generate-android-icons",
    version,
    about = "Generate Android launcher mipmaps (standard and round) from the app icon"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (paths, dry_run) = match cli.common.setup()? {
        Setup::Initialized(_) => return Ok(()),
        Setup::Run { paths, dry_run } => (paths, dry_run),
    };

    let icons = android::generate_android_icons(&paths.source_icon, &paths.android_res_dir, dry_run)?;
    log::debug!("{} launcher icons processed", icons.len());

    if !dry_run {
        println!("Icons generated successfully!");
    }

    Ok(())
}
