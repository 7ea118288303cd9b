mod common;

use anyhow::Result;
use clap::Parser;

use app_icon_gen::windows;
use common::{CommonArgs, Setup};

#[derive(Parser, Debug)]
#[command(
    name = "generate-windows-icon",
    version,
    about = "Generate the multi-resolution Windows app_icon.ico from the app icon"
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

    let icon =
        windows::generate_windows_icon(&paths.source_icon, &paths.windows_resources_dir, dry_run)?;

    if !dry_run {
        println!("Windows icon generated: {}", icon.path.display());
    }

    Ok(())
}
