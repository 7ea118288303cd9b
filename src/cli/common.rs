use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use app_icon_gen::config::{Config, ResolvedPaths};

/// Flags shared by both generators.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Project root that all configured paths are relative to (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Path to config file (default: app-icon-gen.json in the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    pub init: bool,

    /// Show what would be written without touching any files
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a generator binary should do after the common flags are handled.
#[derive(Debug)]
pub enum Setup {
    /// `--init` wrote a config file to this path; nothing else to do.
    Initialized(PathBuf),
    Run {
        paths: ResolvedPaths,
        dry_run: bool,
    },
}

impl CommonArgs {
    /// Set up logging, then handle `--init` or load the config.
    pub fn setup(&self) -> Result<Setup> {
        let log_level = if self.verbose { "debug" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_timestamp(None)
            .init();

        let setup = self.prepare()?;
        if let Setup::Initialized(path) = &setup {
            println!("Default config written to {}", path.display());
        }
        Ok(setup)
    }

    /// `--project-root`, or the current directory.
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.project_root {
            Some(p) => Ok(p.clone()),
            None => std::env::current_dir().context("Failed to get current directory"),
        }
    }

    /// Handle `--init`, or load the config and merge `--dry-run` into it.
    pub fn prepare(&self) -> Result<Setup> {
        let project_root = self.project_root()?;

        if self.init {
            let path = Config::default().save(self.config.as_deref(), &project_root)?;
            return Ok(Setup::Initialized(path));
        }

        let mut config = Config::load(self.config.as_deref(), &project_root)?;
        if self.dry_run {
            config.output.dry_run = true;
        }

        let paths = config.resolve(&project_root);
        log::debug!("Project root: {}", project_root.display());
        log::debug!("Source icon: {}", paths.source_icon.display());

        if config.output.dry_run {
            log::info!("DRY RUN — no files will be modified");
        }

        Ok(Setup::Run {
            paths,
            dry_run: config.output.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_icon_gen::config::CONFIG_FILE_NAME;
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    fn parse(args: &[&str]) -> CommonArgs {
        let argv = std::iter::once("generate").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().common
    }

    fn root_arg(dir: &Path) -> String {
        dir.to_string_lossy().into_owned()
    }

    fn expect_run(setup: Setup) -> (ResolvedPaths, bool) {
        match setup {
            Setup::Run { paths, dry_run } => (paths, dry_run),
            Setup::Initialized(path) => panic!("unexpected init: {}", path.display()),
        }
    }

    #[test]
    fn project_root_defaults_to_current_dir() {
        let args = parse(&[]);
        assert_eq!(args.project_root().unwrap(), std::env::current_dir().unwrap());
    }

    #[test]
    fn init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let root = root_arg(dir.path());
        let args = parse(&["--project-root", &root, "--init"]);

        match args.prepare().unwrap() {
            Setup::Initialized(path) => assert_eq!(path, dir.path().join(CONFIG_FILE_NAME)),
            other => panic!("expected init, got {other:?}"),
        }
        let written = Config::load(None, dir.path()).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn init_honours_config_flag() {
        let dir = TempDir::new().unwrap();
        let root = root_arg(dir.path());
        let custom = dir.path().join("custom.json");
        let custom_arg = root_arg(&custom);
        let args = parse(&["--project-root", &root, "--init", "-c", &custom_arg]);

        args.prepare().unwrap();
        assert!(custom.is_file());
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn run_resolves_paths_against_project_root() {
        let dir = TempDir::new().unwrap();
        let root = root_arg(dir.path());

        let (paths, dry_run) = expect_run(parse(&["--project-root", &root]).prepare().unwrap());
        assert_eq!(paths, Config::default().resolve(dir.path()));
        assert!(!dry_run);
    }

    #[test]
    fn dry_run_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let root = root_arg(dir.path());
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "output": { "dry_run": false } }"#,
        )
        .unwrap();

        let (_, dry_run) =
            expect_run(parse(&["--project-root", &root, "--dry-run"]).prepare().unwrap());
        assert!(dry_run);
    }

    #[test]
    fn dry_run_from_config_file() {
        let dir = TempDir::new().unwrap();
        let root = root_arg(dir.path());
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "output": { "dry_run": true } }"#,
        )
        .unwrap();

        let (_, dry_run) = expect_run(parse(&["--project-root", &root]).prepare().unwrap());
        assert!(dry_run);
    }

    #[test]
    fn explicit_config_is_used_and_must_exist() {
        let dir = TempDir::new().unwrap();
        let root = root_arg(dir.path());
        let custom = dir.path().join("custom.json");
        fs::write(&custom, r#"{ "paths": { "source_icon": "branding/logo.png" } }"#).unwrap();

        let custom_arg = root_arg(&custom);
        let (paths, _) =
            expect_run(parse(&["--project-root", &root, "-c", &custom_arg]).prepare().unwrap());
        assert_eq!(paths.source_icon, dir.path().join("branding/logo.png"));

        let typo = root_arg(&dir.path().join("custm.json"));
        let err = parse(&["--project-root", &root, "-c", &typo]).prepare().unwrap_err();
        assert!(err.to_string().contains("custm.json"));
    }
}
