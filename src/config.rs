use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "app-icon-gen.json";

/// Top-level configuration for the icon generators.
///
/// Only locations and output behavior are configurable; the icon size sets
/// are fixed by the target platforms.
///
/// # Loading
///
/// ```rust,no_run
/// use app_icon_gen::config::Config;
/// use std::path::Path;
///
/// let root = Path::new(".");
/// let config = Config::load(None, root).unwrap();
/// let paths = config.resolve(root);
/// println!("Source icon: {}", paths.source_icon.display());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations, relative to the project root.
    pub paths: PathsConfig,
    /// Output behavior.
    pub output: OutputConfig,
}

/// Project-root-relative locations. Absolute paths are used as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub source_icon: String,
    pub android_res_dir: String,
    pub windows_resources_dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// If `true`, report what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// [`PathsConfig`] joined onto a concrete project root.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaths {
    pub source_icon: PathBuf,
    pub android_res_dir: PathBuf,
    pub windows_resources_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_icon: "assets/icons/app_icon.png".to_string(),
            android_res_dir: "android/app/src/main/res".to_string(),
            windows_resources_dir: "windows/runner/resources".to_string(),
        }
    }
}

impl Config {
    /// Default config file location for a project.
    pub fn config_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Load config from the given path, or from the project's default location.
    ///
    /// An explicitly given `path` must exist. A missing default file is not an
    /// error: a warning is logged and defaults are returned.
    pub fn load(path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                p.to_path_buf()
            }
            None => Self::config_path(project_root),
        };

        if !config_path.exists() {
            log::warn!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to the given path, or to the project's default location.
    pub fn save(&self, path: Option<&Path>, project_root: &Path) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(project_root),
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file {}", config_path.display()))?;
        log::info!("Config saved to {}", config_path.display());
        Ok(config_path)
    }

    /// Join the configured paths onto `project_root`.
    pub fn resolve(&self, project_root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            source_icon: project_root.join(&self.paths.source_icon),
            android_res_dir: project_root.join(&self.paths.android_res_dir),
            windows_resources_dir: project_root.join(&self.paths.windows_resources_dir),
        }
    }
}
