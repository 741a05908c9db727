//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use super::validation::ConfigIssue;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "stackfeed";
const PROJECT_FILE: &str = "stackfeed.toml";
const ENV_PREFIX: &str = "STACKFEED_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("explicit config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("invalid configuration: {}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The files and environment a load draws from.
///
/// [`ConfigLoader::load`] discovers these from the platform; tests build
/// them by hand.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
    /// Read `STACKFEED_*` variables
    pub env: bool,
}

impl ConfigSources {
    /// Sources discovered from the platform and working directory.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            global: ConfigLoader::global_config_path().filter(|p| p.exists()),
            project: ConfigLoader::project_config_path(),
            explicit: explicit.map(Path::to_path_buf),
            env: true,
        }
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority.
    ///
    /// Validation warnings are returned alongside the config; any
    /// error-severity issue fails the load.
    pub fn load(explicit: Option<&Path>) -> Result<(FileConfig, Vec<ConfigIssue>), ConfigError> {
        Self::load_from(&ConfigSources::discover(explicit))
    }

    pub fn load_from(
        sources: &ConfigSources,
    ) -> Result<(FileConfig, Vec<ConfigIssue>), ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = &sources.global {
            debug!(path = %path.display(), "Merging global config");
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = &sources.project {
            debug!(path = %path.display(), "Merging project config");
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = &sources.explicit {
            // Toml::file silently skips missing files; an explicit path must exist.
            if !path.exists() {
                return Err(ConfigError::Missing(path.clone()));
            }
            debug!(path = %path.display(), "Merging explicit config");
            figment = figment.merge(Toml::file(path));
        }

        if sources.env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        Self::check(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn check(config: FileConfig) -> Result<(FileConfig, Vec<ConfigIssue>), ConfigError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            config.validate().into_iter().partition(ConfigIssue::is_error);
        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors));
        }
        Ok((config, warnings))
    }

    /// `$XDG_CONFIG_HOME/stackfeed/config.toml`, or the platform equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// `./stackfeed.toml`, if it exists
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_FILE);
        path.exists().then_some(path)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (lowest to highest priority):");
        println!("  [     ] Default:  built-in defaults");

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:   {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project:  {}", path.display()),
            None => println!("  [     ] Project:  ./{}", PROJECT_FILE),
        }

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        println!("  [     ] Env:      {}*", ENV_PREFIX);
    }
}
