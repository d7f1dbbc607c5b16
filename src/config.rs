use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::DevBranches;
use crate::error::{DocsChannelError, Result};

/// Command run to publish a docs build, `{remote}`, `{version}` and `{alias}`
/// are substituted before it is handed to the shell.
pub const DEFAULT_PUBLISH_COMMAND: &str =
    "task docs:publish DOCS_REMOTE={remote} DOCS_VERSION={version} DOCS_ALIAS={alias}";

/// Represents the complete configuration for docs-channel.
///
/// Contains the development branch set, where release branches are read from,
/// and how the publish step is invoked.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_dev_branches")]
    pub dev_branches: Vec<String>,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

/// Returns the default list of development branches.
fn default_dev_branches() -> Vec<String> {
    vec!["main".to_string()]
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_publish_command() -> String {
    DEFAULT_PUBLISH_COMMAND.to_string()
}

/// Where the release catalog is read from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Remote whose `<major>.<minor>.x` branches form the catalog
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            remote: default_remote(),
        }
    }
}

/// How the publish step is invoked.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    /// Remote the docs are pushed to, unless `--remote` is given
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_publish_command")]
    pub command: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            remote: default_remote(),
            command: default_publish_command(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dev_branches: default_dev_branches(),
            catalog: CatalogConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

impl Config {
    /// Development branches as a lookup set
    pub fn dev_branch_set(&self) -> DevBranches {
        DevBranches::new(self.dev_branches.iter().cloned())
    }

    /// Check values that serde defaults cannot guard
    pub fn validate(&self) -> Result<()> {
        if self.catalog.remote.trim().is_empty() {
            return Err(DocsChannelError::config("catalog.remote must not be empty"));
        }
        if self.publish.command.trim().is_empty() {
            return Err(DocsChannelError::config("publish.command must not be empty"));
        }
        Ok(())
    }
}

/// Parses and validates configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(text).map_err(|e| DocsChannelError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docschannel.toml` in current directory
/// 3. `.docschannel.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config_file(Path::new(path))?
    } else if Path::new("./docschannel.toml").exists() {
        read_config_file(Path::new("./docschannel.toml"))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".docschannel.toml");
        if config_path.exists() {
            read_config_file(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        DocsChannelError::config(format!("Cannot read '{}': {}", path.display(), e))
    })
}
