//! Configuration
//!
//! This module contains the configuration model for both maintenance
//! operations. All roots, the remapping table, and the removal list are
//! configuration data; nothing is derived at runtime.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Deserializer};

use crate::errors::{config_parsing_error, file_operation_error, Result};
use crate::utils::{find_project_folder, process_path};

/// Built-in configuration used when no configuration file is present
///
/// These are the fixed tables for the documentation site this tool was
/// written for.
const DEFAULT_CONFIG: &str = r#"
metas:
  root: [pages, evm-package]

sync:
  origin: ["..", evm, docs]
  destination: [pages, evm-package]
  mappings:
    - from: implementations
      to: readyToUse
    - from: RMRK/multiasset
      to: core/modular/multiasset
    - from: RMRK/equippable
      to: core/modular/equippable
    - from: RMRK/nestable
      to: core/modular/nestable
    - from: RMRK/emotable
      to: core/modular/emotable
    - from: RMRK/extension/tokenAttributes
      to: core/modular/tokenAttributes
    - from: RMRK/access
      to: core/other/access
    - from: RMRK/catalog
      to: core/other/catalog
    - from: RMRK/core
      to: core/other/core
    - from: RMRK/extension
      to: core/other/extension
    - from: RMRK/library
      to: core/other/library
    - from: RMRK/security
      to: core/other/security
    - from: RMRK/utils
      to: core/other/utils
  remove:
    - core/other/extension/tokenAttributes
"#;

/// Top-level configuration for the application
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Configuration for the metadata generator
    pub metas: MetasConfig,
    /// Configuration for the tree synchroniser
    pub sync: SyncConfig,
}

/// Configuration for the metadata generator
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MetasConfig {
    /// Root of the documentation tree to generate sidecars for
    #[serde(deserialize_with = "deserialize_from_array_to_pathbuf")]
    pub root: PathBuf,
}

/// Configuration for the tree synchroniser
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SyncConfig {
    /// Root of the external source tree to copy from
    #[serde(deserialize_with = "deserialize_from_array_to_pathbuf")]
    pub origin: PathBuf,
    /// Root of the destination tree to copy into
    #[serde(deserialize_with = "deserialize_from_array_to_pathbuf")]
    pub destination: PathBuf,
    /// Ordered list of subtree remappings, applied in table order
    pub mappings: Vec<Remap>,
    /// Ordered list of destination-relative paths deleted after copying
    #[serde(default)]
    pub remove: Vec<PathBuf>,
}

/// A single subtree remapping
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Remap {
    /// Path relative to the origin root
    pub from: PathBuf,
    /// Path relative to the destination root
    pub to: PathBuf,
}

impl Config {
    /// Loads the configuration from a file, falling back to the built-in
    /// defaults when the file does not exist
    ///
    /// # Arguments
    /// * `path` - The resolved configuration file path
    ///
    /// # Returns
    /// * `Result<Config>` - The parsed configuration or an error
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("No configuration file found, using built-in defaults");
            return Config::default_config();
        }

        let content = read_to_string(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
        serde_yaml::from_str(&content).map_err(|e| {
            config_parsing_error(e, &format!("Failed to parse {}", path.display()))
        })
    }

    /// Parses the built-in default configuration
    pub fn default_config() -> Result<Config> {
        serde_yaml::from_str(DEFAULT_CONFIG)
            .map_err(|e| config_parsing_error(e, "Failed to parse built-in configuration"))
    }
}

/// Resolves the configuration file path
///
/// A path that exists is used as given; anything else is looked up in the
/// per-user configuration directory.
pub fn resolve_config_path(config: PathBuf) -> Result<PathBuf> {
    if config.exists() {
        Ok(config)
    } else {
        let folder = find_project_folder()?;
        Ok(folder.config_dir().join(config))
    }
}

/// Deserialises a path expressed as an array of segments
///
/// Each segment is tilde-expanded before the segments are joined.
fn deserialize_from_array_to_pathbuf<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let path_strings: Vec<String> = Deserialize::deserialize(deserializer)?;
    Ok(path_strings.iter().map(|segment| process_path(segment)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = Config::default_config().unwrap();

        assert_eq!(config.metas.root, PathBuf::from("pages/evm-package"));
        assert_eq!(config.sync.origin, PathBuf::from("../evm/docs"));
        assert_eq!(config.sync.destination, PathBuf::from("pages/evm-package"));
        assert_eq!(config.sync.mappings.len(), 13);
        assert_eq!(config.sync.remove.len(), 1);
    }

    #[test]
    fn test_mapping_order_is_preserved() {
        let config = Config::default_config().unwrap();

        // The first and last table entries anchor the declared order
        assert_eq!(config.sync.mappings[0].from, PathBuf::from("implementations"));
        assert_eq!(config.sync.mappings[0].to, PathBuf::from("readyToUse"));
        assert_eq!(config.sync.mappings[12].from, PathBuf::from("RMRK/utils"));
        assert_eq!(config.sync.mappings[12].to, PathBuf::from("core/other/utils"));
    }

    #[test]
    fn test_removal_list_defaults_to_empty() {
        let yaml = r#"
metas:
  root: [docs]
sync:
  origin: [source]
  destination: [docs]
  mappings:
    - from: a
      to: b
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.sync.remove.is_empty());
    }

    #[test]
    fn test_root_segments_are_joined() {
        let yaml = r#"
metas:
  root: [pages, nested, docs]
sync:
  origin: [origin]
  destination: [pages]
  mappings: []
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.metas.root, PathBuf::from("pages/nested/docs"));
    }
}
