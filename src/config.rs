use std::{
    fs,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    errors::{FileOperation, IoError},
    ignore::IgnoreSet,
};

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(sprout::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(
        code(sprout::config::parse_toml),
        help("Only an [ignore] table with an `extensions` list is supported")
    )]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Optional settings read from a toml file.
///
/// ```toml
/// [ignore]
/// extensions = ["psd", "lock"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ignore: IgnoreConfig,
}
impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(IoError::on(FileOperation::Read, path))?;

        let parsed = toml::from_str(&content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(parsed)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::debug!("loading config from: {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::with_extra(&self.ignore.extensions)
    }
}
