use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "mcolor.toml";

/// Palette size used when neither the config file nor the command line
/// sets one. A match has at most six neighbours, so seven colors always
/// suffice.
pub const DEFAULT_PALETTE_SIZE: usize = 7;

/// Largest palette accepted from the config file or the command line.
pub const MAX_PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub palette_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_PALETTE_SIZE).contains(&self.palette_size) {
            return Err(ConfigError::InvalidPaletteSize {
                value: self.palette_size,
                max: MAX_PALETTE_SIZE,
            });
        }
        Ok(self)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml(&text)
    }

    /// Load `explicit` if given (it must exist), else `mcolor.toml` from
    /// `dir` if present, else the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::read(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply a command-line palette size on top of the file settings.
    pub fn with_palette_size(self, palette_size: Option<usize>) -> Result<Self, ConfigError> {
        match palette_size {
            Some(palette_size) => Self { palette_size }.validated(),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
