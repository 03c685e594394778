//! Configuration for a Bates logging run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bates::{BatesMatcher, DEFAULT_BATES_PATTERN};
use crate::error::{BatesError, Result};

/// Settings for a Bates logging run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatesConfig {
    /// Regular expression a Bates number must match.
    pub pattern: String,

    /// Directory scanned when no list file is given.
    pub root: PathBuf,

    /// Destination CSV file.
    pub output: PathBuf,
}

impl Default for BatesConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_BATES_PATTERN.to_string(),
            root: PathBuf::from("."),
            output: PathBuf::from("bates_log.csv"),
        }
    }
}

impl BatesConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| BatesError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BatesError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Compile the configured pattern.
    pub fn matcher(&self) -> Result<BatesMatcher> {
        Ok(BatesMatcher::new(&self.pattern)?)
    }
}
