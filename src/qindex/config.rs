use crate::error::{QindexError, Result};
use crate::render::DEFAULT_HEADING;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "qindex.json";

/// Project configuration, read from `qindex.json` in the working directory (or the
/// file given with `--config`). Command line flags override every field.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QindexConfig {
    /// Root of the question tree
    pub questions_dir: PathBuf,

    /// Document holding the GENERATED markers
    pub readme: PathBuf,

    /// Root of the code example tree used by `link-examples`
    pub code_dir: PathBuf,

    /// Top-level heading of the generated index; `null` omits it
    pub index_heading: Option<String>,
}

impl Default for QindexConfig {
    fn default() -> Self {
        Self {
            questions_dir: PathBuf::from("questions"),
            readme: PathBuf::from("README.md"),
            code_dir: PathBuf::from("code"),
            index_heading: Some(DEFAULT_HEADING.to_string()),
        }
    }
}

impl QindexConfig {
    /// Load config from `qindex.json` in the given directory, or defaults if absent.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file path, or defaults if absent.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(QindexError::read(path))?;
        let config: QindexConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
