use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};
use crate::logger::{DEFAULT_DELIMITER, DEFAULT_NULL_STRING};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub filename: PathBuf,
    pub delimiter: String,
    pub null_string: String,
    pub line_terminator: String,
    pub append: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::new(),
            delimiter: DEFAULT_DELIMITER.into(),
            null_string: DEFAULT_NULL_STRING.into(),
            line_terminator: "\n".into(),
            append: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ("couldn't read config file", e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::from(("malformed config", e)).with_kind(ErrorKind::Config))
    }
}
