use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::{DEFAULT_NO_SOLUTION_TEXT, OutputStyle};

pub const DEFAULT_CONFIG_FILE: &str = "twosum.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TwoSumConfig {
    #[serde(default)]
    pub style: OutputStyle,
    #[serde(default = "default_no_solution_text")]
    pub no_solution_text: String,
    /// 目标值之后出现多余输入时报错而不是忽略
    #[serde(default)]
    pub strict: bool,
}

impl Default for TwoSumConfig {
    fn default() -> Self {
        Self {
            style: OutputStyle::default(),
            no_solution_text: default_no_solution_text(),
            strict: false,
        }
    }
}

impl TwoSumConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: TwoSumConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_no_solution_text() -> String {
    DEFAULT_NO_SOLUTION_TEXT.to_string()
}
