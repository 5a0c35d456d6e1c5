//! 用例集与评测报告的序列化: JSON 与 RON, 按扩展名选择.
use std::fs;
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::check::TestCase;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron error: {0}")]
    RonSpanned(#[from] ron::error::SpannedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported suite format: {0:?} (expected .json or .ron)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ron,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Json, Format::Ron];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Ron => "ron",
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == extension)
            .ok_or_else(|| IoError::UnsupportedFormat(path.display().to_string()))
    }

    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, IoError> {
        Ok(match self {
            Format::Json => serde_json::from_str(text)?,
            Format::Ron => ron::from_str(text)?,
        })
    }

    pub fn render<T: Serialize>(self, value: &T) -> Result<String, IoError> {
        Ok(match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Ron => {
                let mut pretty = PrettyConfig::default();
                pretty.new_line = "\n".into();
                ron::ser::to_string_pretty(value, pretty)?
            }
        })
    }
}

/// 按扩展名读取用例集.
pub fn read_suite<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>, IoError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    format.parse(&fs::read_to_string(path)?)
}

/// 写入 `{stem}.json` 与 `{stem}.ron` 两份.
pub fn write_all_formats<T: Serialize>(stem: &str, value: &T) -> Result<(), IoError> {
    for format in Format::ALL {
        fs::write(format!("{stem}.{}", format.extension()), format.render(value)?)?;
    }
    Ok(())
}
