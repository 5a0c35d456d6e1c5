//! 标准输入格式: 元素个数 `n`, 接着 `n` 个整数, 最后是目标值 `target`.
//! 以空白分隔, 换行无意义.
use std::io::Read;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is empty: expected the element count")]
    MissingCount,
    #[error("token {position} ({token:?}) is not a valid {expected}")]
    InvalidToken {
        position: usize,
        token: String,
        expected: &'static str,
    },
    #[error("expected {declared} values but input ended after {found}")]
    MissingValues { declared: usize, found: usize },
    #[error("input ended before the target value")]
    MissingTarget,
    #[error("unexpected trailing input starting at token {position} ({token:?})")]
    TrailingInput { position: usize, token: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl Problem {
    /// 解析输入; 目标值之后的多余记号按 `strict` 决定是警告还是报错.
    pub fn parse(text: &str, strict: bool) -> Result<Self, InputError> {
        let mut tokens = text.split_whitespace().enumerate().map(|(i, t)| (i + 1, t));

        let (position, token) = tokens.next().ok_or(InputError::MissingCount)?;
        let declared: usize = parse_token(position, token, "element count")?;
        debug!("reading {declared} values");

        let mut nums = Vec::with_capacity(declared.min(1 << 16));
        for found in 0..declared {
            let (position, token) = tokens
                .next()
                .ok_or(InputError::MissingValues { declared, found })?;
            nums.push(parse_token(position, token, "integer")?);
        }

        let (position, token) = tokens.next().ok_or(InputError::MissingTarget)?;
        let target = parse_token(position, token, "target integer")?;

        if let Some((position, token)) = tokens.next() {
            if strict {
                return Err(InputError::TrailingInput {
                    position,
                    token: token.to_string(),
                });
            }
            warn!("ignoring trailing input starting at token {position} ({token:?})");
        }

        Ok(Problem { nums, target })
    }

    pub fn read_from<R: Read>(mut reader: R, strict: bool) -> Result<Self, InputError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content, strict)
    }
}

fn parse_token<T: std::str::FromStr>(
    position: usize,
    token: &str,
    expected: &'static str,
) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        position,
        token: token.to_string(),
        expected,
    })
}
