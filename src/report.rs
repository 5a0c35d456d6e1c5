//! 结果输出格式.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::finder::Outcome;

pub const DEFAULT_NO_SOLUTION_TEXT: &str = "No solution found";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `i j`
    #[default]
    Plain,
    /// `[i, j]`
    Bracketed,
    /// `{"found":true,"indices":[i,j]}`
    Json,
}

impl OutputStyle {
    pub const NAMES: [&'static str; 3] = ["plain", "bracketed", "json"];
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputStyle::Plain),
            "bracketed" => Ok(OutputStyle::Bracketed),
            "json" => Ok(OutputStyle::Json),
            other => Err(format!("unsupported output style: {other}")),
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputStyle::Plain => "plain",
            OutputStyle::Bracketed => "bracketed",
            OutputStyle::Json => "json",
        };
        f.write_str(name)
    }
}

/// 将结果渲染为一行输出 (不含换行).
pub fn render(outcome: &Outcome, style: OutputStyle, no_solution_text: &str) -> String {
    match (style, outcome) {
        (OutputStyle::Json, _) => json!({
            "found": outcome.is_found(),
            "indices": outcome.indices().map(|p| [p.first, p.second]),
        })
        .to_string(),
        (_, Outcome::NotFound) => no_solution_text.to_string(),
        (OutputStyle::Plain, Outcome::Found(pair)) => pair.to_string(),
        (OutputStyle::Bracketed, Outcome::Found(pair)) => {
            format!("[{}, {}]", pair.first, pair.second)
        }
    }
}
