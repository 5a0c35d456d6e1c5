//! 用例评测: 对每个用例求解并与期望输出比较.
use serde::{Deserialize, Serialize};
use std::fmt;

use log::{debug, info};

use crate::config::TwoSumConfig;
use crate::finder::solve;
use crate::input::Problem;
use crate::io::{self, IoError};
use crate::report::render;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub input: String,
    pub output: String,
    pub expected: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub results: Vec<CaseResult>,
    pub passed_count: usize,
    pub all_passed: bool,
}

/// 求解单个用例输入; 解析失败时输出错误信息本身.
pub fn run_case(input: &str, config: &TwoSumConfig) -> String {
    match Problem::parse(input, config.strict) {
        Ok(problem) => render(&solve(&problem), config.style, &config.no_solution_text),
        Err(err) => err.to_string(),
    }
}

pub fn evaluate(cases: &[TestCase], config: &TwoSumConfig) -> CheckReport {
    let results: Vec<CaseResult> = cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let output = run_case(&case.input, config);
            let passed = output.trim() == case.expected.trim();
            debug!("case #{}: output {:?}, passed {}", i + 1, output, passed);
            CaseResult {
                input: case.input.clone(),
                output,
                expected: case.expected.clone(),
                passed,
            }
        })
        .collect();

    let passed_count = results.iter().filter(|r| r.passed).count();
    info!("{}/{} cases passed", passed_count, results.len());
    CheckReport {
        all_passed: passed_count == results.len(),
        passed_count,
        results,
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.results.iter().enumerate() {
            let verdict = if result.passed { "PASS" } else { "FAIL" };
            write!(f, "case #{}: {}", i + 1, verdict)?;
            if !result.passed {
                write!(
                    f,
                    " (expected {:?}, got {:?})",
                    result.expected.trim(),
                    result.output.trim()
                )?;
            }
            writeln!(f)?;
        }
        write!(f, "{}/{} passed", self.passed_count, self.results.len())
    }
}

impl CheckReport {
    /// 保存文本报告, 并在 `{path}.json` 与 `{path}.ron` 写入结构化版本
    pub fn save_to_file(&self, path: &str) -> Result<(), IoError> {
        use std::io::Write;

        let mut file = std::fs::File::create(path)?;
        writeln!(file, "{}", self)?;

        io::write_all_formats(path, self)
    }
}
