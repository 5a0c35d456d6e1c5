use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::error::ErrorKind;
use log::{debug, info};

use twosum::check::evaluate;
use twosum::config::TwoSumConfig;
use twosum::io::read_suite;
use twosum::options::Options;
use twosum::{Problem, render, solve};

fn main() -> ExitCode {
    if std::env::var("TWOSUM_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("TWOSUM_LOG")
            .write_style("TWOSUM_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    // TWOSUM_FLAGS 在前, 命令行参数覆盖之
    let mut flags = match shellwords::split(&std::env::var("TWOSUM_FLAGS").unwrap_or_default()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: TWOSUM_FLAGS: {err}");
            return ExitCode::FAILURE;
        }
    };
    flags.extend(std::env::args().skip(1));

    let options = match Options::parse_from_args(&flags) {
        Ok(options) => options,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(clap_err) => match clap_err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => clap_err.exit(),
                _ => {
                    eprint!("{clap_err}");
                    return ExitCode::FAILURE;
                }
            },
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
    };
    debug!("twosum options: {:?}", options);

    match run(options) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: Options) -> Result<ExitCode> {
    let mut config = TwoSumConfig::load_from_file(&options.config)?;
    if let Some(style) = options.style {
        config.style = style;
    }
    debug!("effective config: {:?}", config);

    if let Some(suite) = &options.check {
        let cases = read_suite(suite).with_context(|| format!("Failed to load suite: {suite}"))?;
        info!("evaluating {} cases from {}", cases.len(), suite);
        let report = evaluate(&cases, &config);
        println!("{report}");
        if let Some(path) = &options.report {
            report
                .save_to_file(path)
                .with_context(|| format!("Failed to save report: {path}"))?;
        }
        return Ok(if report.all_passed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let problem = match &options.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open input: {path}"))?;
            Problem::read_from(file, config.strict)
        }
        None => Problem::read_from(std::io::stdin().lock(), config.strict),
    }
    .map_err(|err| anyhow!("malformed input: {err}"))?;

    let outcome = solve(&problem);
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{}",
        render(&outcome, config.style, &config.no_solution_text)
    )?;
    Ok(ExitCode::SUCCESS)
}
