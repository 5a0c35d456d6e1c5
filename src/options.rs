//! Parsing Options.
//! `--style {plain|bracketed|json}` or `-s`, `--check {suite}` to evaluate test cases

use clap::{Arg, Command};
use std::error::Error;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::report::OutputStyle;

fn make_options_parser() -> clap::Command {
    let parser = Command::new("twosum")
        .no_binary_name(true)
        .args_override_self(true)
        .about("Find two indices whose values sum to a target")
        .version("v0.1.0")
        .arg(
            Arg::new("style")
                .short('s')
                .long("style")
                .help("Output style, overrides the config file")
                .value_parser(OutputStyle::NAMES),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read the problem from FILE instead of standard input"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_FILE),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .value_name("SUITE")
                .help("Evaluate a .json or .ron test-case suite instead of solving one problem"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("FILE")
                .requires("check")
                .help("With --check, also save the report to FILE (and FILE.json)"),
        );
    parser
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub style: Option<OutputStyle>,
    pub input: Option<String>,
    pub config: String,
    pub check: Option<String>,
    pub report: Option<String>,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let style = match matches.get_one::<String>("style") {
            Some(name) => Some(name.parse::<OutputStyle>()?),
            None => None,
        };
        let config = matches
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        Ok(Options {
            style,
            input: matches.get_one::<String>("input").cloned(),
            config,
            check: matches.get_one::<String>("check").cloned(),
            report: matches.get_one::<String>("report").cloned(),
        })
    }
}
