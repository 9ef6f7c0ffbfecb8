//! CLI parse and output tests.

use super::{Cli, CliCommand};
use anyhow::Result;
use ckbox_core::config::CkboxConfig;
use clap::Parser;

pub(super) fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn parse(args: &[&str]) -> CliCommand {
    parse_cli(args).command
}

/// Parses `args` and runs the command, returning what it printed.
pub(super) fn render(args: &[&str], cfg: &CkboxConfig) -> Result<String> {
    let mut out = Vec::new();
    parse(args).execute(&mut out, cfg)?;
    Ok(String::from_utf8(out)?)
}
