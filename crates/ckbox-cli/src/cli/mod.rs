//! CLI for building responsive CKBox image URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ckbox_core::{config, logging};
use std::io::{self, Write};
use std::path::PathBuf;

use commands::{run_breakpoints, run_from_map, run_urls, run_workspaces, UrlsArgs};

/// Top-level CLI for the CKBox image URL builder.
#[derive(Debug, Parser)]
#[command(name = "ckbox")]
#[command(about = "Build responsive image URLs for CKBox assets", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/ckbox/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the fallback URL and webp srcset for an asset as JSON.
    Urls {
        /// Access token (`header.payload.signature`).
        #[arg(long)]
        token: String,
        /// Asset identifier.
        #[arg(long)]
        id: String,
        /// Intrinsic image width in pixels.
        #[arg(long)]
        width: u32,
        /// Original file extension (e.g. jpg, png).
        #[arg(long)]
        extension: String,
        /// Assets origin; defaults to `assets_origin` from the config.
        #[arg(long)]
        origin: Option<String>,
    },

    /// Print the breakpoints for an image width, one per line.
    Breakpoints {
        /// Intrinsic image width in pixels.
        width: u32,
    },

    /// Print the workspace ids granted by a token, one per line.
    Workspaces {
        /// Access token (`header.payload.signature`).
        #[arg(long)]
        token: String,
    },

    /// Build image sources from a JSON map of width -> URL (plus "default").
    FromMap {
        /// Path to the JSON file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Err(err) = logging::init_logging(&cfg.logging) {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.command.execute(&mut out, &cfg)?;
        out.flush()?;
        Ok(())
    }

    /// Run the command, writing its results to `out`.
    pub fn execute(&self, out: &mut impl Write, cfg: &config::CkboxConfig) -> Result<()> {
        match self {
            CliCommand::Urls {
                token,
                id,
                width,
                extension,
                origin,
            } => run_urls(
                out,
                cfg,
                &UrlsArgs {
                    token,
                    id,
                    width: *width,
                    extension,
                    origin: origin.as_deref(),
                },
            )?,
            CliCommand::Breakpoints { width } => run_breakpoints(out, cfg, *width)?,
            CliCommand::Workspaces { token } => run_workspaces(out, token)?,
            CliCommand::FromMap { path } => run_from_map(out, path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
