//! Breakpoints command: list breakpoint widths for an image width.

use anyhow::Result;
use ckbox_core::config::CkboxConfig;
use std::io::Write;

pub fn run_breakpoints(out: &mut impl Write, cfg: &CkboxConfig, width: u32) -> Result<()> {
    for breakpoint in cfg.breakpoint_policy().breakpoints(width) {
        writeln!(out, "{breakpoint}")?;
    }
    Ok(())
}
