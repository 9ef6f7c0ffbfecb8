//! Workspaces command: workspace ids granted by a token.

use anyhow::Result;
use ckbox_core::{resolve_workspace_ids, Token};
use std::io::Write;

pub fn run_workspaces(out: &mut impl Write, token: &str) -> Result<()> {
    for workspace in resolve_workspace_ids(&Token::new(token))? {
        writeln!(out, "{workspace}")?;
    }
    Ok(())
}
