//! From-map command: image sources from pre-resolved URLs.

use anyhow::{Context, Result};
use ckbox_core::{get_image_urls_from_map, ImageUrlMap};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read a `{ "80": "...", ..., "default": "..." }` JSON file and print the
/// resulting image sources to `out` as pretty JSON.
pub fn run_from_map(out: &mut impl Write, path: &Path) -> Result<()> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let map: ImageUrlMap = serde_json::from_str(&data)
        .with_context(|| format!("parsing image URL map {}", path.display()))?;
    tracing::debug!(entries = map.len(), "loaded image URL map");

    let urls = get_image_urls_from_map(&map)?;
    serde_json::to_writer_pretty(&mut *out, &urls)?;
    writeln!(out)?;
    Ok(())
}
