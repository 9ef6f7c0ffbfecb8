//! Urls command: fallback URL and webp srcset for one asset.

use anyhow::Result;
use ckbox_core::config::CkboxConfig;
use ckbox_core::{get_image_urls_with_policy, ImageRequest, Token};
use std::io::Write;

#[derive(Debug)]
pub struct UrlsArgs<'a> {
    pub token: &'a str,
    pub id: &'a str,
    pub width: u32,
    pub extension: &'a str,
    pub origin: Option<&'a str>,
}

/// Build the image URLs and write them to `out` as pretty JSON.
pub fn run_urls(out: &mut impl Write, cfg: &CkboxConfig, args: &UrlsArgs<'_>) -> Result<()> {
    let token = Token::new(args.token);
    let origin = args.origin.unwrap_or(cfg.assets_origin.as_str());
    tracing::info!(id = args.id, width = args.width, origin, "building image urls");

    let urls = get_image_urls_with_policy(
        &ImageRequest {
            token: &token,
            id: args.id,
            origin,
            width: args.width,
            extension: args.extension,
        },
        &cfg.breakpoint_policy(),
    )?;
    serde_json::to_writer_pretty(&mut *out, &urls)?;
    writeln!(out)?;
    Ok(())
}
