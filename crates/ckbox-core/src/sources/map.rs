//! Image sources from a pre-resolved `width -> URL` map.

use super::{responsive_source, ImageUrls};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Key of the fallback URL in an [`ImageUrlMap`].
pub const DEFAULT_KEY: &str = "default";

/// Width keys (`"80"`, `"160"`, ...) plus a [`DEFAULT_KEY`] entry, each
/// mapped to an absolute URL.
pub type ImageUrlMap = BTreeMap<String, String>;

/// Width encoded in a map key: the leading run of ASCII digits, after
/// optional leading whitespace and `+`. `"80"`, `"080"` and `"80px"` are
/// all 80; `"default"`, `"-5"` and `"px80"` are not widths.
pub fn width_from_key(key: &str) -> Option<u32> {
    let rest = key.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    digits.parse().ok()
}

/// Builds image sources from URLs the service already resolved.
///
/// Keys with a leading width (see [`width_from_key`]) contribute
/// `"{url} {key}w"` with the key written as given; other keys besides
/// `default` are ignored. Entries are listed in ascending numeric width.
/// `sizes` is derived from the largest width (0 if there is none).
pub fn get_image_urls_from_map(image_urls: &ImageUrlMap) -> Result<ImageUrls> {
    let image_fallback_url = image_urls
        .get(DEFAULT_KEY)
        .cloned()
        .ok_or(Error::MissingFallback)?;

    let mut responsive: Vec<(u32, &str, &str)> = image_urls
        .iter()
        .filter_map(|(key, url)| width_from_key(key).map(|width| (width, key.as_str(), url.as_str())))
        .collect();
    // Map order already breaks ties between keys naming the same width.
    responsive.sort_by_key(|&(width, _, _)| width);

    let max_width = responsive.last().map_or(0, |&(width, _, _)| width);
    if responsive.is_empty() {
        tracing::warn!("image URL map has no width entries");
    }

    let srcset = responsive
        .iter()
        .map(|(_, key, url)| format!("{url} {key}w"))
        .collect::<Vec<_>>()
        .join(",");

    Ok(ImageUrls {
        image_fallback_url,
        image_sources: vec![responsive_source(srcset, max_width)],
    })
}
