//! Responsive image sources for a CKBox asset.
//!
//! Produces one `webp` source listing every breakpoint rendition, plus a
//! fallback URL for browsers without `webp` support.

mod map;

pub use map::{get_image_urls_from_map, width_from_key, ImageUrlMap, DEFAULT_KEY};

use crate::asset_url::{join_asset_path, parse_origin, AssetUrl};
use crate::breakpoints::BreakpointPolicy;
use crate::error::{Error, Result};
use crate::extension::{fallback_extension, RESPONSIVE_EXTENSION, RESPONSIVE_MIME_TYPE};
use crate::token::{resolve_workspace_ids, Token};
use serde::Serialize;

/// One `<source>` element: the `srcset`, `sizes` and `type` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSource {
    pub srcset: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// URLs for a responsive `<picture>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrls {
    pub image_fallback_url: String,
    pub image_sources: Vec<ImageSource>,
}

/// Input of [`get_image_urls`].
#[derive(Debug, Clone, Copy)]
pub struct ImageRequest<'a> {
    pub token: &'a Token,
    pub id: &'a str,
    pub origin: &'a str,
    pub width: u32,
    pub extension: &'a str,
}

/// Builds the fallback URL and the `webp` source for an image, using the
/// default breakpoint policy.
pub fn get_image_urls(request: &ImageRequest<'_>) -> Result<ImageUrls> {
    get_image_urls_with_policy(request, &BreakpointPolicy::default())
}

/// Same as [`get_image_urls`], with explicit breakpoint parameters.
pub fn get_image_urls_with_policy(
    request: &ImageRequest<'_>,
    policy: &BreakpointPolicy,
) -> Result<ImageUrls> {
    if request.width == 0 {
        return Err(Error::InvalidWidth {
            width: request.width,
        });
    }

    let base = parse_origin(request.origin)?;
    let workspace_ids = resolve_workspace_ids(request.token)?;
    let workspace_id = workspace_ids[0].as_str();
    let breakpoints = policy.breakpoints(request.width);
    tracing::debug!(
        id = request.id,
        width = request.width,
        ?breakpoints,
        "computed image breakpoints"
    );

    let asset = AssetUrl {
        workspace_id,
        id: request.id,
        origin: request.origin,
        width: request.width,
        extension: fallback_extension(request.extension),
    };
    let image_fallback_url = join_asset_path(&base, &asset)?.to_string();

    let srcset = breakpoints
        .iter()
        .map(|&width| {
            let url = join_asset_path(
                &base,
                &AssetUrl {
                    width,
                    extension: RESPONSIVE_EXTENSION,
                    ..asset
                },
            )?;
            Ok(format!("{url} {width}w"))
        })
        .collect::<Result<Vec<_>>>()?
        .join(",");

    Ok(ImageUrls {
        image_fallback_url,
        image_sources: vec![responsive_source(srcset, request.width)],
    })
}

/// Lets the image fill the viewport up to its own width, never beyond.
pub(crate) fn sizes_for_width(width: u32) -> String {
    format!("(max-width: {width}px) 100vw, {width}px")
}

pub(crate) fn responsive_source(srcset: String, width: u32) -> ImageSource {
    ImageSource {
        srcset,
        sizes: sizes_for_width(width),
        mime_type: RESPONSIVE_MIME_TYPE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::token_with_payload;

    fn request<'a>(token: &'a Token, width: u32, extension: &'a str) -> ImageRequest<'a> {
        ImageRequest {
            token,
            id: "abc",
            origin: "https://cdn.example/",
            width,
            extension,
        }
    }

    #[test]
    fn builds_fallback_and_srcset() {
        let token = token_with_payload(r#"{"aud":"w1"}"#);
        let urls = get_image_urls(&request(&token, 200, "jpg")).unwrap();

        assert_eq!(
            urls.image_fallback_url,
            "https://cdn.example/w1/assets/abc/images/200.jpeg"
        );
        assert_eq!(urls.image_sources.len(), 1);
        let source = &urls.image_sources[0];
        assert_eq!(
            source.srcset,
            "https://cdn.example/w1/assets/abc/images/120.webp 120w,\
             https://cdn.example/w1/assets/abc/images/200.webp 200w"
        );
        assert_eq!(source.sizes, "(max-width: 200px) 100vw, 200px");
        assert_eq!(source.mime_type, "image/webp");
    }

    #[test]
    fn uses_first_workspace() {
        let token =
            token_with_payload(r#"{"aud":"env","auth":{"ckbox":{"workspaces":["first","second"]}}}"#);
        let urls = get_image_urls(&request(&token, 100, "png")).unwrap();
        assert_eq!(
            urls.image_fallback_url,
            "https://cdn.example/first/assets/abc/images/100.png"
        );
        assert_eq!(
            urls.image_sources[0].srcset,
            "https://cdn.example/first/assets/abc/images/100.webp 100w"
        );
    }

    #[test]
    fn sizes_use_requested_width_not_capped_breakpoint() {
        let token = token_with_payload(r#"{"aud":"w1"}"#);
        let urls = get_image_urls(&request(&token, 5000, "png")).unwrap();
        let source = &urls.image_sources[0];
        assert_eq!(source.sizes, "(max-width: 5000px) 100vw, 5000px");
        assert!(source.srcset.ends_with("/4000.webp 4000w"));
        assert!(urls.image_fallback_url.ends_with("/5000.png"));
    }

    #[test]
    fn zero_width_is_rejected() {
        let token = token_with_payload(r#"{"aud":"w1"}"#);
        let err = get_image_urls(&request(&token, 0, "png")).unwrap_err();
        assert!(matches!(err, Error::InvalidWidth { width: 0 }));
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let token = token_with_payload(r#"{"aud":"w1"}"#);
        let req = ImageRequest {
            origin: "not a url",
            ..request(&token, 200, "png")
        };
        assert!(matches!(
            get_image_urls(&req).unwrap_err(),
            Error::InvalidOrigin { .. }
        ));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let token = token_with_payload(r#"{"aud":"w1"}"#);
        let urls = get_image_urls(&request(&token, 80, "gif")).unwrap();
        let json = serde_json::to_value(&urls).unwrap();
        assert_eq!(
            json["imageFallbackUrl"],
            "https://cdn.example/w1/assets/abc/images/80.gif"
        );
        assert_eq!(json["imageSources"][0]["type"], "image/webp");
        assert_eq!(
            json["imageSources"][0]["sizes"],
            "(max-width: 80px) 100vw, 80px"
        );
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let token = token_with_payload(r#"{"aud":"w1"}"#);
        let req = request(&token, 1920, "tiff");
        assert_eq!(get_image_urls(&req).unwrap(), get_image_urls(&req).unwrap());
    }
}
