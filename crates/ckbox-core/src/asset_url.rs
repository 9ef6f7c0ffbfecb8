//! Asset URL construction against the CKBox assets origin.

use crate::error::{Error, Result};
use url::Url;

/// Everything needed to address one rendition of an image asset.
#[derive(Debug, Clone, Copy)]
pub struct AssetUrl<'a> {
    pub workspace_id: &'a str,
    pub id: &'a str,
    pub origin: &'a str,
    pub width: u32,
    pub extension: &'a str,
}

/// Parses the assets origin as an absolute base URL.
pub fn parse_origin(origin: &str) -> Result<Url> {
    let base = Url::parse(origin).map_err(|source| Error::InvalidOrigin {
        origin: origin.to_string(),
        source,
    })?;
    if base.cannot_be_a_base() {
        return Err(Error::InvalidOrigin {
            origin: origin.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(base)
}

/// Resolves `{workspace_id}/assets/{id}/images/{width}.{extension}` against
/// the origin. Characters that need escaping are percent-encoded by URL
/// resolution, not here.
pub fn build_asset_url(asset: &AssetUrl<'_>) -> Result<Url> {
    let base = parse_origin(asset.origin)?;
    join_asset_path(&base, asset)
}

pub(crate) fn join_asset_path(base: &Url, asset: &AssetUrl<'_>) -> Result<Url> {
    let endpoint = format!(
        "{}/assets/{}/images/{}.{}",
        asset.workspace_id, asset.id, asset.width, asset.extension
    );
    base.join(&endpoint).map_err(|source| Error::InvalidOrigin {
        origin: asset.origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset<'a>(origin: &'a str, id: &'a str) -> AssetUrl<'a> {
        AssetUrl {
            workspace_id: "w1",
            id,
            origin,
            width: 200,
            extension: "jpeg",
        }
    }

    #[test]
    fn resolves_against_origin() {
        let url = build_asset_url(&asset("https://cdn.example/", "abc")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example/w1/assets/abc/images/200.jpeg"
        );
    }

    #[test]
    fn origin_without_trailing_slash() {
        let url = build_asset_url(&asset("https://ckbox.cloud", "abc")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://ckbox.cloud/w1/assets/abc/images/200.jpeg"
        );
    }

    #[test]
    fn origin_path_follows_relative_resolution() {
        // The last path segment of the base is replaced, as in a browser.
        let url = build_asset_url(&asset("https://cdn.example/v1/root", "abc")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example/v1/w1/assets/abc/images/200.jpeg"
        );
    }

    #[test]
    fn special_characters_are_percent_encoded() {
        let url = build_asset_url(&asset("https://cdn.example/", "a b")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example/w1/assets/a%20b/images/200.jpeg"
        );
    }

    #[test]
    fn relative_origin_is_rejected() {
        let err = build_asset_url(&asset("/relative/", "abc")).unwrap_err();
        assert!(matches!(err, Error::InvalidOrigin { .. }));
    }

    #[test]
    fn non_base_origin_is_rejected() {
        let err = build_asset_url(&asset("mailto:someone@example.com", "abc")).unwrap_err();
        assert!(matches!(err, Error::InvalidOrigin { .. }));
    }
}
