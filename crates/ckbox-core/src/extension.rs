//! Image extensions used in CKBox asset URLs.

/// Extension of every responsive (breakpoint) image.
pub const RESPONSIVE_EXTENSION: &str = "webp";
/// MIME type of the responsive image source.
pub const RESPONSIVE_MIME_TYPE: &str = "image/webp";

/// Returns the extension used for the fallback image URL.
///
/// Formats browsers render poorly (`bmp`, `tiff`) and the `jpg` alias are
/// served as `jpeg`; anything else is passed through. Matching is exact and
/// case-sensitive.
pub fn fallback_extension(extension: &str) -> &str {
    match extension {
        "bmp" | "tiff" | "jpg" => "jpeg",
        other => other,
    }
}
