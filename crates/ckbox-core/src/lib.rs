pub mod config;
pub mod error;
pub mod logging;

pub mod asset_url;
pub mod breakpoints;
pub mod extension;
pub mod sources;
pub mod token;

pub use asset_url::{build_asset_url, AssetUrl};
pub use breakpoints::{compute_breakpoints, BreakpointPolicy};
pub use error::{Error, Result};
pub use extension::fallback_extension;
pub use sources::{
    get_image_urls, get_image_urls_from_map, get_image_urls_with_policy, ImageRequest,
    ImageSource, ImageUrlMap, ImageUrls,
};
pub use token::{resolve_workspace_ids, Token};
