//! Error type shared by the token, URL and image source builders.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Token value does not have a `header.payload...` shape.
    #[error("malformed token: expected dot-delimited segments, found {segments}")]
    MalformedToken { segments: usize },

    #[error("token payload is not valid base64: {0}")]
    TokenPayloadEncoding(#[from] base64::DecodeError),

    #[error("token payload is not valid claims JSON: {0}")]
    TokenPayloadJson(#[from] serde_json::Error),

    /// Neither `auth.ckbox.workspaces` nor `aud` is present in the claims.
    #[error("token claims name no workspace (no `auth.ckbox.workspaces` and no `aud`)")]
    MissingWorkspace,

    #[error("invalid assets origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("image width must be a positive number of pixels, got {width}")]
    InvalidWidth { width: u32 },

    #[error("image URL map has no `default` entry")]
    MissingFallback,

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}
