//! CKBox access token: extracts the workspace ids embedded in its payload.
//!
//! The token is `header.payload.signature`. Only the payload is read; its
//! signature is assumed to be verified by whoever issued the token.

mod claims;

pub use claims::{Audience, AuthClaims, CkboxClaims, TokenClaims};

use crate::error::{Error, Result};
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine as _;

const PAYLOAD_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Standard alphabet, padding optional (what browsers' `atob` accepts).
const PAYLOAD_STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PAYLOAD_CONFIG);
/// URL-safe alphabet, as emitted by most JWT libraries.
const PAYLOAD_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PAYLOAD_CONFIG);

/// An initialized access token as handed out by the token provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
}

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decodes the payload segment into claims.
    pub fn claims(&self) -> Result<TokenClaims> {
        let mut segments = self.value.split('.');
        let payload = match (segments.next(), segments.next()) {
            (Some(_), Some(payload)) => payload,
            _ => return Err(Error::MalformedToken { segments: 1 }),
        };

        let bytes = decode_payload(payload)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    match PAYLOAD_STANDARD.decode(payload) {
        Ok(bytes) => Ok(bytes),
        Err(err) => PAYLOAD_URL_SAFE.decode(payload).map_err(|_| err.into()),
    }
}

/// Returns the workspace ids the token grants access to.
///
/// Uses `auth.ckbox.workspaces` when it is a non-empty list, otherwise the
/// single `aud` claim. The result is never empty.
pub fn resolve_workspace_ids(token: &Token) -> Result<Vec<String>> {
    let claims = token.claims()?;

    if let Some(workspaces) = claims.workspaces() {
        tracing::debug!(count = workspaces.len(), "token grants explicit workspaces");
        return Ok(workspaces.to_vec());
    }

    match claims.audience() {
        Some(aud) => {
            tracing::debug!(workspace = aud, "no workspaces in token, using audience");
            Ok(vec![aud.to_string()])
        }
        None => Err(Error::MissingWorkspace),
    }
}
