//! Minimal view of the CKBox access token claims.

use serde::Deserialize;

/// Claims carried in the token payload. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub aud: Option<Audience>,
    #[serde(default)]
    pub auth: Option<AuthClaims>,
}

/// JWT `aud`: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Audience {
    /// The audience a workspace falls back to: the string, or the first entry.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Audience::One(aud) => Some(aud.as_str()),
            Audience::Many(auds) => auds.first().map(String::as_str),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthClaims {
    #[serde(default)]
    pub ckbox: Option<CkboxClaims>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CkboxClaims {
    #[serde(default)]
    pub workspaces: Option<Vec<String>>,
}

impl TokenClaims {
    /// `auth.ckbox.workspaces`, if present and non-empty.
    pub fn workspaces(&self) -> Option<&[String]> {
        self.auth
            .as_ref()?
            .ckbox
            .as_ref()?
            .workspaces
            .as_deref()
            .filter(|w| !w.is_empty())
    }

    /// Primary audience, if any.
    pub fn audience(&self) -> Option<&str> {
        self.aud.as_ref()?.primary()
    }
}
