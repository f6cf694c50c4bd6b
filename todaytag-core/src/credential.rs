//! Basic-auth credential, derived once at startup.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::ReconcileError;

/// Encoded `Authorization` material. Read-only after construction.
#[derive(Clone)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Encode a raw `user:password` pair.
    pub fn new(raw: &str) -> Self {
        Credential {
            token: BASE64.encode(raw.as_bytes()),
        }
    }

    /// Read the raw pair from the variable `var`, looked up through `lookup`.
    /// An empty value counts as absent.
    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self, ReconcileError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(raw) if !raw.is_empty() => Ok(Self::new(&raw)),
            _ => Err(ReconcileError::MissingCredential {
                var: var.to_string(),
            }),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Basic {}", self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").field("token", &"<redacted>").finish()
    }
}
