//! Caller identity type and the identity-provider seam.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque caller identity supplied by the external identity provider.
///
/// The only guarantee is global uniqueness; no structure is assumed beyond
/// that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Supplies the caller identity for the in-flight operation.
///
/// Implemented by the hosting transaction layer. The `NullIdentity` in the
/// nullables crate provides a programmable double for tests.
pub trait IdentityProvider {
    /// Identity of the caller of the current operation.
    fn current(&self) -> Identity;
}
