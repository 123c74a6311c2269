//! Nullable identity provider — programmable caller identity for testing.

use examtoken_types::{Identity, IdentityProvider};
use std::sync::{Arc, Mutex};

/// A deterministic identity provider for testing.
///
/// The caller only changes when you tell it to. Clones share the same
/// underlying identity, so a test can keep one handle for switching callers
/// while the contract holds another.
#[derive(Clone)]
pub struct NullIdentity {
    current: Arc<Mutex<Identity>>,
}

impl NullIdentity {
    pub fn new(id: impl Into<Identity>) -> Self {
        Self {
            current: Arc::new(Mutex::new(id.into())),
        }
    }

    /// Switch the caller for subsequent operations.
    pub fn switch_to(&self, id: impl Into<Identity>) {
        *self.current.lock().unwrap() = id.into();
    }
}

impl IdentityProvider for NullIdentity {
    fn current(&self) -> Identity {
        self.current.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_identity() {
        let identity = NullIdentity::new("1");
        assert_eq!(identity.current(), Identity::new("1"));
    }

    #[test]
    fn clones_observe_switches() {
        let identity = NullIdentity::new("1");
        let handle = identity.clone();
        handle.switch_to("2");
        assert_eq!(identity.current(), Identity::new("2"));
    }
}
