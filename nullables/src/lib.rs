//! Nullable infrastructure for deterministic testing.
//!
//! The exchange protocol's two external collaborators — the ledger store and
//! the identity provider — are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod identity;
pub mod store;

pub use identity::NullIdentity;
pub use store::NullLedgerStore;
