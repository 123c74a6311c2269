//! Fundamental types for the exam slot token ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: caller identities, canonical slot dates, seat tokens, the two
//! registry documents, and protocol parameters.

pub mod identity;
pub mod params;
pub mod registry;
pub mod slot_date;
pub mod token;

pub use identity::{Identity, IdentityProvider};
pub use registry::{ExamRegistry, User, WalletRegistry};
pub use slot_date::{InvalidSlotDate, SlotDate};
pub use token::{ExamSlot, Token};
