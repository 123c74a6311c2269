//! Exam slot token exchange — allocation and peer-to-peer transfer of scarce
//! exam seats against prepaid wallet balances.
//!
//! Storage and identity are external collaborators behind traits; the work
//! here is the state-transition logic over the two shared registry
//! documents, which must stay consistent under read-modify-write semantics
//! with no locking of its own.
//!
//! This crate handles:
//! - Wallet registration and balance lookup
//! - Exam slot creation, extension, and administrative reset
//! - Seat allocation (one token per identity, globally)
//! - The secondary-market request → fulfill exchange

pub mod error;
pub mod exchange;

pub use error::ContractError;
pub use exchange::TokenExchange;
