use examtoken_store::StoreError;
use examtoken_types::InvalidSlotDate;
use thiserror::Error;

/// Failure kinds of the token exchange protocol.
///
/// Every failure is synchronous and raised before any write is queued, so
/// the persisted documents are untouched on error.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("user is already registered")]
    AlreadyRegistered,

    #[error("user is not registered")]
    NotRegistered,

    #[error("an exam slot already exists on that date")]
    DuplicateSlot,

    #[error("the requested exam does not exist")]
    SlotNotFound,

    #[error("caller already has a token")]
    AlreadyHasToken,

    #[error("exam slot is full")]
    SlotFull,

    #[error("caller does not have a token")]
    NoToken,

    #[error("nobody has requested this token")]
    NoPendingRequest,

    #[error("requester already has a token")]
    RequesterAlreadyHasToken,

    #[error("requester is not registered")]
    RequesterNotRegistered,

    #[error("requester balance is insufficient: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("that user does not possess a token")]
    OwnerHasNoToken,

    #[error(transparent)]
    InvalidDate(#[from] InvalidSlotDate),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
