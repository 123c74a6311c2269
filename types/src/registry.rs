//! The two persisted registry documents.
//!
//! Both registries are always read and written whole; neither supports
//! partial updates. Serialization is transparent, so each document is a
//! plain JSON array on the wire, the layout existing documents already use.

use crate::{ExamSlot, Identity, SlotDate, Token};
use serde::{Deserialize, Serialize};

/// Ordered collection of exam slots — the `EXAMS` document.
///
/// Order is insertion order, not date order. Slots are append-only at the
/// top level; no operation deletes a slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamRegistry {
    slots: Vec<ExamSlot>,
}

impl ExamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[ExamSlot] {
        &self.slots
    }

    /// Whether a slot already exists on the given canonical date.
    pub fn contains_date(&self, date: SlotDate) -> bool {
        self.slots.iter().any(|slot| slot.date == date)
    }

    /// Append a slot. Callers check for date collisions first.
    pub fn push(&mut self, slot: ExamSlot) {
        self.slots.push(slot);
    }

    pub fn slot_mut(&mut self, date: SlotDate) -> Option<&mut ExamSlot> {
        self.slots.iter_mut().find(|slot| slot.date == date)
    }

    /// First token owned by `identity`, in slot order then cell order.
    ///
    /// Under the one-token-per-identity invariant at most one match exists.
    pub fn token_owned_by(&self, identity: &Identity) -> Option<&Token> {
        self.slots
            .iter()
            .flat_map(|slot| slot.tokens.iter())
            .find(|token| token.owner.as_ref() == Some(identity))
    }

    pub fn token_owned_by_mut(&mut self, identity: &Identity) -> Option<&mut Token> {
        self.slots
            .iter_mut()
            .flat_map(|slot| slot.tokens.iter_mut())
            .find(|token| token.owner.as_ref() == Some(identity))
    }
}

/// One registered wallet — the unit entry of the `COINS` document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Identity,
    pub wallet: u64,
}

/// Mapping from identity to balance — the `COINS` document.
///
/// Unique by identity, insertion order. Users are never deleted; balances
/// are mutated only by the exchange protocol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletRegistry {
    users: Vec<User>,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn contains(&self, id: &Identity) -> bool {
        self.users.iter().any(|user| user.id == *id)
    }

    /// Append a user. Callers check for duplicate registration first.
    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn balance_of(&self, id: &Identity) -> Option<u64> {
        self.users
            .iter()
            .find(|user| user.id == *id)
            .map(|user| user.wallet)
    }

    pub fn user_mut(&mut self, id: &Identity) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == *id)
    }

    /// Sum of every balance, widened so the sum cannot overflow.
    pub fn total_balance(&self) -> u128 {
        self.users.iter().map(|user| u128::from(user.wallet)).sum()
    }
}
