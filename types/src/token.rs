//! Seat tokens and exam slots.

use crate::{Identity, SlotDate};
use serde::{Deserialize, Serialize};

/// One seat in an exam sitting.
///
/// `requested_by` is only ever set on an owned token. A newer request
/// silently displaces the pending requester.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub owner: Option<Identity>,
    pub requested_by: Option<Identity>,
}

impl Token {
    /// A free seat with no owner and no pending request.
    pub fn vacant() -> Self {
        Self::default()
    }

    /// Whether the seat has no owner.
    pub fn is_vacant(&self) -> bool {
        self.owner.is_none()
    }
}

/// A timestamped collection of seats for one exam sitting.
///
/// Unique by `date` within the registry. Seats are never removed singly;
/// the whole sequence may be cleared by an administrative reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSlot {
    pub date: SlotDate,
    pub tokens: Vec<Token>,
}

impl ExamSlot {
    /// Create a slot with `seats` vacant cells.
    ///
    /// Each cell is constructed per element, never by replicating a shared
    /// template, so mutating one seat cannot affect its batch-mates.
    pub fn new(date: SlotDate, seats: usize) -> Self {
        Self {
            date,
            tokens: (0..seats).map(|_| Token::vacant()).collect(),
        }
    }

    /// Prepend `seats` vacant cells; existing seats shift to higher indices.
    pub fn add_seats_front(&mut self, seats: usize) {
        let mut tokens: Vec<Token> = (0..seats).map(|_| Token::vacant()).collect();
        tokens.append(&mut self.tokens);
        self.tokens = tokens;
    }

    /// First vacant seat, lowest index first.
    pub fn first_vacant_mut(&mut self) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|t| t.is_vacant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> SlotDate {
        SlotDate::from_parts(2020, 4, 31, 10).unwrap()
    }

    #[test]
    fn wire_field_names_match_persisted_documents() {
        let json = serde_json::to_value(Token::vacant()).unwrap();
        assert_eq!(json, serde_json::json!({ "owner": null, "requestedBy": null }));
    }

    #[test]
    fn new_slot_cells_are_independent() {
        let mut slot = ExamSlot::new(date(), 3);
        slot.tokens[0].owner = Some("8".into());
        assert!(slot.tokens[1].is_vacant());
        assert!(slot.tokens[2].is_vacant());
    }

    #[test]
    fn add_seats_front_shifts_existing_seats() {
        let mut slot = ExamSlot::new(date(), 1);
        slot.tokens[0].owner = Some("1".into());
        slot.add_seats_front(2);
        assert_eq!(slot.tokens.len(), 3);
        assert!(slot.tokens[0].is_vacant());
        assert!(slot.tokens[1].is_vacant());
        assert_eq!(slot.tokens[2].owner, Some("1".into()));
    }

    #[test]
    fn first_vacant_picks_lowest_index() {
        let mut slot = ExamSlot::new(date(), 3);
        slot.tokens[0].owner = Some("1".into());
        slot.first_vacant_mut().unwrap().owner = Some("2".into());
        assert_eq!(slot.tokens[1].owner, Some("2".into()));
        assert!(slot.tokens[2].is_vacant());
    }
}
