//! Write batching — groups the document writes of one operation into a
//! single commit, so an exchange touching both registries reaches the host
//! as one atomic unit.
//!
//! # Usage
//!
//! ```ignore
//! let mut batch = WriteBatch::new();
//! batch.put_exam_registry(&exams)?;
//! batch.put_wallet_registry(&wallets)?;
//! store.commit(batch)?;
//! ```
//!
//! A batch that is dropped without being committed has no effect.

use crate::codec::encode_document;
use crate::{DocumentKey, StoreError};
use examtoken_types::{ExamRegistry, WalletRegistry};

/// The complete set of document writes produced by one operation.
#[derive(Debug, Default)]
pub struct WriteBatch {
    writes: Vec<(DocumentKey, Vec<u8>)>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the whole exam registry for writing.
    pub fn put_exam_registry(&mut self, exams: &ExamRegistry) -> Result<(), StoreError> {
        self.writes.push((DocumentKey::Exams, encode_document(exams)?));
        Ok(())
    }

    /// Queue the whole wallet registry for writing.
    pub fn put_wallet_registry(&mut self, wallets: &WalletRegistry) -> Result<(), StoreError> {
        self.writes
            .push((DocumentKey::Wallets, encode_document(wallets)?));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// The queued writes, in order, without consuming the batch.
    pub fn writes(&self) -> &[(DocumentKey, Vec<u8>)] {
        &self.writes
    }

    /// Consume the batch, yielding the writes in queue order.
    pub fn into_writes(self) -> Vec<(DocumentKey, Vec<u8>)> {
        self.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_preserves_write_order() {
        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&ExamRegistry::new()).unwrap();
        batch.put_wallet_registry(&WalletRegistry::new()).unwrap();
        assert_eq!(batch.len(), 2);

        let writes = batch.into_writes();
        assert_eq!(writes[0].0, DocumentKey::Exams);
        assert_eq!(writes[1].0, DocumentKey::Wallets);
    }

    #[test]
    fn empty_registries_encode_as_empty_arrays() {
        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&ExamRegistry::new()).unwrap();
        let writes = batch.into_writes();
        assert_eq!(writes[0].1, b"[]");
    }

    #[test]
    fn fresh_batch_is_empty() {
        assert!(WriteBatch::new().is_empty());
    }
}
