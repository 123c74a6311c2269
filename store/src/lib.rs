//! Abstract storage seam for the exam slot token ledger.
//!
//! The ledger store is an external collaborator: a key-value store with no
//! transactions, no locking, and no schema of its own. Every operation reads
//! the whole document(s) it needs up front and hands all of its writes back
//! as a single [`WriteBatch`], so the hosting transaction boundary can commit
//! them together. The rest of the codebase depends only on the trait.

pub mod batch;
pub mod codec;
pub mod error;

pub use batch::WriteBatch;
pub use error::StoreError;

use std::fmt;

/// Fixed key of a persisted document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    /// The exam registry.
    Exams,
    /// The wallet registry.
    Wallets,
}

impl DocumentKey {
    /// Wire key under which the document is stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exams => "EXAMS",
            Self::Wallets => "COINS",
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The external ledger store.
///
/// `get` returns the whole document, or `None` when it was never written.
/// `commit` applies every write in the batch; when a batch spans both
/// documents the implementation must apply it all-or-nothing.
pub trait LedgerStore {
    fn get(&self, key: DocumentKey) -> Result<Option<Vec<u8>>, StoreError>;
    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;
}

impl<S: LedgerStore + ?Sized> LedgerStore for &S {
    fn get(&self, key: DocumentKey) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        (**self).commit(batch)
    }
}
