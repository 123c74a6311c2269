//! The token exchange engine — every public operation of the protocol.
//!
//! Each operation follows the same shape: load the document(s) it needs in
//! full, validate every precondition against the caller identity, mutate the
//! in-memory copy, and hand all resulting writes back to the store as one
//! [`WriteBatch`]. No operation interleaves reads and writes, blocks, or
//! retries; a precondition failure aborts before anything is committed.

use crate::ContractError;
use examtoken_store::codec::load_document;
use examtoken_store::{DocumentKey, LedgerStore, WriteBatch};
use examtoken_types::params::{INITIAL_WALLET, TOKEN_PRICE};
use examtoken_types::{
    ExamRegistry, ExamSlot, Identity, IdentityProvider, SlotDate, Token, User, WalletRegistry,
};
use tracing::info;

/// The exam slot token exchange.
///
/// Owns its two external collaborators; all durable state lives in the
/// ledger documents, so the engine itself carries nothing between
/// operations.
pub struct TokenExchange<S, I> {
    store: S,
    identity: I,
}

impl<S: LedgerStore, I: IdentityProvider> TokenExchange<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        Self { store, identity }
    }

    fn exams(&self) -> Result<ExamRegistry, ContractError> {
        Ok(load_document(&self.store, DocumentKey::Exams)?)
    }

    fn wallets(&self) -> Result<WalletRegistry, ContractError> {
        Ok(load_document(&self.store, DocumentKey::Wallets)?)
    }

    // ── Wallet operations ───────────────────────────────────────────────

    /// Identity of the current caller.
    pub fn client_id(&self) -> Identity {
        self.identity.current()
    }

    /// Register the caller with the fixed starting balance.
    pub fn register(&self) -> Result<(), ContractError> {
        let id = self.identity.current();
        let mut wallets = self.wallets()?;
        if wallets.contains(&id) {
            return Err(ContractError::AlreadyRegistered);
        }
        wallets.push(User {
            id: id.clone(),
            wallet: INITIAL_WALLET,
        });

        let mut batch = WriteBatch::new();
        batch.put_wallet_registry(&wallets)?;
        self.store.commit(batch)?;
        info!(id = %id, balance = INITIAL_WALLET, "registered wallet");
        Ok(())
    }

    /// Balance of the caller's wallet.
    pub fn account_wallet(&self) -> Result<u64, ContractError> {
        let id = self.identity.current();
        self.wallets()?
            .balance_of(&id)
            .ok_or(ContractError::NotRegistered)
    }

    // ── Exam slot operations ────────────────────────────────────────────

    /// Create a new exam slot with `seats` vacant cells.
    ///
    /// `month0` is 0-based (January = 0), as with every date parameter on
    /// this surface.
    pub fn create_exam_slot(
        &self,
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        seats: usize,
    ) -> Result<(), ContractError> {
        let date = SlotDate::from_parts(year, month0, day, hour)?;
        let mut exams = self.exams()?;
        if exams.contains_date(date) {
            return Err(ContractError::DuplicateSlot);
        }
        exams.push(ExamSlot::new(date, seats));

        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&exams)?;
        self.store.commit(batch)?;
        info!(%date, seats, "created exam slot");
        Ok(())
    }

    /// Add `seats` vacant cells to the front of an existing slot.
    ///
    /// Existing seats shift to higher indices; identity-based references
    /// are unaffected.
    pub fn extend_exam_slot(
        &self,
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        seats: usize,
    ) -> Result<(), ContractError> {
        let date = SlotDate::from_parts(year, month0, day, hour)?;
        let mut exams = self.exams()?;
        let slot = exams.slot_mut(date).ok_or(ContractError::SlotNotFound)?;
        slot.add_seats_front(seats);

        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&exams)?;
        self.store.commit(batch)?;
        info!(%date, seats, "extended exam slot");
        Ok(())
    }

    /// Discard every token in the slot, clearing all ownership and request
    /// state. No refunds are issued.
    pub fn burn_exam_tokens(
        &self,
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
    ) -> Result<(), ContractError> {
        let date = SlotDate::from_parts(year, month0, day, hour)?;
        let mut exams = self.exams()?;
        let slot = exams.slot_mut(date).ok_or(ContractError::SlotNotFound)?;
        slot.tokens.clear();

        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&exams)?;
        self.store.commit(batch)?;
        info!(%date, "burned exam tokens");
        Ok(())
    }

    // ── Allocation ──────────────────────────────────────────────────────

    /// The caller's token, if they own one anywhere in the registry.
    ///
    /// Scans slot order then cell order, O(total seats).
    pub fn my_token(&self) -> Result<Option<Token>, ContractError> {
        let id = self.identity.current();
        Ok(self.exams()?.token_owned_by(&id).cloned())
    }

    /// Claim the first vacant seat of the slot on the given date.
    ///
    /// The one-token rule is global: a caller owning a seat in any slot
    /// cannot apply anywhere else.
    pub fn apply_for_exam(
        &self,
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
    ) -> Result<(), ContractError> {
        let date = SlotDate::from_parts(year, month0, day, hour)?;
        let id = self.identity.current();
        let mut exams = self.exams()?;
        if !exams.contains_date(date) {
            return Err(ContractError::SlotNotFound);
        }
        if exams.token_owned_by(&id).is_some() {
            return Err(ContractError::AlreadyHasToken);
        }
        let slot = exams.slot_mut(date).ok_or(ContractError::SlotNotFound)?;
        let seat = slot.first_vacant_mut().ok_or(ContractError::SlotFull)?;
        seat.owner = Some(id.clone());

        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&exams)?;
        self.store.commit(batch)?;
        info!(%date, id = %id, "allocated exam token");
        Ok(())
    }

    // ── Secondary-market exchange ───────────────────────────────────────

    /// Ask `owner` to sell their token to the caller.
    ///
    /// Overwrites any earlier pending request; the displaced requester is
    /// not notified. The caller is deliberately not required to be
    /// registered or distinct from the owner here — wallet checks happen at
    /// fulfillment, where the money moves.
    pub fn request_token(&self, owner: &Identity) -> Result<(), ContractError> {
        let requester = self.identity.current();
        let mut exams = self.exams()?;
        let token = exams
            .token_owned_by_mut(owner)
            .ok_or(ContractError::OwnerHasNoToken)?;
        token.requested_by = Some(requester.clone());

        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&exams)?;
        self.store.commit(batch)?;
        info!(owner = %owner, requester = %requester, "token requested");
        Ok(())
    }

    /// Sell the caller's token to its pending requester at the fixed price.
    ///
    /// Produces one batch carrying both registries, so the host commits the
    /// ownership change and the payment together or not at all.
    pub fn sell_my_exam_token(&self) -> Result<(), ContractError> {
        let seller = self.identity.current();
        let mut exams = self.exams()?;

        let requester = exams
            .token_owned_by(&seller)
            .ok_or(ContractError::NoToken)?
            .requested_by
            .clone()
            .ok_or(ContractError::NoPendingRequest)?;

        // Re-checked at fulfillment: the requester may have acquired a token
        // since the request was made.
        if exams.token_owned_by(&requester).is_some() {
            return Err(ContractError::RequesterAlreadyHasToken);
        }

        let mut wallets = self.wallets()?;
        if !wallets.contains(&seller) {
            return Err(ContractError::NotRegistered);
        }
        let available = wallets
            .balance_of(&requester)
            .ok_or(ContractError::RequesterNotRegistered)?;
        if available < TOKEN_PRICE {
            return Err(ContractError::InsufficientBalance {
                needed: TOKEN_PRICE,
                available,
            });
        }

        // All preconditions hold; mutate the in-memory copies.
        let buyer = wallets
            .user_mut(&requester)
            .ok_or(ContractError::RequesterNotRegistered)?;
        buyer.wallet -= TOKEN_PRICE;
        let payee = wallets
            .user_mut(&seller)
            .ok_or(ContractError::NotRegistered)?;
        payee.wallet = payee.wallet.saturating_add(TOKEN_PRICE);

        let token = exams
            .token_owned_by_mut(&seller)
            .ok_or(ContractError::NoToken)?;
        token.owner = Some(requester.clone());
        token.requested_by = None;

        let mut batch = WriteBatch::new();
        batch.put_exam_registry(&exams)?;
        batch.put_wallet_registry(&wallets)?;
        self.store.commit(batch)?;
        info!(seller = %seller, buyer = %requester, price = TOKEN_PRICE, "exam token sold");
        Ok(())
    }
}
