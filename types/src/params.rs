//! Protocol parameters for the token exchange.

/// Fixed price of one exam token in wallet units.
///
/// Deducted from the buyer and credited to the seller within a single
/// exchange; the sum of all balances never changes across a sale.
pub const TOKEN_PRICE: u64 = 1000;

/// Balance granted to every wallet on registration.
pub const INITIAL_WALLET: u64 = 2000;
