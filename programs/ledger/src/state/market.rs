//! Market registry entries

use anchor_lang::prelude::*;

/// Activation flag for one market id, created on first admin touch.
/// Markets the ledger has never seen read as inactive.
#[account]
#[derive(Default, Debug)]
pub struct Market {
    /// Opaque 256-bit market tag
    pub market_id: [u8; 32],
    /// Whether the trade engine may open positions in this market
    pub active: bool,
    /// Bump seed for the market PDA
    pub bump: u8,
}

impl Market {
    pub const LEN: usize = 8 + // discriminator
        32 + // market_id
        1 + // active
        1; // bump
}
