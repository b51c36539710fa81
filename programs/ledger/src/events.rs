//! Program events emitted on accounting and position writes

use anchor_lang::prelude::*;

#[event]
pub struct Minted {
    pub address: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}

#[event]
pub struct Burned {
    pub address: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}

#[event]
pub struct Transferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PositionUpdated {
    pub address: Pubkey,
    pub market_id: [u8; 32],
    pub timestamp: u64,
    pub long_shares: u64,
    pub short_shares: u64,
    pub mean_entry_price: u64,
    pub liquidation_price: u64,
}

#[event]
pub struct MerkleRootAnchored {
    pub root: [u8; 32],
}
