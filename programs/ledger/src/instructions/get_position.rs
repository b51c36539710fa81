//! GetPosition instruction handler
//!
//! View instruction: the full position record for an (address, market)
//! pair. Pairs the ledger has never written read as all-zero, which is
//! also what a closed-and-reopened-to-zero position looks like.

use {
    crate::state::position::{Position, PositionRecord},
    anchor_lang::prelude::*,
};

/// Accounts required for querying a position (read-only)
#[derive(Accounts)]
#[instruction(params: GetPositionParams)]
pub struct GetPosition<'info> {
    /// Position record, absent for pairs never written
    #[account(
        seeds = [b"position", params.address.as_ref(), params.market_id.as_ref()],
        bump
    )]
    pub position: Option<Account<'info, Position>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct GetPositionParams {
    pub address: Pubkey,
    pub market_id: [u8; 32],
}

pub fn get_position(
    ctx: Context<GetPosition>,
    _params: &GetPositionParams,
) -> Result<PositionRecord> {
    Ok(ctx
        .accounts
        .position
        .as_ref()
        .map(|position| position.record())
        .unwrap_or_default())
}
