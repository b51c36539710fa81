//! SetPosition instruction handler
//!
//! Platform-gated wholesale write of one (address, market) position record.
//! The trade engine validates leverage and market activity before calling
//! in; the ledger records the submitted numbers as-is. Blocked while
//! paused. Records are never deleted — closing a position writes zero
//! share counts.

use {
    crate::{
        events::PositionUpdated,
        state::{
            ledger::Ledger,
            position::{Position, PositionRecord},
        },
    },
    anchor_lang::prelude::*,
};

/// Accounts required for writing a position
#[derive(Accounts)]
#[instruction(params: SetPositionParams)]
pub struct SetPosition<'info> {
    /// Access-list member; pays for the position record on first write
    #[account(mut)]
    pub platform: Signer<'info>,

    #[account(
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Position record for the (address, market) pair, created on first write
    #[account(
        init_if_needed,
        payer = platform,
        space = Position::LEN,
        seeds = [b"position", params.address.as_ref(), params.market_id.as_ref()],
        bump
    )]
    pub position: Box<Account<'info, Position>>,

    system_program: Program<'info, System>,
}

/// Full position record as submitted by the trade engine
#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetPositionParams {
    /// Address holding the position
    pub address: Pubkey,
    /// Opaque 256-bit market tag
    pub market_id: [u8; 32],
    pub timestamp: u64,
    pub long_shares: u64,
    pub short_shares: u64,
    pub mean_entry_price: u64,
    pub mean_entry_spread: u64,
    pub mean_entry_leverage: u64,
    pub liquidation_price: u64,
}

pub fn set_position(ctx: Context<SetPosition>, params: &SetPositionParams) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    ledger.require_platform(&ctx.accounts.platform.key())?;
    ledger.require_unpaused()?;

    let position = ctx.accounts.position.as_mut();
    position.owner = params.address;
    position.market_id = params.market_id;
    position.bump = ctx.bumps.position;
    position.overwrite(&PositionRecord {
        timestamp: params.timestamp,
        long_shares: params.long_shares,
        short_shares: params.short_shares,
        mean_entry_price: params.mean_entry_price,
        mean_entry_spread: params.mean_entry_spread,
        mean_entry_leverage: params.mean_entry_leverage,
        liquidation_price: params.liquidation_price,
    });

    emit!(PositionUpdated {
        address: params.address,
        market_id: params.market_id,
        timestamp: params.timestamp,
        long_shares: params.long_shares,
        short_shares: params.short_shares,
        mean_entry_price: params.mean_entry_price,
        liquidation_price: params.liquidation_price,
    });
    msg!("Position set for {}", params.address);

    Ok(())
}
