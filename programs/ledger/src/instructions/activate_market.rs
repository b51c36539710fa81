//! ActivateMarket instruction handler
//!
//! Creates the market record on first touch and flags it active. Activating
//! one market never affects another market's record.

use {
    crate::state::{ledger::Ledger, market::Market},
    anchor_lang::prelude::*,
};

/// Accounts required for activating a market
#[derive(Accounts)]
#[instruction(params: ActivateMarketParams)]
pub struct ActivateMarket<'info> {
    /// Current administrator; pays for the market record on first touch
    #[account(mut)]
    pub administrator: Signer<'info>,

    #[account(
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Market record, created if this id has never been touched
    #[account(
        init_if_needed,
        payer = administrator,
        space = Market::LEN,
        seeds = [b"market", params.market_id.as_ref()],
        bump
    )]
    pub market: Box<Account<'info, Market>>,

    system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ActivateMarketParams {
    /// Opaque 256-bit market tag
    pub market_id: [u8; 32],
}

pub fn activate_market(
    ctx: Context<ActivateMarket>,
    params: &ActivateMarketParams,
) -> Result<()> {
    ctx.accounts
        .ledger
        .require_administrator(&ctx.accounts.administrator.key())?;

    let market = ctx.accounts.market.as_mut();
    market.market_id = params.market_id;
    market.active = true;
    market.bump = ctx.bumps.market;

    msg!("Market activated");

    Ok(())
}
