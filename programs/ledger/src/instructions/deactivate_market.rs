//! DeactivateMarket instruction handler

use {
    crate::state::{ledger::Ledger, market::Market},
    anchor_lang::prelude::*,
};

/// Accounts required for deactivating a market
#[derive(Accounts)]
#[instruction(params: DeactivateMarketParams)]
pub struct DeactivateMarket<'info> {
    /// Current administrator; pays for the market record on first touch
    #[account(mut)]
    pub administrator: Signer<'info>,

    #[account(
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Market record; deactivating an id the ledger has never seen just
    /// materializes it in its default inactive state
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
pub struct DeactivateMarketParams {
    /// Opaque 256-bit market tag
    pub market_id: [u8; 32],
}

pub fn deactivate_market(
    ctx: Context<DeactivateMarket>,
    params: &DeactivateMarketParams,
) -> Result<()> {
    ctx.accounts
        .ledger
        .require_administrator(&ctx.accounts.administrator.key())?;

    let market = ctx.accounts.market.as_mut();
    market.market_id = params.market_id;
    market.active = false;
    market.bump = ctx.bumps.market;

    msg!("Market deactivated");

    Ok(())
}
