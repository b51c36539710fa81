//! GetMarketActive instruction handler
//!
//! View instruction: reports whether a market is active. Market ids the
//! ledger has never touched read as inactive, so the caller may pass no
//! market account at all.

use {crate::state::market::Market, anchor_lang::prelude::*};

/// Accounts required for querying market activation (read-only)
#[derive(Accounts)]
#[instruction(params: GetMarketActiveParams)]
pub struct GetMarketActive<'info> {
    /// Market record, absent for ids the ledger has never seen
    #[account(
        seeds = [b"market", params.market_id.as_ref()],
        bump
    )]
    pub market: Option<Account<'info, Market>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct GetMarketActiveParams {
    /// Opaque 256-bit market tag
    pub market_id: [u8; 32],
}

pub fn get_market_active(
    ctx: Context<GetMarketActive>,
    _params: &GetMarketActiveParams,
) -> Result<bool> {
    Ok(ctx
        .accounts
        .market
        .as_ref()
        .map(|market| market.active)
        .unwrap_or(false))
}
