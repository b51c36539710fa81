//! BalanceOf instruction handler
//!
//! View instruction: token amount held by an address, zero for addresses
//! the ledger has never credited.

use {crate::state::balance::Balance, anchor_lang::prelude::*};

/// Accounts required for querying a balance (read-only)
#[derive(Accounts)]
#[instruction(params: BalanceOfParams)]
pub struct BalanceOf<'info> {
    /// Balance record, absent for addresses never credited
    #[account(
        seeds = [b"balance", params.address.as_ref()],
        bump
    )]
    pub balance: Option<Account<'info, Balance>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct BalanceOfParams {
    pub address: Pubkey,
}

pub fn balance_of(ctx: Context<BalanceOf>, _params: &BalanceOfParams) -> Result<u64> {
    Ok(ctx
        .accounts
        .balance
        .as_ref()
        .map(|balance| balance.tokens)
        .unwrap_or(0))
}
