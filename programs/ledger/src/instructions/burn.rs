//! Burn instruction handler
//!
//! Platform-gated debit, same gating as mint. Fails when the amount exceeds
//! the current balance — the ledger never records a negative balance.

use {
    crate::{
        events::Burned,
        state::{balance::Balance, ledger::Ledger},
    },
    anchor_lang::prelude::*,
};

/// Accounts required for burning
#[derive(Accounts)]
#[instruction(params: BurnParams)]
pub struct Burn<'info> {
    /// Access-list member
    #[account(mut)]
    pub platform: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Balance record of the debited address
    #[account(
        init_if_needed,
        payer = platform,
        space = Balance::LEN,
        seeds = [b"balance", params.address.as_ref()],
        bump
    )]
    pub balance: Box<Account<'info, Balance>>,

    system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct BurnParams {
    /// Address to debit
    pub address: Pubkey,
    /// Token amount
    pub amount: u64,
}

pub fn burn(ctx: Context<Burn>, params: &BurnParams) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_platform(&ctx.accounts.platform.key())?;
    ledger.require_unpaused()?;

    let balance = ctx.accounts.balance.as_mut();
    if balance.owner == Pubkey::default() {
        balance.owner = params.address;
        balance.bump = ctx.bumps.balance;
    }

    ledger.burn(balance, params.amount)?;

    emit!(Burned {
        address: params.address,
        amount: params.amount,
        total_supply: ledger.total_supply,
    });
    msg!("Burned {} from {}", params.amount, params.address);

    Ok(())
}
