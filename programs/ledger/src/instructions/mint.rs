//! Mint instruction handler
//!
//! Platform-gated credit. Any access-list member may mint — the ledger does
//! not distinguish between members, it trusts that only legitimate platform
//! modules (token, trade engine) are ever admitted. Blocked while paused.

use {
    crate::{
        events::Minted,
        state::{balance::Balance, ledger::Ledger},
    },
    anchor_lang::prelude::*,
};

/// Accounts required for minting
#[derive(Accounts)]
#[instruction(params: MintParams)]
pub struct Mint<'info> {
    /// Access-list member; pays for the balance record on first credit
    #[account(mut)]
    pub platform: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Balance record of the credited address, created on first credit
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
pub struct MintParams {
    /// Address to credit
    pub address: Pubkey,
    /// Token amount
    pub amount: u64,
}

pub fn mint(ctx: Context<Mint>, params: &MintParams) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_platform(&ctx.accounts.platform.key())?;
    ledger.require_unpaused()?;

    let balance = ctx.accounts.balance.as_mut();
    if balance.owner == Pubkey::default() {
        balance.owner = params.address;
        balance.bump = ctx.bumps.balance;
    }

    ledger.mint(balance, params.amount)?;

    emit!(Minted {
        address: params.address,
        amount: params.amount,
        total_supply: ledger.total_supply,
    });
    msg!("Minted {} to {}", params.amount, params.address);

    Ok(())
}
