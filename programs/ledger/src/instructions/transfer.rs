//! Transfer instruction handler
//!
//! Platform-gated move between two balances, driven by the token module.
//! Supply is unaffected. Blocked while paused.

use {
    crate::{
        error::LedgerError,
        events::Transferred,
        state::{balance::Balance, ledger::Ledger},
    },
    anchor_lang::prelude::*,
};

/// Accounts required for a balance transfer
#[derive(Accounts)]
#[instruction(params: TransferParams)]
pub struct Transfer<'info> {
    /// Access-list member; pays for the recipient record on first credit
    #[account(mut)]
    pub platform: Signer<'info>,

    #[account(
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Balance record of the sender
    #[account(
        init_if_needed,
        payer = platform,
        space = Balance::LEN,
        seeds = [b"balance", params.from.as_ref()],
        bump
    )]
    pub from_balance: Box<Account<'info, Balance>>,

    /// Balance record of the recipient, created on first credit
    #[account(
        init_if_needed,
        payer = platform,
        space = Balance::LEN,
        seeds = [b"balance", params.to.as_ref()],
        bump
    )]
    pub to_balance: Box<Account<'info, Balance>>,

    system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct TransferParams {
    /// Address to debit
    pub from: Pubkey,
    /// Address to credit
    pub to: Pubkey,
    /// Token amount
    pub amount: u64,
}

pub fn transfer(ctx: Context<Transfer>, params: &TransferParams) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    ledger.require_platform(&ctx.accounts.platform.key())?;
    ledger.require_unpaused()?;

    // the two balance PDAs must be distinct accounts
    require!(params.from != params.to, LedgerError::SelfTransfer);

    let from_balance = ctx.accounts.from_balance.as_mut();
    if from_balance.owner == Pubkey::default() {
        from_balance.owner = params.from;
        from_balance.bump = ctx.bumps.from_balance;
    }
    let to_balance = ctx.accounts.to_balance.as_mut();
    if to_balance.owner == Pubkey::default() {
        to_balance.owner = params.to;
        to_balance.bump = ctx.bumps.to_balance;
    }

    Balance::transfer(from_balance, to_balance, params.amount)?;

    emit!(Transferred {
        from: params.from,
        to: params.to,
        amount: params.amount,
    });
    msg!("Transferred {} from {} to {}", params.amount, params.from, params.to);

    Ok(())
}
