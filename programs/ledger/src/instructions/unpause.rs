//! Unpause instruction handler

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for unpausing the ledger
#[derive(Accounts)]
pub struct Unpause<'info> {
    /// Current administrator
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_administrator(&ctx.accounts.administrator.key())?;

    ledger.paused = false;

    msg!("Ledger unpaused");

    Ok(())
}
