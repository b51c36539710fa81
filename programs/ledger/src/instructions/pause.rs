//! Pause instruction handler
//!
//! While paused, mint, burn, transfer and position writes abort with a
//! distinct paused diagnostic. Administrator and governance configuration
//! instructions keep working so the ledger can be repaired and unpaused.

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for pausing the ledger
#[derive(Accounts)]
pub struct Pause<'info> {
    /// Current administrator
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_administrator(&ctx.accounts.administrator.key())?;

    ledger.paused = true;

    msg!("Ledger paused");

    Ok(())
}
