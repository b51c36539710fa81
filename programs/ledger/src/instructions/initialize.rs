//! Initialize instruction handler
//!
//! Creates the ledger singleton exactly once. The paying identity becomes
//! initial governance and the sole access-list member; every other role is
//! unset until governance appoints it. Must run before any other
//! instruction.

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for bootstrapping the ledger
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deploying identity; becomes governance and the first platform member
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Ledger singleton to be created
    #[account(
        init,
        payer = payer,
        space = Ledger::LEN,
        seeds = [b"ledger"],
        bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();

    ledger.governance = ctx.accounts.payer.key();
    ledger.grant_access(ctx.accounts.payer.key())?;
    ledger.max_leverage = Ledger::DEFAULT_MAX_LEVERAGE;
    ledger.bump = ctx.bumps.ledger;

    msg!("Ledger initialized, governance: {}", ledger.governance);

    Ok(())
}
