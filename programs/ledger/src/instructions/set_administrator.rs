//! SetAdministrator instruction handler

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for appointing the administrator
#[derive(Accounts)]
pub struct SetAdministrator<'info> {
    /// Current governance
    pub governance: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetAdministratorParams {
    pub new_administrator: Pubkey,
}

pub fn set_administrator(
    ctx: Context<SetAdministrator>,
    params: &SetAdministratorParams,
) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_governance(&ctx.accounts.governance.key())?;

    ledger.administrator = params.new_administrator;

    msg!("Administrator set to {}", params.new_administrator);

    Ok(())
}
