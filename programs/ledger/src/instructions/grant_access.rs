//! GrantAccess instruction handler
//!
//! Adds an address to the access list. Only a current member may extend the
//! list; the ledger trusts that members only ever admit legitimate platform
//! modules.

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for granting platform access
#[derive(Accounts)]
pub struct GrantAccess<'info> {
    /// Current access-list member
    pub platform: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct GrantAccessParams {
    /// Address to admit
    pub address: Pubkey,
}

pub fn grant_access(ctx: Context<GrantAccess>, params: &GrantAccessParams) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_platform(&ctx.accounts.platform.key())?;

    ledger.grant_access(params.address)?;

    msg!("Access granted: {}", params.address);

    Ok(())
}
