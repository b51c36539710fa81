//! RevokeAccess instruction handler
//!
//! Removes an address from the access list, guarded the same way as
//! grant_access. Revoking the last member is rejected.

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for revoking platform access
#[derive(Accounts)]
pub struct RevokeAccess<'info> {
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
pub struct RevokeAccessParams {
    /// Address to remove
    pub address: Pubkey,
}

pub fn revoke_access(ctx: Context<RevokeAccess>, params: &RevokeAccessParams) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_platform(&ctx.accounts.platform.key())?;

    ledger.revoke_access(&params.address)?;

    msg!("Access revoked: {}", params.address);

    Ok(())
}
