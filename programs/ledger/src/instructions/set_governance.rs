//! SetGovernance instruction handler

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for replacing governance
#[derive(Accounts)]
pub struct SetGovernance<'info> {
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
pub struct SetGovernanceParams {
    pub new_governance: Pubkey,
}

/// Hand the authority of last resort to a new address. Irreversible unless
/// the new governance hands it back.
pub fn set_governance(ctx: Context<SetGovernance>, params: &SetGovernanceParams) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_governance(&ctx.accounts.governance.key())?;

    ledger.governance = params.new_governance;

    msg!("Governance set to {}", params.new_governance);

    Ok(())
}
