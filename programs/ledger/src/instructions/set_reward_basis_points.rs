//! SetRewardBasisPoints instruction handler

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for setting the reward rate
#[derive(Accounts)]
pub struct SetRewardBasisPoints<'info> {
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
pub struct SetRewardBasisPointsParams {
    pub basis_points: u64,
}

/// Overwrite the reward rate. Values above Ledger::MAX_REWARD_BASIS_POINTS
/// are rejected; values within range are accepted verbatim.
pub fn set_reward_basis_points(
    ctx: Context<SetRewardBasisPoints>,
    params: &SetRewardBasisPointsParams,
) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_governance(&ctx.accounts.governance.key())?;

    ledger.set_reward_basis_points(params.basis_points)?;

    msg!("Reward basis points set to {}", params.basis_points);

    Ok(())
}
