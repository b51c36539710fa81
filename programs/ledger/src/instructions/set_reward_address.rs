//! SetRewardAddress instruction handler
//!
//! Pure record: the external rewards module reads this address, the ledger
//! itself never pays anything out.

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for recording the rewards address
#[derive(Accounts)]
pub struct SetRewardAddress<'info> {
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
pub struct SetRewardAddressParams {
    pub new_reward_address: Pubkey,
}

pub fn set_reward_address(
    ctx: Context<SetRewardAddress>,
    params: &SetRewardAddressParams,
) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_governance(&ctx.accounts.governance.key())?;

    ledger.reward_address = params.new_reward_address;

    msg!("Reward address set to {}", params.new_reward_address);

    Ok(())
}
