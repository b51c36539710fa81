//! SetBridge instruction handler

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for appointing the bridge
#[derive(Accounts)]
pub struct SetBridge<'info> {
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
pub struct SetBridgeParams {
    pub new_bridge: Pubkey,
}

pub fn set_bridge(ctx: Context<SetBridge>, params: &SetBridgeParams) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_governance(&ctx.accounts.governance.key())?;

    ledger.bridge = params.new_bridge;

    msg!("Bridge set to {}", params.new_bridge);

    Ok(())
}
