//! SetMaximumLeverage instruction handler
//!
//! The cap is a fixed-point value with Ledger::LEVERAGE_DECIMALS decimals;
//! 500_000_000 is 5x. The trade engine enforces it when pricing orders —
//! the ledger only stores it.

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for setting the leverage cap
#[derive(Accounts)]
pub struct SetMaximumLeverage<'info> {
    /// Current administrator
    pub administrator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetMaximumLeverageParams {
    pub max_leverage: u64,
}

pub fn set_maximum_leverage(
    ctx: Context<SetMaximumLeverage>,
    params: &SetMaximumLeverageParams,
) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_administrator(&ctx.accounts.administrator.key())?;

    ledger.set_max_leverage(params.max_leverage)?;

    msg!("Maximum leverage set to {}", params.max_leverage);

    Ok(())
}
