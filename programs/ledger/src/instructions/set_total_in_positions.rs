//! SetTotalInPositions instruction handler
//!
//! Administrator-settable aggregate of cash locked in open positions.
//! Overwrite, not additive — the administrator recomputes the figure
//! off-chain and submits it whole.

use {crate::state::ledger::Ledger, anchor_lang::prelude::*};

/// Accounts required for setting the positions aggregate
#[derive(Accounts)]
pub struct SetTotalInPositions<'info> {
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
pub struct SetTotalInPositionsParams {
    pub total_in_positions: u64,
}

pub fn set_total_in_positions(
    ctx: Context<SetTotalInPositions>,
    params: &SetTotalInPositionsParams,
) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_administrator(&ctx.accounts.administrator.key())?;

    ledger.total_in_positions = params.total_in_positions;

    msg!("Total in positions set to {}", params.total_in_positions);

    Ok(())
}
