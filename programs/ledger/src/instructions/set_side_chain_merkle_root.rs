//! SetSideChainMerkleRoot instruction handler
//!
//! The bridge anchors the side chain's state root into the ledger after its
//! own cross-chain verification. Only the configured bridge key may write —
//! access-list membership does not help here. Overwrite, no history.

use {
    crate::{events::MerkleRootAnchored, state::ledger::Ledger},
    anchor_lang::prelude::*,
};

/// Accounts required for anchoring the side-chain root
#[derive(Accounts)]
pub struct SetSideChainMerkleRoot<'info> {
    /// Configured bridge key
    pub bridge: Signer<'info>,

    #[account(
        mut,
        seeds = [b"ledger"],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetSideChainMerkleRootParams {
    pub merkle_root: [u8; 32],
}

pub fn set_side_chain_merkle_root(
    ctx: Context<SetSideChainMerkleRoot>,
    params: &SetSideChainMerkleRootParams,
) -> Result<()> {
    let ledger = ctx.accounts.ledger.as_mut();
    ledger.require_bridge(&ctx.accounts.bridge.key())?;

    ledger.side_chain_merkle_root = params.merkle_root;

    emit!(MerkleRootAnchored {
        root: params.merkle_root,
    });
    msg!("Side chain merkle root anchored");

    Ok(())
}
