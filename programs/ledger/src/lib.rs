//! Authoritative state ledger for a synthetic-asset trading protocol
//!
//! Single source of truth for token balances, open positions, market
//! availability, risk limits and the cross-chain settlement anchor. The
//! token module, trade engine, governance and bridge all mutate this state
//! through the instructions below; each instruction is gated on exactly one
//! role, and platform-level mutations are additionally blocked while the
//! ledger is paused. The ledger records and guards numbers — price
//! discovery, order matching and reward computation happen elsewhere.

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use {instructions::*, state::position::PositionRecord};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "State Ledger",
    project_url: "https://github.com/synthetic-protocol/ledger",
    contacts: "email:security@synthetic-protocol.dev",
    policy: "https://github.com/synthetic-protocol/ledger/blob/main/SECURITY.md"
}

#[program]
pub mod ledger {
    use super::*;

    /// Create the ledger singleton; the payer becomes initial governance
    /// and the first access-list member
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    // ===== access registry =====

    pub fn grant_access(ctx: Context<GrantAccess>, params: GrantAccessParams) -> Result<()> {
        instructions::grant_access(ctx, &params)
    }

    pub fn revoke_access(ctx: Context<RevokeAccess>, params: RevokeAccessParams) -> Result<()> {
        instructions::revoke_access(ctx, &params)
    }

    pub fn set_governance(ctx: Context<SetGovernance>, params: SetGovernanceParams) -> Result<()> {
        instructions::set_governance(ctx, &params)
    }

    pub fn set_administrator(
        ctx: Context<SetAdministrator>,
        params: SetAdministratorParams,
    ) -> Result<()> {
        instructions::set_administrator(ctx, &params)
    }

    pub fn set_bridge(ctx: Context<SetBridge>, params: SetBridgeParams) -> Result<()> {
        instructions::set_bridge(ctx, &params)
    }

    pub fn set_reward_address(
        ctx: Context<SetRewardAddress>,
        params: SetRewardAddressParams,
    ) -> Result<()> {
        instructions::set_reward_address(ctx, &params)
    }

    // ===== pause switch =====

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause(ctx)
    }

    // ===== market registry and risk parameters =====

    pub fn activate_market(
        ctx: Context<ActivateMarket>,
        params: ActivateMarketParams,
    ) -> Result<()> {
        instructions::activate_market(ctx, &params)
    }

    pub fn deactivate_market(
        ctx: Context<DeactivateMarket>,
        params: DeactivateMarketParams,
    ) -> Result<()> {
        instructions::deactivate_market(ctx, &params)
    }

    pub fn get_market_active(
        ctx: Context<GetMarketActive>,
        params: GetMarketActiveParams,
    ) -> Result<bool> {
        instructions::get_market_active(ctx, &params)
    }

    pub fn set_maximum_leverage(
        ctx: Context<SetMaximumLeverage>,
        params: SetMaximumLeverageParams,
    ) -> Result<()> {
        instructions::set_maximum_leverage(ctx, &params)
    }

    pub fn set_reward_basis_points(
        ctx: Context<SetRewardBasisPoints>,
        params: SetRewardBasisPointsParams,
    ) -> Result<()> {
        instructions::set_reward_basis_points(ctx, &params)
    }

    // ===== accounting =====

    pub fn mint(ctx: Context<Mint>, params: MintParams) -> Result<()> {
        instructions::mint(ctx, &params)
    }

    pub fn burn(ctx: Context<Burn>, params: BurnParams) -> Result<()> {
        instructions::burn(ctx, &params)
    }

    pub fn transfer(ctx: Context<Transfer>, params: TransferParams) -> Result<()> {
        instructions::transfer(ctx, &params)
    }

    pub fn balance_of(ctx: Context<BalanceOf>, params: BalanceOfParams) -> Result<u64> {
        instructions::balance_of(ctx, &params)
    }

    pub fn set_total_in_positions(
        ctx: Context<SetTotalInPositions>,
        params: SetTotalInPositionsParams,
    ) -> Result<()> {
        instructions::set_total_in_positions(ctx, &params)
    }

    // ===== positions =====

    pub fn set_position(ctx: Context<SetPosition>, params: SetPositionParams) -> Result<()> {
        instructions::set_position(ctx, &params)
    }

    pub fn get_position(
        ctx: Context<GetPosition>,
        params: GetPositionParams,
    ) -> Result<PositionRecord> {
        instructions::get_position(ctx, &params)
    }

    // ===== bridge anchor =====

    pub fn set_side_chain_merkle_root(
        ctx: Context<SetSideChainMerkleRoot>,
        params: SetSideChainMerkleRootParams,
    ) -> Result<()> {
        instructions::set_side_chain_merkle_root(ctx, &params)
    }
}
