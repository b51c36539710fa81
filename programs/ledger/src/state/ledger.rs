//! Ledger singleton state and role guards
//!
//! This module defines the root Ledger account and every state transition
//! that touches it. Each mutating instruction evaluates exactly one of the
//! role guards below before reading or writing state; platform-level
//! mutations additionally pass the pause gate. Keeping the guards and
//! transitions here, instead of in account constraints, lets them be tested
//! without a runtime.

use {
    crate::{error::LedgerError, math, state::balance::Balance},
    anchor_lang::prelude::*,
};

/// Root ledger account
///
/// Single source of truth for role assignments, risk parameters, token
/// supply, the positions cash aggregate, and the side-chain anchor.
/// Every field is owned by exactly one role:
/// - governance appoints the administrator, bridge and rewards addresses
/// - the administrator controls markets, leverage, the pause gate and the
///   positions aggregate
/// - access-list members (the platform) drive mint/burn/transfer and
///   position writes
/// - the bridge alone anchors the side-chain merkle root
#[account]
#[derive(Default, Debug)]
pub struct Ledger {
    /// Authority of last resort; initially the identity that ran initialize
    pub governance: Pubkey,
    /// Operational role appointed by governance
    pub administrator: Pubkey,
    /// Only key accepted for side-chain anchor writes
    pub bridge: Pubkey,
    /// Recipient record read by the external rewards module
    pub reward_address: Pubkey,
    /// Platform modules authorized for ledger-level mutations
    pub access_list: Vec<Pubkey>,
    /// Gate blocking platform-level mutations while set
    pub paused: bool,
    /// Leverage cap, fixed point with LEVERAGE_DECIMALS decimals
    pub max_leverage: u64,
    /// Reward rate in basis points, at most MAX_REWARD_BASIS_POINTS
    pub reward_basis_points: u64,
    /// Total minted minus total burned
    pub total_supply: u64,
    /// Cash locked in open positions, overwritten by the administrator
    pub total_in_positions: u64,
    /// Last accepted side-chain merkle root
    pub side_chain_merkle_root: [u8; 32],
    /// Bump seed for the ledger PDA
    pub bump: u8,
}

impl Ledger {
    /// Capacity of the access list
    pub const MAX_ACCESS_MEMBERS: usize = 16;
    /// Account size in bytes
    pub const LEN: usize = 8 + // discriminator
        32 * 4 + // governance, administrator, bridge, reward_address
        4 + 32 * Self::MAX_ACCESS_MEMBERS + // access_list
        1 + // paused
        8 * 4 + // max_leverage, reward_basis_points, total_supply, total_in_positions
        32 + // side_chain_merkle_root
        1; // bump

    /// Basis points decimal places (1 bps = 0.01%)
    pub const BPS_DECIMALS: u8 = 4;
    /// Ceiling for the reward rate. Sits above par (10 000 bps) on purpose:
    /// the protocol runs bonus reward schemes that pay out above 100%.
    pub const MAX_REWARD_BASIS_POINTS: u64 = 15_000;
    /// Decimal places of the leverage fixed-point representation
    pub const LEVERAGE_DECIMALS: u8 = 8;
    /// Power of 10 for leverage calculations (10^8)
    pub const LEVERAGE_POWER: u64 = 10u64.pow(Self::LEVERAGE_DECIMALS as u32);
    /// Leverage cap applied at bootstrap (10x)
    pub const DEFAULT_MAX_LEVERAGE: u64 = 10 * Self::LEVERAGE_POWER;

    /// Check access-list membership
    pub fn is_platform(&self, key: &Pubkey) -> bool {
        self.access_list.contains(key)
    }

    /// Guard for platform-gated instructions
    pub fn require_platform(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_platform(caller), LedgerError::OnlyPlatform);
        Ok(())
    }

    /// Guard applied to platform-gated instructions after the role check.
    /// Administrator and governance configuration calls skip this gate so
    /// the ledger can be reconfigured and unpaused while halted.
    pub fn require_unpaused(&self) -> Result<()> {
        require!(!self.paused, LedgerError::ContractPaused);
        Ok(())
    }

    pub fn require_administrator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.administrator, LedgerError::NotAdministrator);
        Ok(())
    }

    pub fn require_governance(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.governance, LedgerError::NotGovernance);
        Ok(())
    }

    pub fn require_bridge(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.bridge, LedgerError::NotBridge);
        Ok(())
    }

    /// Add a member to the access list. Idempotent for existing members.
    pub fn grant_access(&mut self, address: Pubkey) -> Result<()> {
        if self.is_platform(&address) {
            return Ok(());
        }
        require!(
            self.access_list.len() < Self::MAX_ACCESS_MEMBERS,
            LedgerError::AccessListFull
        );
        self.access_list.push(address);
        Ok(())
    }

    /// Remove a member from the access list. Idempotent for non-members.
    /// The list is never emptied, so the platform cannot lock itself out.
    pub fn revoke_access(&mut self, address: &Pubkey) -> Result<()> {
        let Some(idx) = self.access_list.iter().position(|k| k == address) else {
            return Ok(());
        };
        require!(self.access_list.len() > 1, LedgerError::AccessListEmpty);
        self.access_list.remove(idx);
        Ok(())
    }

    /// Overwrite the leverage cap. A zero cap would block the trade engine
    /// entirely, so it is rejected.
    pub fn set_max_leverage(&mut self, max_leverage: u64) -> Result<()> {
        require!(max_leverage > 0, LedgerError::InvalidLeverage);
        self.max_leverage = max_leverage;
        Ok(())
    }

    /// Overwrite the reward rate, range-checked against the ceiling
    pub fn set_reward_basis_points(&mut self, basis_points: u64) -> Result<()> {
        require!(
            basis_points <= Self::MAX_REWARD_BASIS_POINTS,
            LedgerError::BasisPointsOutOfRange
        );
        self.reward_basis_points = basis_points;
        Ok(())
    }

    /// Credit a balance and the total supply.
    /// Both new values are computed before either is written, so a failed
    /// call leaves the ledger untouched.
    pub fn mint(&mut self, balance: &mut Balance, amount: u64) -> Result<()> {
        let tokens = math::checked_add(balance.tokens, amount)?;
        let total_supply = math::checked_add(self.total_supply, amount)?;
        balance.tokens = tokens;
        self.total_supply = total_supply;
        Ok(())
    }

    /// Debit a balance and the total supply. Balances never go negative.
    pub fn burn(&mut self, balance: &mut Balance, amount: u64) -> Result<()> {
        require!(balance.tokens >= amount, LedgerError::InsufficientBalance);
        let tokens = math::checked_sub(balance.tokens, amount)?;
        let total_supply = math::checked_sub(self.total_supply, amount)?;
        balance.tokens = tokens;
        self.total_supply = total_supply;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use {super::*, proptest::prelude::*};

    fn get_fixture() -> (Ledger, Pubkey) {
        let platform = Pubkey::new_unique();
        let ledger = Ledger {
            governance: Pubkey::new_unique(),
            administrator: Pubkey::new_unique(),
            bridge: Pubkey::new_unique(),
            access_list: vec![platform],
            max_leverage: Ledger::DEFAULT_MAX_LEVERAGE,
            ..Ledger::default()
        };
        (ledger, platform)
    }

    fn balance_with(tokens: u64) -> Balance {
        Balance {
            owner: Pubkey::new_unique(),
            tokens,
            ..Balance::default()
        }
    }

    #[test]
    fn platform_guard_accepts_members_only() {
        let (ledger, platform) = get_fixture();
        assert!(ledger.require_platform(&platform).is_ok());

        let outsider = Pubkey::new_unique();
        assert_eq!(
            ledger.require_platform(&outsider).unwrap_err(),
            error!(LedgerError::OnlyPlatform)
        );
    }

    #[test]
    fn singleton_role_guards() {
        let (ledger, platform) = get_fixture();

        assert!(ledger.require_administrator(&ledger.administrator).is_ok());
        assert_eq!(
            ledger.require_administrator(&platform).unwrap_err(),
            error!(LedgerError::NotAdministrator)
        );

        assert!(ledger.require_governance(&ledger.governance).is_ok());
        assert_eq!(
            ledger.require_governance(&ledger.administrator).unwrap_err(),
            error!(LedgerError::NotGovernance)
        );

        // Bridge gating is independent of access-list membership
        assert!(ledger.require_bridge(&ledger.bridge).is_ok());
        assert_eq!(
            ledger.require_bridge(&platform).unwrap_err(),
            error!(LedgerError::NotBridge)
        );
    }

    #[test]
    fn pause_gate() {
        let (mut ledger, _) = get_fixture();
        assert!(ledger.require_unpaused().is_ok());

        ledger.paused = true;
        assert_eq!(
            ledger.require_unpaused().unwrap_err(),
            error!(LedgerError::ContractPaused)
        );

        // configuration transitions do not consult the gate
        ledger.set_max_leverage(2 * Ledger::LEVERAGE_POWER).unwrap();
        ledger.set_reward_basis_points(100).unwrap();
        ledger.grant_access(Pubkey::new_unique()).unwrap();

        ledger.paused = false;
        assert!(ledger.require_unpaused().is_ok());
    }

    #[test]
    fn grant_access_is_idempotent_and_bounded() {
        let (mut ledger, platform) = get_fixture();

        ledger.grant_access(platform).unwrap();
        assert_eq!(ledger.access_list.len(), 1);

        let member = Pubkey::new_unique();
        ledger.grant_access(member).unwrap();
        assert!(ledger.is_platform(&member));

        while ledger.access_list.len() < Ledger::MAX_ACCESS_MEMBERS {
            ledger.grant_access(Pubkey::new_unique()).unwrap();
        }
        assert_eq!(
            ledger.grant_access(Pubkey::new_unique()).unwrap_err(),
            error!(LedgerError::AccessListFull)
        );
    }

    #[test]
    fn revoke_access_never_empties_the_list() {
        let (mut ledger, platform) = get_fixture();
        let member = Pubkey::new_unique();
        ledger.grant_access(member).unwrap();

        ledger.revoke_access(&member).unwrap();
        assert!(!ledger.is_platform(&member));

        // unknown address is a no-op
        ledger.revoke_access(&member).unwrap();
        assert_eq!(ledger.access_list.len(), 1);

        assert_eq!(
            ledger.revoke_access(&platform).unwrap_err(),
            error!(LedgerError::AccessListEmpty)
        );
        assert!(ledger.is_platform(&platform));
    }

    #[test]
    fn mint_accumulates_and_burn_debits() {
        // Mirrors the token module's bootstrap trace:
        // 2_000_000 + 3_000_000 minted, 1_000_000 burned.
        let (mut ledger, _) = get_fixture();
        let mut balance = balance_with(0);

        ledger.mint(&mut balance, 2_000_000).unwrap();
        ledger.mint(&mut balance, 3_000_000).unwrap();
        assert_eq!(balance.tokens, 5_000_000);
        assert_eq!(ledger.total_supply, 5_000_000);

        ledger.burn(&mut balance, 1_000_000).unwrap();
        assert_eq!(balance.tokens, 4_000_000);
        assert_eq!(ledger.total_supply, 4_000_000);
    }

    #[test]
    fn burn_beyond_balance_fails_without_mutation() {
        let (mut ledger, _) = get_fixture();
        let mut balance = balance_with(0);
        ledger.mint(&mut balance, 500).unwrap();

        assert_eq!(
            ledger.burn(&mut balance, 501).unwrap_err(),
            error!(LedgerError::InsufficientBalance)
        );
        assert_eq!(balance.tokens, 500);
        assert_eq!(ledger.total_supply, 500);
    }

    #[test]
    fn mint_overflow_aborts_atomically() {
        let (mut ledger, _) = get_fixture();
        let mut balance = balance_with(0);
        ledger.mint(&mut balance, u64::MAX).unwrap();

        assert_eq!(
            ledger.mint(&mut balance, 1).unwrap_err(),
            error!(LedgerError::MathOverflow)
        );
        assert_eq!(balance.tokens, u64::MAX);
        assert_eq!(ledger.total_supply, u64::MAX);
    }

    #[test]
    fn reward_basis_points_range() {
        let (mut ledger, _) = get_fixture();

        // values from the reference trace
        ledger.set_reward_basis_points(14_000).unwrap();
        assert_eq!(ledger.reward_basis_points, 14_000);

        assert_eq!(
            ledger.set_reward_basis_points(65_000).unwrap_err(),
            error!(LedgerError::BasisPointsOutOfRange)
        );
        assert_eq!(ledger.reward_basis_points, 14_000);

        ledger
            .set_reward_basis_points(Ledger::MAX_REWARD_BASIS_POINTS)
            .unwrap();
    }

    #[test]
    fn max_leverage_round_trips() {
        let (mut ledger, _) = get_fixture();

        ledger.set_max_leverage(500_000_000).unwrap();
        assert_eq!(ledger.max_leverage, 500_000_000);

        assert_eq!(
            ledger.set_max_leverage(0).unwrap_err(),
            error!(LedgerError::InvalidLeverage)
        );
        assert_eq!(ledger.max_leverage, 500_000_000);
    }

    proptest! {
        /// total_supply stays equal to the sum of all balances under any
        /// interleaving of mints, burns and transfers.
        #[test]
        fn supply_matches_balances(ops in prop::collection::vec((0u8..4, 0u64..1_000_000), 1..64)) {
            let (mut ledger, _) = get_fixture();
            let mut a = balance_with(0);
            let mut b = balance_with(0);

            for (op, amount) in ops {
                // rejected calls must leave state consistent too
                let _ = match op {
                    0 => ledger.mint(&mut a, amount),
                    1 => ledger.mint(&mut b, amount),
                    2 => ledger.burn(&mut a, amount),
                    _ => Balance::transfer(&mut a, &mut b, amount),
                };
                prop_assert_eq!(ledger.total_supply, a.tokens + b.tokens);
            }
        }
    }
}
