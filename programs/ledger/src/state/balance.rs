//! Per-address token balance records

use {crate::{error::LedgerError, math}, anchor_lang::prelude::*};

/// Token balance for one address, created on first credit
#[account]
#[derive(Default, Debug)]
pub struct Balance {
    /// Address the balance belongs to
    pub owner: Pubkey,
    /// Current token amount
    pub tokens: u64,
    /// Bump seed for the balance PDA
    pub bump: u8,
}

impl Balance {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8 + // tokens
        1; // bump

    /// Move tokens between two balances. Supply is unaffected.
    /// Both sides are computed before either is written.
    pub fn transfer(from: &mut Balance, to: &mut Balance, amount: u64) -> Result<()> {
        require!(from.tokens >= amount, LedgerError::InsufficientBalance);
        let debited = math::checked_sub(from.tokens, amount)?;
        let credited = math::checked_add(to.tokens, amount)?;
        from.tokens = debited;
        to.tokens = credited;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transfer_moves_tokens() {
        let mut from = Balance {
            owner: Pubkey::new_unique(),
            tokens: 1_000,
            ..Balance::default()
        };
        let mut to = Balance {
            owner: Pubkey::new_unique(),
            ..Balance::default()
        };

        Balance::transfer(&mut from, &mut to, 400).unwrap();
        assert_eq!(from.tokens, 600);
        assert_eq!(to.tokens, 400);
    }

    #[test]
    fn transfer_beyond_balance_fails_without_mutation() {
        let mut from = Balance {
            owner: Pubkey::new_unique(),
            tokens: 100,
            ..Balance::default()
        };
        let mut to = Balance {
            owner: Pubkey::new_unique(),
            tokens: 7,
            ..Balance::default()
        };

        assert_eq!(
            Balance::transfer(&mut from, &mut to, 101).unwrap_err(),
            error!(LedgerError::InsufficientBalance)
        );
        assert_eq!(from.tokens, 100);
        assert_eq!(to.tokens, 7);
    }
}
