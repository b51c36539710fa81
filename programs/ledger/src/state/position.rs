//! Position records
//!
//! One record per (address, market) pair, written wholesale by the trade
//! engine. The ledger does not validate the submitted numbers against the
//! leverage cap or market activity; the engine checks those before calling
//! in. A record whose share counts are both zero is a closed position —
//! records are never deleted.

use anchor_lang::prelude::*;

/// Net exposure of one address in one market
#[account]
#[derive(Default, Debug)]
pub struct Position {
    /// Address holding the position
    pub owner: Pubkey,
    /// Market the exposure is in
    pub market_id: [u8; 32],
    /// Trade-engine timestamp of the last write
    pub timestamp: u64,
    /// Long share count
    pub long_shares: u64,
    /// Short share count
    pub short_shares: u64,
    /// Volume-weighted entry price
    pub mean_entry_price: u64,
    /// Volume-weighted spread paid at entry
    pub mean_entry_spread: u64,
    /// Weighted leverage applied at entry
    pub mean_entry_leverage: u64,
    /// Price at which the position is force-closed
    pub liquidation_price: u64,
    /// Bump seed for the position PDA
    pub bump: u8,
}

/// Plain view of a position, the payload of set_position and the return
/// value of get_position. Unset positions read as all-zero.
#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct PositionRecord {
    pub timestamp: u64,
    pub long_shares: u64,
    pub short_shares: u64,
    pub mean_entry_price: u64,
    pub mean_entry_spread: u64,
    pub mean_entry_leverage: u64,
    pub liquidation_price: u64,
}

impl Position {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // market_id
        8 * 7 + // record fields
        1; // bump

    /// Replace the whole record. No field survives a write.
    pub fn overwrite(&mut self, record: &PositionRecord) {
        self.timestamp = record.timestamp;
        self.long_shares = record.long_shares;
        self.short_shares = record.short_shares;
        self.mean_entry_price = record.mean_entry_price;
        self.mean_entry_spread = record.mean_entry_spread;
        self.mean_entry_leverage = record.mean_entry_leverage;
        self.liquidation_price = record.liquidation_price;
    }

    pub fn record(&self) -> PositionRecord {
        PositionRecord {
            timestamp: self.timestamp,
            long_shares: self.long_shares,
            short_shares: self.short_shares,
            mean_entry_price: self.mean_entry_price,
            mean_entry_spread: self.mean_entry_spread,
            mean_entry_leverage: self.mean_entry_leverage,
            liquidation_price: self.liquidation_price,
        }
    }

    /// A position is open while either share count is non-zero
    pub fn is_open(&self) -> bool {
        self.long_shares > 0 || self.short_shares > 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn btc_long() -> PositionRecord {
        // literals from the trade engine's reference trace
        PositionRecord {
            timestamp: 12_345,
            long_shares: 2_000,
            short_shares: 0,
            mean_entry_price: 200,
            mean_entry_spread: 1,
            mean_entry_leverage: 100_000_000,
            liquidation_price: 190,
        }
    }

    #[test]
    fn write_round_trips_every_field() {
        let mut position = Position::default();
        position.overwrite(&btc_long());

        let record = position.record();
        assert_eq!(record, btc_long());
        assert_eq!(record.long_shares, 2_000);
        assert_eq!(record.mean_entry_price, 200);
        assert_eq!(record.liquidation_price, 190);
    }

    #[test]
    fn second_write_replaces_the_whole_record() {
        let mut position = Position::default();
        position.overwrite(&btc_long());

        // no merging: fields absent from the new record must not survive
        let flipped = PositionRecord {
            timestamp: 12_400,
            short_shares: 50,
            mean_entry_price: 210,
            ..PositionRecord::default()
        };
        position.overwrite(&flipped);

        assert_eq!(position.record(), flipped);
        assert_eq!(position.long_shares, 0);
        assert_eq!(position.mean_entry_spread, 0);
    }

    #[test]
    fn zero_shares_means_closed() {
        let mut position = Position::default();
        assert!(!position.is_open());

        position.overwrite(&btc_long());
        assert!(position.is_open());

        position.overwrite(&PositionRecord {
            timestamp: 12_500,
            ..PositionRecord::default()
        });
        assert!(!position.is_open());
    }
}
