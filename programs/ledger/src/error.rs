use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Only Platform")]
    OnlyPlatform,
    #[msg("Contract paused, aborting")]
    ContractPaused,
    #[msg("Caller is not the Administrator")]
    NotAdministrator,
    #[msg("Caller is not Governance")]
    NotGovernance,
    #[msg("Caller is not the Bridge")]
    NotBridge,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Transfer to self")]
    SelfTransfer,
    #[msg("Reward basis points above maximum")]
    BasisPointsOutOfRange,
    #[msg("Maximum leverage must be non-zero")]
    InvalidLeverage,
    #[msg("Access list is at capacity")]
    AccessListFull,
    #[msg("Access list may not be emptied")]
    AccessListEmpty,
    #[msg("Math overflow")]
    MathOverflow,
}
