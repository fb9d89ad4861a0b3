use anchor_lang::prelude::*;

/// Custom error codes for the vesting escrow program.
#[error_code]
pub enum EscrowError {
    #[msg("Unauthorized: registry owner signature required")]
    UnauthorizedAuthority,

    #[msg("Unauthorized: claimant is not the schedule beneficiary")]
    UnauthorizedBeneficiary,

    #[msg("Invalid schedule: require start <= cliff <= end, start < end, allotment > 0")]
    InvalidSchedule,

    #[msg("Company name is empty or exceeds the maximum length")]
    InvalidCompanyName,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Insufficient treasury balance")]
    InsufficientTreasury,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
