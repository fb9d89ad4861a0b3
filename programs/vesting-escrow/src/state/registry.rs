use anchor_lang::prelude::*;

use crate::constants::MAX_COMPANY_NAME_LEN;

/// Per-company vesting registry PDA, seeded by the company name.
///
/// One registry per company; `mint` and `treasury` are fixed at creation.
#[account]
pub struct VestingRegistry {
    /// Authority allowed to register beneficiary schedules.
    pub owner: Pubkey,
    /// Token mint accepted by this registry.
    pub mint: Pubkey,
    /// Treasury token account holding unclaimed tokens.
    pub treasury: Pubkey,
    /// Company identity; also the registry PDA seed.
    pub company_name: String,
    /// Bump of the treasury PDA, used to sign claim transfers.
    pub treasury_bump: u8,
    /// Bump of this registry PDA.
    pub bump: u8,
}

impl VestingRegistry {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // treasury
        4 + MAX_COMPANY_NAME_LEN + // company_name
        1 +  // treasury_bump
        1;   // bump
}
