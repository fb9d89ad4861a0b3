use anchor_lang::prelude::*;

/// Single beneficiary vesting schedule PDA.
///
/// At most one schedule exists per (beneficiary, registry) pair, enforced by
/// the PDA seeds. Timestamps are Unix seconds and satisfy
/// `start_ts <= cliff_ts <= end_ts` with `start_ts < end_ts`; `total_withdrawn`
/// only ever grows, and only through successful claims.
#[account]
pub struct VestingSchedule {
    /// Wallet entitled to withdraw under this schedule.
    pub beneficiary: Pubkey,
    /// Owning registry.
    pub registry: Pubkey,
    /// Vesting start timestamp.
    pub start_ts: i64,
    /// No tokens are claimable before this instant.
    pub cliff_ts: i64,
    /// Fully vested at and after this instant.
    pub end_ts: i64,
    /// Total tokens ever claimable under this schedule.
    pub total_allotment: u64,
    /// Tokens already transferred out; never exceeds `total_allotment`.
    pub total_withdrawn: u64,
    /// Bump of this schedule PDA.
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        32 + // registry
        8 +  // start_ts
        8 +  // cliff_ts
        8 +  // end_ts
        8 +  // total_allotment
        8 +  // total_withdrawn
        1;   // bump
}
