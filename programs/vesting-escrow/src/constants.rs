//! Program-wide constants.

/// Anchor account discriminator size.
pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Seed prefix for the per-company treasury token account PDA.
pub const TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed prefix for the per-beneficiary schedule PDA.
pub const SCHEDULE_SEED: &[u8] = b"employee_vesting";

/// Max byte length of a registry's company name (it doubles as a PDA seed).
pub const MAX_COMPANY_NAME_LEN: usize = 50;
