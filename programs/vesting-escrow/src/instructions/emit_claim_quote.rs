use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::state::{VestingRegistry, VestingSchedule};
use crate::utils::curve;

/// Read-only snapshot of a schedule's position; no transfer, no mutation.
/// Unlike `claim_tokens`, a zero claimable amount is reported, not an error.
pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, _company_name: String) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    let vested = curve::vested_amount(schedule, now)?;
    let claimable = vested.saturating_sub(schedule.total_withdrawn);

    emit!(ClaimQuote {
        registry: schedule.registry,
        beneficiary: schedule.beneficiary,
        vested,
        total_withdrawn: schedule.total_withdrawn,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct EmitClaimQuote<'info> {
    /// CHECK: not a signer; quotes are readable for any schedule.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        seeds = [SCHEDULE_SEED, beneficiary.key().as_ref(), registry.key().as_ref()],
        bump = schedule.bump,
        has_one = registry,
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        seeds = [company_name.as_bytes()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, VestingRegistry>,
}

#[event]
pub struct ClaimQuote {
    pub registry: Pubkey,
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
}
