use anchor_lang::prelude::*;

use crate::constants::{ANCHOR_DISCRIMINATOR, SCHEDULE_SEED};
use crate::error::EscrowError;
use crate::state::{VestingRegistry, VestingSchedule};
use crate::utils::curve;

pub fn register_beneficiary(
    ctx: Context<RegisterBeneficiary>,
    start_ts: i64,
    cliff_ts: i64,
    end_ts: i64,
    total_allotment: u64,
) -> Result<()> {
    // Validate fully before the schedule account is populated.
    curve::validate_schedule(start_ts, cliff_ts, end_ts, total_allotment)?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.beneficiary = ctx.accounts.beneficiary.key();
    schedule.registry = ctx.accounts.registry.key();
    schedule.start_ts = start_ts;
    schedule.cliff_ts = cliff_ts;
    schedule.end_ts = end_ts;
    schedule.total_allotment = total_allotment;
    schedule.total_withdrawn = 0;
    schedule.bump = ctx.bumps.schedule;

    emit!(BeneficiaryRegistered {
        registry: schedule.registry,
        beneficiary: schedule.beneficiary,
        start_ts,
        cliff_ts,
        end_ts,
        total_allotment,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterBeneficiary<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub beneficiary: SystemAccount<'info>,

    #[account(
        has_one = owner @ EscrowError::UnauthorizedAuthority,
    )]
    pub registry: Account<'info, VestingRegistry>,

    // One schedule per (beneficiary, registry) pair; a second registration
    // collides on these seeds and fails at `init`.
    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + VestingSchedule::SIZE,
        seeds = [SCHEDULE_SEED, beneficiary.key().as_ref(), registry.key().as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BeneficiaryRegistered {
    pub registry: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub cliff_ts: i64,
    pub end_ts: i64,
    pub total_allotment: u64,
}
