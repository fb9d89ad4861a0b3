use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SCHEDULE_SEED, TREASURY_SEED};
use crate::error::EscrowError;
use crate::state::{VestingRegistry, VestingSchedule};
use crate::utils::curve;

pub fn claim_tokens(ctx: Context<ClaimTokens>, _company_name: String) -> Result<()> {
    let registry = &ctx.accounts.registry;

    // Destination must be a token account of the registry's mint, owned by
    // the claiming beneficiary (pre-created ATA policy).
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        registry.mint,
        EscrowError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        ctx.accounts.beneficiary.key(),
        EscrowError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let claimable = curve::claimable_amount(&ctx.accounts.schedule, now)?;

    // Surface underfunding before the CPI so the failure is typed.
    require!(
        ctx.accounts.treasury.amount >= claimable,
        EscrowError::InsufficientTreasury
    );

    // The transfer and the withdrawn-total update below commit as one
    // transaction; a failed CPI aborts without mutating the schedule.
    let signer_seeds: &[&[&[u8]]] = &[&[
        TREASURY_SEED,
        registry.company_name.as_bytes(),
        &[registry.treasury_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: ctx.accounts.treasury.to_account_info(),
            },
            signer_seeds,
        ),
        claimable,
    )?;

    let registry_key = ctx.accounts.registry.key();
    let schedule = &mut ctx.accounts.schedule;
    schedule.total_withdrawn = schedule
        .total_withdrawn
        .checked_add(claimable)
        .ok_or(EscrowError::MathOverflow)?;

    emit!(TokensClaimed {
        registry: registry_key,
        beneficiary: schedule.beneficiary,
        amount: claimable,
        total_withdrawn: schedule.total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        seeds = [SCHEDULE_SEED, beneficiary.key().as_ref(), registry.key().as_ref()],
        bump = schedule.bump,
        has_one = beneficiary @ EscrowError::UnauthorizedBeneficiary,
        has_one = registry,
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        seeds = [company_name.as_bytes()],
        bump = registry.bump,
        has_one = treasury,
    )]
    pub registry: Account<'info, VestingRegistry>,

    #[account(
        mut,
        constraint = treasury.mint == registry.mint @ EscrowError::InvalidTokenMint,
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub registry: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
}
