use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ANCHOR_DISCRIMINATOR, MAX_COMPANY_NAME_LEN, TREASURY_SEED};
use crate::error::EscrowError;
use crate::state::VestingRegistry;

pub fn create_registry(ctx: Context<CreateRegistry>, company_name: String) -> Result<()> {
    require!(!company_name.is_empty(), EscrowError::InvalidCompanyName);
    require!(
        company_name.len() <= MAX_COMPANY_NAME_LEN,
        EscrowError::InvalidCompanyName
    );

    // Duplicate company names are rejected by the runtime: the registry and
    // treasury PDAs are seeded by the name, and `init` fails on a live account.
    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.mint = ctx.accounts.mint.key();
    registry.treasury = ctx.accounts.treasury.key();
    registry.company_name = company_name;
    registry.treasury_bump = ctx.bumps.treasury;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryCreated {
        registry: registry.key(),
        owner: registry.owner,
        mint: registry.mint,
        treasury: registry.treasury,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateRegistry<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + VestingRegistry::SIZE,
        seeds = [company_name.as_bytes()],
        bump
    )]
    pub registry: Account<'info, VestingRegistry>,

    pub mint: Account<'info, Mint>,

    // The treasury is its own SPL authority; claims are signed with its seeds.
    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = treasury,
        seeds = [TREASURY_SEED, company_name.as_bytes()],
        bump
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct RegistryCreated {
    pub registry: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury: Pubkey,
}
