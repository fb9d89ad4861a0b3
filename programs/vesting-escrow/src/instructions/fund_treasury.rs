use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::EscrowError;
use crate::state::VestingRegistry;

pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, EscrowError::InvalidAmount);

    let registry = &ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        registry.mint,
        EscrowError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.funder.key(),
        EscrowError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.treasury.reload()?;

    emit!(TreasuryFunded {
        registry: registry.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        treasury_balance: ctx.accounts.treasury.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(has_one = treasury)]
    pub registry: Account<'info, VestingRegistry>,

    #[account(
        mut,
        constraint = treasury.mint == registry.mint @ EscrowError::InvalidTokenMint,
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TreasuryFunded {
    pub registry: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}
