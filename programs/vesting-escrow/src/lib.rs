#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vesting_escrow {
    use super::*;

    /// Create the per-company registry and its treasury token account.
    pub fn create_registry(ctx: Context<CreateRegistry>, company_name: String) -> Result<()> {
        instructions::create_registry::create_registry(ctx, company_name)
    }

    /// Register a beneficiary schedule inside a registry. Owner-gated.
    pub fn register_beneficiary(
        ctx: Context<RegisterBeneficiary>,
        start_ts: i64,
        cliff_ts: i64,
        end_ts: i64,
        total_allotment: u64,
    ) -> Result<()> {
        instructions::register_beneficiary::register_beneficiary(
            ctx,
            start_ts,
            cliff_ts,
            end_ts,
            total_allotment,
        )
    }

    /// Deposit tokens into a registry's treasury.
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::fund_treasury(ctx, amount)
    }

    /// Claim the currently vested, not-yet-withdrawn amount.
    pub fn claim_tokens(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
        instructions::claim_tokens::claim_tokens(ctx, company_name)
    }

    /// Emit a read-only vested/claimable quote for a schedule.
    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, company_name: String) -> Result<()> {
        instructions::emit_claim_quote::emit_claim_quote(ctx, company_name)
    }
}
