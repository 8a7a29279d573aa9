use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Execute Update Fees
//
// Changes the fee of one token everywhere it is applied: commits and claims
// (FundDataStore), the creator's registry entry, and the reserve when listed.

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct ExecuteUpdateFees<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [PROPOSAL_REGISTRY],
        bump = proposal_registry.bump,
    )]
    pub proposal_registry: Box<Account<'info, ProposalRegistry>>,

    #[account(
        mut,
        seeds = [PROPOSAL, &id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Box<Account<'info, Proposal>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump = fund_data_store.bump,
        has_one = mint @ LaunchpadError::AccountMisMatch,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        mut,
        seeds = [CREATORS],
        bump = creators.bump,
    )]
    pub creators: Box<Account<'info, Creators>>,

    // Required once the token is listed
    #[account(
        mut,
        seeds = [TRADE, mint.key().as_ref()],
        bump = trade.bump,
    )]
    pub trade: Option<Box<Account<'info, Trade>>>,
}

impl<'info> ExecuteUpdateFees<'info> {
    pub fn execute_update_fees(&mut self, fee_percent: u32) -> Result<()> {
        let mint = self.mint.key();
        self.proposal.ensure_executable(
            &ProposalKind::UpdateFees { mint, fee_percent },
            &self.global_config,
            &self.admin.key(),
            None,
        )?;
        require!(
            fee_percent as u64 <= FEE_SCALE,
            LaunchpadError::InvalidFeePercent
        );

        let from = self.fund_data_store.fee_percent;
        self.fund_data_store.fee_percent = fee_percent;
        self.creators
            .set_fee(&self.fund_data_store.created_by, fee_percent)?;

        if self.fund_data_store.listed {
            let trade = self.trade.as_deref_mut().ok_or(LaunchpadError::NotFound)?;
            trade.fee_percent = fee_percent;
        }

        msg!("Fees for {} updated: {} -> {}", mint, from, fee_percent);
        emit!(FeesUpdated {
            mint,
            from,
            to: fee_percent,
        });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.admin.key(),
        )
    }
}
