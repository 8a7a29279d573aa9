use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Governance force-close of a DAO that has not started trading
// and has not paid out any of the raised SOL

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct ExecuteBlockDao<'info> {
    pub owner: Signer<'info>,

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
}

impl<'info> ExecuteBlockDao<'info> {
    pub fn execute_block_dao(&mut self) -> Result<()> {
        let mint = self.mint.key();
        self.proposal.ensure_executable(
            &ProposalKind::BlockDao { mint },
            &self.global_config,
            &self.owner.key(),
            None,
        )?;

        // Not trading yet and nothing paid out of escrow
        let from = self.fund_data_store.status;
        require!(
            self.fund_data_store.is_blockable(),
            LaunchpadError::InvalidDaoStatus
        );

        let now = Clock::get()?.unix_timestamp;
        self.fund_data_store.transition(DaoStatus::Closed, now)?;

        msg!("DAO {} blocked", mint);
        emit!(StatusUpdated {
            mint,
            from,
            to: DaoStatus::Closed,
        });

        finalize_execution(
            &mut self.proposal,
            &mut self.proposal_registry,
            self.owner.key(),
        )
    }
}
